use checkout_schema::SchemaError;
use thiserror::Error;

use crate::ServerError;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{}", display_server_errors(.0))]
    ServerErrors(Vec<ServerError>),

    #[error("Response contains no data.")]
    MissingData,

    #[error("Failed to decode response data: {0}")]
    Decode(#[from] serde_json::Error),
}

fn display_server_errors(errors: &[ServerError]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
