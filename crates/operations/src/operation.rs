use serde::de::DeserializeOwned;
use value::Variables;

use crate::{OperationError, Request};

/// A GraphQL operation with a fixed document and typed result.
pub trait GraphQLOperation {
    const OPERATION_NAME: &'static str;

    const DOCUMENT: &'static str;

    type Data: DeserializeOwned;

    fn variables(&self) -> Result<Variables, OperationError>;

    fn to_request(&self) -> Result<Request, OperationError> {
        Ok(Request::new(Self::DOCUMENT)
            .operation_name(Self::OPERATION_NAME)
            .variables(self.variables()?))
    }
}
