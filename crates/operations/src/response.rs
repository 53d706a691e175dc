use std::collections::HashMap;

use parser::Pos;
use serde::{Deserialize, Serialize};
use value::ConstValue;

use crate::{GraphQLOperation, OperationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub path: Vec<ConstValue>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub locations: Vec<Pos>,

    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub extensions: HashMap<String, ConstValue>,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Default::default(),
            locations: Default::default(),
            extensions: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Response {
    #[serde(default)]
    pub data: ConstValue,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<ServerError>,

    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub extensions: HashMap<String, ConstValue>,
}

impl Response {
    /// Decodes the data of operation `O`.
    ///
    /// Server errors take precedence over any partial data.
    pub fn into_data<O: GraphQLOperation>(self) -> Result<O::Data, OperationError> {
        if !self.errors.is_empty() {
            return Err(OperationError::ServerErrors(self.errors));
        }
        if matches!(self.data, ConstValue::Null) {
            return Err(OperationError::MissingData);
        }
        Ok(serde_json::from_value(self.data.into_json()?)?)
    }
}
