use serde::Serialize;
use value::ConstValue;

use crate::SchemaError;

/// A GraphQL input object type.
pub trait InputObject: Serialize {
    const TYPE_NAME: &'static str;

    /// Converts the object into a GraphQL value, leaving absent fields out.
    fn to_value(&self) -> Result<ConstValue, SchemaError> {
        let serialize_error = |source| SchemaError::Serialize {
            type_name: Self::TYPE_NAME,
            source,
        };
        let json = serde_json::to_value(self).map_err(serialize_error)?;
        match ConstValue::from_json(json).map_err(serialize_error)? {
            value @ ConstValue::Object(_) => Ok(value),
            _ => Err(SchemaError::NotAnObject {
                type_name: Self::TYPE_NAME,
            }),
        }
    }
}
