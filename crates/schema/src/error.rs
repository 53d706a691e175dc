use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to serialize input object '{type_name}': {source}")]
    Serialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input object '{type_name}' did not serialize to an object.")]
    NotAnObject { type_name: &'static str },
}
