use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A nullable input value that also remembers whether it was provided.
///
/// `Absent` fields are left out of the serialized object, `Null` is sent as an
/// explicit `null`. Containers must mark such fields with
/// `#[serde(default, skip_serializing_if = "GraphQLNullable::is_absent")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQLNullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> GraphQLNullable<T> {
    /// `None` becomes an explicit `Null`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => GraphQLNullable::Value(value),
            None => GraphQLNullable::Null,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, GraphQLNullable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GraphQLNullable::Null)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            GraphQLNullable::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            GraphQLNullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for GraphQLNullable<T> {
    fn default() -> Self {
        GraphQLNullable::Absent
    }
}

impl<T> From<T> for GraphQLNullable<T> {
    fn from(value: T) -> Self {
        GraphQLNullable::Value(value)
    }
}

impl<T: Serialize> Serialize for GraphQLNullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GraphQLNullable::Value(value) => serializer.serialize_some(value),
            GraphQLNullable::Absent | GraphQLNullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GraphQLNullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(GraphQLNullable::from_option)
    }
}
