use serde::{Deserialize, Serialize};
use value::Variables;

/// Body posted to the checkout GraphQL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "no_variables", default)]
    pub variables: Variables,
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: Variables::default(),
        }
    }

    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

fn no_variables(variables: &Variables) -> bool {
    variables.is_empty()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use value::Variables;

    use super::Request;

    #[test]
    fn bare_query_has_no_name_or_variables() {
        let request = Request::new("{ __typename }");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "{ __typename }" })
        );
    }

    #[test]
    fn named_operation_with_variables() {
        let request = Request::new("mutation tokeniseCard($data: TokenInput!) { __typename }")
            .operation_name("tokeniseCard")
            .variables(Variables::from_json(json!({ "data": { "cvv": "314" } })));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "mutation tokeniseCard($data: TokenInput!) { __typename }",
                "operationName": "tokeniseCard",
                "variables": { "data": { "cvv": "314" } },
            })
        );
    }
}
