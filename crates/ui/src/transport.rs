//! GraphQL transport helper.
//!
//! Every request is a JSON body `{query, variables}` posted to one endpoint,
//! and every response is `{data?, errors?}`. [`graphql_fetch`] builds the body
//! for a `graphql_client` query, hands it to a [`Transport`] and parses the
//! answer into [`Fetched`]. Application errors travel back inside `Fetched`
//! next to whatever data came with them; only transport failures become
//! [`FetchError`].

use std::future::Future;

use graphql_client::GraphQLQuery;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

/// Errors that stop a request from producing a GraphQL response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request or response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but carried values the client cannot represent.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that can carry a GraphQL request body and return the raw
/// response body.
pub trait Transport: Send + Sync {
    /// Send one request body and return the response text.
    fn send(&self, body: Value) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Outcome of a request that reached the server.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    /// Payload, if the server produced one.
    pub data: Option<T>,
    /// Application-level errors, in server order.
    pub errors: Vec<graphql_client::Error>,
}

impl<T> Fetched<T> {
    /// A response with data and no errors.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// The error a caller should surface, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&graphql_client::Error> {
        self.errors.first()
    }

    /// Convert the payload, keeping the errors.
    ///
    /// # Errors
    ///
    /// Returns the conversion error if `convert` fails.
    pub fn try_map<U, E>(self, convert: impl FnOnce(T) -> Result<U, E>) -> Result<Fetched<U>, E> {
        Ok(Fetched {
            data: self.data.map(convert).transpose()?,
            errors: self.errors,
        })
    }
}

/// Execute a generated query over `transport`.
///
/// Variables default to an empty object when the operation declares none.
///
/// # Errors
///
/// Returns `FetchError` if the request cannot be sent or the response is not
/// a GraphQL JSON document.
pub async fn graphql_fetch<Q, T>(
    transport: &T,
    variables: Q::Variables,
) -> Result<Fetched<Q::ResponseData>, FetchError>
where
    Q: GraphQLQuery,
    T: Transport + ?Sized,
{
    let query_body = Q::build_query(variables);
    let operation = query_body.operation_name;

    let mut body = serde_json::to_value(&query_body)?;
    if let Some(vars) = body.get_mut("variables")
        && vars.is_null()
    {
        *vars = Value::Object(Map::new());
    }

    debug!(operation, "Sending GraphQL request");
    let text = transport.send(body).await?;

    let response: graphql_client::Response<Q::ResponseData> = serde_json::from_str(&text)
        .inspect_err(|e| {
            warn!(
                operation,
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse GraphQL response"
            );
        })?;

    let errors = response.errors.unwrap_or_default();
    if !errors.is_empty() {
        debug!(operation, errors = ?errors, "GraphQL errors in response");
    }

    Ok(Fetched {
        data: response.data,
        errors,
    })
}

// =============================================================================
// HttpTransport
// =============================================================================

/// Transport that POSTs to a GraphQL endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, body), fields(endpoint = %self.endpoint))]
    async fn send(&self, body: Value) -> Result<String, FetchError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // GraphQL servers report request errors with 4xx and a JSON body, so
        // the body is still handed to the parser.
        if !status.is_success() {
            warn!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "GraphQL endpoint returned non-success status"
            );
        }

        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::api::queries::{ProductList, product_list};

    /// Transport that replays canned responses and records request bodies.
    pub struct ScriptedTransport {
        responses: Mutex<Vec<Result<String, String>>>,
        pub requests: Mutex<Vec<Value>>,
    }

    impl ScriptedTransport {
        pub fn new(responses: Vec<Result<String, String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().rev().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, body: Value) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(body);
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted response left");
            next.map_err(FetchError::InvalidResponse)
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_empty_variables() {
        let transport =
            ScriptedTransport::new(vec![Ok(r#"{"data":{"productList":[]}}"#.to_string())]);

        let fetched = graphql_fetch::<ProductList, _>(&transport, product_list::Variables)
            .await
            .unwrap();

        assert!(fetched.errors.is_empty());
        assert!(fetched.data.unwrap().product_list.is_empty());

        let requests = transport.requests.lock().unwrap();
        let body = &requests[0];
        assert!(body["query"].as_str().unwrap().contains("productList"));
        assert_eq!(body["variables"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_fetch_keeps_data_next_to_errors() {
        let transport = ScriptedTransport::new(vec![Ok(r#"{
                "data": {"productList": []},
                "errors": [{"message": "first"}, {"message": "second"}]
            }"#
        .to_string())]);

        let fetched = graphql_fetch::<ProductList, _>(&transport, product_list::Variables)
            .await
            .unwrap();

        assert_eq!(fetched.first_error().unwrap().message, "first");
        assert!(fetched.data.is_some());
    }

    #[tokio::test]
    async fn test_fetch_errors_without_data() {
        let transport = ScriptedTransport::new(vec![Ok(
            r#"{"data": null, "errors": [{"message": "Unknown field"}]}"#.to_string(),
        )]);

        let fetched = graphql_fetch::<ProductList, _>(&transport, product_list::Variables)
            .await
            .unwrap();

        assert!(fetched.data.is_none());
        assert_eq!(fetched.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_malformed_response_is_parse_error() {
        let transport = ScriptedTransport::new(vec![Ok("<html>Bad Gateway</html>".to_string())]);

        let result = graphql_fetch::<ProductList, _>(&transport, product_list::Variables).await;

        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_transport_failure_is_propagated() {
        let transport = ScriptedTransport::new(vec![Err("connection refused".to_string())]);

        let result = graphql_fetch::<ProductList, _>(&transport, product_list::Variables).await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Invalid response: connection refused");
    }

    #[test]
    fn test_try_map_keeps_errors() {
        let fetched = Fetched {
            data: Some(2),
            errors: vec![graphql_client::Error {
                message: "partial".to_string(),
                locations: None,
                path: None,
                extensions: None,
            }],
        };

        let mapped: Fetched<String> = fetched
            .try_map(|n| Ok::<_, FetchError>(n.to_string()))
            .unwrap();

        assert_eq!(mapped.data.as_deref(), Some("2"));
        assert_eq!(mapped.errors.len(), 1);
    }
}
