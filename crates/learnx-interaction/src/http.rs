//! Request issuers for the LearnX admin API.
//!
//! [`HttpClient`] sends anonymous requests. [`PrivateHttpClient`] wraps it and
//! attaches the bearer token held by the session store, read right before
//! each request leaves.

use learnx_core::config::ApiConfig;
use learnx_core::error::{AdminError, Result};
use learnx_core::session::SessionStore;
use learnx_core::Envelope;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Maps a `reqwest` failure that produced no response.
pub(crate) fn transport_error(err: reqwest::Error) -> AdminError {
    AdminError::transport(err.to_string())
}

/// Anonymous JSON client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Builds a client from the `[api]` configuration section.
    ///
    /// Fails with `AdminError::Config` when the base URL does not parse.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AdminError::config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(transport_error)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET path`, decoded as an envelope.
    pub async fn get_envelope<T>(&self, path: &str) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::GET, path, None, None).await
    }

    /// `POST path` with a JSON body, decoded as an envelope.
    pub async fn post_envelope<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.execute(Method::POST, path, Some(body), None).await
    }

    /// `POST path` without a body, for endpoints whose payload is ignored.
    pub async fn post_action(&self, path: &str) -> Result<()> {
        let text = self.send(Method::POST, path, None, None).await?;
        acknowledge(&text)
    }

    /// Appends `path` to the base URL, keeping the base's own path prefix.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| AdminError::config(format!("Invalid request path '{}': {}", path, e)))
    }

    pub(crate) async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        let text = self.send(method, path, body, bearer).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends one request and returns the body of a 2xx response.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> Result<String> {
        let url = self.endpoint(path)?;
        tracing::debug!(
            method = %method,
            path = %url.path(),
            authorized = bearer.is_some(),
            "Sending API request"
        );

        let mut request = self.client.request(method.clone(), url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            tracing::debug!(method = %method, path, status = status.as_u16(), "API request failed");
            return Err(AdminError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

/// Any 2xx body is accepted unless it is an envelope with `success: false`.
fn acknowledge(text: &str) -> Result<()> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => return Ok(()),
    };
    if value.get("success") == Some(&Value::Bool(false)) {
        serde_json::from_value::<Envelope<Value>>(value)?.into_unit()
    } else {
        Ok(())
    }
}

/// Credentialed client: every request carries `Authorization: Bearer <token>`
/// when the session store holds an access token.
#[derive(Clone)]
pub struct PrivateHttpClient {
    http: HttpClient,
    store: Arc<dyn SessionStore>,
}

impl PrivateHttpClient {
    pub fn new(http: HttpClient, store: Arc<dyn SessionStore>) -> Self {
        Self { http, store }
    }

    pub async fn get_envelope<T>(&self, path: &str) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        let token = self.store.access_token().await?;
        self.http
            .execute(Method::GET, path, None, token.as_deref())
            .await
    }

    pub async fn post_envelope<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let token = self.store.access_token().await?;
        self.http
            .execute(Method::POST, path, Some(body), token.as_deref())
            .await
    }

    pub async fn post_action(&self, path: &str) -> Result<()> {
        let token = self.store.access_token().await?;
        let text = self
            .http
            .send(Method::POST, path, None, token.as_deref())
            .await?;
        acknowledge(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnx_core::session::MemorySessionStore;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> ApiConfig {
        ApiConfig {
            base_url: format!("{}/api/v1", server.uri()),
            timeout_secs: Some(5),
        }
    }

    #[tokio::test]
    async fn get_keeps_the_base_path_and_sends_no_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/user"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": [1, 2]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&api(&server)).unwrap();
        let envelope: Envelope<Vec<u32>> = client.get_envelope("/user").await.unwrap();
        assert_eq!(envelope.into_data().unwrap(), vec![1, 2]);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
        assert_eq!(
            requests[0].headers.get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn private_client_reads_the_token_at_send_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/roles/request"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        let client = PrivateHttpClient::new(HttpClient::new(&api(&server)).unwrap(), store.clone());

        let _: Envelope<Vec<Value>> = client.get_envelope("/roles/request").await.unwrap();
        store.set_access_token(Some("t1".to_string())).await;
        let _: Envelope<Vec<Value>> = client.get_envelope("/roles/request").await.unwrap();
        store.set_access_token(Some("t2".to_string())).await;
        let _: Envelope<Vec<Value>> = client.get_envelope("/roles/request").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let auth: Vec<Option<String>> = requests
            .iter()
            .map(|r| {
                r.headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .collect();
        assert_eq!(
            auth,
            vec![None, Some("Bearer t1".to_string()), Some("Bearer t2".to_string())]
        );
    }

    #[tokio::test]
    async fn post_sends_json_body_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/echo"))
            .and(header("authorization", "Bearer abc"))
            .and(body_json(json!({"name": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::new());
        store.set_access_token(Some("abc".to_string())).await;
        let client = PrivateHttpClient::new(HttpClient::new(&api(&server)).unwrap(), store);

        let envelope: Envelope<String> = client
            .post_envelope("/echo", &json!({"name": "x"}))
            .await
            .unwrap();
        assert_eq!(envelope.into_data().unwrap(), "ok");
    }

    #[tokio::test]
    async fn non_success_status_is_an_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/roles/handle-reject/3"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&api(&server)).unwrap();
        let err = client
            .post_action("/roles/handle-reject/3")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AdminError::Http {
                status: 401,
                body: "expired".to_string()
            }
        );
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn undecodable_body_is_a_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/user"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&api(&server)).unwrap();
        let err = client.get_envelope::<Value>("/user").await.unwrap_err();
        assert!(matches!(err, AdminError::Serialization { .. }));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let client = HttpClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1/api/v1".to_string(),
            timeout_secs: Some(2),
        })
        .unwrap();
        let err = client.get_envelope::<Value>("/user").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = HttpClient::new(&ApiConfig {
            base_url: "not a url".to_string(),
            timeout_secs: None,
        })
        .unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }
}
