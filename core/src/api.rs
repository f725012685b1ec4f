use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_BASE_URL: &str = "https://api.hypixel.net";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .expect("failed to build hypixel client")
});

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    /// The API answered but refused the request; carries Hypixel's cause.
    #[error("{0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Where player documents come from.
///
/// `Ok(None)` means the API answered successfully without a player.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn player_by_name(&self, name: &str) -> Result<Option<Value>, ApiError>;

    async fn player_by_uuid(&self, uuid: Uuid) -> Result<Option<Value>, ApiError>;
}

/// Hypixel public API client.
#[derive(Debug, Clone)]
pub struct HypixelApi {
    client: Client,
    base_url: String,
    api_key: Uuid,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    cause: Option<String>,
    player: Option<Value>,
}

impl HypixelApi {
    pub fn new(api_key: Uuid) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Ask the API whether the configured key is accepted.
    pub async fn validate_key(&self) -> Result<(), ApiError> {
        self.request("/key", &[]).await.map(|_| ())
    }

    async fn request(&self, path: &str, query: &[(&str, &str)]) -> Result<Envelope, ApiError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .header("API-Key", self.api_key.to_string())
            .query(query)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        parse_envelope(status, &body)
    }
}

fn parse_envelope(status: StatusCode, body: &str) -> Result<Envelope, ApiError> {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) if envelope.success && status.is_success() => Ok(envelope),
        Ok(envelope) => Err(ApiError::Rejected(
            envelope.cause.unwrap_or_else(|| format!("HTTP {status}")),
        )),
        Err(err) if status.is_success() => Err(ApiError::Decode(err.to_string())),
        Err(_) => Err(ApiError::Rejected(format!("HTTP {status}"))),
    }
}

#[async_trait]
impl PlayerSource for HypixelApi {
    async fn player_by_name(&self, name: &str) -> Result<Option<Value>, ApiError> {
        let envelope = self.request("/player", &[("name", name)]).await?;
        Ok(envelope.player)
    }

    async fn player_by_uuid(&self, uuid: Uuid) -> Result<Option<Value>, ApiError> {
        let uuid = uuid.simple().to_string();
        let envelope = self.request("/player", &[("uuid", uuid.as_str())]).await?;
        Ok(envelope.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "0d3c1a2b-1111-4222-8333-444455556666";

    fn api(server: &MockServer) -> HypixelApi {
        HypixelApi::new(Uuid::parse_str(KEY).unwrap()).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn fetches_player_by_name_with_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player"))
            .and(query_param("name", "nora"))
            .and(header("API-Key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "player": {"displayname": "Nora", "uuid": "f7c77d999f154a66a87dc4a51ef30d19"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let player = api(&server).player_by_name("nora").await.unwrap().unwrap();
        assert_eq!(player["displayname"], "Nora");
    }

    #[tokio::test]
    async fn fetches_player_by_compact_uuid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player"))
            .and(query_param("uuid", "f7c77d999f154a66a87dc4a51ef30d19"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "player": {"karma": 1}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let uuid = Uuid::parse_str("f7c77d99-9f15-4a66-a87d-c4a51ef30d19").unwrap();
        let player = api(&server).player_by_uuid(uuid).await.unwrap();
        assert_eq!(player, Some(json!({"karma": 1})));
    }

    #[tokio::test]
    async fn null_player_is_empty_body() {
        let server = MockServer::start().await;
        Mock::given(path("/player"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "player": null})),
            )
            .mount(&server)
            .await;

        assert_eq!(api(&server).player_by_name("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejected_requests_carry_cause() {
        let server = MockServer::start().await;
        Mock::given(path("/player"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({"success": false, "cause": "Invalid API key"})),
            )
            .mount(&server)
            .await;

        let err = api(&server).player_by_name("nora").await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref cause) if cause == "Invalid API key"));
    }

    #[tokio::test]
    async fn validate_key_uses_key_endpoint() {
        let server = MockServer::start().await;
        Mock::given(path("/key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        assert!(api(&server).validate_key().await.is_ok());
    }

    #[test]
    fn envelope_errors() {
        let err = parse_envelope(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = parse_envelope(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway");

        let err = parse_envelope(StatusCode::OK, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 200 OK");
    }
}
