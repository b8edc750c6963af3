//! Minimal Slack Web API client.
//!
//! Every call is a JSON `POST` to `<api_url>/<method>` authenticated with a
//! bearer token. Only the HTTP status decides success; Slack's in-body `ok`
//! flag is left to callers.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SlackError};

/// `chat.postMessage` method name.
pub const POST_MESSAGE: &str = "chat.postMessage";
/// `reactions.add` method name.
pub const REACTIONS_ADD: &str = "reactions.add";

/// Sends signed JSON requests to the Slack Web API.
#[derive(Clone)]
pub struct SlackClient {
    http: Client,
    api_url: String,
    token: String,
    debug: bool,
}

impl SlackClient {
    /// Creates a client with the given base URL, bearer token and request timeout.
    pub fn new(api_url: &str, token: &str, timeout: Duration, debug: bool) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SlackError::BuildRequest)?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            debug,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, &config.token, config.timeout, config.debug)
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_url)
    }

    /// Posts `payload` to the named API method and returns the response body.
    ///
    /// With `debug` enabled the body of a successful response is echoed to
    /// stdout.
    pub async fn send(&self, method: &str, payload: Vec<u8>) -> Result<String> {
        let request = self
            .http
            .post(self.method_url(method))
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.token)
            .body(payload)
            .build()
            .map_err(SlackError::BuildRequest)?;

        debug!(method, "sending Slack API request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(SlackError::Transport)?;

        let status = response.status().as_u16();
        let body = classify_response(status, response.text().await)?;

        if self.debug {
            println!("{body}");
        }

        Ok(body)
    }
}

/// Maps a status code and the result of reading the body to the call outcome.
///
/// 2xx yields the body. Anything else is `Rejected` with the body text
/// verbatim (empty if it could not be read).
pub fn classify_response(
    status: u16,
    body: std::result::Result<String, reqwest::Error>,
) -> Result<String> {
    if (200..300).contains(&status) {
        body.map_err(SlackError::ReadBody)
    } else {
        Err(SlackError::Rejected {
            status,
            body: body.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SlackClient {
        SlackClient::new(&server.uri(), "xoxb-test", Duration::from_secs(15), false).unwrap()
    }

    #[test]
    fn classify_accepts_2xx() {
        assert_eq!(classify_response(200, Ok("{}".into())).unwrap(), "{}");
        assert_eq!(classify_response(204, Ok(String::new())).unwrap(), "");
        assert_eq!(classify_response(299, Ok("x".into())).unwrap(), "x");
    }

    #[test]
    fn classify_rejects_outside_2xx() {
        for status in [199, 300, 400, 429, 500] {
            match classify_response(status, Ok("nope".into())) {
                Err(SlackError::Rejected { status: s, body }) => {
                    assert_eq!(s, status);
                    assert_eq!(body, "nope");
                }
                other => panic!("status {status}: unexpected {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn send_sets_auth_and_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(header("Authorization", "Bearer xoxb-test"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"channel": "C1", "text": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .send(POST_MESSAGE, br#"{"channel":"C1","text":"hi"}"#.to_vec())
            .await
            .unwrap();
        assert_eq!(body, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn send_surfaces_rejection_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reactions.add"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"ok":false,"error":"invalid_auth"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(REACTIONS_ADD, b"{}".to_vec())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"request failed: {"ok":false,"error":"invalid_auth"}"#
        );
    }

    #[tokio::test]
    async fn trailing_slash_in_api_url_is_ignored() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reactions.add"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = SlackClient::new(
            &format!("{}/", server.uri()),
            "xoxb-test",
            Duration::from_secs(15),
            false,
        )
        .unwrap();
        client.send(REACTIONS_ADD, b"{}".to_vec()).await.unwrap();
    }

    #[tokio::test]
    async fn timeout_is_a_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client =
            SlackClient::new(&server.uri(), "xoxb-test", Duration::from_millis(200), false)
                .unwrap();
        let err = client.send(POST_MESSAGE, b"{}".to_vec()).await.unwrap_err();
        assert!(matches!(err, SlackError::Transport(_)), "got {err:?}");
    }
}
