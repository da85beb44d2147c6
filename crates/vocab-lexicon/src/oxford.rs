use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{LexicalService, LookupError, ServiceMetadata, first_definition};

/// Header credentials for the Oxford Dictionaries API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

#[derive(Clone)]
pub struct OxfordDictionary {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl OxfordDictionary {
    pub fn new(base_url: String, credentials: Credentials) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    pub fn with_client(client: reqwest::Client, base_url: String, credentials: Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Entries endpoint for a word
    pub fn entries_url(&self, service_lang: &str, word: &str) -> String {
        format!(
            "{}/entries/{}/{}",
            self.base_url.trim_end_matches('/'),
            service_lang,
            word
        )
    }
}

fn check_status(status: StatusCode) -> Result<(), LookupError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(LookupError::Unauthorized(status.as_u16()));
    }

    if !status.is_success() {
        return Err(LookupError::ApiError(status.as_u16()));
    }

    Ok(())
}

#[async_trait]
impl LexicalService for OxfordDictionary {
    async fn lookup(&self, service_lang: &str, word: &str) -> Result<String, LookupError> {
        let url = self.entries_url(service_lang, word);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("app_id", &self.credentials.app_id)
            .header("app_key", &self.credentials.app_key)
            .send()
            .await?;

        check_status(response.status())?;

        let json: serde_json::Value = response.json().await.map_err(|e| {
            LookupError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        first_definition(&json, word)
    }

    fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            name: "Oxford Dictionaries".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    fn client(base_url: &str) -> OxfordDictionary {
        OxfordDictionary::new(
            base_url.to_string(),
            Credentials {
                app_id: "id".into(),
                app_key: "key".into(),
            },
        )
    }

    #[test]
    fn test_entries_url() {
        let oxford = client("https://od-api.oxforddictionaries.com:443/api/v2");
        assert_eq!(
            oxford.entries_url("en-us", "act"),
            "https://od-api.oxforddictionaries.com:443/api/v2/entries/en-us/act"
        );
    }

    #[test]
    fn test_entries_url_tolerates_trailing_slash() {
        let oxford = client("http://localhost:8080/api/v2/");
        assert_eq!(
            oxford.entries_url("de", "laufen"),
            "http://localhost:8080/api/v2/entries/de/laufen"
        );
    }

    #[test]
    fn test_status_classification() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN),
            Err(LookupError::Unauthorized(403))
        ));
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(LookupError::Unauthorized(401))
        ));
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(LookupError::ApiError(404))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_recoverable() {
        // Bind then release a port so nothing is listening on it
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();
        let oxford = local_client(format!("http://{addr}/api/v2"));
        let err = oxford.lookup("en-us", "act").await.unwrap_err();
        assert!(err.is_recoverable());
    }

    /// Serve one canned HTTP response on a local port. The handle yields
    /// the raw request head that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8(request).unwrap()
        });

        (format!("http://{addr}/api/v2"), handle)
    }

    fn local_client(base_url: String) -> OxfordDictionary {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        OxfordDictionary::with_client(
            client,
            base_url,
            Credentials {
                app_id: "my-id".into(),
                app_key: "my-key".into(),
            },
        )
    }

    const ACT_ENTRY: &str = r#"{"results":[{"lexicalEntries":[{"entries":[{"senses":[{"definitions":["to do something","to perform"]}]}]}]}]}"#;

    #[tokio::test]
    async fn test_lookup_sends_path_and_credential_headers() {
        let (base_url, server) = serve_once("200 OK", ACT_ENTRY).await;

        let definition = local_client(base_url).lookup("en-us", "act").await.unwrap();
        assert_eq!(definition, "to do something");

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /api/v2/entries/en-us/act HTTP/1.1\r\n"),
            "{request}"
        );
        let head = request.to_lowercase();
        assert!(head.contains("\r\napp_id: my-id\r\n"), "{request}");
        assert!(head.contains("\r\napp_key: my-key\r\n"), "{request}");
    }

    #[tokio::test]
    async fn test_rejected_credentials_response() {
        let (base_url, server) = serve_once("401 Unauthorized", r#"{"error":"Authentication failed"}"#).await;

        let err = local_client(base_url).lookup("en-us", "act").await.unwrap_err();
        assert!(matches!(err, LookupError::Unauthorized(401)));
        assert!(!err.is_recoverable());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_recoverable() {
        let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>").await;

        let err = local_client(base_url).lookup("en-us", "act").await.unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
        assert!(err.is_recoverable());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_entry_is_recoverable() {
        let (base_url, server) = serve_once("404 Not Found", r#"{"error":"No entry found"}"#).await;

        let err = local_client(base_url).lookup("en-us", "blorp").await.unwrap_err();
        assert!(matches!(err, LookupError::ApiError(404)));
        assert!(err.is_recoverable());
        server.await.unwrap();
    }
}
