//! Blocking HTTP transport

use super::{ApiError, Transport};
use crate::config::Settings;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;

const API_KEY_HEADER: &str = "x-api-key";

/// `reqwest` transport sharing one client, timeout and base URL across a run.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("postman-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api_base().to_string(),
            api_key: settings.api_key().map(str::to_string),
        })
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(key).map_err(|_| ApiError::InvalidApiKey)?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<Value, ApiError> {
        let headers = self.headers()?;
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).headers(headers).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            tracing::debug!("GET {url} returned {status}");
            return Err(ApiError::Status { status: status.as_u16(), body });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned response and hand back the raw request text.
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base = format!("http://{}", listener.local_addr().expect("addr"));
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write");
            String::from_utf8_lossy(&request).into_owned()
        });
        (base, handle)
    }

    fn settings_for(base: &str, key: Option<&str>) -> Settings {
        Settings {
            postman_api_base: format!("{base}/"),
            postman_api_key: key.map(str::to_string),
            request_timeout: 5,
            ..Settings::default()
        }
    }

    #[test]
    fn test_missing_api_key_fails_before_any_request() {
        let transport =
            HttpTransport::new(&settings_for("http://127.0.0.1:9", None)).expect("transport");
        let err = transport.get("workspaces").unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey));
        assert!(err.is_fatal());
        assert!(err.to_string().contains("POSTMAN_API_KEY is not set"));
    }

    #[test]
    fn test_ok_response_is_parsed_and_key_is_sent() {
        let (base, handle) = serve_once("200 OK", r#"{"workspaces":[{"id":"1","name":"A"}]}"#);
        let transport =
            HttpTransport::new(&settings_for(&base, Some("PMAK-test"))).expect("transport");

        let body = transport.get("/workspaces").expect("body");
        assert_eq!(body["workspaces"][0]["name"], "A");

        let request = handle.join().expect("server").to_ascii_lowercase();
        assert!(request.starts_with("get /workspaces "), "request was: {request}");
        assert!(request.contains("x-api-key: pmak-test"));
    }

    #[test]
    fn test_non_200_maps_to_status_error() {
        let (base, handle) = serve_once("404 Not Found", r#"{"error":"notFound"}"#);
        let transport =
            HttpTransport::new(&settings_for(&base, Some("PMAK-test"))).expect("transport");

        match transport.get("environments/e1") {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("notFound"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
        handle.join().expect("server");
    }
}
