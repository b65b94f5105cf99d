//! Wellness suggestion client
//!
//! Talks to the local check-in endpoint. Failures never propagate: callers
//! get the fallback text instead.

use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

pub const FALLBACK_SUGGESTION: &str = "Remember to take care of yourself today!";

/// Something that can produce a wellness tip for a mood label
pub trait SuggestionSource {
    fn suggest(&self, mood: &str) -> anyhow::Result<String>;
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    suggestion: String,
}

/// Blocking HTTP client for `POST {url}` with `{"mood": "..."}`
#[derive(Debug, Clone)]
pub struct HttpSuggestionClient {
    url: String,
    timeout: Duration,
}

impl HttpSuggestionClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        HttpSuggestionClient {
            url: url.into(),
            timeout,
        }
    }
}

impl SuggestionSource for HttpSuggestionClient {
    fn suggest(&self, mood: &str) -> anyhow::Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client
            .post(&self.url)
            .json(&serde_json::json!({ "mood": mood.to_lowercase() }))
            .send()
            .with_context(|| format!("request to {} failed", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            anyhow::bail!("suggestion endpoint returned {}: {}", status, body);
        }

        let parsed: SuggestionResponse = response.json()?;
        Ok(parsed.suggestion)
    }
}

/// Ask `source` for a tip, falling back to a fixed message on any failure
pub fn suggestion_or_fallback(source: &dyn SuggestionSource, mood: &str) -> String {
    match source.suggest(mood) {
        Ok(suggestion) => suggestion,
        Err(e) => {
            tracing::warn!(error = %e, mood = mood, "Suggestion unavailable, using fallback");
            FALLBACK_SUGGESTION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    struct Failing;

    impl SuggestionSource for Failing {
        fn suggest(&self, _mood: &str) -> anyhow::Result<String> {
            anyhow::bail!("offline")
        }
    }

    /// Serve exactly one HTTP request, returning the request body it received
    fn one_shot_server(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/checkin", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                let lower = line.to_lowercase();
                if let Some(v) = lower.strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();

            String::from_utf8(request_body).unwrap()
        });

        (url, handle)
    }

    #[test]
    fn test_fallback_on_failure() {
        assert_eq!(suggestion_or_fallback(&Failing, "sad"), FALLBACK_SUGGESTION);
    }

    #[test]
    fn test_http_client_posts_lowercase_mood() {
        let (url, server) = one_shot_server("200 OK", r#"{"suggestion":"Keep moving forward."}"#);
        let client = HttpSuggestionClient::new(url, Duration::from_secs(5));

        let tip = client.suggest("Very Happy").unwrap();
        let request = server.join().unwrap();

        assert_eq!(tip, "Keep moving forward.");
        let sent: serde_json::Value = serde_json::from_str(&request).unwrap();
        assert_eq!(sent["mood"], "very happy");
    }

    #[test]
    fn test_http_error_status_falls_back() {
        let (url, server) = one_shot_server("500 Internal Server Error", r#"{"error":"boom"}"#);
        let client = HttpSuggestionClient::new(url, Duration::from_secs(5));

        assert_eq!(suggestion_or_fallback(&client, "sad"), FALLBACK_SUGGESTION);
        server.join().unwrap();
    }

    #[test]
    fn test_unreachable_endpoint_falls_back() {
        // Bind then drop to get a port nobody listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = HttpSuggestionClient::new(
            format!("http://127.0.0.1:{}/checkin", port),
            Duration::from_secs(2),
        );

        assert_eq!(suggestion_or_fallback(&client, "neutral"), FALLBACK_SUGGESTION);
    }
}
