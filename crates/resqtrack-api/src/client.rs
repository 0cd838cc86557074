// Backend HTTP client
//
// Wraps `reqwest::Client` with URL construction and envelope unwrapping.
// Endpoint methods live in sibling modules (cases, donations, hospitals,
// stats) as inherent impls so this file stays about transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

const BODY_PREVIEW_LEN: usize = 200;

/// Raw HTTP client for the ResQTrack backend.
///
/// Handles the `{ success, data, message }` envelope: read methods return
/// the unwrapped `data` payload, mutations return the `message`. Each
/// request is independent; nothing is cached, retried or cancelled.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

/// Successful envelope contents, before `data` is typed.
struct Reply {
    data: Option<serde_json::Value>,
    message: Option<String>,
    body: String,
}

impl Client {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `{base}/{path}`, keeping any path prefix on the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and return the envelope's typed `data`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).query(query).send().await?;
        let reply = Self::unwrap_envelope(resp).await?;

        let Some(data) = reply.data else {
            return Err(Error::Protocol {
                reason: "envelope has no data".into(),
                body: reply.body,
            });
        };
        serde_json::from_value(data).map_err(|e| Error::Protocol {
            reason: e.to_string(),
            body: reply.body,
        })
    }

    /// Send a form-encoded POST request and return the envelope's `message`.
    pub(crate) async fn post_form(
        &self,
        path: &str,
        form: &(impl Serialize + Sync),
    ) -> Result<String, Error> {
        let url = self.url(path)?;
        debug!("POST {}", url);

        let resp = self.http.post(url).form(form).send().await?;
        let reply = Self::unwrap_envelope(resp).await?;
        Ok(reply.message.unwrap_or_default())
    }

    /// Run the response pipeline: status check, body read, JSON parse,
    /// `success` check. Each stage maps to its own error variant.
    async fn unwrap_envelope(resp: reqwest::Response) -> Result<Reply, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|e| e.message);
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;

        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body).map_err(|e| {
            trace!(preview = preview(&body), "response is not an envelope");
            Error::Protocol {
                reason: e.to_string(),
                body: body.clone(),
            }
        })?;

        if !envelope.success {
            return Err(Error::Application {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request was not successful".into()),
            });
        }

        Ok(Reply {
            data: envelope.data,
            message: envelope.message,
            body,
        })
    }
}

fn preview(body: &str) -> &str {
    let mut end = body.len().min(BODY_PREVIEW_LEN);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
