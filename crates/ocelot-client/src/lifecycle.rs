use serde::Serialize;

use ocelot_core::ProofRequest;

use crate::error::ClientError;

/// Client for the proof-request lifecycle endpoints.
///
/// Each operation is a single JSON POST; there is no retry or backoff.
/// The server assigns the request id on `create`, and every later call
/// takes the id read from the previous response.
pub struct LifecycleClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateBody<'a> {
    min_age: i64,
    current_date: &'a str,
}

#[derive(Serialize)]
struct AdvanceBody<'a> {
    #[serde(rename = "requestId")]
    request_id: &'a str,
}

#[derive(Serialize)]
struct CompleteBody<'a> {
    #[serde(rename = "requestId")]
    request_id: &'a str,
    proof: &'a str,
}

impl LifecycleClient {
    /// Create a client for the given server base URL.
    /// Fails if the URL does not parse; no request is attempted here.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The server base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /request/create` — the website opens a new proof request
    /// carrying the conditions to be met.
    pub async fn create(
        &self,
        min_age: i64,
        current_date: &str,
    ) -> Result<ProofRequest, ClientError> {
        self.post(
            "/request/create",
            &CreateBody {
                min_age,
                current_date,
            },
        )
        .await
    }

    /// `POST /request/start` — the app picked the request up; the server
    /// marks it pending.
    pub async fn start(&self, request_id: &str) -> Result<ProofRequest, ClientError> {
        self.post("/request/start", &AdvanceBody { request_id }).await
    }

    /// `POST /request/accept` — the user approved the request on the
    /// device; the server marks it accepted.
    pub async fn accept(&self, request_id: &str) -> Result<ProofRequest, ClientError> {
        self.post("/request/accept", &AdvanceBody { request_id })
            .await
    }

    /// `POST /request/complete` — submit the hex proof tail; the server
    /// verifies it and marks the request completed.
    pub async fn complete(
        &self,
        request_id: &str,
        proof: &str,
    ) -> Result<ProofRequest, ClientError> {
        self.post(
            "/request/complete",
            &CompleteBody { request_id, proof },
        )
        .await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ProofRequest, ClientError> {
        let endpoint = format!("{}{}", self.base_url, path);
        tracing::debug!(endpoint = %endpoint, "lifecycle call");

        let resp = self
            .http
            .post(&endpoint)
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<ProofRequest>()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })
    }
}
