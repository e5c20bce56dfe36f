//! Talking to the generation service.

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::constants::GENERIC_FAILURE_MESSAGE;
use crate::error::MemeError;
use crate::models::{ErrorBody, GenerationRequest, GenerationResponse};

/// Something that turns a [`GenerationRequest`] into a caption and an image.
pub trait GenerationService {
    /// Runs one generation call. Implementations must not retry.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, MemeError>> + Send;
}

/// The HTTP service at a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpGenerationService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpGenerationService {
    /// Client for the given endpoint, eg `http://localhost:8000/generate`.
    pub fn new(endpoint: &str) -> Result<Self, MemeError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// The endpoint requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post(&self, request: &GenerationRequest) -> Result<GenerationResponse, MemeError> {
        debug!("POST {} topic={:?}", self.endpoint, request.topic);
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            // an unreadable error body just means there is no detail
            let body = resp.bytes().await.unwrap_or_default();
            return Err(MemeError::Service {
                status,
                message: failure_message(status, &body),
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerationResponse = serde_json::from_slice(&bytes)?;
        debug!(
            "Generation succeeded, {} bytes of base64 image",
            parsed.image_b64.len()
        );
        Ok(parsed)
    }
}

impl GenerationService for HttpGenerationService {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, MemeError>> + Send {
        self.post(request)
    }
}

/// Picks the message for a failed response: server detail, then the status
/// reason phrase, then a generic message.
///
/// The reason phrase is the standard one for `status`, not whatever phrase the
/// server put on its status line.
pub fn failure_message(status: StatusCode, body: &[u8]) -> String {
    ErrorBody::from_bytes(body)
        .detail_message()
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}
