//! Request and response bodies exchanged with the generation service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::PNG_DATA_URI_PREFIX;
use crate::error::MemeError;

/// Body of `POST /generate`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GenerationRequest {
    /// What the meme is about, already trimmed.
    pub topic: String,
    /// Overlay text for the top of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_text: Option<String>,
    /// Overlay text for the bottom of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_text: Option<String>,
}

impl GenerationRequest {
    /// Builds a request from raw field values.
    ///
    /// The topic is trimmed and must not end up empty. Blank overlay texts are
    /// dropped; anything else is kept exactly as typed.
    pub fn from_inputs(topic: &str, top_text: &str, bottom_text: &str) -> Result<Self, MemeError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(MemeError::Validation);
        }
        Ok(Self {
            topic: topic.to_string(),
            top_text: non_blank(top_text),
            bottom_text: non_blank(bottom_text),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Successful answer from the service.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct GenerationResponse {
    /// Caption describing the meme, if the service produced one.
    #[serde(default)]
    pub caption: Option<String>,
    /// The image, base64 encoded. Not inspected here.
    pub image_b64: String,
}

impl GenerationResponse {
    /// Caption to display, empty when the service sent none.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }

    /// Image source for the display surface.
    pub fn data_uri(&self) -> String {
        format!("{PNG_DATA_URI_PREFIX}{}", self.image_b64)
    }
}

/// Error body the service may send alongside a failure status.
///
/// Any shape is tolerated; `detail` is either a plain string or, for request
/// validation failures, a list of objects carrying `msg`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    /// Server supplied detail, in whatever shape it arrived.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Parses an error body, treating anything unreadable as "no detail".
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// The most specific message in the body, if any.
    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            Value::Array(items) => {
                let messages = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .filter(|msg| !msg.is_empty())
                    .collect::<Vec<_>>();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_overlay_texts_are_omitted() {
        let request = GenerationRequest::from_inputs("  cats ", "", "lol").unwrap();
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"topic":"cats","bottom_text":"lol"}"#);

        let request = GenerationRequest::from_inputs("cats", "   ", "\t").unwrap();
        assert_eq!(request.top_text, None);
        assert_eq!(request.bottom_text, None);
    }

    #[test]
    fn overlay_texts_are_kept_verbatim() {
        let request = GenerationRequest::from_inputs("cats", " when the ", "lol ").unwrap();
        assert_eq!(request.top_text.as_deref(), Some(" when the "));
        assert_eq!(request.bottom_text.as_deref(), Some("lol "));
    }

    #[test]
    fn whitespace_topic_is_rejected() {
        for topic in ["", "   ", "\n\t"] {
            let result = GenerationRequest::from_inputs(topic, "top", "bottom");
            assert!(matches!(result, Err(MemeError::Validation)), "{topic:?}");
        }
    }

    #[test]
    fn response_without_caption_displays_empty_string() {
        let response: GenerationResponse =
            serde_json::from_str(r#"{"image_b64":"iVBORw0K"}"#).unwrap();
        assert_eq!(response.caption_text(), "");
        assert_eq!(response.data_uri(), "data:image/png;base64,iVBORw0K");
    }

    #[test]
    fn response_requires_image() {
        let result = serde_json::from_str::<GenerationResponse>(r#"{"caption":"A cat."}"#);
        assert!(result.is_err());
    }

    #[test]
    fn string_detail_is_used() {
        let body = ErrorBody::from_bytes(br#"{"detail":"Topic is required"}"#);
        assert_eq!(body.detail_message().as_deref(), Some("Topic is required"));
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let body = ErrorBody::from_bytes(
            br#"{"detail":[{"loc":["body","topic"],"msg":"Field required","type":"missing"},{"msg":"Input should be a valid string"}]}"#,
        );
        assert_eq!(
            body.detail_message().as_deref(),
            Some("Field required; Input should be a valid string")
        );
    }

    #[test]
    fn unusable_bodies_have_no_detail() {
        let raws: [&[u8]; 5] = [
            b"",
            b"<html>oops</html>",
            br#"{"detail":""}"#,
            br#"{"detail":42}"#,
            b"[]",
        ];
        for raw in raws {
            assert_eq!(ErrorBody::from_bytes(raw).detail_message(), None);
        }
    }
}
