use crate::error::TranslateError;
use crate::i18n::{Language, SOURCE_LANGUAGE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Lingo translation request body
#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    source_language: &'static str,
    target_language: &'static str,
    text: &'a str,
}

/// Lingo translation response.
///
/// Text arrives under `translated_text`, or `translation` as a fallback.
/// Fields are kept as raw JSON so a non-string value (`null`, a number)
/// in one field does not reject the whole body and the other field can
/// still be used. Empty and non-string values count as absent.
#[derive(Debug, Deserialize)]
struct TranslationResponse {
    #[serde(default)]
    translated_text: Option<serde_json::Value>,
    #[serde(default)]
    translation: Option<serde_json::Value>,
}

impl TranslationResponse {
    fn into_text(self) -> Option<String> {
        [self.translated_text, self.translation]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                serde_json::Value::String(text) if !text.is_empty() => Some(text),
                _ => None,
            })
    }
}

/// Pull the translated text out of a raw response body.
///
/// Returns `None` for bodies that are not JSON objects, or that carry
/// neither field (or only empty / non-string values).
pub fn extract_translated_text(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    // Derived struct deserialization would also accept a JSON array
    if !value.is_object() {
        return None;
    }
    serde_json::from_value::<TranslationResponse>(value)
        .ok()?
        .into_text()
}

/// Translate `text` from English to `target_language`.
///
/// Performs exactly one POST; there is no retry. Returns the translated
/// text on success.
pub async fn translate_text(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    text: &str,
    target_language: Language,
) -> Result<String, TranslateError> {
    let request = TranslationRequest {
        source_language: SOURCE_LANGUAGE,
        target_language: target_language.code(),
        text,
    };

    debug!(
        "POST {} ({} -> {}, {} bytes)",
        api_url,
        SOURCE_LANGUAGE,
        target_language.code(),
        text.len()
    );

    let response = client
        .post(api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(TranslateError::transport)?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(TranslateError::transport)?;

    let translated = if status.is_success() {
        extract_translated_text(&body)
    } else {
        None
    };

    match translated {
        Some(translated) => {
            info!(
                "Received {} bytes of {} translation",
                translated.len(),
                target_language.name()
            );
            Ok(translated)
        }
        None => {
            debug!("Translation service returned no usable text ({})", status);
            Err(TranslateError::InvalidResponse {
                status: status.as_u16(),
                code: target_language.code().to_string(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn hindi() -> Language {
        Language::from_code("hi").unwrap()
    }

    // ==================== Request Structure Tests ====================

    #[test]
    fn test_translation_request_serialization() {
        let request = TranslationRequest {
            source_language: SOURCE_LANGUAGE,
            target_language: "hi",
            text: "MIT License\n\"quoted\"",
        };

        let json = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "source_language": "en-US",
                "target_language": "hi",
                "text": "MIT License\n\"quoted\""
            })
        );
    }

    // ==================== Response Extraction Tests ====================

    #[test]
    fn test_extract_primary_field() {
        let text = extract_translated_text(r#"{"translated_text": "नमस्ते"}"#);
        assert_eq!(text.as_deref(), Some("नमस्ते"));
    }

    #[test]
    fn test_extract_fallback_field() {
        let text = extract_translated_text(r#"{"translation": "Bonjour"}"#);
        assert_eq!(text.as_deref(), Some("Bonjour"));
    }

    #[test]
    fn test_primary_field_wins() {
        let text = extract_translated_text(r#"{"translated_text": "a", "translation": "b"}"#);
        assert_eq!(text.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_primary_falls_back() {
        let text = extract_translated_text(r#"{"translated_text": "", "translation": "b"}"#);
        assert_eq!(text.as_deref(), Some("b"));
    }

    #[test]
    fn test_extract_missing_fields() {
        assert_eq!(extract_translated_text("{}"), None);
        assert_eq!(extract_translated_text(r#"{"error": "bad key"}"#), None);
    }

    #[test]
    fn test_extract_empty_values() {
        assert_eq!(
            extract_translated_text(r#"{"translated_text": "", "translation": ""}"#),
            None
        );
    }

    #[test]
    fn test_extract_non_string_values() {
        assert_eq!(extract_translated_text(r#"{"translated_text": 42}"#), None);
        assert_eq!(extract_translated_text(r#"{"translation": null}"#), None);
    }

    #[test]
    fn test_non_string_primary_falls_back() {
        let text = extract_translated_text(r#"{"translated_text": null, "translation": "Bonjour"}"#);
        assert_eq!(text.as_deref(), Some("Bonjour"));

        let text = extract_translated_text(r#"{"translated_text": 42, "translation": "Hallo"}"#);
        assert_eq!(text.as_deref(), Some("Hallo"));
    }

    #[test]
    fn test_extract_not_json() {
        assert_eq!(extract_translated_text("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_translated_text(""), None);
        assert_eq!(extract_translated_text(r#"["translated_text"]"#), None);
    }

    // ==================== Integration Tests with Wiremock ====================

    #[tokio::test]
    async fn test_translate_text_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/translate"))
            .and(header("Authorization", "Bearer test-lingo-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "source_language": "en-US",
                "target_language": "hi",
                "text": "Hello"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "translated_text": "नमस्ते" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/v1/translate", mock_server.uri());

        let result = translate_text(&client, &url, "test-lingo-key", "Hello", hindi())
            .await
            .expect("Should succeed");

        assert_eq!(result, "नमस्ते");
    }

    #[tokio::test]
    async fn test_translate_text_empty_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = translate_text(&client, &mock_server.uri(), "key", "Hello", hindi()).await;

        match result {
            Err(TranslateError::InvalidResponse { status, code, body }) => {
                assert_eq!(status, 200);
                assert_eq!(code, "hi");
                assert_eq!(body, "{}");
            }
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_text_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "translated_text": "ignored" })),
            )
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = translate_text(&client, &mock_server.uri(), "bad-key", "Hello", hindi()).await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("HTTP 401"));
        assert!(message.contains("ignored"));
    }

    #[tokio::test]
    async fn test_translate_text_connection_refused() {
        let client = reqwest::Client::new();

        // Nothing listens on port 1
        let result = translate_text(&client, "http://127.0.0.1:1/", "key", "Hello", hindi()).await;

        match result {
            Err(err @ TranslateError::Transport { .. }) => {
                let message = err.to_string();
                assert!(message.contains("working internet connection"));
                // The OS-level cause is shown, not just reqwest's top level
                assert!(message.to_lowercase().contains("connection refused"));
            }
            other => panic!("Expected Transport, got {:?}", other),
        }
    }
}
