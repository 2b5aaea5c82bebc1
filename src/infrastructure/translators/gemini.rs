#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ConversionRequest;
use crate::domain::models::TranslateError;
use crate::domain::models::Translator;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

pub struct Gemini {
    url: String,
    token: String,
    model: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            token: Config::get(ConfigKey::GeminiToken),
            model: Config::get(ConfigKey::Model),
        };
    }
}

#[async_trait]
impl Translator for Gemini {
    #[allow(clippy::implicit_return)]
    async fn translate(&self, request: &ConversionRequest) -> Result<String, TranslateError> {
        let prompt = format!(
            "Convert this {source} [{code}] to {target}. Do not give explanation, just give the code.",
            source = request.pair.source,
            code = request.code,
            target = request.pair.target,
        );

        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/{model}:generateContent?key={key}",
                url = self.url,
                model = self.model,
                key = self.token,
            ))
            .json(&req)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Gemini is not reachable");
                return TranslateError::Network(err);
            })?;

        let status = res.status().as_u16();
        if !res.status().is_success() {
            tracing::error!(status = status, "Gemini rejected the conversion request");
            return Err(TranslateError::Service { status });
        }

        let body = res.json::<GenerateResponse>().await.map_err(|err| {
            tracing::error!(error = ?err, "Gemini response failed to decode");
            return TranslateError::MalformedResponse;
        })?;

        let text = body
            .candidates
            .first()
            .and_then(|candidate| return candidate.content.parts.first())
            .map(|part| return part.text.to_string());

        match text {
            Some(text) => return Ok(text),
            None => {
                tracing::error!("Gemini response carried no text payload");
                return Err(TranslateError::MalformedResponse);
            }
        }
    }
}
