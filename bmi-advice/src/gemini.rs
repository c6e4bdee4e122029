use bmi_model::advice::{AdviceRequest, HealthAdvice};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::Error;

pub const TIP_COUNT: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

pub fn build_prompt(request: &AdviceRequest) -> String {
    format!(
        "The user has a Body Mass Index (BMI) of {:.1}, which is classified as \"{}\". \
         Write a one or two sentence encouraging summary of what this means, and {} short, \
         actionable, general wellness tips suited to this category. Do not give a medical \
         diagnosis. Answer only with JSON containing a \"summary\" string and a \"tips\" \
         array of strings.",
        request.bmi, request.category, TIP_COUNT
    )
}

pub fn build_request(request: &AdviceRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(request),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: json!({
                "type": "OBJECT",
                "properties": {
                    "summary": { "type": "STRING" },
                    "tips": { "type": "ARRAY", "items": { "type": "STRING" } },
                },
                "required": ["summary", "tips"],
            }),
        },
    }
}

pub fn parse_response(response: GenerateContentResponse) -> Result<HealthAdvice, Error> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.iter().map(|part| part.text.as_str()).join(""))
        .ok_or(Error::ResponseError)?;

    parse_advice(&text)
}

/// Parses the model's text answer. If the JSON is wrapped in other text, the
/// outermost `{...}` is tried instead.
pub fn parse_advice(text: &str) -> Result<HealthAdvice, Error> {
    let parsed: HealthAdvice = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            let start = text.find('{').ok_or(Error::ResponseError)?;
            let end = text.rfind('}').ok_or(Error::ResponseError)?;
            if end < start {
                return Err(Error::ResponseError);
            }
            warn!("Advice response is not plain JSON ({}), extracting object", e);
            serde_json::from_str(&text[start..=end]).map_err(|_| Error::ResponseError)?
        }
    };

    let summary = parsed.summary.trim().to_owned();
    let tips = parsed
        .tips
        .iter()
        .map(|tip| tip.trim())
        .filter(|tip| !tip.is_empty())
        .map(str::to_owned)
        .collect_vec();

    if summary.is_empty() && tips.is_empty() {
        return Err(Error::ResponseError);
    }

    Ok(HealthAdvice::new(summary, tips))
}
