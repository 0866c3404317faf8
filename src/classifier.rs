use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SubpayError};
use crate::models::Classification;
use crate::settings::Settings;
use crate::taxonomy;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Cap on the description embedded in the prompt; anything longer is
/// truncated rather than shipped wholesale to the model.
const MAX_DESCRIPTION_CHARS: usize = 2000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Assign a cost code to a free-text description. Best-effort by policy:
/// any failure (missing key, network, malformed reply) yields
/// `Uncategorized` so a misclassified row never blocks the submission.
pub fn classify(settings: &Settings, description: &str) -> Classification {
    match request_completion(settings, description) {
        Ok(reply) => parse_reply(&reply, settings.strict_cost_codes),
        Err(_) => Classification::Uncategorized,
    }
}

pub fn build_prompt(description: &str) -> String {
    let description: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
    format!(
        "Choose the most appropriate cost code for the project description below, \
         based on this mapping:\n\n{}\n\nDescription:\n{}\n\n\
         Respond only with a single cost code string in the format 'CODE - Description'.",
        taxonomy::mapping_text(),
        description
    )
}

fn request_completion(settings: &Settings, description: &str) -> Result<String> {
    let api_key = settings.effective_api_key();
    if api_key.is_empty() {
        return Err(SubpayError::Settings("no OpenAI API key".to_string()));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()?;

    let prompt = build_prompt(description);
    let body = ChatRequest {
        model: &settings.openai_model,
        messages: vec![ChatMessage {
            role: "user",
            content: &prompt,
        }],
    };

    let response: ChatResponse = client
        .post(COMPLETIONS_URL)
        .bearer_auth(&api_key)
        .json(&body)
        .send()?
        .error_for_status()?
        .json()?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SubpayError::Other("empty completion".to_string()))
}

/// Reduce a model reply to a classification. Lax mode takes the first
/// non-empty line as-is; strict mode requires the leading 5-digit code to
/// exist in the taxonomy and normalizes the label to the canonical one.
pub fn parse_reply(reply: &str, strict: bool) -> Classification {
    let line = reply.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Classification::Uncategorized;
    }
    if !strict {
        return Classification::Code(line.to_string());
    }

    let code = Regex::new(r"^(\d{5})\b")
        .ok()
        .and_then(|re| re.captures(line).map(|c| c[1].to_string()));
    match code.as_deref().and_then(taxonomy::find) {
        Some(cc) => Classification::Code(cc.to_string()),
        None => Classification::Uncategorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_taxonomy_and_description() {
        let prompt = build_prompt("paint the garage interior");
        assert!(prompt.contains("00030 - Financing Fees"));
        assert!(prompt.contains("16900 - Sound and Audio"));
        assert!(prompt.contains("paint the garage interior"));
        assert!(prompt.contains("Respond only with a single cost code string"));
    }

    #[test]
    fn test_prompt_caps_long_descriptions() {
        let long = "x".repeat(10_000);
        let prompt = build_prompt(&long);
        assert!(prompt.len() < taxonomy::mapping_text().len() + MAX_DESCRIPTION_CHARS + 500);
    }

    #[test]
    fn test_parse_lax_accepts_reply_as_is() {
        let c = parse_reply("09905 - Painting Interior", false);
        assert_eq!(c, Classification::Code("09905 - Painting Interior".to_string()));
        // Lax mode keeps hallucinated codes too.
        let c = parse_reply("99999 - Imaginary Work", false);
        assert_eq!(c, Classification::Code("99999 - Imaginary Work".to_string()));
    }

    #[test]
    fn test_parse_lax_takes_first_line() {
        let c = parse_reply("09905 - Painting Interior\nbecause the walls\n", false);
        assert_eq!(c, Classification::Code("09905 - Painting Interior".to_string()));
    }

    #[test]
    fn test_parse_strict_normalizes_known_codes() {
        let c = parse_reply("09905 - interior painting work", true);
        assert_eq!(c, Classification::Code("09905 - Painting Interior".to_string()));
    }

    #[test]
    fn test_parse_strict_rejects_unknown_codes() {
        assert_eq!(parse_reply("99999 - Imaginary Work", true), Classification::Uncategorized);
        assert_eq!(parse_reply("no code here", true), Classification::Uncategorized);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert_eq!(parse_reply("", false), Classification::Uncategorized);
        assert_eq!(parse_reply("  \n ", true), Classification::Uncategorized);
    }

    #[test]
    fn test_classify_without_key_is_uncategorized() {
        // No key configured and (presumably) none in the environment: the
        // call must fall back instead of erroring.
        let settings = Settings {
            openai_api_key: String::new(),
            ..Settings::default()
        };
        if std::env::var("OPENAI_API_KEY").is_err() {
            assert_eq!(classify(&settings, "anything"), Classification::Uncategorized);
        }
    }
}
