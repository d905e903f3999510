use log::{debug, error, info};
use serde_json::Value;

use crate::error::DecodeError;
use crate::payload::skill_payload::SkillPayload;

/// Fields every skill request must carry, checked in order
const REQUIRED_FIELDS: [&str; 12] = [
    "bot.id",
    "bot.name",
    "intent",
    "action.id",
    "action.name",
    "userRequest.timezone",
    "userRequest.block.id",
    "userRequest.block.name",
    "userRequest.utterance",
    "userRequest.lang",
    "userRequest.user.id",
    "userRequest.user.type",
];

/// Decoder for inbound skill requests.
///
/// Decoding fails fast: the first missing required field is reported and
/// nothing else is checked. Requests are trusted beyond their structure.
pub struct PayloadParser;

impl PayloadParser {
    /// Decode a request body
    pub fn decode(raw: &str) -> Result<SkillPayload, DecodeError> {
        debug!("Attempting to decode skill request ({} bytes)", raw.len());

        if raw.trim().is_empty() {
            error!("Skill request body is empty");
            return Err(DecodeError::Parse("input string is empty".to_string()));
        }

        let value: Value = serde_json::from_str(raw).map_err(|e| {
            error!("Skill request is not valid JSON: {}", e);
            match e.classify() {
                serde_json::error::Category::Syntax => DecodeError::Parse(format!(
                    "syntax error at line {}, column {}: {}",
                    e.line(),
                    e.column(),
                    e
                )),
                serde_json::error::Category::Eof => {
                    DecodeError::Parse(format!("unexpected end of input: {}", e))
                }
                _ => DecodeError::Parse(e.to_string()),
            }
        })?;

        Self::decode_value(&value)
    }

    /// Decode an already parsed request
    pub fn decode_value(value: &Value) -> Result<SkillPayload, DecodeError> {
        if !value.is_object() {
            error!("Skill request must be a JSON object");
            return Err(DecodeError::InvalidStructure(
                "request must be a JSON object".to_string(),
            ));
        }

        if let Some(path) = Self::first_missing_field(value) {
            error!("Skill request is missing required field '{}'", path);
            return Err(DecodeError::missing(path));
        }

        match serde_json::from_value::<SkillPayload>(value.clone()) {
            Ok(payload) => {
                info!(
                    "Decoded skill request for bot '{}' (block '{}')",
                    payload.bot.id, payload.user_request.block.name
                );
                debug!("Utterance: {} chars", payload.utterance().chars().count());
                Ok(payload)
            }
            Err(e) => {
                error!("Skill request has an invalid structure: {}", e);
                Err(DecodeError::InvalidStructure(e.to_string()))
            }
        }
    }

    /// First required field that is absent or null
    pub fn first_missing_field(value: &Value) -> Option<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|path| lookup(value, path).map_or(true, Value::is_null))
    }
}

fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}
