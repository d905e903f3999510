use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Note, SkillError};
use crate::template::outputs::Output;

/// Candidate skill response: 1-3 outputs and the forwardable flag.
///
/// The wire form is `{"outputs": [...], "forwardable": bool}`. A bare JSON
/// array of outputs is also accepted as a candidate by the validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillResponse {
    pub outputs: Vec<Output>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwardable: Option<bool>,
}

impl SkillResponse {
    pub fn new(outputs: Vec<Output>) -> Self {
        Self {
            outputs,
            forwardable: None,
        }
    }

    /// Response with a single simpleText output
    pub fn simple_text<S: Into<String>>(text: S) -> Self {
        Self::new(vec![Output::text(text)])
    }

    pub fn with_output<O: Into<Output>>(mut self, output: O) -> Self {
        self.outputs.push(output.into());
        self
    }

    /// Request the forward icon; the validator may still suppress it
    pub fn with_forwardable(mut self, forwardable: bool) -> Self {
        self.forwardable = Some(forwardable);
        self
    }

    pub fn to_value(&self) -> Result<Value, SkillError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Validated response ready for the transport layer.
///
/// `forwardable` is always resolved to a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedResponse {
    pub response: SkillResponse,
    pub notes: Vec<Note>,
}

impl EncodedResponse {
    pub fn outputs(&self) -> &[Output] {
        &self.response.outputs
    }

    pub fn forwardable(&self) -> bool {
        self.response.forwardable.unwrap_or(false)
    }

    /// Wire payload
    pub fn to_value(&self) -> Result<Value, SkillError> {
        self.response.to_value()
    }

    pub fn to_json(&self) -> Result<String, SkillError> {
        Ok(serde_json::to_string(&self.response)?)
    }
}
