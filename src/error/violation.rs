use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classification of a response-template violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A primitive check failed (length, URL, phone pattern, newline count)
    FormatViolation,
    /// Fields present or absent do not match the declared variant
    SchemaMismatch,
    /// Array size outside its allowed range
    CardinalityViolation,
    /// Thumbnails in one group mix square and wide ratios
    InconsistentRatio,
    /// More buttons than the layout can show
    ButtonCountExceeded,
}

impl ViolationKind {
    /// Returns the string code of the violation kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::FormatViolation => "FORMAT_VIOLATION",
            ViolationKind::SchemaMismatch => "SCHEMA_MISMATCH",
            ViolationKind::CardinalityViolation => "CARDINALITY_VIOLATION",
            ViolationKind::InconsistentRatio => "INCONSISTENT_RATIO",
            ViolationKind::ButtonCountExceeded => "BUTTON_COUNT_EXCEEDED",
        }
    }

    /// Returns the standard human-readable message for the violation kind
    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::FormatViolation => "Format violation",
            ViolationKind::SchemaMismatch => "Schema mismatch",
            ViolationKind::CardinalityViolation => "Cardinality violation",
            ViolationKind::InconsistentRatio => "Inconsistent image ratio",
            ViolationKind::ButtonCountExceeded => "Button count exceeded",
        }
    }

    /// Whether the caller can fix the input and resubmit (as opposed to a
    /// call-site programming error)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ViolationKind::SchemaMismatch)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single violation with the path of the offending field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    /// Violation classification
    pub kind: ViolationKind,

    /// Field path that failed validation, e.g. `outputs[0].textCard.buttons[1].label`
    pub field: String,

    /// Human-readable reason
    pub message: String,

    /// Expected shape or bound
    pub expected: String,

    /// Offending value, or a summary of it
    pub actual: Value,

    /// Additional context (offending indices, active variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Violation {
    /// Create a new violation
    pub fn new<F, M, E>(kind: ViolationKind, field: F, message: M, expected: E, actual: Value) -> Self
    where
        F: Into<String>,
        M: Into<String>,
        E: Into<String>,
    {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
            expected: expected.into(),
            actual,
            context: None,
        }
    }

    /// Attach context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at '{}': {} (expected: {}, actual: {})",
            self.kind, self.field, self.message, self.expected, self.actual
        )?;
        if let Some(context) = &self.context {
            write!(f, " [{}]", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violation {}

/// Every violation found in one validation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, thiserror::Error)]
#[error("response template rejected with {} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct ValidationErrorSet {
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} at '{}'", v.kind, v.field))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrorSet {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Distinct kinds in the order they were first reported
    pub fn kinds(&self) -> Vec<ViolationKind> {
        let mut kinds = Vec::new();
        for violation in &self.violations {
            if !kinds.contains(&violation.kind) {
                kinds.push(violation.kind);
            }
        }
        kinds
    }

    /// Violations reported at exactly `field`
    pub fn for_field(&self, field: &str) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.field == field).collect()
    }

    /// Whether a violation of `kind` was reported at `field`
    pub fn contains(&self, kind: ViolationKind, field: &str) -> bool {
        self.violations.iter().any(|v| v.kind == kind && v.field == field)
    }
}

impl IntoIterator for ValidationErrorSet {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Informational, non-fatal observation made while validating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub field: String,
    pub message: String,
}

impl Note {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note at '{}': {}", self.field, self.message)
    }
}
