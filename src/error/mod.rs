pub mod skill_error;
pub mod violation;

pub use skill_error::{DecodeError, SkillError};
pub use violation::{Note, ValidationErrorSet, Violation, ViolationKind};

pub type Result<T> = std::result::Result<T, SkillError>;
