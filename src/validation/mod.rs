pub mod primitives;
pub mod response_validator;
pub mod rules;

pub use response_validator::{ResponseValidator, ValidationResult};
pub use rules::{ForwardableFacts, Suppression};
