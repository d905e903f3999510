//! # RustSkillPayload
//!
//! Response template model and validation engine for chatbot skill servers.
//! The platform silently drops or misrenders payloads that break its layout
//! rules, so every response is checked here before it reaches the transport.
//!
//! ## Features
//!
//! - **Typed Templates**: simpleText, simpleImage, textCard, basicCard,
//!   commerceCard, listCard and carousel outputs with per-action buttons
//! - **Complete Reports**: every violation in the tree, each with its field path
//! - **Cross-Field Rules**: forward icon suppression, carousel ratio uniformity,
//!   layout button capacity
//! - **Request Decoding**: read-only model of the incoming skill request
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_skill_payload::{Button, ResponseValidator, SkillResponse, TextCard};
//!
//! let response = SkillResponse::simple_text("Welcome!")
//!     .with_output(TextCard::titled("What next?", vec![
//!         Button::message("Menu", "show menu"),
//!         Button::phone("Call us", "+82 10-1234-5678"),
//!     ]))
//!     .with_forwardable(true);
//!
//! let validator = ResponseValidator::new();
//! let encoded = validator.validate_and_encode_response(&response).unwrap();
//!
//! // Buttons suppress the forward icon
//! assert!(!encoded.forwardable());
//! assert_eq!(encoded.notes.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod payload;
pub mod template;
pub mod validation;

// Configuration exports
pub use config::ValidatorConfig;

// Error exports
pub use error::{DecodeError, Note, SkillError, ValidationErrorSet, Violation, ViolationKind};

// Result type alias
pub type Result<T> = std::result::Result<T, SkillError>;

// Template exports (outbound response model)
pub use template::{
    BasicCard, Button, ButtonAction, ButtonLayout, Carousel, CarouselHeader, CarouselItems,
    CarouselType, CommerceCard, Device, EncodedResponse, Link, ListCard, ListItem,
    ListItemAction, Output, Profile, SimpleImage, SimpleText, SkillResponse, TextCard, Thumbnail,
};

// Payload exports (inbound request model)
pub use payload::{PayloadParser, SkillPayload};

// Validation exports
pub use validation::{ResponseValidator, ValidationResult};

// Re-export common dependencies for convenience
pub use serde_json::{json, Value as JsonValue};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        Button, ButtonLayout, DecodeError, EncodedResponse, Output, PayloadParser,
        ResponseValidator, Result, SkillError, SkillPayload, SkillResponse, TextCard, Thumbnail,
        ValidationErrorSet, ValidatorConfig, ViolationKind,
        JsonValue, json,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
