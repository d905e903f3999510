use crate::error::SkillError;

/// Limits and reporting switches for the response validator.
///
/// Defaults are the platform's published limits. Lowering them is useful for
/// clients that render a narrower layout; raising them produces payloads the
/// platform will reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Maximum number of outputs in one response (Default: 3)
    pub max_outputs: usize,

    /// Maximum simpleText length in characters (Default: 1000)
    pub max_simple_text_length: usize,

    /// Maximum alt text length for images and thumbnails (Default: 50)
    pub max_alt_text_length: usize,

    /// Maximum button label length (Default: 14)
    pub max_label_length: usize,

    /// Maximum card and list title length (Default: 50)
    pub max_title_length: usize,

    /// Maximum textCard description length (Default: 400)
    pub max_text_card_description_length: usize,

    /// Maximum basicCard and commerceCard description length (Default: 230)
    pub max_card_description_length: usize,

    /// Maximum carousel items (Default: 10)
    pub max_carousel_items: usize,

    /// Maximum listCard items, also the cap for listCard carousels (Default: 5)
    pub max_list_items: usize,

    /// Emit a note when a caller-supplied `forwardable: true` is overridden (Default: true)
    pub report_forwardable_override: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_outputs: 3,
            max_simple_text_length: 1000,
            max_alt_text_length: 50,
            max_label_length: 14,
            max_title_length: 50,
            max_text_card_description_length: 400,
            max_card_description_length: 230,
            max_carousel_items: 10,
            max_list_items: 5,
            report_forwardable_override: true,
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration with the platform defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform defaults without informational notes
    pub fn silent() -> Self {
        Self {
            report_forwardable_override: false,
            ..Self::default()
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), SkillError> {
        let limits = [
            ("max_outputs", self.max_outputs),
            ("max_simple_text_length", self.max_simple_text_length),
            ("max_alt_text_length", self.max_alt_text_length),
            ("max_label_length", self.max_label_length),
            ("max_title_length", self.max_title_length),
            ("max_text_card_description_length", self.max_text_card_description_length),
            ("max_card_description_length", self.max_card_description_length),
            ("max_carousel_items", self.max_carousel_items),
            ("max_list_items", self.max_list_items),
        ];

        for (name, value) in limits {
            if value == 0 {
                return Err(SkillError::Configuration(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        Ok(())
    }
}
