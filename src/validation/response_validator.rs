/*!
 * Response Validator
 * Validates a candidate skill response against the platform's template rules
 * and produces the wire-ready payload. Every violation in the tree is
 * collected; validation never stops at the first failure.
 */

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::ValidatorConfig;
use crate::error::{Note, SkillError, ValidationErrorSet, Violation, ViolationKind};
use crate::template::button::{ButtonAction, ACTION_FIELDS};
use crate::template::carousel::CarouselType;
use crate::template::common::ButtonLayout;
use crate::template::outputs::{ListItemAction, Output, OUTPUT_KINDS};
use crate::template::response::{EncodedResponse, SkillResponse};
use crate::validation::primitives;
use crate::validation::rules::{self, ForwardableFacts};

type Object = Map<String, Value>;

/// Result of response validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,

    /// Every violation found (empty if valid)
    pub violations: Vec<Violation>,

    /// Informational notes, never fatal
    pub notes: Vec<Note>,

    /// Forward icon value after suppression rules
    pub forwardable: bool,

    /// Number of fields checked
    pub fields_validated: usize,
}

impl ValidationResult {
    pub fn into_error_set(self) -> ValidationErrorSet {
        ValidationErrorSet::new(self.violations)
    }
}

/// Accumulates findings during one tree walk
#[derive(Default)]
struct Report {
    violations: Vec<Violation>,
    notes: Vec<Note>,
    facts: ForwardableFacts,
    fields_validated: usize,
}

impl Report {
    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn format(&mut self, path: &str, message: String, expected: String, actual: Value) {
        self.push(Violation::new(ViolationKind::FormatViolation, path, message, expected, actual));
    }

    fn mismatch<M: Into<String>, E: Into<String>>(&mut self, path: &str, message: M, expected: E, actual: Value) {
        self.push(Violation::new(ViolationKind::SchemaMismatch, path, message, expected, actual));
    }

    fn missing(&mut self, path: &str, expected: &str) {
        self.mismatch(path, "Required field is missing or null", format!("non-null {}", expected), Value::Null);
    }

    fn wrong_type(&mut self, path: &str, expected: &str, value: &Value) {
        self.mismatch(
            path,
            "Type mismatch",
            expected,
            Value::String(json_type(value).to_string()),
        );
    }
}

/// Validates and encodes skill responses
#[derive(Debug, Clone, Default)]
pub struct ResponseValidator {
    config: ValidatorConfig,
}

impl ResponseValidator {
    /// Create a validator with the platform limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom limits
    pub fn with_config(config: ValidatorConfig) -> Result<Self, SkillError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a candidate response without encoding it
    pub fn validate(&self, candidate: &Value) -> ValidationResult {
        let mut report = Report::default();
        let forwardable = self.validate_response(candidate, &mut report);

        ValidationResult {
            valid: report.violations.is_empty(),
            violations: report.violations,
            notes: report.notes,
            forwardable,
            fields_validated: report.fields_validated,
        }
    }

    /// Validate a candidate response and produce the wire payload
    pub fn validate_and_encode(&self, candidate: &Value) -> Result<EncodedResponse, ValidationErrorSet> {
        let result = self.validate(candidate);
        if !result.valid {
            warn!(
                "Skill response rejected with {} violation(s)",
                result.violations.len()
            );
            for violation in &result.violations {
                debug!("{}", violation);
            }
            return Err(result.into_error_set());
        }

        let outputs_value = match candidate {
            Value::Array(_) => candidate,
            _ => candidate.get("outputs").unwrap_or(&Value::Null),
        };

        let outputs: Vec<Output> = serde_json::from_value(outputs_value.clone()).map_err(|e| {
            ValidationErrorSet::new(vec![Violation::new(
                ViolationKind::SchemaMismatch,
                "outputs",
                format!("Outputs could not be decoded: {}", e),
                "outputs matching the template model",
                Value::Null,
            )])
        })?;

        debug!(
            "Skill response encoded: {} output(s), forwardable={}, {} field(s) checked",
            outputs.len(),
            result.forwardable,
            result.fields_validated
        );

        Ok(EncodedResponse {
            response: SkillResponse {
                outputs,
                forwardable: Some(result.forwardable),
            },
            notes: result.notes,
        })
    }

    /// Validate a typed response and produce the wire payload
    pub fn validate_and_encode_response(&self, response: &SkillResponse) -> Result<EncodedResponse, ValidationErrorSet> {
        let candidate = serde_json::to_value(response).map_err(|e| {
            ValidationErrorSet::new(vec![Violation::new(
                ViolationKind::SchemaMismatch,
                "response",
                format!("Response could not be serialized: {}", e),
                "serializable response",
                Value::Null,
            )])
        })?;
        self.validate_and_encode(&candidate)
    }

    /// Walk the response; returns the resolved forwardable flag
    fn validate_response(&self, candidate: &Value, report: &mut Report) -> bool {
        let (outputs, requested) = match candidate {
            Value::Array(outputs) => (Some(outputs), None),
            Value::Object(obj) => {
                let requested = self.optional_bool(obj, "", "forwardable", report);
                let outputs = match obj.get("outputs") {
                    None | Some(Value::Null) => {
                        report.missing("outputs", "array");
                        None
                    }
                    Some(Value::Array(outputs)) => Some(outputs),
                    Some(other) => {
                        report.wrong_type("outputs", "array", other);
                        None
                    }
                };
                (outputs, requested)
            }
            other => {
                report.wrong_type("response", "array of outputs or object with outputs", other);
                (None, None)
            }
        };

        let Some(outputs) = outputs else {
            return false;
        };

        debug!("Validating skill response candidate ({} output(s))", outputs.len());

        self.check_cardinality("outputs", outputs.len(), 1, self.config.max_outputs, report);

        let mut grouped_ratios = Vec::new();
        for (index, output) in outputs.iter().enumerate() {
            let path = format!("outputs[{}]", index);
            if let Some(ratio) = self.validate_output(output, &path, report) {
                grouped_ratios.push((index, ratio));
            }
        }

        if grouped_ratios.len() > 1 {
            if let Some(violation) = rules::check_ratio_uniformity("outputs", &grouped_ratios) {
                report.push(violation);
            }
        }

        let forwardable = report.facts.resolve(requested);
        if requested == Some(true) && !forwardable {
            if let Some(suppression) = report.facts.suppression() {
                info!("Forward icon suppressed: {}", suppression.reason());
                if self.config.report_forwardable_override {
                    report.notes.push(Note::new(
                        "forwardable",
                        format!("forwardable overridden to false: {}", suppression.reason()),
                    ));
                }
            }
        }

        forwardable
    }

    /// Validate one output; returns the thumbnail ratio of image cards for grouping
    fn validate_output(&self, value: &Value, path: &str, report: &mut Report) -> Option<bool> {
        let Value::Object(obj) = value else {
            report.wrong_type(path, "object keyed by output kind", value);
            return None;
        };

        if obj.len() != 1 {
            let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
            report.push(
                Violation::new(
                    ViolationKind::SchemaMismatch,
                    path,
                    "Output must carry exactly one kind key",
                    format!("one of {}", OUTPUT_KINDS.join(", ")),
                    json!(keys),
                )
                .with_context(format!("{} key(s) present", keys.len())),
            );
            return None;
        }

        let (kind, body) = obj.iter().next()?;
        let body_path = join(path, kind);
        let body = self.as_object(body, &body_path, report)?;

        match kind.as_str() {
            "simpleText" => {
                self.validate_simple_text(body, &body_path, report);
                None
            }
            "simpleImage" => {
                report.facts.image_bearing_outputs += 1;
                self.validate_simple_image(body, &body_path, report);
                None
            }
            "textCard" => {
                self.validate_text_card(body, &body_path, report);
                None
            }
            "basicCard" => {
                report.facts.image_bearing_outputs += 1;
                self.validate_basic_card(body, &body_path, report)
            }
            "commerceCard" => {
                report.facts.image_bearing_outputs += 1;
                self.validate_commerce_card(body, &body_path, report)
            }
            "listCard" => {
                self.validate_list_card(body, &body_path, report);
                None
            }
            "carousel" => {
                report.facts.carousels += 1;
                self.validate_carousel(body, &body_path, report);
                None
            }
            other => {
                report.mismatch(
                    path,
                    format!("Unknown output kind '{}'", other),
                    format!("one of {}", OUTPUT_KINDS.join(", ")),
                    Value::String(other.to_string()),
                );
                None
            }
        }
    }

    fn validate_simple_text(&self, obj: &Object, path: &str, report: &mut Report) {
        if let Some(text) = self.required_str(obj, path, "text", report) {
            self.check_length(&join(path, "text"), text, self.config.max_simple_text_length, report);
        }
    }

    fn validate_simple_image(&self, obj: &Object, path: &str, report: &mut Report) {
        if let Some(url) = self.required_str(obj, path, "imageUrl", report) {
            self.check_url(&join(path, "imageUrl"), url, report);
        }
        if let Some(alt_text) = self.required_str(obj, path, "altText", report) {
            self.check_length(&join(path, "altText"), alt_text, self.config.max_alt_text_length, report);
        }
    }

    fn validate_text_card(&self, obj: &Object, path: &str, report: &mut Report) {
        let title = self.optional_str(obj, path, "title", report);
        let description = self.optional_str(obj, path, "description", report);

        if let Some(title) = title {
            self.check_length(&join(path, "title"), title, self.config.max_title_length, report);
        }
        if let Some(description) = description {
            self.check_length(
                &join(path, "description"),
                description,
                self.config.max_text_card_description_length,
                report,
            );
        }
        if is_absent(obj.get("title")) && is_absent(obj.get("description")) {
            report.mismatch(
                path,
                "Text card must be titled or described",
                "title or description",
                Value::Null,
            );
        }

        self.validate_card_buttons(obj, path, 1, 3, false, report);
    }

    fn validate_basic_card(&self, obj: &Object, path: &str, report: &mut Report) -> Option<bool> {
        if let Some(title) = self.optional_str(obj, path, "title", report) {
            self.check_length(&join(path, "title"), title, self.config.max_title_length, report);
        }
        if let Some(description) = self.optional_str(obj, path, "description", report) {
            self.check_length(
                &join(path, "description"),
                description,
                self.config.max_card_description_length,
                report,
            );
        }

        let ratio = match obj.get("thumbnail") {
            None | Some(Value::Null) => {
                report.missing(&join(path, "thumbnail"), "thumbnail object");
                None
            }
            Some(thumbnail) => self.validate_thumbnail(thumbnail, &join(path, "thumbnail"), report),
        };

        self.validate_card_buttons(obj, path, 0, 3, ratio.unwrap_or(false), report);
        ratio
    }

    fn validate_commerce_card(&self, obj: &Object, path: &str, report: &mut Report) -> Option<bool> {
        if let Some(title) = self.optional_str(obj, path, "title", report) {
            self.check_length(&join(path, "title"), title, self.config.max_title_length, report);
        }
        if let Some(description) = self.required_str(obj, path, "description", report) {
            self.check_length(
                &join(path, "description"),
                description,
                self.config.max_card_description_length,
                report,
            );
        }

        let price = self.required_amount(obj, path, "price", report);
        if let Some(currency) = self.optional_str(obj, path, "currency", report) {
            if currency != "won" {
                report.format(
                    &join(path, "currency"),
                    format!("Unsupported currency '{}'", currency),
                    "won".to_string(),
                    Value::String(currency.to_string()),
                );
            }
        }
        if let Some(discount) = self.optional_amount(obj, path, "discount", report) {
            if let Some(price) = price {
                if discount > price {
                    report.format(
                        &join(path, "discount"),
                        format!("Discount exceeds price ({} > {})", discount, price),
                        format!("at most {}", price),
                        Value::from(discount),
                    );
                }
            }
        }
        if let Some(rate) = self.optional_amount(obj, path, "discountRate", report) {
            if rate > 100 {
                report.format(
                    &join(path, "discountRate"),
                    format!("Discount rate out of range ({} > 100)", rate),
                    "percent between 0 and 100".to_string(),
                    Value::from(rate),
                );
            }
        }
        self.optional_amount(obj, path, "discountedPrice", report);

        let mut ratio = None;
        if let Some(thumbnails) = self.required_array(obj, path, "thumbnails", report) {
            let thumbnails_path = join(path, "thumbnails");
            self.check_cardinality(&thumbnails_path, thumbnails.len(), 1, 1, report);
            for (index, thumbnail) in thumbnails.iter().enumerate() {
                let item_ratio = self.validate_thumbnail(thumbnail, &index_path(&thumbnails_path, index), report);
                if index == 0 {
                    ratio = item_ratio;
                }
            }
        }

        if let Some(profile) = present(obj.get("profile")) {
            self.validate_profile(profile, &join(path, "profile"), report);
        }

        self.validate_card_buttons(obj, path, 1, 3, false, report);
        ratio
    }

    fn validate_list_card(&self, obj: &Object, path: &str, report: &mut Report) {
        let header_path = join(path, "header");
        match obj.get("header") {
            None | Some(Value::Null) => report.missing(&header_path, "header object"),
            Some(header) => {
                if let Some(header) = self.as_object(header, &header_path, report) {
                    if let Some(title) = self.required_str(header, &header_path, "title", report) {
                        self.check_length(&join(&header_path, "title"), title, self.config.max_title_length, report);
                    }
                }
            }
        }

        if let Some(items) = self.required_array(obj, path, "items", report) {
            let items_path = join(path, "items");
            self.check_cardinality(&items_path, items.len(), 1, self.config.max_list_items, report);
            for (index, item) in items.iter().enumerate() {
                self.validate_list_item(item, &index_path(&items_path, index), report);
            }
        }

        self.validate_card_buttons(obj, path, 0, 2, false, report);
    }

    fn validate_list_item(&self, value: &Value, path: &str, report: &mut Report) {
        let Some(obj) = self.as_object(value, path, report) else {
            return;
        };

        if let Some(title) = self.required_str(obj, path, "title", report) {
            self.check_length(&join(path, "title"), title, self.config.max_title_length, report);
        }
        if let Some(description) = self.optional_str(obj, path, "description", report) {
            self.check_length(&join(path, "description"), description, self.config.max_title_length, report);
        }
        if let Some(url) = self.optional_str(obj, path, "imageUrl", report) {
            self.check_url(&join(path, "imageUrl"), url, report);
        }

        let link = present(obj.get("link"));
        if let Some(link) = link {
            self.validate_link(link, &join(path, "link"), report);
        }

        let action = match self.optional_str(obj, path, "action", report) {
            Some(name) => match ListItemAction::parse(name) {
                Some(action) => Some(action),
                None => {
                    report.mismatch(
                        &join(path, "action"),
                        format!("Unknown list item action '{}'", name),
                        "block or message",
                        Value::String(name.to_string()),
                    );
                    None
                }
            },
            None => None,
        };

        let block_id = self.optional_str(obj, path, "blockId", report);
        let message_text = self.optional_str(obj, path, "messageText", report);
        self.optional_object(obj, path, "extra", report);

        match action {
            Some(ListItemAction::Block) if block_id.is_none() && is_absent(obj.get("blockId")) => {
                report.missing(&join(path, "blockId"), "string required by action 'block'");
            }
            // a non-string blockId was already reported as a type mismatch
            Some(ListItemAction::Message) => {
                if let Some(block_id) = block_id {
                    report.mismatch(
                        &join(path, "blockId"),
                        "Field not allowed for action 'message'",
                        "absent",
                        Value::String(block_id.to_string()),
                    );
                }
            }
            None if is_absent(obj.get("action")) => {
                for (field, value) in [("blockId", block_id), ("messageText", message_text)] {
                    if let Some(value) = value {
                        report.mismatch(
                            &join(path, field),
                            "Field requires an action",
                            "absent when no action is set",
                            Value::String(value.to_string()),
                        );
                    }
                }
            }
            _ => {}
        }

        if link.is_some() || !is_absent(obj.get("action")) {
            report.facts.interactive_list_items += 1;
        }
    }

    fn validate_carousel(&self, obj: &Object, path: &str, report: &mut Report) {
        let carousel_type = match self.required_str(obj, path, "type", report) {
            Some(name) => {
                let parsed = CarouselType::parse(name);
                if parsed.is_none() {
                    report.mismatch(
                        &join(path, "type"),
                        format!("Unknown carousel type '{}'", name),
                        "basicCard, commerceCard, textCard or listCard",
                        Value::String(name.to_string()),
                    );
                }
                parsed
            }
            None => None,
        };

        if let Some(items) = self.required_array(obj, path, "items", report) {
            let items_path = join(path, "items");
            let max_items = match carousel_type {
                Some(CarouselType::ListCard) => self.config.max_list_items,
                _ => self.config.max_carousel_items,
            };
            self.check_cardinality(&items_path, items.len(), 1, max_items, report);

            if let Some(carousel_type) = carousel_type {
                let mut ratios = Vec::new();
                for (index, item) in items.iter().enumerate() {
                    let item_path = index_path(&items_path, index);
                    let Some(card) = self.as_object(item, &item_path, report) else {
                        continue;
                    };
                    let ratio = match carousel_type {
                        CarouselType::BasicCard => self.validate_basic_card(card, &item_path, report),
                        CarouselType::CommerceCard => self.validate_commerce_card(card, &item_path, report),
                        CarouselType::TextCard => {
                            self.validate_text_card(card, &item_path, report);
                            None
                        }
                        CarouselType::ListCard => {
                            self.validate_list_card(card, &item_path, report);
                            None
                        }
                    };
                    if let Some(ratio) = ratio {
                        ratios.push((index, ratio));
                    }
                }

                if let Some(violation) = rules::check_ratio_uniformity(&items_path, &ratios) {
                    report.push(violation);
                }
            }
        }

        if let Some(header) = present(obj.get("header")) {
            let header_path = join(path, "header");
            match carousel_type {
                Some(carousel_type) if !carousel_type.allows_header() => {
                    report.mismatch(
                        &header_path,
                        format!("Carousel of type '{}' cannot carry a header", carousel_type.as_str()),
                        "header only on commerceCard carousels",
                        Value::String(carousel_type.as_str().to_string()),
                    );
                }
                _ => self.validate_carousel_header(header, &header_path, report),
            }
        }
    }

    fn validate_carousel_header(&self, value: &Value, path: &str, report: &mut Report) {
        let Some(obj) = self.as_object(value, path, report) else {
            return;
        };

        if let Some(title) = self.required_str(obj, path, "title", report) {
            self.check_newlines(&join(path, "title"), title, 1, report);
        }
        if let Some(description) = self.required_str(obj, path, "description", report) {
            self.check_newlines(&join(path, "description"), description, 2, report);
        }
        match obj.get("thumbnail") {
            None | Some(Value::Null) => report.missing(&join(path, "thumbnail"), "thumbnail object"),
            Some(thumbnail) => {
                self.validate_thumbnail(thumbnail, &join(path, "thumbnail"), report);
            }
        }
    }

    /// Validate a thumbnail; returns whether it is square when it is an object
    fn validate_thumbnail(&self, value: &Value, path: &str, report: &mut Report) -> Option<bool> {
        let obj = self.as_object(value, path, report)?;

        if let Some(url) = self.required_str(obj, path, "imageUrl", report) {
            self.check_url(&join(path, "imageUrl"), url, report);
        }
        if let Some(alt_text) = self.optional_str(obj, path, "altText", report) {
            self.check_length(&join(path, "altText"), alt_text, self.config.max_alt_text_length, report);
        }
        if let Some(link) = present(obj.get("link")) {
            self.validate_link(link, &join(path, "link"), report);
        }
        let fixed_ratio = self.optional_bool(obj, path, "fixedRatio", report);

        Some(fixed_ratio.unwrap_or(false))
    }

    fn validate_link(&self, value: &Value, path: &str, report: &mut Report) {
        let Some(obj) = self.as_object(value, path, report) else {
            return;
        };

        for target in ["pc", "mobile", "web"] {
            if let Some(url) = self.optional_str(obj, path, target, report) {
                self.check_url(&join(path, target), url, report);
            }
        }
    }

    fn validate_profile(&self, value: &Value, path: &str, report: &mut Report) {
        let Some(obj) = self.as_object(value, path, report) else {
            return;
        };

        self.required_str(obj, path, "nickname", report);
        if let Some(url) = self.optional_str(obj, path, "imageUrl", report) {
            self.check_url(&join(path, "imageUrl"), url, report);
        }
    }

    /// Validate `buttons` and `buttonLayout` of a card
    fn validate_card_buttons(
        &self,
        obj: &Object,
        path: &str,
        min: usize,
        max: usize,
        square_thumbnail: bool,
        report: &mut Report,
    ) {
        let layout = match self.optional_str(obj, path, "buttonLayout", report) {
            Some(name) => match ButtonLayout::parse(name) {
                Some(layout) => layout,
                None => {
                    report.mismatch(
                        &join(path, "buttonLayout"),
                        format!("Unknown button layout '{}'", name),
                        "vertical or horizontal",
                        Value::String(name.to_string()),
                    );
                    ButtonLayout::default()
                }
            },
            None => ButtonLayout::default(),
        };

        let buttons = if min > 0 {
            self.required_array(obj, path, "buttons", report)
        } else {
            self.optional_array(obj, path, "buttons", report)
        };
        let Some(buttons) = buttons else {
            return;
        };

        let buttons_path = join(path, "buttons");
        let within_bounds = self.check_cardinality(&buttons_path, buttons.len(), min, max, report);
        for (index, button) in buttons.iter().enumerate() {
            self.validate_button(button, &index_path(&buttons_path, index), report);
        }

        if within_bounds {
            if let Some(violation) =
                rules::check_button_capacity(&buttons_path, buttons.len(), layout, square_thumbnail)
            {
                report.push(violation);
            }
        }

        report.facts.buttons += buttons.len();
    }

    /// Validate a button against the shape its `action` declares
    fn validate_button(&self, value: &Value, path: &str, report: &mut Report) {
        let Some(obj) = self.as_object(value, path, report) else {
            return;
        };

        if let Some(label) = self.required_str(obj, path, "label", report) {
            self.check_length(&join(path, "label"), label, self.config.max_label_length, report);
        }
        self.optional_object(obj, path, "extra", report);

        let Some(action) = self.required_str(obj, path, "action", report) else {
            return;
        };
        let Some(required) = ButtonAction::required_fields(action) else {
            report.mismatch(
                &join(path, "action"),
                format!("Unknown button action '{}'", action),
                format!("one of {}", ButtonAction::names().join(", ")),
                Value::String(action.to_string()),
            );
            return;
        };

        for field in ACTION_FIELDS {
            let field_path = join(path, field);
            let value = obj.get(field);

            if !required.contains(&field) {
                if !is_absent(value) {
                    report.push(
                        Violation::new(
                            ViolationKind::SchemaMismatch,
                            &field_path,
                            format!("Field not allowed for action '{}'", action),
                            "absent or null",
                            value.cloned().unwrap_or(Value::Null),
                        )
                        .with_context(format!("action '{}'", action)),
                    );
                }
                continue;
            }

            let Some(text) = self.required_str(obj, path, field, report) else {
                continue;
            };
            match field {
                "webLinkUrl" => self.check_url(&field_path, text, report),
                "phoneNumber" => {
                    report.fields_validated += 1;
                    if let Err(reason) = primitives::is_phone_number(text) {
                        report.format(
                            &field_path,
                            reason,
                            "international phone number".to_string(),
                            Value::String(text.to_string()),
                        );
                    }
                }
                _ => {}
            }
        }
    }

    fn check_length(&self, path: &str, value: &str, max: usize, report: &mut Report) {
        report.fields_validated += 1;
        if let Err(reason) = primitives::max_length(value, max) {
            report.format(
                path,
                reason,
                format!("at most {} characters", max),
                Value::String(format!("length {}", value.chars().count())),
            );
        }
    }

    fn check_newlines(&self, path: &str, value: &str, limit: usize, report: &mut Report) {
        report.fields_validated += 1;
        if let Err(reason) = primitives::max_newlines(value, limit) {
            report.format(
                path,
                reason,
                format!("at most {} line(s)", limit),
                Value::String(value.to_string()),
            );
        }
    }

    fn check_url(&self, path: &str, value: &str, report: &mut Report) {
        report.fields_validated += 1;
        if let Err(reason) = primitives::is_url(value) {
            report.format(path, reason, "url".to_string(), Value::String(value.to_string()));
        }
    }

    /// Returns whether the length is within bounds
    fn check_cardinality(&self, path: &str, len: usize, min: usize, max: usize, report: &mut Report) -> bool {
        report.fields_validated += 1;
        match primitives::bounded_array(len, min, max) {
            Ok(()) => true,
            Err(reason) => {
                report.push(Violation::new(
                    ViolationKind::CardinalityViolation,
                    path,
                    reason,
                    format!("between {} and {} items", min, max),
                    Value::from(len),
                ));
                false
            }
        }
    }

    fn as_object<'v>(&self, value: &'v Value, path: &str, report: &mut Report) -> Option<&'v Object> {
        match value {
            Value::Object(obj) => Some(obj),
            other => {
                report.wrong_type(path, "object", other);
                None
            }
        }
    }

    fn required_str<'v>(&self, obj: &'v Object, path: &str, key: &str, report: &mut Report) -> Option<&'v str> {
        report.fields_validated += 1;
        match obj.get(key) {
            None | Some(Value::Null) => {
                report.missing(&join(path, key), "string");
                None
            }
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                report.wrong_type(&join(path, key), "string", other);
                None
            }
        }
    }

    fn optional_str<'v>(&self, obj: &'v Object, path: &str, key: &str, report: &mut Report) -> Option<&'v str> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => {
                report.fields_validated += 1;
                Some(s)
            }
            Some(other) => {
                report.fields_validated += 1;
                report.wrong_type(&join(path, key), "string", other);
                None
            }
        }
    }

    fn optional_bool(&self, obj: &Object, path: &str, key: &str, report: &mut Report) -> Option<bool> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Bool(b)) => {
                report.fields_validated += 1;
                Some(*b)
            }
            Some(other) => {
                report.fields_validated += 1;
                report.wrong_type(&join(path, key), "boolean", other);
                None
            }
        }
    }

    fn optional_object(&self, obj: &Object, path: &str, key: &str, report: &mut Report) {
        match obj.get(key) {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(other) => report.wrong_type(&join(path, key), "object", other),
        }
    }

    fn required_array<'v>(&self, obj: &'v Object, path: &str, key: &str, report: &mut Report) -> Option<&'v Vec<Value>> {
        match obj.get(key) {
            None | Some(Value::Null) => {
                report.missing(&join(path, key), "array");
                None
            }
            Some(_) => self.optional_array(obj, path, key, report),
        }
    }

    fn optional_array<'v>(&self, obj: &'v Object, path: &str, key: &str, report: &mut Report) -> Option<&'v Vec<Value>> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                report.wrong_type(&join(path, key), "array", other);
                None
            }
        }
    }

    fn required_amount(&self, obj: &Object, path: &str, key: &str, report: &mut Report) -> Option<u64> {
        if is_absent(obj.get(key)) {
            report.fields_validated += 1;
            report.missing(&join(path, key), "non-negative integer");
            return None;
        }
        self.optional_amount(obj, path, key, report)
    }

    fn optional_amount(&self, obj: &Object, path: &str, key: &str, report: &mut Report) -> Option<u64> {
        let value = present(obj.get(key))?;
        report.fields_validated += 1;
        match value {
            Value::Number(number) => match number.as_u64() {
                Some(amount) => Some(amount),
                None => {
                    report.format(
                        &join(path, key),
                        "Amount must be a non-negative integer".to_string(),
                        "non-negative integer".to_string(),
                        value.clone(),
                    );
                    None
                }
            },
            other => {
                report.wrong_type(&join(path, key), "number", other);
                None
            }
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}

fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_at(result: &ValidationResult, field: &str) -> Vec<ViolationKind> {
        result
            .violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.kind)
            .collect()
    }

    #[test]
    fn test_bare_array_candidate() {
        let validator = ResponseValidator::new();
        let result = validator.validate(&json!([{"simpleText": {"text": "hello"}}]));

        assert!(result.valid, "{:?}", result.violations);
        assert!(!result.forwardable);
        assert!(result.fields_validated > 0);
    }

    #[test]
    fn test_non_response_candidate() {
        let validator = ResponseValidator::new();
        let result = validator.validate(&json!("hello"));

        assert!(!result.valid);
        assert_eq!(kinds_at(&result, "response"), vec![ViolationKind::SchemaMismatch]);
    }

    #[test]
    fn test_output_with_two_kind_keys() {
        let validator = ResponseValidator::new();
        let result = validator.validate(&json!({
            "outputs": [{"simpleText": {"text": "a"}, "simpleImage": {"imageUrl": "https://e.com/a.png", "altText": "a"}}]
        }));

        assert_eq!(kinds_at(&result, "outputs[0]"), vec![ViolationKind::SchemaMismatch]);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn test_unknown_output_kind() {
        let validator = ResponseValidator::new();
        let result = validator.validate(&json!([{"itemCard": {}}]));

        assert_eq!(result.violations.len(), 1);
        assert!(result.violations[0].message.contains("itemCard"));
    }

    #[test]
    fn test_wrong_field_type_is_schema_mismatch() {
        let validator = ResponseValidator::new();
        let result = validator.validate(&json!([{"simpleText": {"text": 42}}]));

        assert_eq!(
            kinds_at(&result, "outputs[0].simpleText.text"),
            vec![ViolationKind::SchemaMismatch]
        );
        assert_eq!(result.violations[0].actual, json!("number"));
    }

    #[test]
    fn test_null_and_absent_are_equivalent() {
        let validator = ResponseValidator::new();
        let with_null = validator.validate(&json!({
            "outputs": [{"basicCard": {"title": null, "thumbnail": {"imageUrl": "https://e.com/a.png", "altText": null}}}],
            "forwardable": null
        }));
        let without = validator.validate(&json!({
            "outputs": [{"basicCard": {"thumbnail": {"imageUrl": "https://e.com/a.png"}}}]
        }));

        assert!(with_null.valid, "{:?}", with_null.violations);
        assert!(without.valid, "{:?}", without.violations);
        assert_eq!(with_null.forwardable, without.forwardable);
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join("", "outputs"), "outputs");
        assert_eq!(join("outputs[0]", "textCard"), "outputs[0].textCard");
        assert_eq!(index_path("buttons", 2), "buttons[2]");
    }
}
