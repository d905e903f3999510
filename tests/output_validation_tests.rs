/*!
 * Output Validation Tests
 * Per-kind field rules of every output type
 */

use rs_skill_payload::*;
use test_utils::*;

fn violations_at(result: &ValidationResult, field: &str) -> Vec<ViolationKind> {
    result
        .violations
        .iter()
        .filter(|v| v.field == field)
        .map(|v| v.kind)
        .collect()
}

#[test]
fn test_simple_text_length_limit() {
    let validator = create_test_validator();

    let at_limit = validator.validate(&json!([{"simpleText": {"text": "a".repeat(1000)}}]));
    assert!(at_limit.valid);

    let over_limit = validator.validate(&json!([{"simpleText": {"text": "a".repeat(1001)}}]));
    assert_eq!(over_limit.violations.len(), 1);
    assert_eq!(
        violations_at(&over_limit, "outputs[0].simpleText.text"),
        vec![ViolationKind::FormatViolation]
    );
    assert_eq!(over_limit.violations[0].actual, json!("length 1001"));
}

#[test]
fn test_simple_text_length_counts_characters() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{"simpleText": {"text": "안".repeat(1000)}}]));

    assert!(result.valid, "{:?}", result.violations);
}

#[test]
fn test_simple_image_checks() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{
        "simpleImage": {
            "imageUrl": "javascript:alert(1)",
            "altText": "x".repeat(51)
        }
    }]));

    assert_eq!(result.violations.len(), 2);
    assert_eq!(
        violations_at(&result, "outputs[0].simpleImage.imageUrl"),
        vec![ViolationKind::FormatViolation]
    );
    assert_eq!(
        violations_at(&result, "outputs[0].simpleImage.altText"),
        vec![ViolationKind::FormatViolation]
    );
}

#[test]
fn test_simple_image_requires_alt_text() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{
        "simpleImage": {"imageUrl": "https://cdn.example.com/a.png"}
    }]));

    assert_eq!(
        violations_at(&result, "outputs[0].simpleImage.altText"),
        vec![ViolationKind::SchemaMismatch]
    );
}

#[test]
fn test_text_card_needs_title_or_description() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{
        "textCard": {"buttons": [message_button_json("Go")]}
    }]));

    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        violations_at(&result, "outputs[0].textCard"),
        vec![ViolationKind::SchemaMismatch]
    );

    let described = validator.validate(&json!([{
        "textCard": {"description": "Only a description", "buttons": [message_button_json("Go")]}
    }]));
    assert!(described.valid, "{:?}", described.violations);
}

#[test]
fn test_text_card_button_cardinality() {
    let validator = create_test_validator();

    let too_many = validator.validate(&json!([text_card_json("vertical", 4)]));
    assert_eq!(too_many.violations.len(), 1);
    assert_eq!(
        violations_at(&too_many, "outputs[0].textCard.buttons"),
        vec![ViolationKind::CardinalityViolation]
    );
    assert_eq!(too_many.violations[0].actual, json!(4));

    let none = validator.validate(&json!([text_card_json("vertical", 0)]));
    assert_eq!(
        violations_at(&none, "outputs[0].textCard.buttons"),
        vec![ViolationKind::CardinalityViolation]
    );
}

#[test]
fn test_text_card_horizontal_capacity() {
    let validator = create_test_validator();

    let three = validator.validate(&json!([text_card_json("horizontal", 3)]));
    assert_eq!(three.violations.len(), 1);
    assert_eq!(
        violations_at(&three, "outputs[0].textCard.buttons"),
        vec![ViolationKind::ButtonCountExceeded]
    );
    assert_eq!(three.violations[0].context.as_deref(), Some("horizontal layout"));

    let two = validator.validate(&json!([text_card_json("horizontal", 2)]));
    assert!(two.valid, "{:?}", two.violations);

    let vertical = validator.validate(&json!([text_card_json("vertical", 3)]));
    assert!(vertical.valid, "{:?}", vertical.violations);
}

#[test]
fn test_unknown_button_layout() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([text_card_json("diagonal", 1)]));

    assert_eq!(
        violations_at(&result, "outputs[0].textCard.buttonLayout"),
        vec![ViolationKind::SchemaMismatch]
    );
}

#[test]
fn test_basic_card_square_thumbnail_limits_buttons() {
    let validator = create_test_validator();
    let mut card = basic_card_json(true);
    card["buttons"] = json!([
        message_button_json("One"),
        message_button_json("Two"),
        message_button_json("Three")
    ]);

    let result = validator.validate(&json!([{"basicCard": card.clone()}]));
    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        violations_at(&result, "outputs[0].basicCard.buttons"),
        vec![ViolationKind::ButtonCountExceeded]
    );
    assert_eq!(
        result.violations[0].context.as_deref(),
        Some("vertical layout with a fixedRatio thumbnail")
    );

    card["thumbnail"]["fixedRatio"] = json!(false);
    let wide = validator.validate(&json!([{"basicCard": card}]));
    assert!(wide.valid, "{:?}", wide.violations);
}

#[test]
fn test_basic_card_without_buttons_and_missing_thumbnail() {
    let validator = create_test_validator();

    let plain = validator.validate(&json!([{"basicCard": basic_card_json(false)}]));
    assert!(plain.valid, "{:?}", plain.violations);

    let missing = validator.validate(&json!([{"basicCard": {"title": "No image"}}]));
    assert_eq!(
        violations_at(&missing, "outputs[0].basicCard.thumbnail"),
        vec![ViolationKind::SchemaMismatch]
    );
}

#[test]
fn test_basic_card_thumbnail_link_urls_checked() {
    let validator = create_test_validator();
    let mut card = basic_card_json(false);
    card["thumbnail"]["link"] = json!({"web": "https://example.com", "mobile": "example"});

    let result = validator.validate(&json!([{"basicCard": card}]));
    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        violations_at(&result, "outputs[0].basicCard.thumbnail.link.mobile"),
        vec![ViolationKind::FormatViolation]
    );
}

fn commerce_card_json() -> JsonValue {
    json!({
        "description": "Oat latte, 355ml",
        "price": 5500,
        "currency": "won",
        "discount": 500,
        "thumbnails": [thumbnail_json(false)],
        "profile": {"nickname": "Cafe", "imageUrl": "https://cdn.example.com/logo.png"},
        "buttons": [
            {"label": "Buy", "action": "webLink", "webLinkUrl": "https://shop.example.com/latte"},
            {"label": "Share", "action": "share"}
        ]
    })
}

#[test]
fn test_commerce_card_valid() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{"commerceCard": commerce_card_json()}]));

    assert!(result.valid, "{:?}", result.violations);
}

#[test]
fn test_commerce_card_price_rules() {
    let validator = create_test_validator();
    let mut card = commerce_card_json();
    card["currency"] = json!("usd");
    card["discount"] = json!(6000);
    card["discountRate"] = json!(120);

    let result = validator.validate(&json!([{"commerceCard": card}]));
    let set = result.into_error_set();
    assert_eq!(set.len(), 3);
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].commerceCard.currency"));
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].commerceCard.discount"));
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].commerceCard.discountRate"));
}

#[test]
fn test_commerce_card_structure_rules() {
    let validator = create_test_validator();
    let mut card = commerce_card_json();
    card["thumbnails"] = json!([thumbnail_json(false), thumbnail_json(false)]);
    card["buttons"] = json!([]);
    card["price"] = json!(-1);

    let result = validator.validate(&json!([{"commerceCard": card}]));
    let set = result.into_error_set();
    assert!(set.contains(ViolationKind::CardinalityViolation, "outputs[0].commerceCard.thumbnails"));
    assert!(set.contains(ViolationKind::CardinalityViolation, "outputs[0].commerceCard.buttons"));
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].commerceCard.price"));
}

fn list_card_json(items: Vec<JsonValue>) -> JsonValue {
    json!({"listCard": {"header": {"title": "Today's picks"}, "items": items}})
}

#[test]
fn test_list_card_items() {
    let validator = create_test_validator();
    let valid = validator.validate(&json!([list_card_json(vec![
        json!({"title": "Latte", "description": "Oat milk", "imageUrl": "https://cdn.example.com/latte.png"}),
        json!({"title": "Mocha", "action": "block", "blockId": "b-mocha"}),
        json!({"title": "Help", "action": "message", "messageText": "help"}),
    ])]));
    assert!(valid.valid, "{:?}", valid.violations);

    let items: Vec<JsonValue> = (0..6).map(|i| json!({"title": format!("Item {}", i)})).collect();
    let too_many = validator.validate(&json!([list_card_json(items)]));
    assert_eq!(
        violations_at(&too_many, "outputs[0].listCard.items"),
        vec![ViolationKind::CardinalityViolation]
    );
}

#[test]
fn test_list_item_action_rules() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([list_card_json(vec![
        json!({"title": "Mocha", "action": "block"}),
        json!({"title": "Help", "messageText": "help"}),
        json!({"title": "Tea", "action": "message", "blockId": "b-tea"}),
        json!({"title": "Water", "action": "teleport"}),
    ])]));

    let set = result.into_error_set();
    assert_eq!(set.len(), 4);
    assert!(set.contains(ViolationKind::SchemaMismatch, "outputs[0].listCard.items[0].blockId"));
    assert!(set.contains(ViolationKind::SchemaMismatch, "outputs[0].listCard.items[1].messageText"));
    assert!(set.contains(ViolationKind::SchemaMismatch, "outputs[0].listCard.items[2].blockId"));
    assert!(set.contains(ViolationKind::SchemaMismatch, "outputs[0].listCard.items[3].action"));
}

#[test]
fn test_list_item_wrong_type_block_id_reported_once() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([list_card_json(vec![
        json!({"title": "Help", "action": "message", "messageText": "help", "blockId": 42}),
    ])]));

    let set = result.into_error_set();
    assert_eq!(set.len(), 1);
    assert!(set.contains(ViolationKind::SchemaMismatch, "outputs[0].listCard.items[0].blockId"));
    assert_eq!(set.violations[0].message, "Type mismatch");
}

#[test]
fn test_list_card_buttons_and_header() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{
        "listCard": {
            "header": {"title": "t".repeat(51)},
            "items": [{"title": "One"}],
            "buttons": [
                message_button_json("A"),
                message_button_json("B"),
                message_button_json("C")
            ]
        }
    }]));

    let set = result.into_error_set();
    assert_eq!(set.len(), 2);
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].listCard.header.title"));
    assert!(set.contains(ViolationKind::CardinalityViolation, "outputs[0].listCard.buttons"));
}

#[test]
fn test_carousel_of_text_cards() {
    let validator = create_test_validator();
    let card = text_card_json("vertical", 2)["textCard"].clone();
    let result = validator.validate(&json!([{
        "carousel": {"type": "textCard", "items": [card.clone(), card]}
    }]));

    assert!(result.valid, "{:?}", result.violations);
    assert!(!result.forwardable);
}

#[test]
fn test_carousel_item_violations_use_item_paths() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{
        "carousel": {
            "type": "basicCard",
            "items": [basic_card_json(false), {"title": "No thumbnail"}]
        }
    }]));

    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        violations_at(&result, "outputs[0].carousel.items[1].thumbnail"),
        vec![ViolationKind::SchemaMismatch]
    );
}

#[test]
fn test_carousel_item_limits() {
    let validator = create_test_validator();

    let cards: Vec<JsonValue> = (0..11).map(|_| basic_card_json(false)).collect();
    let result = validator.validate(&json!([{"carousel": {"type": "basicCard", "items": cards}}]));
    assert_eq!(
        violations_at(&result, "outputs[0].carousel.items"),
        vec![ViolationKind::CardinalityViolation]
    );

    let list = json!({"header": {"title": "Picks"}, "items": [{"title": "One"}]});
    let lists: Vec<JsonValue> = (0..6).map(|_| list.clone()).collect();
    let result = validator.validate(&json!([{"carousel": {"type": "listCard", "items": lists}}]));
    assert_eq!(
        violations_at(&result, "outputs[0].carousel.items"),
        vec![ViolationKind::CardinalityViolation]
    );
}

#[test]
fn test_carousel_header_only_on_commerce_cards() {
    let validator = create_test_validator();
    let header = json!({
        "title": "Weekly deals",
        "description": "Prices drop every Monday",
        "thumbnail": thumbnail_json(false)
    });

    let basic = validator.validate(&json!([{
        "carousel": {"type": "basicCard", "items": [basic_card_json(false)], "header": header.clone()}
    }]));
    assert_eq!(
        violations_at(&basic, "outputs[0].carousel.header"),
        vec![ViolationKind::SchemaMismatch]
    );

    let commerce = validator.validate(&json!([{
        "carousel": {"type": "commerceCard", "items": [commerce_card_json()], "header": header}
    }]));
    assert!(commerce.valid, "{:?}", commerce.violations);
}

#[test]
fn test_carousel_header_line_limits() {
    let validator = create_test_validator();
    let carousel = |title: &str, description: &str| {
        json!([{
            "carousel": {
                "type": "commerceCard",
                "items": [commerce_card_json()],
                "header": {
                    "title": title,
                    "description": description,
                    "thumbnail": thumbnail_json(false)
                }
            }
        }])
    };

    let one_break = validator.validate(&carousel("Deals", "Line one\nLine two"));
    assert!(one_break.valid, "{:?}", one_break.violations);

    let result = validator.validate(&carousel("Deals\nthis week", "One\nTwo\nThree"));
    let set = result.into_error_set();
    assert_eq!(set.len(), 2);
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].carousel.header.title"));
    assert!(set.contains(ViolationKind::FormatViolation, "outputs[0].carousel.header.description"));
}

#[test]
fn test_unknown_carousel_type() {
    let validator = create_test_validator();
    let result = validator.validate(&json!([{"carousel": {"type": "itemCard", "items": [{}]}}]));

    assert_eq!(
        violations_at(&result, "outputs[0].carousel.type"),
        vec![ViolationKind::SchemaMismatch]
    );
}

#[test]
fn test_custom_limits() {
    let _ = env_logger::try_init();
    let config = ValidatorConfig {
        max_simple_text_length: 10,
        ..ValidatorConfig::default()
    };
    let validator = ResponseValidator::with_config(config).unwrap();

    let result = validator.validate(&json!([{"simpleText": {"text": "eleven char"}}]));
    assert_eq!(
        violations_at(&result, "outputs[0].simpleText.text"),
        vec![ViolationKind::FormatViolation]
    );

    let zero = ValidatorConfig {
        max_outputs: 0,
        ..ValidatorConfig::default()
    };
    assert!(matches!(
        ResponseValidator::with_config(zero),
        Err(SkillError::Configuration(_))
    ));
}
