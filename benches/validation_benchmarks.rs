use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rs_skill_payload::prelude::*;

fn carousel_response() -> JsonValue {
    let card = json!({
        "title": "Oat latte",
        "description": "355ml, oat milk",
        "thumbnail": {"imageUrl": "https://cdn.example.com/latte.png", "fixedRatio": false},
        "buttons": [
            {"label": "Order", "action": "block", "messageText": "order latte", "blockId": "b-order"},
            {"label": "Call", "action": "phone", "phoneNumber": "+82 10-1234-5678"}
        ]
    });
    let items: Vec<JsonValue> = (0..10).map(|_| card.clone()).collect();

    json!({
        "outputs": [
            {"simpleText": {"text": "Today's menu"}},
            {"carousel": {"type": "basicCard", "items": items}}
        ],
        "forwardable": true
    })
}

fn benchmark_response_validation(c: &mut Criterion) {
    let validator = ResponseValidator::new();
    let candidate = carousel_response();

    c.bench_function("validate_carousel_response", |b| {
        b.iter(|| {
            black_box(validator.validate(black_box(&candidate)));
        })
    });

    c.bench_function("validate_and_encode_carousel_response", |b| {
        b.iter(|| {
            black_box(validator.validate_and_encode(black_box(&candidate)).unwrap());
        })
    });
}

fn benchmark_payload_decoding(c: &mut Criterion) {
    let raw = json!({
        "bot": {"id": "bot-1", "name": "Cafe Helper"},
        "intent": {"id": "intent-1", "name": "order"},
        "action": {"id": "action-1", "name": "take_order", "params": {"drink": "latte"}},
        "userRequest": {
            "timezone": "Asia/Seoul",
            "block": {"id": "block-1", "name": "Order"},
            "utterance": "latte please",
            "lang": "ko",
            "user": {"id": "user-1", "type": "botUserKey"}
        },
        "contexts": []
    })
    .to_string();

    c.bench_function("decode_skill_request", |b| {
        b.iter(|| {
            black_box(PayloadParser::decode(black_box(&raw)).unwrap());
        })
    });
}

criterion_group!(benches, benchmark_response_validation, benchmark_payload_decoding);
criterion_main!(benches);
