use larek_core::{OrderDraft, OrderField, PaymentMethod, Product};

#[test]
fn payment_method_uses_lowercase_wire_names() {
    assert_eq!(
        serde_json::to_string(&PaymentMethod::Card).unwrap(),
        "\"card\""
    );
    assert_eq!(
        serde_json::from_str::<PaymentMethod>("\"cash\"").unwrap(),
        PaymentMethod::Cash
    );
}

#[test]
fn order_field_uses_lowercase_wire_names() {
    assert_eq!(
        serde_json::to_string(&OrderField::Payment).unwrap(),
        "\"payment\""
    );
}

#[test]
fn priceless_product_round_trips_with_null_price() {
    let product = Product {
        id: "p1".to_string(),
        title: "Мамка-таймер".to_string(),
        description: "".to_string(),
        image: "/timer.svg".to_string(),
        category: "другое".to_string(),
        price: None,
    };

    let json = serde_json::to_string(&product).unwrap();
    assert!(json.contains("\"price\":null"));

    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, product);
}

#[test]
fn empty_draft_serializes_null_payment_and_total() {
    let json = serde_json::to_value(OrderDraft::default()).unwrap();
    assert!(json["payment"].is_null());
    assert!(json["total"].is_null());
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}
