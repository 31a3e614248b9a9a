use larek_core::validate::{
    validate_contacts, validate_order, MSG_ADDRESS_REQUIRED, MSG_EMAIL_REQUIRED,
    MSG_PAYMENT_REQUIRED, MSG_PHONE_REQUIRED,
};
use larek_core::{OrderDraft, OrderField, PaymentMethod};

fn draft(payment: Option<PaymentMethod>, address: &str, email: &str, phone: &str) -> OrderDraft {
    OrderDraft {
        payment,
        address: address.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        items: vec![],
        total: None,
    }
}

#[test]
fn missing_payment_reports_both_order_fields() {
    let errors = validate_order(&draft(None, "Main St", "", ""));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[&OrderField::Payment], MSG_PAYMENT_REQUIRED);
    assert_eq!(errors[&OrderField::Address], "");
}

#[test]
fn missing_address_reports_both_order_fields() {
    let errors = validate_order(&draft(Some(PaymentMethod::Card), "", "", ""));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[&OrderField::Payment], "");
    assert_eq!(errors[&OrderField::Address], MSG_ADDRESS_REQUIRED);
}

#[test]
fn complete_order_group_yields_empty_map() {
    let errors = validate_order(&draft(Some(PaymentMethod::Cash), "Main St", "", ""));
    assert!(errors.is_empty());
}

#[test]
fn order_group_ignores_contact_fields() {
    // Both contact fields empty must not leak into the order group map.
    let errors = validate_order(&draft(Some(PaymentMethod::Card), "Main St", "", ""));
    assert!(!errors.contains_key(&OrderField::Email));
    assert!(!errors.contains_key(&OrderField::Phone));
}

#[test]
fn missing_contacts_report_both_contact_fields() {
    let errors = validate_contacts(&draft(None, "", "user@example.com", ""));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[&OrderField::Email], "");
    assert_eq!(errors[&OrderField::Phone], MSG_PHONE_REQUIRED);
}

#[test]
fn both_contacts_missing_report_both_messages() {
    let errors = validate_contacts(&draft(None, "", "", ""));

    assert_eq!(errors[&OrderField::Email], MSG_EMAIL_REQUIRED);
    assert_eq!(errors[&OrderField::Phone], MSG_PHONE_REQUIRED);
}

#[test]
fn complete_contacts_group_yields_empty_map() {
    let errors = validate_contacts(&draft(None, "", "user@example.com", "+79990000000"));
    assert!(errors.is_empty());
}

#[test]
fn unknown_payment_string_parses_as_unfilled() {
    let mut d = OrderDraft::default();
    d.set_field(OrderField::Payment, "bitcoin");
    assert_eq!(d.payment, None);

    d.set_field(OrderField::Payment, "cash");
    assert_eq!(d.payment, Some(PaymentMethod::Cash));
}
