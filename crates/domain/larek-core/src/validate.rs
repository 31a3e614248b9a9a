//! Checkout form validation.
//!
//! The two field groups ({payment, address} and {email, phone}) are
//! validated independently. Within a group the error keys are coupled:
//! when either field is missing, both keys are reported, the valid
//! one carrying an empty message. Views join the non-empty messages
//! for display and key button enablement off map emptiness.

use crate::{FormErrors, OrderDraft, OrderField};

pub const MSG_PAYMENT_REQUIRED: &str = "Необходимо указать способ оплаты";
pub const MSG_ADDRESS_REQUIRED: &str = "Необходимо указать адрес";
pub const MSG_EMAIL_REQUIRED: &str = "Необходимо указать email";
pub const MSG_PHONE_REQUIRED: &str = "Необходимо указать телефон";

/// Validates the {payment, address} group of the draft.
pub fn validate_order(order: &OrderDraft) -> FormErrors {
    let mut errors = FormErrors::new();
    if order.payment.is_none() || order.address.is_empty() {
        errors.insert(
            OrderField::Payment,
            if order.payment.is_none() {
                MSG_PAYMENT_REQUIRED.to_string()
            } else {
                String::new()
            },
        );
        errors.insert(
            OrderField::Address,
            if order.address.is_empty() {
                MSG_ADDRESS_REQUIRED.to_string()
            } else {
                String::new()
            },
        );
    }
    errors
}

/// Validates the {email, phone} group of the draft.
pub fn validate_contacts(order: &OrderDraft) -> FormErrors {
    let mut errors = FormErrors::new();
    if order.email.is_empty() || order.phone.is_empty() {
        errors.insert(
            OrderField::Email,
            if order.email.is_empty() {
                MSG_EMAIL_REQUIRED.to_string()
            } else {
                String::new()
            },
        );
        errors.insert(
            OrderField::Phone,
            if order.phone.is_empty() {
                MSG_PHONE_REQUIRED.to_string()
            } else {
                String::new()
            },
        );
    }
    errors
}
