use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod price;
pub mod validate;

pub type ProductId = String;

/// A catalog entry as delivered by the shop API.
///
/// Immutable once constructed; the catalog is replaced wholesale on
/// reload, never patched in place. `price: None` means the item is not
/// for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: Option<u64>,
}

/// Payment methods accepted at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    /// Parses the wire/UI representation. Unknown strings yield `None`,
    /// which validation reports as an unfilled payment method.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "card" => Some(PaymentMethod::Card),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }
}

/// The in-progress checkout form plus the basket snapshot and total.
///
/// Starts fully empty; fields are written one at a time as the user
/// fills the form. `total: None` means "not yet computed".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDraft {
    pub payment: Option<PaymentMethod>,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<ProductId>,
    pub total: Option<u64>,
}

impl OrderDraft {
    pub fn field(&self, field: OrderField) -> String {
        match field {
            OrderField::Payment => self
                .payment
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            OrderField::Address => self.address.clone(),
            OrderField::Email => self.email.clone(),
            OrderField::Phone => self.phone.clone(),
        }
    }

    pub fn set_field(&mut self, field: OrderField, value: &str) {
        match field {
            OrderField::Payment => self.payment = PaymentMethod::parse(value),
            OrderField::Address => self.address = value.to_string(),
            OrderField::Email => self.email = value.to_string(),
            OrderField::Phone => self.phone = value.to_string(),
        }
    }
}

/// Which of the two checkout screens a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormGroup {
    /// Payment method and delivery address.
    Order,
    /// Email and phone.
    Contacts,
}

/// The editable fields of the checkout form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Payment,
    Address,
    Email,
    Phone,
}

impl OrderField {
    pub fn group(&self) -> FormGroup {
        match self {
            OrderField::Payment | OrderField::Address => FormGroup::Order,
            OrderField::Email | OrderField::Phone => FormGroup::Contacts,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Payment => "payment",
            OrderField::Address => "address",
            OrderField::Email => "email",
            OrderField::Phone => "phone",
        }
    }
}

/// Per-field validation messages driving submit-button enablement.
///
/// A field key is present only while its form group is invalid; an
/// empty map means the group passed validation.
pub type FormErrors = BTreeMap<OrderField, String>;

/// Server confirmation of a submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResult {
    pub id: String,
    pub total: u64,
}
