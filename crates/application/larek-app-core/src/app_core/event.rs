use larek_core::{FormErrors, FormGroup, OrderDraft, OrderField, OrderResult, Product, ProductId};

/// Everything that crosses the event bus, one variant per event kind.
///
/// Views emit the user-interaction variants (`CardSelected`,
/// `AddToBasket`, ...); the state model emits the change-notification
/// variants (`CatalogChanged`, `OrderErrorsChanged`, ...).
#[derive(Debug, Clone)]
pub enum AppEvent {
    // Catalog / preview
    CatalogChanged { catalog: Vec<Product> },
    CardSelected { id: ProductId },
    PreviewChanged { id: Option<ProductId> },

    // Basket
    AddToBasket { id: ProductId },
    RemoveFromBasket { id: ProductId },
    BasketChanged { items: Vec<ProductId> },
    BasketOpened,

    // Checkout form
    CheckoutOpened,
    FieldChanged { field: OrderField, value: String },
    OrderErrorsChanged { errors: FormErrors },
    ContactErrorsChanged { errors: FormErrors },
    OrderValidityChanged { valid: bool },
    OrderReady { order: OrderDraft },

    // Submission
    OrderSubmitted,
    ContactsSubmitted,
    OrderCompleted { result: OrderResult },
}

/// Fieldless mirror of [`AppEvent`] used as the exact-match subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CatalogChanged,
    CardSelected,
    PreviewChanged,
    AddToBasket,
    RemoveFromBasket,
    BasketChanged,
    BasketOpened,
    CheckoutOpened,
    FieldChanged,
    OrderErrorsChanged,
    ContactErrorsChanged,
    OrderValidityChanged,
    OrderReady,
    OrderSubmitted,
    ContactsSubmitted,
    OrderCompleted,
}

/// Whole families of events subscribable with a single registration.
///
/// These replace the original regex-keyed subscriptions: one family per
/// checkout screen, matching every field-change event of that screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFamily {
    /// `FieldChanged` for payment and address.
    OrderFormChange,
    /// `FieldChanged` for email and phone.
    ContactsFormChange,
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::CatalogChanged { .. } => EventKind::CatalogChanged,
            AppEvent::CardSelected { .. } => EventKind::CardSelected,
            AppEvent::PreviewChanged { .. } => EventKind::PreviewChanged,
            AppEvent::AddToBasket { .. } => EventKind::AddToBasket,
            AppEvent::RemoveFromBasket { .. } => EventKind::RemoveFromBasket,
            AppEvent::BasketChanged { .. } => EventKind::BasketChanged,
            AppEvent::BasketOpened => EventKind::BasketOpened,
            AppEvent::CheckoutOpened => EventKind::CheckoutOpened,
            AppEvent::FieldChanged { .. } => EventKind::FieldChanged,
            AppEvent::OrderErrorsChanged { .. } => EventKind::OrderErrorsChanged,
            AppEvent::ContactErrorsChanged { .. } => EventKind::ContactErrorsChanged,
            AppEvent::OrderValidityChanged { .. } => EventKind::OrderValidityChanged,
            AppEvent::OrderReady { .. } => EventKind::OrderReady,
            AppEvent::OrderSubmitted => EventKind::OrderSubmitted,
            AppEvent::ContactsSubmitted => EventKind::ContactsSubmitted,
            AppEvent::OrderCompleted { .. } => EventKind::OrderCompleted,
        }
    }

    /// The family this event belongs to, if any. Families and exact
    /// kinds are evaluated independently at dispatch time.
    pub fn family(&self) -> Option<EventFamily> {
        match self {
            AppEvent::FieldChanged { field, .. } => Some(match field.group() {
                FormGroup::Order => EventFamily::OrderFormChange,
                FormGroup::Contacts => EventFamily::ContactsFormChange,
            }),
            _ => None,
        }
    }
}

/// A subscription key: an exact kind, a family, or every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFilter {
    Kind(EventKind),
    Family(EventFamily),
    Any,
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::Kind(kind) => *kind == event.kind(),
            EventFilter::Family(family) => event.family() == Some(*family),
            EventFilter::Any => true,
        }
    }
}
