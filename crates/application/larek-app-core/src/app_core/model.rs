//! Application state model: catalog, basket, order draft, form errors.
//!
//! Mutation methods update the state and then notify decoupled views
//! through the bus. The state lock is always released before emitting,
//! because handlers routinely call back into the model.

use std::sync::{Arc, Mutex};

use larek_core::validate::{validate_contacts, validate_order};
use larek_core::{FormErrors, OrderDraft, OrderField, Product, ProductId};

use super::bus::EventBus;
use super::event::AppEvent;

/// Snapshot of everything the model holds.
#[derive(Debug, Clone, Default)]
pub struct ShopState {
    pub catalog: Vec<Product>,
    pub basket: Vec<ProductId>,
    pub order: OrderDraft,
    pub form_errors: FormErrors,
    pub preview: Option<ProductId>,
}

/// Cheaply cloneable handle to the application state model.
#[derive(Clone)]
pub struct AppModel {
    inner: Arc<Mutex<ShopState>>,
    bus: EventBus,
}

impl AppModel {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ShopState::default())),
            bus,
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn state(&self) -> ShopState {
        self.inner.lock().unwrap().clone()
    }

    // --- Catalog ---

    /// Replaces the catalog wholesale with freshly constructed records
    /// and announces the new snapshot.
    pub fn set_catalog(&self, items: &[Product]) -> anyhow::Result<()> {
        // Fresh copies: later reloads must not alias server-owned data.
        let catalog = items.to_vec();
        {
            let mut state = self.inner.lock().unwrap();
            state.catalog = catalog.clone();
        }
        self.bus.emit(&AppEvent::CatalogChanged { catalog })
    }

    pub fn catalog(&self) -> Vec<Product> {
        self.inner.lock().unwrap().catalog.clone()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        let state = self.inner.lock().unwrap();
        state.catalog.iter().find(|p| p.id == id).cloned()
    }

    pub fn set_preview(&self, id: Option<ProductId>) -> anyhow::Result<()> {
        {
            let mut state = self.inner.lock().unwrap();
            state.preview = id.clone();
        }
        self.bus.emit(&AppEvent::PreviewChanged { id })
    }

    pub fn preview(&self) -> Option<ProductId> {
        self.inner.lock().unwrap().preview.clone()
    }

    // --- Basket ---

    /// Adds a product to the basket. Idempotent: an item appears at
    /// most once, and a repeated add emits nothing.
    pub fn add_to_basket(&self, id: ProductId) -> anyhow::Result<()> {
        let items = {
            let mut state = self.inner.lock().unwrap();
            if state.basket.contains(&id) {
                return Ok(());
            }
            state.basket.push(id);
            state.basket.clone()
        };
        self.bus.emit(&AppEvent::BasketChanged { items })
    }

    /// Removes a product by identifier. Items are never matched by
    /// displayed title; duplicate titles must not misidentify entries.
    pub fn remove_from_basket(&self, id: &str) -> anyhow::Result<()> {
        let items = {
            let mut state = self.inner.lock().unwrap();
            let before = state.basket.len();
            state.basket.retain(|item| item != id);
            if state.basket.len() == before {
                return Ok(());
            }
            state.basket.clone()
        };
        self.bus.emit(&AppEvent::BasketChanged { items })
    }

    pub fn clear_basket(&self) -> anyhow::Result<()> {
        {
            let mut state = self.inner.lock().unwrap();
            if state.basket.is_empty() {
                return Ok(());
            }
            state.basket.clear();
        }
        self.bus.emit(&AppEvent::BasketChanged { items: Vec::new() })
    }

    /// Insertion order preserved; meaningful for the numbered display.
    pub fn basket(&self) -> Vec<ProductId> {
        self.inner.lock().unwrap().basket.clone()
    }

    pub fn basket_contains(&self, id: &str) -> bool {
        self.inner.lock().unwrap().basket.iter().any(|i| i == id)
    }

    /// Sums the catalog prices of basket members; priceless items
    /// count as 0. The model never stores this on its own — callers
    /// pass a total to [`AppModel::begin_checkout`] explicitly.
    pub fn basket_total(&self) -> u64 {
        let state = self.inner.lock().unwrap();
        state
            .basket
            .iter()
            .map(|id| {
                state
                    .catalog
                    .iter()
                    .find(|p| &p.id == id)
                    .and_then(|p| p.price)
                    .unwrap_or(0)
            })
            .sum()
    }

    // --- Order draft ---

    /// Copies the basket into the draft and stores the given total.
    pub fn begin_checkout(&self, total: u64) -> anyhow::Result<()> {
        let mut state = self.inner.lock().unwrap();
        state.order.items = state.basket.clone();
        state.order.total = Some(total);
        Ok(())
    }

    /// Writes one checkout field, then reruns both validation passes.
    /// When the whole form is clean this announces `OrderReady` with
    /// the full draft.
    pub fn set_order_field(&self, field: OrderField, value: &str) -> anyhow::Result<()> {
        {
            let mut state = self.inner.lock().unwrap();
            state.order.set_field(field, value);
        }
        let order_ok = self.validate_order_form()?;
        let contacts_ok = self.validate_contacts_form()?;
        if order_ok && contacts_ok {
            let order = self.order();
            self.bus.emit(&AppEvent::OrderReady { order })?;
        }
        Ok(())
    }

    /// Recomputes the {payment, address} error map in full, stores it,
    /// and announces both the map and the resulting validity.
    pub fn validate_order_form(&self) -> anyhow::Result<bool> {
        let errors = {
            let mut state = self.inner.lock().unwrap();
            let errors = validate_order(&state.order);
            state.form_errors = errors.clone();
            errors
        };
        let valid = errors.is_empty();
        self.bus.emit(&AppEvent::OrderErrorsChanged { errors })?;
        self.bus.emit(&AppEvent::OrderValidityChanged { valid })?;
        Ok(valid)
    }

    /// Recomputes the {email, phone} error map in full, stores it,
    /// and announces it.
    pub fn validate_contacts_form(&self) -> anyhow::Result<bool> {
        let errors = {
            let mut state = self.inner.lock().unwrap();
            let errors = validate_contacts(&state.order);
            state.form_errors = errors.clone();
            errors
        };
        let valid = errors.is_empty();
        self.bus
            .emit(&AppEvent::ContactErrorsChanged { errors })?;
        Ok(valid)
    }

    pub fn order(&self) -> OrderDraft {
        self.inner.lock().unwrap().order.clone()
    }

    pub fn form_errors(&self) -> FormErrors {
        self.inner.lock().unwrap().form_errors.clone()
    }

    /// Post-confirmation reset: empties the basket and the draft
    /// fields while keeping the confirmed total for the success view.
    /// Callers must only invoke this after the server accepted the
    /// order; a failed submission leaves everything untouched.
    pub fn finalize_order(&self) -> anyhow::Result<()> {
        {
            let mut state = self.inner.lock().unwrap();
            state.basket.clear();
            state.order = OrderDraft {
                total: state.order.total,
                ..OrderDraft::default()
            };
        }
        self.bus.emit(&AppEvent::BasketChanged { items: Vec::new() })
    }
}
