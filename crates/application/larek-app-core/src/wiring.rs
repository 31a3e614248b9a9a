//! Bootstrap subscriptions tying user-interaction events to state
//! model operations. The shell calls [`wire`] once at startup; views
//! and the model never reference each other directly.

use std::sync::Arc;

use tracing::{error, warn};

use crate::app_core::{AppEvent, AppModel, EventBus, EventFamily, EventKind, SubscriptionId};
use crate::ports::ShopApi;

/// Registers the standard handler set. Returns the subscription ids
/// so a shell can detach them, though in practice the wiring lives as
/// long as the bus does.
pub fn wire(bus: &EventBus, model: &AppModel, api: Arc<dyn ShopApi>) -> Vec<SubscriptionId> {
    let mut ids = Vec::new();

    // One shared reaction for both checkout screens' field edits.
    for family in [EventFamily::OrderFormChange, EventFamily::ContactsFormChange] {
        let model = model.clone();
        ids.push(bus.on_family(family, move |event| {
            if let AppEvent::FieldChanged { field, value } = event {
                model.set_order_field(*field, value)?;
            }
            Ok(())
        }));
    }

    let m = model.clone();
    ids.push(bus.on(EventKind::CardSelected, move |event| {
        if let AppEvent::CardSelected { id } = event {
            m.set_preview(Some(id.clone()))?;
        }
        Ok(())
    }));

    let m = model.clone();
    ids.push(bus.on(EventKind::AddToBasket, move |event| {
        if let AppEvent::AddToBasket { id } = event {
            m.add_to_basket(id.clone())?;
        }
        Ok(())
    }));

    let m = model.clone();
    ids.push(bus.on(EventKind::RemoveFromBasket, move |event| {
        if let AppEvent::RemoveFromBasket { id } = event {
            m.remove_from_basket(id)?;
        }
        Ok(())
    }));

    let m = model.clone();
    ids.push(bus.on(EventKind::CheckoutOpened, move |_| {
        let total = m.basket_total();
        m.begin_checkout(total)
    }));

    // Submission: the draft and basket are only touched after the
    // server confirms; a failed request is logged and leaves both
    // exactly as they were.
    let m = model.clone();
    let b = bus.clone();
    ids.push(bus.on(EventKind::ContactsSubmitted, move |_| {
        let order = m.order();
        match api.submit_order(&order) {
            Ok(result) => {
                m.finalize_order()?;
                b.emit(&AppEvent::OrderCompleted { result })
            }
            Err(err) => {
                warn!(error = %err, "order submission failed; draft and basket unchanged");
                Ok(())
            }
        }
    }));

    ids
}

/// Fetches the catalog and installs it into the model. A failed fetch
/// is logged and otherwise ignored; the current catalog stays as is.
pub fn load_catalog(model: &AppModel, api: &dyn ShopApi) -> anyhow::Result<()> {
    match api.fetch_products() {
        Ok(products) => model.set_catalog(&products),
        Err(err) => {
            error!(error = %err, "catalog fetch failed");
            Ok(())
        }
    }
}
