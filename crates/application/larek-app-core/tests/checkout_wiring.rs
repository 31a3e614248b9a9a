use std::sync::{Arc, Mutex};

use larek_app_core::{
    attach_event_logger, load_catalog, wire, AppEvent, AppModel, EventBus, EventKind, ShopApi,
};
use larek_core::{OrderDraft, OrderField, OrderResult, PaymentMethod, Product};

fn product(id: &str, price: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Товар {id}"),
        description: String::new(),
        image: format!("/{id}.svg"),
        category: "другое".to_string(),
        price,
    }
}

struct FakeShopApi {
    products: Vec<Product>,
    fail_submit: bool,
    submitted: Mutex<Vec<OrderDraft>>,
}

impl FakeShopApi {
    fn new(products: Vec<Product>, fail_submit: bool) -> Arc<Self> {
        Arc::new(Self {
            products,
            fail_submit,
            submitted: Mutex::new(Vec::new()),
        })
    }
}

impl ShopApi for FakeShopApi {
    fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn submit_order(&self, order: &OrderDraft) -> anyhow::Result<OrderResult> {
        if self.fail_submit {
            anyhow::bail!("server rejected the order");
        }
        self.submitted.lock().unwrap().push(order.clone());
        Ok(OrderResult {
            id: "order-1".to_string(),
            total: order.total.unwrap_or(0),
        })
    }
}

struct FailingFetch;

impl ShopApi for FailingFetch {
    fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        anyhow::bail!("network unreachable")
    }

    fn submit_order(&self, _order: &OrderDraft) -> anyhow::Result<OrderResult> {
        anyhow::bail!("network unreachable")
    }
}

fn checkout_ready(bus: &EventBus, model: &AppModel) {
    model.add_to_basket("p1".to_string()).unwrap();
    bus.emit(&AppEvent::CheckoutOpened).unwrap();
    for (field, value) in [
        (OrderField::Payment, "card"),
        (OrderField::Address, "Main St"),
        (OrderField::Email, "a@b.c"),
        (OrderField::Phone, "+79990000000"),
    ] {
        bus.emit(&AppEvent::FieldChanged {
            field,
            value: value.to_string(),
        })
        .unwrap();
    }
}

#[test]
fn field_change_events_route_into_the_model() {
    let bus = EventBus::new();
    let model = AppModel::new(bus.clone());
    let api = FakeShopApi::new(vec![product("p1", Some(750))], false);
    wire(&bus, &model, api);

    bus.emit(&AppEvent::FieldChanged {
        field: OrderField::Payment,
        value: "cash".to_string(),
    })
    .unwrap();
    bus.emit(&AppEvent::FieldChanged {
        field: OrderField::Email,
        value: "a@b.c".to_string(),
    })
    .unwrap();

    let order = model.order();
    assert_eq!(order.payment, Some(PaymentMethod::Cash));
    assert_eq!(order.email, "a@b.c");
}

#[test]
fn basket_events_route_into_the_model() {
    let bus = EventBus::new();
    let model = AppModel::new(bus.clone());
    let api = FakeShopApi::new(vec![product("p1", Some(750))], false);
    wire(&bus, &model, api.clone());
    load_catalog(&model, api.as_ref()).unwrap();

    bus.emit(&AppEvent::AddToBasket {
        id: "p1".to_string(),
    })
    .unwrap();
    assert_eq!(model.basket(), ["p1"]);

    bus.emit(&AppEvent::RemoveFromBasket {
        id: "p1".to_string(),
    })
    .unwrap();
    assert!(model.basket().is_empty());
}

#[test]
fn successful_submission_finalizes_and_announces_completion() {
    let bus = EventBus::new();
    let model = AppModel::new(bus.clone());
    let api = FakeShopApi::new(vec![product("p1", Some(750))], false);
    wire(&bus, &model, api.clone());
    attach_event_logger(&bus);
    load_catalog(&model, api.as_ref()).unwrap();

    let completed: Arc<Mutex<Vec<OrderResult>>> = Arc::default();
    {
        let completed = Arc::clone(&completed);
        bus.on(EventKind::OrderCompleted, move |event| {
            if let AppEvent::OrderCompleted { result } = event {
                completed.lock().unwrap().push(result.clone());
            }
            Ok(())
        });
    }

    checkout_ready(&bus, &model);
    bus.emit(&AppEvent::ContactsSubmitted).unwrap();

    let completed = completed.lock().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].total, 750);

    let sent = api.submitted.lock().unwrap();
    assert_eq!(sent[0].items, ["p1"]);

    assert!(model.basket().is_empty());
    assert_eq!(model.order().payment, None);
    assert_eq!(model.order().total, Some(750));
}

#[test]
fn failed_submission_leaves_draft_and_basket_unmodified() {
    let bus = EventBus::new();
    let model = AppModel::new(bus.clone());
    let api = FakeShopApi::new(vec![product("p1", Some(750))], true);
    wire(&bus, &model, api);
    load_catalog(
        &model,
        FakeShopApi::new(vec![product("p1", Some(750))], false).as_ref(),
    )
    .unwrap();

    checkout_ready(&bus, &model);
    let order_before = model.order();
    let basket_before = model.basket();

    bus.emit(&AppEvent::ContactsSubmitted).unwrap();

    assert_eq!(model.order(), order_before);
    assert_eq!(model.basket(), basket_before);
}

#[test]
fn failed_catalog_fetch_is_logged_and_ignored() {
    let bus = EventBus::new();
    let model = AppModel::new(bus.clone());
    model.set_catalog(&[product("p1", Some(750))]).unwrap();

    load_catalog(&model, &FailingFetch).unwrap();

    // Last-known catalog stays in place.
    assert_eq!(model.catalog().len(), 1);
}
