//! Synchronous publish/subscribe broker for [`AppEvent`]s.
//!
//! The bus is the only coordination mechanism between the state model
//! and the views: neither side holds a reference to the other. It is
//! created once at startup and lives for the whole session; no
//! teardown is modeled.
//!
//! ## Dispatch
//! `emit` runs on the caller's thread and returns only after every
//! matching handler has run. Matching handlers are invoked in tiers:
//! exact-kind subscriptions first, then family subscriptions, then
//! wildcard (`on_all`) subscriptions, insertion order within each tier.
//! The handler list is snapshotted before dispatch, so handlers may
//! subscribe or emit re-entrantly without affecting the emission in
//! flight. A handler that emits the event it is reacting to recurses
//! without bound; that hazard is the handler's to avoid.
//!
//! ## Failure
//! The first handler error aborts dispatch to the remaining handlers
//! and is returned to the emitter. Handlers that want to survive their
//! own failures must recover locally.

use std::sync::{Arc, Mutex};

use super::event::{AppEvent, EventFamily, EventFilter, EventKind};

pub type SubscriptionId = u64;

type Handler = Arc<dyn Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    next_id: SubscriptionId,
    subscriptions: Vec<Subscription>,
}

/// Cheaply cloneable handle to the session-wide event bus.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handler` to every emission of the exact `kind`.
    pub fn on(
        &self,
        kind: EventKind,
        handler: impl Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(EventFilter::Kind(kind), Arc::new(handler))
    }

    /// Subscribes `handler` to every emission belonging to `family`.
    pub fn on_family(
        &self,
        family: EventFamily,
        handler: impl Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(EventFilter::Family(family), Arc::new(handler))
    }

    /// Subscribes `handler` to every emission regardless of kind.
    ///
    /// Wildcard handlers run after all named handlers and never alter
    /// their dispatch order. Intended for diagnostics.
    pub fn on_all(
        &self,
        handler: impl Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(EventFilter::Any, Arc::new(handler))
    }

    /// Removes a previously registered subscription.
    /// Returns `false` when the id is unknown (already removed).
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.subscriptions.len();
        inner.subscriptions.retain(|s| s.id != id);
        inner.subscriptions.len() != before
    }

    /// Synchronously fans `event` out to every matching handler.
    ///
    /// Returns the first handler error, aborting dispatch to the
    /// handlers that would have followed it.
    pub fn emit(&self, event: &AppEvent) -> anyhow::Result<()> {
        let plan: Vec<Handler> = {
            let inner = self.inner.lock().unwrap();
            let mut plan = Vec::new();
            for tier in [TIER_KIND, TIER_FAMILY, TIER_ANY] {
                for sub in &inner.subscriptions {
                    if dispatch_tier(&sub.filter) == tier && sub.filter.matches(event) {
                        plan.push(Arc::clone(&sub.handler));
                    }
                }
            }
            plan
        };

        for handler in plan {
            handler(event)?;
        }
        Ok(())
    }

    /// Builds a callback that emits the event produced by `make`.
    ///
    /// Lets UI wiring hand out ready-made emitter closures instead of
    /// capturing the bus by hand at every call site.
    pub fn trigger(
        &self,
        make: impl Fn() -> AppEvent + Send + Sync + 'static,
    ) -> impl Fn() -> anyhow::Result<()> + Send + Sync + 'static {
        let bus = self.clone();
        move || bus.emit(&make())
    }

    /// Like [`EventBus::trigger`], but the callback merges call-time
    /// data into the emitted event.
    pub fn trigger_with<T>(
        &self,
        make: impl Fn(T) -> AppEvent + Send + Sync + 'static,
    ) -> impl Fn(T) -> anyhow::Result<()> + Send + Sync + 'static {
        let bus = self.clone();
        move |data| bus.emit(&make(data))
    }

    fn subscribe(&self, filter: EventFilter, handler: Handler) -> SubscriptionId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscriptions.push(Subscription {
            id,
            filter,
            handler,
        });
        id
    }
}

const TIER_KIND: u8 = 0;
const TIER_FAMILY: u8 = 1;
const TIER_ANY: u8 = 2;

fn dispatch_tier(filter: &EventFilter) -> u8 {
    match filter {
        EventFilter::Kind(_) => TIER_KIND,
        EventFilter::Family(_) => TIER_FAMILY,
        EventFilter::Any => TIER_ANY,
    }
}

/// Logs every emission at `debug` level via a wildcard subscription.
pub fn attach_event_logger(bus: &EventBus) -> SubscriptionId {
    bus.on_all(|event| {
        tracing::debug!(kind = ?event.kind(), "bus event");
        Ok(())
    })
}
