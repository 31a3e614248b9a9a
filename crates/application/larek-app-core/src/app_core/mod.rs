pub mod bus;
pub mod event;
pub mod model;

pub use bus::{attach_event_logger, EventBus, SubscriptionId};
pub use event::{AppEvent, EventFamily, EventFilter, EventKind};
pub use model::{AppModel, ShopState};
