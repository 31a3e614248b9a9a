pub mod app_core;
pub mod ports;
pub mod wiring;

pub use app_core::*;
pub use ports::ShopApi;
pub use wiring::{load_catalog, wire};
