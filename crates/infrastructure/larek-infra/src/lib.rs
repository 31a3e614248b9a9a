pub mod error;
pub mod net;

// Re-exports for convenience
pub use error::ApiError;
pub use net::{OrderDto, ProductDto, ProductListDto, ShopClient};
