use larek_core::{OrderDraft, OrderResult, Product};

/// Boundary to the remote shop API. Implementations live in the
/// infrastructure layer; the outer shell owns any worker-thread hop,
/// so the methods here are plain blocking calls.
pub trait ShopApi: Send + Sync + 'static {
    fn fetch_products(&self) -> anyhow::Result<Vec<Product>>;
    fn submit_order(&self, order: &OrderDraft) -> anyhow::Result<OrderResult>;
}
