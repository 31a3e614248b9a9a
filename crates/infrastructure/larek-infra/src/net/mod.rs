//! Blocking HTTP client for the shop API.
//!
//! Two endpoints: `GET /product/` for the catalog and `POST /order/`
//! for submission. Image paths come back relative and are prefixed
//! with the CDN base before they reach the domain model. Requests
//! carry no retry or cancellation; the caller decides how to react to
//! failures.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use larek_core::{OrderDraft, OrderResult, Product};

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub description: String,
    pub image: String,
    pub title: String,
    pub category: String,
    pub price: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListDto {
    pub total: u64,
    pub items: Vec<ProductDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderDto {
    pub payment: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<String>,
}

impl TryFrom<&OrderDraft> for OrderDto {
    type Error = ApiError;

    fn try_from(order: &OrderDraft) -> Result<Self, Self::Error> {
        let payment = order
            .payment
            .ok_or(ApiError::IncompleteOrder("payment method not chosen"))?;
        let total = order
            .total
            .ok_or(ApiError::IncompleteOrder("total not computed"))?;
        Ok(Self {
            payment: payment.as_str().to_string(),
            email: order.email.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            total,
            items: order.items.clone(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct OrderResultDto {
    id: String,
    total: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorDto {
    error: String,
}

pub struct ShopClient {
    base_url: String,
    cdn_url: String,
    http: Client,
}

impl ShopClient {
    pub fn new(base_url: impl Into<String>, cdn_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cdn_url: cdn_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/product/", self.base_url))
            .send()?;
        let list: ProductListDto = decode(resp)?;
        debug!(count = list.items.len(), "catalog fetched");
        Ok(list
            .items
            .into_iter()
            .map(|dto| self.into_product(dto))
            .collect())
    }

    pub fn post_order(&self, order: &OrderDraft) -> Result<OrderResult, ApiError> {
        let dto = OrderDto::try_from(order)?;
        let resp = self
            .http
            .post(format!("{}/order/", self.base_url))
            .json(&dto)
            .send()?;
        let result: OrderResultDto = decode(resp)?;
        debug!(order_id = %result.id, total = result.total, "order accepted");
        Ok(OrderResult {
            id: result.id,
            total: result.total,
        })
    }

    fn into_product(&self, dto: ProductDto) -> Product {
        Product {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            image: format!("{}{}", self.cdn_url, dto.image),
            category: dto.category,
            price: dto.price,
        }
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp
            .json::<ApiErrorDto>()
            .map(|e| e.error)
            .unwrap_or_else(|_| status.to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json()?)
}

impl larek_app_core::ShopApi for ShopClient {
    fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.get_products()?)
    }

    fn submit_order(&self, order: &OrderDraft) -> anyhow::Result<OrderResult> {
        Ok(self.post_order(order)?)
    }
}
