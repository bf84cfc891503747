//! Product catalog route handlers.

use std::num::NonZeroUsize;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use game_haven_core::{CatalogPage, PagingInfo, Product, ProductId, ProductSource, catalog};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Catalog listing query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub page: Option<usize>,
}

/// Paging metadata as exposed over the API.
#[derive(Debug, Serialize)]
pub struct PagingView {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl From<PagingInfo> for PagingView {
    fn from(info: PagingInfo) -> Self {
        Self {
            current_page: info.current_page,
            items_per_page: info.items_per_page,
            total_items: info.total_items,
            total_pages: info.total_pages(),
        }
    }
}

/// One page of products as exposed over the API.
#[derive(Serialize)]
pub struct ProductListResponse<'a> {
    pub products: Vec<&'a Product>,
    pub paging: PagingView,
    pub category: Option<String>,
}

impl<'a> From<CatalogPage<'a>> for ProductListResponse<'a> {
    fn from(page: CatalogPage<'a>) -> Self {
        Self {
            products: page.products,
            paging: page.paging.into(),
            category: page.category,
        }
    }
}

/// List one page of the catalog, optionally filtered by category.
///
/// `page` defaults to 1; an explicit `page=0` is rejected rather than
/// silently clamped. An empty `category` parameter means "no filter".
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Response> {
    let page = NonZeroUsize::new(query.page.unwrap_or(1))
        .ok_or_else(|| AppError::BadRequest("page must be at least 1".to_string()))?;
    let category = query.category.as_deref().filter(|c| !c.is_empty());

    let result = catalog::page(
        state.catalog().products(),
        category,
        page,
        state.config().page_size,
    );

    Ok(Json(ProductListResponse::from(result)).into_response())
}

/// Show one product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(product).into_response())
}

/// Serve a product's image bytes with its stored MIME type.
#[instrument(skip(state))]
pub async fn image(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    let image = product
        .image
        .as_ref()
        .ok_or_else(|| AppError::NotFound(format!("product {id} has no image")))?;

    let content_type = HeaderValue::from_str(&image.mime_type)
        .map_err(|e| AppError::Internal(format!("stored MIME type is not servable: {e}")))?;

    Ok(([(header::CONTENT_TYPE, content_type)], image.data.clone()).into_response())
}
