use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::database::models::product::ProductResponse;
use crate::database::repository::ProductRepository;
use crate::error::ApiError;
use crate::filter::{FilterData, FilterValue, SortDirection};
use crate::middleware::auth::AuthUser;
use crate::validation::product::{
    validate_create, validate_product_id, validate_search, validate_update, ProductPayload,
    SearchParams, SearchProducts,
};

const NOT_FOUND_MESSAGE: &str = "product is not found";

/// Paging envelope returned alongside search results
#[derive(Debug, Clone, Serialize)]
pub struct Paging {
    pub page: i64,
    pub total_item: i64,
    pub total_page: i64,
}

impl Paging {
    pub fn new(page: i64, total_item: i64, size: i64) -> Self {
        let total_page = if size > 0 { (total_item + size - 1) / size } else { 0 };
        Self {
            page,
            total_item,
            total_page,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub data: Vec<ProductResponse>,
    pub paging: Paging,
}

/// Product use-cases. Each method validates its input, then runs a single
/// storage interaction scoped to the calling user.
#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: ProductRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        payload: ProductPayload,
    ) -> Result<ProductResponse, ApiError> {
        let product = validate_create(payload)?;
        let stored = self.repo.insert(user.user_id, &product).await?;
        debug!(id = stored.id, "created product");
        Ok(stored.into())
    }

    pub async fn get(&self, user: &AuthUser, raw_id: &str) -> Result<ProductResponse, ApiError> {
        let id = validate_product_id(raw_id)?;
        let product = self
            .repo
            .find_owned(user.user_id, id)
            .await?
            .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;
        Ok(product.into())
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        raw_id: &str,
        payload: ProductPayload,
    ) -> Result<ProductResponse, ApiError> {
        let update = validate_update(raw_id, payload)?;

        if self.repo.count_owned(user.user_id, update.id).await? != 1 {
            return Err(ApiError::not_found(NOT_FOUND_MESSAGE));
        }

        let stored = self.repo.update(&update).await?;
        Ok(stored.into())
    }

    pub async fn remove(&self, user: &AuthUser, raw_id: &str) -> Result<(), ApiError> {
        let id = validate_product_id(raw_id)?;

        // Existence check scoped to the owner and the requested id
        if self.repo.count_owned(user.user_id, id).await? != 1 {
            return Err(ApiError::not_found(NOT_FOUND_MESSAGE));
        }

        self.repo.delete(id).await?;
        debug!(id, "deleted product");
        Ok(())
    }

    pub async fn search(
        &self,
        user: &AuthUser,
        params: SearchParams,
    ) -> Result<SearchResult, ApiError> {
        let search = validate_search(params)?;
        // Saturating keeps absurd page numbers from overflowing the offset
        let skip = (search.page - 1).saturating_mul(search.size);

        let filter = build_search_filter(user.user_id, &search)
            .order_by("id", SortDirection::Asc)
            .page(search.size, skip);

        let rows = self.repo.select(filter.clone()).await?;
        // Total over the same clauses, ignoring the page window
        let total_item = self.repo.count(filter.unpaged()).await?;

        Ok(SearchResult {
            data: rows.into_iter().map(ProductResponse::from).collect(),
            paging: Paging::new(search.page, total_item, search.size),
        })
    }
}

/// Ownership clause first, then AND-combined substring filters for whichever
/// fields were supplied. Every search is scoped to the owner even with no
/// filters at all.
fn build_search_filter(owner: Uuid, search: &SearchProducts) -> FilterData {
    let mut filter = FilterData::default().eq("user_id", FilterValue::Uuid(owner));

    if let Some(name) = &search.name {
        filter = filter.contains("name", name.clone());
    }
    if let Some(description) = &search.description {
        filter = filter.contains("description", description.clone());
    }
    if let Some(price) = &search.price {
        filter = filter.contains("price", price.clone());
    }
    if let Some(stock) = &search.stock {
        filter = filter.contains("stock", stock.clone());
    }
    if let Some(category) = &search.category {
        filter = filter.contains("category", category.clone());
    }

    filter
}
