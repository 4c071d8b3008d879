use serde::Deserialize;

use super::{optional_string, parse_positive_id, require_string, FieldViolation};
use crate::error::ApiError;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 100;
pub const PRICE_MAX_CHARS: usize = 200;
pub const STOCK_MAX_CHARS: usize = 20;
pub const CATEGORY_MAX_CHARS: usize = 20;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_SIZE: i64 = 10;
pub const MAX_SIZE: i64 = 100;

/// Raw create/update body as deserialized. Everything is optional here;
/// requiredness is a validation concern so that missing fields surface as
/// violations instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub category: Option<String>,
}

/// Normalized create request
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: String,
    pub category: String,
}

/// Normalized update request; id comes from the path
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: String,
    pub category: String,
}

/// Raw search query string. page/size arrive as strings and are coerced
/// during validation, like the rest of the query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub category: Option<String>,
}

/// Normalized search request with pagination defaults applied
#[derive(Debug, Clone)]
pub struct SearchProducts {
    pub page: i64,
    pub size: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub category: Option<String>,
}

pub fn validate_create(payload: ProductPayload) -> Result<CreateProduct, ApiError> {
    let mut violations = Vec::new();

    let name = require_string("name", payload.name, NAME_MAX_CHARS, &mut violations);
    let description =
        optional_string("description", payload.description, DESCRIPTION_MAX_CHARS, &mut violations);
    let price = require_string("price", payload.price, PRICE_MAX_CHARS, &mut violations);
    let stock = require_string("stock", payload.stock, STOCK_MAX_CHARS, &mut violations);
    let category = require_string("category", payload.category, CATEGORY_MAX_CHARS, &mut violations);

    match (name, price, stock, category) {
        (Some(name), Some(price), Some(stock), Some(category)) => Ok(CreateProduct {
            name,
            description,
            price,
            stock,
            category,
        }),
        _ => Err(ApiError::validation(violations)),
    }
}

/// Path identifier for get and remove: a single positive integer
pub fn validate_product_id(raw: &str) -> Result<i64, ApiError> {
    parse_positive_id(raw).ok_or_else(|| {
        ApiError::validation(vec![FieldViolation::new("id", "must be a positive integer")])
    })
}

pub fn validate_update(raw_id: &str, payload: ProductPayload) -> Result<UpdateProduct, ApiError> {
    let mut violations = Vec::new();

    let id = parse_positive_id(raw_id);
    if id.is_none() {
        violations.push(FieldViolation::new("id", "must be a positive integer"));
    }

    let name = require_string("name", payload.name, NAME_MAX_CHARS, &mut violations);
    let description =
        optional_string("description", payload.description, DESCRIPTION_MAX_CHARS, &mut violations);
    let price = require_string("price", payload.price, PRICE_MAX_CHARS, &mut violations);
    let stock = require_string("stock", payload.stock, STOCK_MAX_CHARS, &mut violations);
    let category = require_string("category", payload.category, CATEGORY_MAX_CHARS, &mut violations);

    match (id, name, price, stock, category) {
        (Some(id), Some(name), Some(price), Some(stock), Some(category)) => Ok(UpdateProduct {
            id,
            name,
            description,
            price,
            stock,
            category,
        }),
        _ => Err(ApiError::validation(violations)),
    }
}

pub fn validate_search(params: SearchParams) -> Result<SearchProducts, ApiError> {
    let mut violations = Vec::new();

    let page = match non_empty(params.page).as_deref() {
        None => DEFAULT_PAGE,
        Some(raw) => match raw.parse::<i64>() {
            Ok(page) if page >= 1 => page,
            _ => {
                violations.push(FieldViolation::new("page", "must be a positive integer"));
                DEFAULT_PAGE
            }
        },
    };

    let size = match non_empty(params.size).as_deref() {
        None => DEFAULT_SIZE,
        Some(raw) => match raw.parse::<i64>() {
            Ok(size) if (1..=MAX_SIZE).contains(&size) => size,
            _ => {
                violations.push(FieldViolation::new(
                    "size",
                    format!("must be an integer between 1 and {}", MAX_SIZE),
                ));
                DEFAULT_SIZE
            }
        },
    };

    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    Ok(SearchProducts {
        page,
        size,
        name: non_empty(params.name),
        description: non_empty(params.description),
        price: non_empty(params.price),
        stock: non_empty(params.stock),
        category: non_empty(params.category),
    })
}

/// Empty query-string values (e.g. `?name=`) count as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
