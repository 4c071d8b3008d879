use uuid::Uuid;

/// Comparison operators the query layer supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    /// Substring match, compiled to `LIKE '%needle%'` with wildcards escaped
    Contains,
}

/// A typed SQL parameter. Values bind with their real Postgres type so that
/// uuid and bigint columns compare without casts.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Uuid(Uuid),
}

#[derive(Debug, Clone)]
pub struct FilterClause {
    pub column: String,
    pub op: FilterOp,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOrderInfo {
    pub column: String,
    pub sort: SortDirection,
}

/// Declarative query input consumed by `Filter::assign`. Clauses are always
/// AND-combined.
#[derive(Debug, Clone, Default)]
pub struct FilterData {
    pub clauses: Vec<FilterClause>,
    pub order: Option<FilterOrderInfo>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl FilterData {
    pub fn eq(mut self, column: impl Into<String>, value: FilterValue) -> Self {
        self.clauses.push(FilterClause {
            column: column.into(),
            op: FilterOp::Eq,
            value,
        });
        self
    }

    pub fn contains(mut self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.clauses.push(FilterClause {
            column: column.into(),
            op: FilterOp::Contains,
            value: FilterValue::Text(needle.into()),
        });
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, sort: SortDirection) -> Self {
        self.order = Some(FilterOrderInfo {
            column: column.into(),
            sort,
        });
        self
    }

    pub fn page(mut self, limit: i64, offset: i64) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    /// The same clauses without the page window, for total-count queries
    pub fn unpaged(&self) -> Self {
        Self {
            clauses: self.clauses.clone(),
            order: None,
            limit: None,
            offset: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<FilterValue>,
}
