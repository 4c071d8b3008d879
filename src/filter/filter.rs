use super::error::FilterError;
use super::types::{FilterClause, FilterData, FilterOp, FilterOrderInfo, FilterValue, SqlResult};

/// Compiles a validated set of AND-combined clauses into parameterized SQL.
/// Identifiers are validated up front; values only ever travel as `$n`
/// parameters.
pub struct Filter {
    table_name: String,
    clauses: Vec<FilterClause>,
    order: Option<FilterOrderInfo>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        validate_identifier(&table_name)
            .map_err(|_| FilterError::InvalidTableName(table_name.clone()))?;
        Ok(Self {
            table_name,
            clauses: vec![],
            order: None,
            limit: None,
            offset: None,
        })
    }

    pub fn assign(&mut self, data: FilterData) -> Result<&mut Self, FilterError> {
        for clause in &data.clauses {
            validate_identifier(&clause.column)
                .map_err(|_| FilterError::InvalidColumn(clause.column.clone()))?;
        }
        if let Some(order) = &data.order {
            validate_identifier(&order.column)
                .map_err(|_| FilterError::InvalidColumn(order.column.clone()))?;
        }
        if let Some(limit) = data.limit {
            if limit < 0 {
                return Err(FilterError::InvalidLimit("limit must be non-negative".to_string()));
            }
        }
        if let Some(offset) = data.offset {
            if offset < 0 {
                return Err(FilterError::InvalidOffset("offset must be non-negative".to_string()));
            }
        }

        self.clauses = data.clauses;
        self.order = data.order;
        self.limit = data.limit;
        self.offset = data.offset;
        Ok(self)
    }

    pub fn to_sql(&self) -> SqlResult {
        let (where_clause, params) = self.build_where();

        let query = [
            format!("SELECT * FROM \"{}\"", self.table_name),
            if where_clause.is_empty() { String::new() } else { format!("WHERE {}", where_clause) },
            self.build_order_clause(),
            self.build_limit_clause(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        SqlResult { query, params }
    }

    /// COUNT over the same WHERE clause, ignoring order and page window
    pub fn to_count_sql(&self) -> SqlResult {
        let (where_clause, params) = self.build_where();
        let query = if where_clause.is_empty() {
            format!("SELECT COUNT(*) as count FROM \"{}\"", self.table_name)
        } else {
            format!("SELECT COUNT(*) as count FROM \"{}\" WHERE {}", self.table_name, where_clause)
        };
        SqlResult { query, params }
    }

    fn build_where(&self) -> (String, Vec<FilterValue>) {
        let mut params = Vec::with_capacity(self.clauses.len());
        let mut conditions = Vec::with_capacity(self.clauses.len());

        for clause in &self.clauses {
            match clause.op {
                FilterOp::Eq => {
                    params.push(clause.value.clone());
                    conditions.push(format!("\"{}\" = ${}", clause.column, params.len()));
                }
                FilterOp::Contains => {
                    let needle = match &clause.value {
                        FilterValue::Text(s) => s.clone(),
                        FilterValue::Int(i) => i.to_string(),
                        FilterValue::Uuid(u) => u.to_string(),
                    };
                    params.push(FilterValue::Text(format!("%{}%", escape_like(&needle))));
                    conditions.push(format!("\"{}\" LIKE ${}", clause.column, params.len()));
                }
            }
        }

        (conditions.join(" AND "), params)
    }

    fn build_order_clause(&self) -> String {
        match &self.order {
            Some(order) => format!("ORDER BY \"{}\" {}", order.column, order.sort.to_sql()),
            None => String::new(),
        }
    }

    fn build_limit_clause(&self) -> String {
        match (self.limit, self.offset) {
            (Some(l), Some(o)) => format!("LIMIT {} OFFSET {}", l, o),
            (Some(l), None) => format!("LIMIT {}", l),
            _ => String::new(),
        }
    }
}

fn validate_identifier(name: &str) -> Result<(), ()> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(())?;
    if !(first.is_alphabetic() || first == '_') {
        return Err(());
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(());
    }
    Ok(())
}

/// Escape LIKE wildcards so user input matches literally. Postgres treats
/// backslash as the default escape character.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
