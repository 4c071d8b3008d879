use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{self, FromRow, PgPool, Row};

use crate::database::DatabaseError;
use crate::filter::{Filter, FilterData, FilterValue};

/// Runs a `Filter` against the pool, binding its typed parameters.
pub struct QueryBuilder<T> {
    filter: Filter,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        let filter = Filter::new(table_name).map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        Ok(Self {
            filter,
            _phantom: std::marker::PhantomData,
        })
    }

    pub fn filter(mut self, filter_data: FilterData) -> Result<Self, DatabaseError> {
        self.filter
            .assign(filter_data)
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        Ok(self)
    }

    pub async fn select_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.filter.to_sql();
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn select_optional(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        let sql_result = self.filter.to_sql();
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let row = q.fetch_optional(pool).await?;
        Ok(row)
    }

    pub async fn count(self, pool: &PgPool) -> Result<i64, DatabaseError> {
        let sql_result = self.filter.to_count_sql();
        let mut q = sqlx::query(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query(q, p);
        }
        let row = q.fetch_one(pool).await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}

fn bind_param_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &FilterValue,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        FilterValue::Text(s) => q.bind(s.clone()),
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::Uuid(u) => q.bind(*u),
    }
}

fn bind_param_query_as<'q, T>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, T, PgArguments>,
    v: &FilterValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, T, PgArguments> {
    match v {
        FilterValue::Text(s) => q.bind(s.clone()),
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::Uuid(u) => q.bind(*u),
    }
}
