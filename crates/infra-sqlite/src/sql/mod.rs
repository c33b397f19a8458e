// Structured SQL fragments
//
// Dynamic statement text is always kept separate from bound values:
// builders emit a fragment plus an ordered parameter list, and callers
// bind positionally. Caller-controlled strings never reach the SQL text.

pub mod filter;
pub mod update;

pub use filter::{build_where_clause, WhereClause};
pub use update::{build_set_clause, SetClause, JOB_COLUMNS};

use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A dynamically-typed bind value for builder-produced fragments
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Real(f64),
    Null,
}

/// Bind builder parameters positionally, in the order the builder
/// numbered them
pub(crate) fn bind_params<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    params: &[SqlParam],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    params.iter().fold(query, |q, param| match param {
        SqlParam::Text(v) => q.bind(v.clone()),
        SqlParam::Int(v) => q.bind(*v),
        SqlParam::Real(v) => q.bind(*v),
        SqlParam::Null => q.bind(Option::<i64>::None),
    })
}
