// Filter Builder
// Translates optional search criteria into a parameterized WHERE fragment.

use jobboard_core::domain::JobFilter;
use jobboard_core::error::{AppError, Result};

use super::SqlParam;

/// A WHERE fragment plus its ordered bind values
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub clause: String,
    pub params: Vec<SqlParam>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }
}

/// Build the WHERE fragment for a job search.
///
/// Conditions are evaluated in a fixed order (title, minSalary, hasEquity)
/// and joined with AND; placeholders are numbered sequentially from ?1 in
/// that same order. An empty filter yields an empty fragment and no
/// parameters. Consumers must keep `ORDER BY title ASC` on the final
/// statement.
pub fn build_where_clause(filter: &JobFilter) -> Result<WhereClause> {
    // Reject invalid constraints before any query is issued
    if let Some(min_salary) = filter.min_salary {
        if min_salary < 0 {
            return Err(AppError::BadRequest(format!(
                "minSalary must be non-negative, got {}",
                min_salary
            )));
        }
    }

    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<SqlParam> = Vec::new();

    if let Some(title) = &filter.title {
        // Case-insensitive substring match, wildcard on both ends
        params.push(SqlParam::Text(format!("%{}%", title.to_lowercase())));
        conditions.push(format!("LOWER(title) LIKE ?{}", params.len()));
    }

    if let Some(min_salary) = filter.min_salary {
        params.push(SqlParam::Int(min_salary));
        conditions.push(format!("salary >= ?{}", params.len()));
    }

    // Only a literal true adds the equity condition; false is not
    // translated into "equity must be zero"
    if filter.has_equity == Some(true) {
        params.push(SqlParam::Real(0.0));
        conditions.push(format!("equity > ?{}", params.len()));
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    Ok(WhereClause { clause, params })
}
