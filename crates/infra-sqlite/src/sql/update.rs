// Partial-Update Builder
// Translates an ordered field subset into a parameterized SET fragment.

use jobboard_core::error::{AppError, Result};

use super::SqlParam;

/// Public-name to storage-column overrides for the jobs table.
/// Names not listed pass through unchanged (identity default).
pub const JOB_COLUMNS: &[(&str, &str)] = &[("companyHandle", "company_handle")];

/// A SET fragment plus its ordered bind values
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub clause: String,
    pub params: Vec<SqlParam>,
}

/// Build the SET fragment for a partial update.
///
/// Each supplied field emits one `column = ?N` assignment; placeholders
/// are numbered sequentially from ?1 in the order fields were supplied.
/// The row identifier is never seen here; the caller appends it as the
/// final parameter. Field names are translated to storage columns through
/// `column_map`.
pub fn build_set_clause(
    fields: Vec<(&str, SqlParam)>,
    column_map: &[(&str, &str)],
) -> Result<SetClause> {
    if fields.is_empty() {
        return Err(AppError::BadRequest("no data to update".to_string()));
    }

    let mut assignments: Vec<String> = Vec::with_capacity(fields.len());
    let mut params: Vec<SqlParam> = Vec::with_capacity(fields.len());

    for (field, value) in fields {
        let column = column_map
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
            .unwrap_or(field);

        params.push(value);
        assignments.push(format!("{} = ?{}", column, params.len()));
    }

    Ok(SetClause {
        clause: assignments.join(", "),
        params,
    })
}
