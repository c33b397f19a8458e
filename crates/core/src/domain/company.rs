// Company Domain Model
// Read-only from this layer: a Job references a Company, never the reverse.

use serde::{Deserialize, Serialize};

/// Company entity; `handle` is the primary key a Job references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub num_employees: Option<i64>,
    pub logo_url: Option<String>,
}
