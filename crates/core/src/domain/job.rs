// Job Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::Company;
use crate::error::{AppError, Result};

/// Job identifier (store-generated, assigned exactly once at creation)
pub type JobId = i64;

/// Job entity as persisted
///
/// `salary` and `equity` are nullable columns; `company_handle` references
/// an existing Company (referential integrity enforced by the store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub company_handle: String,
}

/// Creation payload; the store assigns `id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<f64>,
    pub company_handle: String,
}

impl NewJob {
    /// Reject out-of-bounds numeric fields before any I/O
    pub fn validate(&self) -> Result<()> {
        check_bounds(self.salary, self.equity)
    }
}

/// Partial-update payload; absent fields are left untouched
///
/// `id` is never patchable; `company_handle` changes only when explicitly
/// supplied here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub company_handle: Option<String>,
}

impl JobPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.salary.is_none()
            && self.equity.is_none()
            && self.company_handle.is_none()
    }

    /// Reject out-of-bounds numeric fields before any I/O
    pub fn validate(&self) -> Result<()> {
        check_bounds(self.salary, self.equity)
    }
}

/// Search criteria for job listings; empty filter means "no filter"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub title: Option<String>,
    pub min_salary: Option<i64>,
    pub has_equity: Option<bool>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.min_salary.is_none() && self.has_equity.is_none()
    }
}

/// Single-record read shape: the company reference is replaced by the
/// full embedded Company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub company: Company,
}

fn check_bounds(salary: Option<i64>, equity: Option<f64>) -> Result<()> {
    if let Some(salary) = salary {
        if salary < 0 {
            return Err(AppError::BadRequest(format!(
                "salary must be non-negative, got {}",
                salary
            )));
        }
    }
    if let Some(equity) = equity {
        if !(0.0..=1.0).contains(&equity) {
            return Err(AppError::BadRequest(format!(
                "equity must be within [0, 1], got {}",
                equity
            )));
        }
    }
    Ok(())
}
