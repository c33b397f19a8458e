// SQLite JobRepository Implementation

use async_trait::async_trait;
use jobboard_core::domain::{Company, Job, JobDetail, JobFilter, JobId, JobPatch, NewJob};
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::JobRepository;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::map_sqlx_error;
use crate::sql::{bind_params, build_set_clause, build_where_clause, SqlParam, JOB_COLUMNS};

const JOB_SELECT_COLUMNS: &str = "id, title, salary, equity, company_handle";

pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn create(&self, input: NewJob) -> Result<Job> {
        input.validate()?;

        let row = sqlx::query_as::<_, JobRow>(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, title, salary, equity, company_handle",
        )
        .bind(&input.title)
        .bind(input.salary)
        .bind(input.equity)
        .bind(&input.company_handle)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(id = row.id, "created job");
        Ok(row.into_job())
    }

    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let built = build_where_clause(filter)?;

        let sql = if built.is_empty() {
            format!("SELECT {} FROM jobs ORDER BY title ASC", JOB_SELECT_COLUMNS)
        } else {
            format!(
                "SELECT {} FROM jobs {} ORDER BY title ASC",
                JOB_SELECT_COLUMNS, built.clause
            )
        };

        let rows = bind_params(sqlx::query_as::<_, JobRow>(&sql), &built.params)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(JobRow::into_job).collect())
    }

    async fn get(&self, id: JobId) -> Result<JobDetail> {
        let job = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, salary, equity, company_handle FROM jobs WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| AppError::NotFound(format!("no job with id {}", id)))?;

        // Second lookup; a concurrent company write between the two reads
        // is accepted as read skew
        let company = sqlx::query_as::<_, CompanyRow>(
            "SELECT handle, name, description, num_employees, logo_url \
             FROM companies WHERE handle = ?1",
        )
        .bind(&job.company_handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| {
            AppError::Database(format!(
                "job {} references missing company {}",
                id, job.company_handle
            ))
        })?;

        Ok(job.into_detail(company.into_company()))
    }

    async fn update(&self, id: JobId, patch: JobPatch) -> Result<Job> {
        patch.validate()?;
        let built = build_set_clause(patch_fields(patch), JOB_COLUMNS)?;

        // Identifier placeholder comes after every patch parameter
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ?{} RETURNING {}",
            built.clause,
            built.params.len() + 1,
            JOB_SELECT_COLUMNS
        );

        let row = bind_params(sqlx::query_as::<_, JobRow>(&sql), &built.params)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| AppError::NotFound(format!("no job with id {}", id)))?;

        debug!(id, "updated job");
        Ok(row.into_job())
    }

    async fn remove(&self, id: JobId) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("no job with id {}", id)));
        }

        debug!(id, "removed job");
        Ok(())
    }
}

/// Patch fields in declaration order, public names (translated to columns
/// by the update builder)
fn patch_fields(patch: JobPatch) -> Vec<(&'static str, SqlParam)> {
    let mut fields = Vec::new();
    if let Some(title) = patch.title {
        fields.push(("title", SqlParam::Text(title)));
    }
    if let Some(salary) = patch.salary {
        fields.push(("salary", SqlParam::Int(salary)));
    }
    if let Some(equity) = patch.equity {
        fields.push(("equity", SqlParam::Real(equity)));
    }
    if let Some(handle) = patch.company_handle {
        fields.push(("companyHandle", SqlParam::Text(handle)));
    }
    fields
}

/// SQLite row representation of a job
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<f64>,
    company_handle: String,
}

impl JobRow {
    fn into_job(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company_handle: self.company_handle,
        }
    }

    fn into_detail(self, company: Company) -> JobDetail {
        JobDetail {
            id: self.id,
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company,
        }
    }
}

/// SQLite row representation of a company
#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    handle: String,
    name: Option<String>,
    description: Option<String>,
    num_employees: Option<i64>,
    logo_url: Option<String>,
}

impl CompanyRow {
    fn into_company(self) -> Company {
        Company {
            handle: self.handle,
            name: self.name,
            description: self.description,
            num_employees: self.num_employees,
            logo_url: self.logo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) VALUES \
             ('acme', 'Acme Corp', 'Makers of everything', 42, 'https://acme.test/logo.png'), \
             ('globex', 'Globex', NULL, NULL, NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    fn backend_engineer() -> NewJob {
        NewJob {
            title: "Backend Engineer".to_string(),
            salary: Some(120_000),
            equity: Some(0.01),
            company_handle: "acme".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_returns_row() {
        let repo = SqliteJobRepository::new(setup_test_db().await);

        let job = repo.create(backend_engineer()).await.unwrap();
        assert!(job.id > 0);
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.salary, Some(120_000));
        assert_eq!(job.equity, Some(0.01));
        assert_eq!(job.company_handle, "acme");
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_bounds_before_io() {
        let repo = SqliteJobRepository::new(setup_test_db().await);

        let mut input = backend_engineer();
        input.salary = Some(-5);
        assert!(repo.create(input).await.unwrap_err().is_bad_request());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_create_unknown_company_is_database_error() {
        let repo = SqliteJobRepository::new(setup_test_db().await);

        let mut input = backend_engineer();
        input.company_handle = "nope".to_string();
        let err = repo.create(input).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_get_embeds_company() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let created = repo.create(backend_engineer()).await.unwrap();

        let detail = repo.get(created.id).await.unwrap();
        assert_eq!(detail.id, created.id);
        assert_eq!(detail.title, "Backend Engineer");
        assert_eq!(detail.company.handle, "acme");
        assert_eq!(detail.company.name.as_deref(), Some("Acme Corp"));
        assert_eq!(detail.company.num_employees, Some(42));
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        assert!(repo.get(9999).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_find_all_orders_by_title() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        for title in ["Zookeeper", "Analyst", "Manager"] {
            let mut input = backend_engineer();
            input.title = title.to_string();
            repo.create(input).await.unwrap();
        }

        let jobs = repo.find_all(&JobFilter::default()).await.unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Analyst", "Manager", "Zookeeper"]);
    }

    #[tokio::test]
    async fn test_find_all_title_filter_case_insensitive() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        for title in ["Backend Engineer", "ENGINEERING Manager", "Designer"] {
            let mut input = backend_engineer();
            input.title = title.to_string();
            repo.create(input).await.unwrap();
        }

        let filter = JobFilter {
            title: Some("eng".to_string()),
            ..Default::default()
        };
        let jobs = repo.find_all(&filter).await.unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Backend Engineer", "ENGINEERING Manager"]);
    }

    #[tokio::test]
    async fn test_find_all_equity_filter() {
        let repo = SqliteJobRepository::new(setup_test_db().await);

        let mut with_equity = backend_engineer();
        with_equity.title = "Founder".to_string();
        with_equity.equity = Some(0.2);
        repo.create(with_equity).await.unwrap();

        let mut zero_equity = backend_engineer();
        zero_equity.title = "Clerk".to_string();
        zero_equity.equity = Some(0.0);
        repo.create(zero_equity).await.unwrap();

        let mut null_equity = backend_engineer();
        null_equity.title = "Temp".to_string();
        null_equity.equity = None;
        repo.create(null_equity).await.unwrap();

        let filter = JobFilter {
            has_equity: Some(true),
            ..Default::default()
        };
        let jobs = repo.find_all(&filter).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Founder");

        // false means "no equity condition", not "equity must be zero"
        let filter = JobFilter {
            has_equity: Some(false),
            ..Default::default()
        };
        assert_eq!(repo.find_all(&filter).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_find_all_negative_min_salary_rejected() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let filter = JobFilter {
            min_salary: Some(-1),
            ..Default::default()
        };
        assert!(repo.find_all(&filter).await.unwrap_err().is_bad_request());
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let created = repo.create(backend_engineer()).await.unwrap();

        let patch = JobPatch {
            salary: Some(500),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap();
        assert_eq!(updated.salary, Some(500));
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.equity, created.equity);
        assert_eq!(updated.company_handle, created.company_handle);
    }

    #[tokio::test]
    async fn test_update_company_handle_via_public_name() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let created = repo.create(backend_engineer()).await.unwrap();

        let patch = JobPatch {
            company_handle: Some("globex".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap();
        assert_eq!(updated.company_handle, "globex");
    }

    #[tokio::test]
    async fn test_update_empty_patch_is_bad_request() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let created = repo.create(backend_engineer()).await.unwrap();

        let err = repo.update(created.id, JobPatch::default()).await.unwrap_err();
        assert!(err.is_bad_request());
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let patch = JobPatch {
            salary: Some(1),
            ..Default::default()
        };
        assert!(repo.update(9999, patch).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_remove_then_get_is_not_found() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let created = repo.create(backend_engineer()).await.unwrap();

        repo.remove(created.id).await.unwrap();
        assert!(repo.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_not_found() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        assert!(repo.remove(9999).await.unwrap_err().is_not_found());
    }
}
