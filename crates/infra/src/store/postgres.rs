//! Postgres-backed job store.
//!
//! Schema lives in `migrations/` at the workspace root. Uniqueness of
//! `external_id` is enforced by a unique index, so two concurrent creates for
//! the same key race at the database, not here: at most one insert wins.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use jobboard_core::{ExternalId, JobRecord, Location};

use super::{JobStore, StoreError};

const SELECT_COLUMNS: &str = r#"
    id, version, external_id, approach, title, description, organisation,
    location, grade, assignment_type, work_location, working_pattern,
    personal_spec, apply_detail, date_posted, date_closing, profession,
    recruitment_email, summary, benefits, apply_url, salary
"#;

/// SQLx-backed store; thread-safe via the connection pool.
#[derive(Debug, Clone)]
pub struct PostgresJobStore {
    pool: PgPool,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await.map_err(backend)?;
        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .map_err(backend)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl JobStore for PostgresJobStore {
    async fn get(&self, external_id: &ExternalId) -> Result<Option<JobRecord>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM jobs WHERE external_id = $1"
        ))
        .bind(external_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(record_from_row).transpose()
    }

    async fn insert_if_absent(&self, record: JobRecord) -> Result<JobRecord, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO jobs (
                id, version, external_id, approach, title, description, organisation,
                location, grade, assignment_type, work_location, working_pattern,
                personal_spec, apply_detail, date_posted, date_closing, profession,
                recruitment_email, summary, benefits, apply_url, salary
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $21, $22)
            ON CONFLICT (external_id) DO NOTHING
            "#,
        )
        .bind(record.id)
        .bind(record.version as i32)
        .bind(record.external_id.as_str())
        .bind(to_text(&record.approach)?)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.organisation)
        .bind(Json(&record.location))
        .bind(to_text(&record.grade)?)
        .bind(to_text(&record.assignment_type)?)
        .bind(Json(&record.work_location))
        .bind(Json(&record.working_pattern))
        .bind(&record.personal_spec)
        .bind(&record.apply_detail)
        .bind(record.date_posted)
        .bind(record.date_closing)
        .bind(to_text(&record.profession)?)
        .bind(&record.recruitment_email)
        .bind(&record.summary)
        .bind(&record.benefits)
        .bind(&record.apply_url)
        .bind(&record.salary)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(e, record.external_id.as_str()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict(record.external_id.to_string()));
        }
        Ok(record)
    }

    async fn put(&self, record: JobRecord) -> Result<JobRecord, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE jobs SET
                version = $2, approach = $3, title = $4, description = $5,
                organisation = $6, location = $7, grade = $8, assignment_type = $9,
                work_location = $10, working_pattern = $11, personal_spec = $12,
                apply_detail = $13, date_posted = $14, date_closing = $15,
                profession = $16, recruitment_email = $17, summary = $18,
                benefits = $19, apply_url = $20, salary = $21
            WHERE external_id = $1
            "#,
        )
        .bind(record.external_id.as_str())
        .bind(record.version as i32)
        .bind(to_text(&record.approach)?)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.organisation)
        .bind(Json(&record.location))
        .bind(to_text(&record.grade)?)
        .bind(to_text(&record.assignment_type)?)
        .bind(Json(&record.work_location))
        .bind(Json(&record.working_pattern))
        .bind(&record.personal_spec)
        .bind(&record.apply_detail)
        .bind(record.date_posted)
        .bind(record.date_closing)
        .bind(to_text(&record.profession)?)
        .bind(&record.recruitment_email)
        .bind(&record.summary)
        .bind(&record.benefits)
        .bind(&record.apply_url)
        .bind(&record.salary)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(record.external_id.to_string()));
        }
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM jobs ORDER BY external_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.into_iter().map(record_from_row).collect()
    }
}

fn record_from_row(row: PgRow) -> Result<JobRecord, StoreError> {
    Ok(JobRecord {
        id: row.try_get("id").map_err(backend)?,
        version: row.try_get::<i32, _>("version").map_err(backend)? as u32,
        external_id: ExternalId::new(row.try_get::<String, _>("external_id").map_err(backend)?),
        approach: from_text("approach", row.try_get("approach").map_err(backend)?)?,
        title: row.try_get("title").map_err(backend)?,
        description: row.try_get("description").map_err(backend)?,
        organisation: row.try_get("organisation").map_err(backend)?,
        location: row
            .try_get::<Json<Vec<Location>>, _>("location")
            .map_err(backend)?
            .0,
        grade: from_text("grade", row.try_get("grade").map_err(backend)?)?,
        assignment_type: from_text(
            "assignment_type",
            row.try_get("assignment_type").map_err(backend)?,
        )?,
        work_location: row
            .try_get::<Json<Vec<jobboard_core::WorkLocation>>, _>("work_location")
            .map_err(backend)?
            .0,
        working_pattern: row
            .try_get::<Json<Vec<jobboard_core::WorkingPattern>>, _>("working_pattern")
            .map_err(backend)?
            .0,
        personal_spec: row.try_get("personal_spec").map_err(backend)?,
        apply_detail: row.try_get("apply_detail").map_err(backend)?,
        date_posted: row.try_get("date_posted").map_err(backend)?,
        date_closing: row.try_get("date_closing").map_err(backend)?,
        profession: from_text("profession", row.try_get("profession").map_err(backend)?)?,
        recruitment_email: row.try_get("recruitment_email").map_err(backend)?,
        summary: row.try_get("summary").map_err(backend)?,
        benefits: row.try_get("benefits").map_err(backend)?,
        apply_url: row.try_get("apply_url").map_err(backend)?,
        salary: row.try_get("salary").map_err(backend)?,
    })
}

/// Unit enums serialize to their wire string; that string is what we store,
/// keeping the column values and the JSON API vocabulary in lockstep.
fn to_text<T: Serialize>(value: &T) -> Result<String, StoreError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(other) => Err(StoreError::Backend(format!(
            "expected string encoding, got {other}"
        ))),
        Err(e) => Err(StoreError::Backend(e.to_string())),
    }
}

fn from_text<T: DeserializeOwned>(column: &str, raw: String) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::String(raw))
        .map_err(|e| StoreError::Backend(format!("column {column}: {e}")))
}

fn backend(e: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// 23505 is the Postgres unique-violation code; with `ON CONFLICT DO NOTHING`
/// it should not surface, but a schema drift must map to `Conflict`, not 500.
fn map_insert_err(e: sqlx::Error, external_id: &str) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::Conflict(external_id.to_string());
        }
    }
    backend(e)
}
