//! PostgreSQL-backed store plus database/table bootstrap DDL.

use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

use crate::error::AppError;
use crate::person::Person;
use crate::store::PersonStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl PersonStore for PgStore {
    async fn list(&self) -> Result<Vec<Person>, AppError> {
        let sql = "SELECT id, name FROM person";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Person>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Person>, AppError> {
        let sql = "SELECT id, name FROM person WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Person>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, person: Person) -> Result<Person, AppError> {
        let sql = "INSERT INTO person (name) VALUES ($1) RETURNING id, name";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Person>(sql)
            .bind(&person.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn replace(&self, person: &Person) -> Result<(), AppError> {
        let sql = "UPDATE person SET name = $2 WHERE id = $1";
        tracing::debug!(sql = %sql, id = person.id, "query");
        let result = sqlx::query(sql)
            .bind(person.id)
            .bind(&person.name)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "person {} changed or vanished during update",
                person.id
            )));
        }
        Ok(())
    }

    async fn remove(&self, id: i32) -> Result<(), AppError> {
        let sql = "DELETE FROM person WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "person {} changed or vanished during delete",
                id
            )));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let sql = "SELECT EXISTS(SELECT 1 FROM person WHERE id = $1)";
        tracing::debug!(sql = %sql, id, "query");
        let exists: (bool,) = sqlx::query_as(sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists.0)
    }
}

/// Create the `person` table if it is not already present. Idempotent;
/// called once at startup before the listener binds.
pub async fn ensure_person_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS person (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
