use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::error::StoreError;
use crate::models::{NewTeam, Team, TeamChanges};

// Connection setup

/// Open a pool against `database_url`, creating the database file (and its
/// directory) if it does not exist yet.
///
/// In-memory URLs are held to a single long-lived connection so that every
/// query sees the database the schema was applied to.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        if let Some(parent) = options.get_filename().parent() {
            tokio::fs::create_dir_all(parent).await.map_err(sqlx::Error::Io)?;
        }
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Private in-memory database with the schema applied.
///
/// Every connection to `sqlite::memory:` gets its own database, so the pool is
/// pinned to one connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            location TEXT NOT NULL
        )
    "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database migrations complete");
    Ok(())
}

// Team queries

/// Insert a team and return the id assigned by the store.
///
/// Missing fields are bound as NULL; the table's constraints decide whether
/// the row is acceptable.
#[tracing::instrument(skip(pool))]
pub async fn insert_team(pool: &SqlitePool, team: &NewTeam) -> Result<i64, StoreError> {
    let result = sqlx::query(r#"INSERT INTO teams (name, location) VALUES (?, ?)"#)
        .bind(team.name.as_deref())
        .bind(team.location.as_deref())
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(id, "team inserted");
    Ok(id)
}

pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, StoreError> {
    let teams = sqlx::query_as::<_, Team>(r#"SELECT id, name, location FROM teams ORDER BY id"#)
        .fetch_all(pool)
        .await?;

    Ok(teams)
}

#[tracing::instrument(skip(pool))]
pub async fn find_team_by_id(pool: &SqlitePool, id: i64) -> Result<Team, StoreError> {
    sqlx::query_as::<_, Team>(r#"SELECT id, name, location FROM teams WHERE id = ?"#)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound(id))
}

/// Apply a partial update and return the number of rows changed.
///
/// An empty change set is rejected before the store is touched.
#[tracing::instrument(skip(pool))]
pub async fn update_team(
    pool: &SqlitePool,
    id: i64,
    changes: &TeamChanges,
) -> Result<u64, StoreError> {
    if changes.is_empty() {
        return Err(StoreError::EmptyUpdate);
    }

    let result = sqlx::query(
        r#"UPDATE teams
           SET name = COALESCE(?, name),
               location = COALESCE(?, location)
           WHERE id = ?"#,
    )
    .bind(changes.name.as_deref())
    .bind(changes.location.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    match result.rows_affected() {
        0 => Err(StoreError::NotFound(id)),
        count => {
            tracing::debug!(count, "team updated");
            Ok(count)
        }
    }
}

#[tracing::instrument(skip(pool))]
pub async fn remove_team(pool: &SqlitePool, id: i64) -> Result<u64, StoreError> {
    let result = sqlx::query(r#"DELETE FROM teams WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }

    tracing::debug!(id, "team removed");
    Ok(result.rows_affected())
}
