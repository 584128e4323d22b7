use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::{CreatedTeam, NewTeam, RowCount, Team, TeamChanges};

const MISSING_FIELDS: &str = "Missing name or location";
const BLANK_FIELDS: &str = "name and location must not be empty";

fn team_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(id)
}

// POST /api/teams - Create a team
pub async fn create_team(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewTeam>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTeam>), ApiError> {
    let Json(team) = payload.map_err(|_| ApiError::BadRequest(MISSING_FIELDS.to_string()))?;

    if !team.is_complete() {
        return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
    }

    let id = db::insert_team(&pool, &team).await?;

    Ok((StatusCode::CREATED, Json(CreatedTeam { id })))
}

// GET /api/teams - List all teams
pub async fn list_teams(State(pool): State<SqlitePool>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = db::get_all_teams(&pool).await?;

    Ok(Json(teams))
}

// GET /api/teams/:id - Get team by ID
pub async fn get_team(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Team>, ApiError> {
    let team = db::find_team_by_id(&pool, team_id(path)?).await?;

    Ok(Json(team))
}

// PUT /api/teams/:id - Partially update a team
pub async fn update_team(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TeamChanges>, JsonRejection>,
) -> Result<Json<RowCount>, ApiError> {
    let id = team_id(path)?;
    let Json(changes) =
        payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    if changes.has_blank_field() {
        return Err(ApiError::BadRequest(BLANK_FIELDS.to_string()));
    }

    let count = db::update_team(&pool, id, &changes).await?;

    Ok(Json(RowCount { count }))
}

// DELETE /api/teams/:id - Remove a team
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RowCount>, ApiError> {
    let count = db::remove_team(&pool, team_id(path)?).await?;

    Ok(Json(RowCount { count }))
}
