//! Activity feed API and DB helper.

use crate::{
  app::AppState,
  models::{activity::activity_record::ActivityRecord, response::api_msg::ApiMsg},
};
use axum::{Json, response::IntoResponse};
use chrono::Utc;
use tracing::error;

pub async fn list_activity(
  axum::extract::State(state): axum::extract::State<AppState>,
) -> impl IntoResponse {
  let rows: Result<Vec<ActivityRecord>, _> =
    sqlx::query_as("SELECT id, ts, level, message FROM activity ORDER BY id DESC LIMIT 100")
      .fetch_all(&state.db)
      .await;
  match rows {
    Ok(mut records) => {
      records.reverse();
      Json(records).into_response()
    }
    Err(e) => {
      error!("list_activity error: {e}");
      (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMsg {
          msg: "Error fetching activity".into(),
        }),
      )
        .into_response()
    }
  }
}

/// Append a record to the activity feed. Callers treat failures as
/// best-effort; a feed write never fails the surrounding request.
pub async fn record_activity(
  state: &AppState,
  level: &str,
  message: &str,
) -> Result<(), sqlx::Error> {
  sqlx::query("INSERT INTO activity (ts, level, message) VALUES (?, ?, ?)")
    .bind(Utc::now())
    .bind(level)
    .bind(message)
    .execute(&state.db)
    .await?;
  Ok(())
}
