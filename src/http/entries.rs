//! Entry CRUD handlers.

use crate::{
  app::AppState,
  http::activity::record_activity,
  models::{journal::entry::Entry, response::api_msg::ApiMsg},
};
use axum::{
  Json,
  extract::{Path as AxumPath, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateEntry {
  pub id: Option<String>,
  pub title: String,
  pub description: String,
  pub scheduled_for: DateTime<Utc>,
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntry {
  pub title: Option<String>,
  pub description: Option<String>,
  pub scheduled_for: Option<DateTime<Utc>>,
  pub created_at: Option<DateTime<Utc>>,
}

pub async fn list_entries(State(state): State<AppState>) -> impl IntoResponse {
  let rows: Result<Vec<Entry>, _> = sqlx::query_as(
    "SELECT id, title, description, scheduled_for, created_at FROM entries ORDER BY created_at",
  )
  .fetch_all(&state.db)
  .await;
  match rows {
    Ok(entries) => Json(entries).into_response(),
    Err(e) => {
      error!("list_entries error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMsg {
          msg: "Error fetching entries".into(),
        }),
      )
        .into_response()
    }
  }
}

pub async fn get_entry(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> impl IntoResponse {
  let row = sqlx::query_as::<_, Entry>(
    "SELECT id, title, description, scheduled_for, created_at FROM entries WHERE id = ?",
  )
  .bind(&id)
  .fetch_optional(&state.db)
  .await;
  match row {
    Ok(Some(entry)) => Json(entry).into_response(),
    Ok(None) => (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ApiMsg {
        msg: format!("Error finding entry with id {id}"),
      }),
    )
      .into_response(),
    Err(e) => {
      error!("get_entry error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMsg {
          msg: format!("Error finding entry with id {id}"),
        }),
      )
        .into_response()
    }
  }
}

pub async fn create_entry(
  State(state): State<AppState>,
  Json(req): Json<CreateEntry>,
) -> impl IntoResponse {
  let entry = Entry {
    id: req.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
    title: req.title,
    description: req.description,
    scheduled_for: req.scheduled_for,
    created_at: req.created_at.unwrap_or_else(Utc::now),
  };
  let res = sqlx::query(
    "INSERT INTO entries (id, title, description, scheduled_for, created_at) VALUES (?, ?, ?, ?, ?)",
  )
  .bind(&entry.id)
  .bind(&entry.title)
  .bind(&entry.description)
  .bind(entry.scheduled_for)
  .bind(entry.created_at)
  .execute(&state.db)
  .await;
  match res {
    Ok(_) => {
      record_activity(&state, "INFO", &format!("created entry {}", entry.id))
        .await
        .ok();
      Json(entry).into_response()
    }
    Err(e) => {
      error!("create_entry error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMsg {
          msg: "Error creating entry".into(),
        }),
      )
        .into_response()
    }
  }
}

pub async fn update_entry(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
  Json(req): Json<UpdateEntry>,
) -> impl IntoResponse {
  let mut sets: Vec<&str> = Vec::new();
  if req.title.is_some() {
    sets.push("title = ?");
  }
  if req.description.is_some() {
    sets.push("description = ?");
  }
  if req.scheduled_for.is_some() {
    sets.push("scheduled_for = ?");
  }
  if req.created_at.is_some() {
    sets.push("created_at = ?");
  }

  // An empty patch still acknowledges only when the row exists.
  let res = if sets.is_empty() {
    sqlx::query("UPDATE entries SET id = id WHERE id = ?")
      .bind(&id)
      .execute(&state.db)
      .await
  } else {
    let sql = format!("UPDATE entries SET {} WHERE id = ?", sets.join(", "));
    let mut query = sqlx::query(&sql);
    if let Some(title) = req.title {
      query = query.bind(title);
    }
    if let Some(description) = req.description {
      query = query.bind(description);
    }
    if let Some(scheduled_for) = req.scheduled_for {
      query = query.bind(scheduled_for);
    }
    if let Some(created_at) = req.created_at {
      query = query.bind(created_at);
    }
    query.bind(&id).execute(&state.db).await
  };

  match res {
    Ok(done) if done.rows_affected() > 0 => {
      record_activity(&state, "INFO", &format!("updated entry {id}"))
        .await
        .ok();
      Json(ApiMsg {
        msg: "Updated successfully".into(),
      })
      .into_response()
    }
    Ok(_) => (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ApiMsg {
        msg: "Error updating".into(),
      }),
    )
      .into_response(),
    Err(e) => {
      error!("update_entry error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMsg {
          msg: "Error updating".into(),
        }),
      )
        .into_response()
    }
  }
}

pub async fn delete_entry(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<String>,
) -> impl IntoResponse {
  let res = sqlx::query("DELETE FROM entries WHERE id = ?")
    .bind(&id)
    .execute(&state.db)
    .await;
  match res {
    Ok(done) if done.rows_affected() > 0 => {
      record_activity(&state, "INFO", &format!("deleted entry {id}"))
        .await
        .ok();
      Json(ApiMsg {
        msg: "Deleted successfully".into(),
      })
      .into_response()
    }
    Ok(_) => (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ApiMsg {
        msg: "Error deleting entry".into(),
      }),
    )
      .into_response(),
    Err(e) => {
      error!("delete_entry error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMsg {
          msg: "Error deleting entry".into(),
        }),
      )
        .into_response()
    }
  }
}
