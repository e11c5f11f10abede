//! In-process stand-in for the FakeREST Books/Authors API.
//!
//! Serves the same seeded dataset and problem-details error shapes as the
//! hosted service so the client suites can run without network access.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const BOOK_COUNT: i32 = 200;
pub const AUTHORS_PER_BOOK: i32 = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub page_count: i32,
    pub excerpt: Option<String>,
    pub publish_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub id: i32,
    pub id_book: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A stored resource keyed by its integer id.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> i32;
}

impl Record for Book {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for Author {
    fn id(&self) -> i32 {
        self.id
    }
}

pub type Table<M> = Arc<RwLock<BTreeMap<i32, M>>>;

pub fn seed_book(id: i32) -> Book {
    Book {
        id,
        title: Some(format!("Book {id}")),
        description: Some(format!("Description of Book {id}")),
        page_count: id * 100,
        excerpt: Some(format!("Excerpt of Book {id}")),
        publish_date: Some("2025-10-19T00:00:00Z".to_string()),
    }
}

pub fn seed_author(id: i32) -> Author {
    Author {
        id,
        id_book: (id - 1) / AUTHORS_PER_BOOK + 1,
        first_name: Some(format!("First Name {id}")),
        last_name: Some(format!("Last Name {id}")),
    }
}

fn table<M: Record>(records: impl IntoIterator<Item = M>) -> Table<M> {
    let rows = records.into_iter().map(|r| (r.id(), r)).collect();
    Arc::new(RwLock::new(rows))
}

/// Router over a freshly seeded dataset. Every call owns its own state.
pub fn app() -> Router {
    let books = table((1..=BOOK_COUNT).map(seed_book));
    let authors = table((1..=BOOK_COUNT * AUTHORS_PER_BOOK).map(seed_author));
    resource("/api/v1/Books", books)
        .merge(resource("/api/v1/Authors", authors))
        .layer(TraceLayer::new_for_http())
}

fn resource<M: Record>(path: &str, table: Table<M>) -> Router {
    Router::new()
        .route(path, get(list::<M>).post(create::<M>))
        .route(
            &format!("{path}/{{id}}"),
            get(fetch::<M>).put(update::<M>).delete(remove::<M>),
        )
        .with_state(table)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// RFC 7807 problem-details body, shaped like the hosted service's.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl Problem {
    pub fn not_found() -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.5.5",
            title: "Not Found",
            status: StatusCode::NOT_FOUND.as_u16(),
            trace_id: trace_id(),
            errors: None,
        }
    }

    pub fn validation(field: &str, message: String) -> Self {
        let mut errors = serde_json::Map::new();
        errors.insert(field.to_string(), serde_json::json!([message]));
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.5.1",
            title: "One or more validation errors occurred.",
            status: StatusCode::BAD_REQUEST.as_u16(),
            trace_id: trace_id(),
            errors: Some(serde_json::Value::Object(errors)),
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json; charset=utf-8")],
            Json(self),
        )
            .into_response()
    }
}

/// W3C trace-context style id: `00-<32 hex>-<16 hex>-00`.
fn trace_id() -> String {
    let span = Uuid::new_v4().simple().to_string();
    format!("00-{}-{}-00", Uuid::new_v4().simple(), &span[..16])
}

fn parse_id(raw: &str) -> Result<i32, Problem> {
    raw.parse()
        .map_err(|_| Problem::validation("id", format!("The value '{raw}' is not valid.")))
}

fn check_body_id<M: Record>(input: &M) -> Result<(), Problem> {
    if input.id() < 0 {
        return Err(Problem::validation(
            "id",
            format!("The field id must be non-negative, got {}.", input.id()),
        ));
    }
    Ok(())
}

async fn list<M: Record>(State(table): State<Table<M>>) -> Json<Vec<M>> {
    let rows = table.read().await;
    Json(rows.values().cloned().collect())
}

async fn fetch<M: Record>(
    State(table): State<Table<M>>,
    Path(raw): Path<String>,
) -> Result<Json<M>, Problem> {
    let id = parse_id(&raw)?;
    let rows = table.read().await;
    rows.get(&id).cloned().map(Json).ok_or_else(Problem::not_found)
}

async fn create<M: Record>(
    State(table): State<Table<M>>,
    Json(input): Json<M>,
) -> Result<Json<M>, Problem> {
    check_body_id(&input)?;
    table.write().await.insert(input.id(), input.clone());
    Ok(Json(input))
}

async fn update<M: Record>(
    State(table): State<Table<M>>,
    Path(raw): Path<String>,
    Json(input): Json<M>,
) -> Result<Json<M>, Problem> {
    let id = parse_id(&raw)?;
    check_body_id(&input)?;
    if input.id() != id {
        return Err(Problem::validation(
            "id",
            format!("The id in the body ({}) does not match the id in the path ({id}).", input.id()),
        ));
    }
    table.write().await.insert(id, input.clone());
    Ok(Json(input))
}

async fn remove<M: Record>(
    State(table): State<Table<M>>,
    Path(raw): Path<String>,
) -> Result<StatusCode, Problem> {
    let id = parse_id(&raw)?;
    let mut rows = table.write().await;
    rows.remove(&id).map(|_| StatusCode::OK).ok_or_else(Problem::not_found)
}
