//! In-process stand-in for the itens REST API.
//!
//! Mirrors the consumed API's contract under `/api`: list and get answer
//! 200 with JSON bodies, create answers 201 with a `Location` path relative
//! to the API root, update and delete answer 204. DTOs are defined locally
//! rather than reusing the client's so the tests catch schema drift.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

#[derive(Clone, Serialize, Deserialize)]
struct StoredItem {
    id: u32,
    nome: String,
    descricao: String,
}

#[derive(Deserialize)]
struct NovoItem {
    nome: String,
    descricao: String,
}

#[derive(Default)]
struct Db {
    itens: Vec<StoredItem>,
    next_id: u32,
}

type SharedDb = Arc<RwLock<Db>>;

/// A conforming API double.
pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db {
        itens: Vec::new(),
        next_id: 1,
    }));
    Router::new()
        .route("/api/itens", get(list_itens).post(create_item))
        .route(
            "/api/itens/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

/// An API double that violates the contract: the list body is not JSON,
/// create answers 201 without a `Location` header, get answers 502, and
/// update/delete answer 200 instead of 204.
pub fn misbehaving_app() -> Router {
    Router::new()
        .route(
            "/api/itens",
            get(|| async { "oops" }).post(|| async { StatusCode::CREATED }),
        )
        .route(
            "/api/itens/{id}",
            get(|| async { StatusCode::BAD_GATEWAY })
                .put(|| async { StatusCode::OK })
                .delete(|| async { StatusCode::OK }),
        )
}

/// Serve `router` on a random loopback port in a background task and
/// return the base URL to point an `ItensClient` at.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn list_itens(State(db): State<SharedDb>) -> Json<Vec<StoredItem>> {
    Json(db.read().await.itens.clone())
}

async fn get_item(
    State(db): State<SharedDb>,
    Path(id): Path<u32>,
) -> Result<Json<StoredItem>, StatusCode> {
    let db = db.read().await;
    db.itens
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_item(
    State(db): State<SharedDb>,
    Json(input): Json<NovoItem>,
) -> impl IntoResponse {
    let mut db = db.write().await;
    let item = StoredItem {
        id: db.next_id,
        nome: input.nome,
        descricao: input.descricao,
    };
    db.next_id += 1;
    db.itens.push(item.clone());
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/itens/{}", item.id))],
        Json(item),
    )
}

async fn update_item(
    State(db): State<SharedDb>,
    Path(id): Path<u32>,
    Json(input): Json<StoredItem>,
) -> StatusCode {
    let mut db = db.write().await;
    match db.itens.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.nome = input.nome;
            item.descricao = input.descricao;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_item(State(db): State<SharedDb>, Path(id): Path<u32>) -> StatusCode {
    let mut db = db.write().await;
    let before = db.itens.len();
    db.itens.retain(|item| item.id != id);
    if db.itens.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
