//! Sample pets API raising every kind of error the layer normalizes

use axum::extract::Path;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use errata_core::{ApplicationError, ErrorClass, HttpException, SubError};
use errata_server::{ValidJson, ValidQuery};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const PET_NOT_FOUND: ErrorClass = ErrorClass::new(StatusCode::NOT_FOUND, "Pet not found", "NotFoundException");

#[derive(Debug, Serialize, Deserialize)]
pub struct Pet {
    pub id: u32,
    pub name: String,
    pub species: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub species: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

pub fn pets_router() -> Router {
    Router::new()
        .route("/pets", get(list_pets).post(create_pet))
        .route("/pets/{id}", get(get_pet).delete(delete_pet))
        .route("/maintenance", get(maintenance))
        .route("/legacy/search", get(legacy_search))
        .route("/legacy/import", get(legacy_import))
        .route("/boom", get(boom))
}

async fn list_pets(ValidQuery(query): ValidQuery<ListQuery>) -> Result<Json<Vec<Pet>>, HttpException> {
    if query.limit.is_some_and(|limit| limit > 100) {
        return Err(HttpException::new(StatusCode::BAD_REQUEST)
            .with_message("limit too large")
            .with_errors([SubError::new("limit", "query", json!(["Must be at most 100."]))]));
    }

    Ok(Json(vec![rex()]))
}

async fn create_pet(ValidJson(pet): ValidJson<NewPet>) -> Result<(StatusCode, Json<Pet>), HttpException> {
    if pet.name.is_empty() {
        return Err(HttpException::new(StatusCode::UNPROCESSABLE_ENTITY)
            .with_messages(json!({"json": {"name": ["Shorter than minimum length 1."]}})));
    }

    Ok((
        StatusCode::CREATED,
        Json(Pet {
            id: 2,
            name: pet.name,
            species: pet.species,
        }),
    ))
}

async fn get_pet(Path(id): Path<String>) -> Result<Json<Pet>, ApplicationError> {
    let id: u32 = id.parse().map_err(|_| {
        ApplicationError::new()
            .with_message("Invalid pet id")
            .with_errors([SubError::new("id", "path", json!(["Not a valid integer."]))])
    })?;

    if id == 1 {
        Ok(Json(rex()))
    } else {
        Err(PET_NOT_FOUND.error().with_reason(format!("no pet with id {id}")))
    }
}

async fn delete_pet(Path(_id): Path<String>) -> HttpException {
    HttpException::new(StatusCode::LOCKED)
        .with_message("pet is being adopted")
        .with_header(HeaderName::from_static("retry-after"), HeaderValue::from_static("120"))
}

async fn maintenance() -> HttpException {
    HttpException::new(StatusCode::SERVICE_UNAVAILABLE)
        .with_header(HeaderName::from_static("x-retry-after"), HeaderValue::from_static("5"))
}

async fn legacy_search() -> HttpException {
    HttpException::new(StatusCode::NOT_FOUND).with_messages(json!({"query": {"age": ["Not a valid integer."]}}))
}

async fn legacy_import() -> HttpException {
    HttpException::new(StatusCode::CONFLICT)
        .with_errors([SubError::new("source", "json", "Already imported")])
        .with_messages(json!({"json": {"source": ["ignored"]}}))
}

async fn boom() -> StatusCode {
    panic!("kennel database unavailable")
}

fn rex() -> Pet {
    Pet {
        id: 1,
        name: "Rex".to_owned(),
        species: "dog".to_owned(),
    }
}
