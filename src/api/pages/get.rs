use actix_web::{web::Path, HttpResponse};
use serde::Deserialize;

use crate::{api::models::error::APIError, content};

pub async fn pages() -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(&content::PAGES[..]))
}

#[derive(Deserialize)]
pub struct PathInfo {
    slug: String,
}

pub async fn page(path: Path<PathInfo>) -> Result<HttpResponse, APIError> {
    let page = content::page(&path.slug).ok_or(APIError::NotFound)?;

    Ok(HttpResponse::Ok().json(page))
}
