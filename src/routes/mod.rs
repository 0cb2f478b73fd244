use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use pantheo_contact::Delivery;

use crate::template::{NotFoundTemplate, Template};

pub mod contact;
mod health;
pub mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub delivery: Arc<dyn Delivery>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", axum::routing::post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
