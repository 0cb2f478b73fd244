use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

/// Header set by `static/js/app.js` when it swaps a fragment in place
/// instead of navigating.
pub const PARTIAL_HEADER: &str = "x-requested-with";

pub struct Template {
    partial: bool,
}

impl Template {
    /// True when the browser only wants the fragment it is about to swap.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let partial = parts.headers.contains_key(PARTIAL_HEADER);

        Ok(Template { partial })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
