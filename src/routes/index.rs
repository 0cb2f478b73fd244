use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use pantheo_contact::{ContactForm, Notification, SUCCESS_MESSAGE};
use serde::Deserialize;

use crate::components::Button;
use crate::config::Config;
use crate::routes::{AppState, contact::ContactSection};
use crate::template::Template;

/// Client-side handler of the header call to action.
const SCROLL_TO_CONTACT: &str = "document.getElementById('contact').scrollIntoView({behavior: 'smooth'})";

/// Query parameter set by the redirect that follows a delivered plain form post.
pub const DELIVERED_PARAM: &str = "enviado";

#[derive(Deserialize)]
pub struct IndexQuery {
    pub enviado: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub contact: ContactSection,
    pub whatsapp: Button,
    pub cta: Button,
    pub notifications: &'a [Notification],
}

impl<'a> IndexTemplate<'a> {
    pub fn new(config: &Config, form: &ContactForm, notifications: &'a [Notification]) -> Self {
        Self {
            contact: ContactSection::new(form),
            whatsapp: Button::new(
                "Fale no WhatsApp",
                "btn-whatsapp",
                None,
                Some(&config.contact.whatsapp),
            ),
            cta: Button::new("Fale conosco", "btn-primary", Some(SCROLL_TO_CONTACT), None),
            notifications,
        }
    }
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> impl IntoResponse {
    let notifications = match query.enviado {
        Some(_) => vec![Notification::success(SUCCESS_MESSAGE)],
        None => vec![],
    };

    template.render(IndexTemplate::new(
        &app.config,
        &ContactForm::default(),
        &notifications,
    ))
}
