//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use pantheo::{
    AppState, Config,
    config::{ContactConfig, EmailJsConfig, LoggingConfig, ServerConfig},
};
use pantheo_contact::{Delivery, DeliveryError, TemplateParams};
use tower::ServiceExt;

pub const WHATSAPP: &str = "5511999999999";

/// Delivery double answering every call with a fixed status and keeping
/// the params it received.
pub struct RecordingDelivery {
    status: Option<u16>,
    sent: Mutex<Vec<TemplateParams>>,
}

impl RecordingDelivery {
    pub fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status: Some(status),
            sent: Mutex::default(),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            status: None,
            sent: Mutex::default(),
        })
    }

    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delivery for RecordingDelivery {
    async fn send(&self, params: &TemplateParams) -> Result<u16, DeliveryError> {
        self.sent.lock().unwrap().push(params.clone());

        self.status
            .ok_or_else(|| anyhow::anyhow!("connection refused").into())
    }
}

pub fn config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        emailjs: EmailJsConfig {
            endpoint: endpoint.to_owned(),
            service_id: "service_test".to_owned(),
            template_id: "contact_form".to_owned(),
            public_key: "public_test".to_owned(),
            private_key: None,
        },
        contact: ContactConfig {
            whatsapp: WHATSAPP.to_owned(),
        },
        logging: LoggingConfig::default(),
    }
}

pub fn app(delivery: Arc<RecordingDelivery>) -> Router {
    pantheo::server::app(AppState {
        config: config("http://127.0.0.1:9/api/v1.0/email/send"),
        delivery,
    })
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<Response<Body>> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    Ok(app.oneshot(request).await?)
}

/// Posts the form the way `static/js/app.js` does when `partial` is set,
/// otherwise as a plain browser form submission.
pub async fn post_contact(
    app: Router,
    fields: &[(&str, &str)],
    partial: bool,
) -> anyhow::Result<Response<Body>> {
    let mut request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if partial {
        request = request.header("X-Requested-With", "fetch");
    }

    let request = request.body(Body::from(serde_urlencoded::to_string(fields)?))?;

    Ok(app.oneshot(request).await?)
}

pub async fn body_text(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ana"),
        ("company", "Acme"),
        ("email", "ana@acme.com"),
        ("phone", "11999999999"),
        ("services", "APIs"),
        ("message", ""),
    ]
}
