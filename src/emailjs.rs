//! EmailJS REST client used to deliver contact form submissions

use async_trait::async_trait;
use pantheo_contact::{Delivery, DeliveryError, TemplateParams};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::EmailJsConfig;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Delivery service backed by `POST /api/v1.0/email/send`
#[derive(Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: &EmailJsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pantheo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            endpoint = %config.endpoint,
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS delivery initialized"
        );

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl Delivery for EmailJs {
    async fn send(&self, params: &TemplateParams) -> Result<u16, DeliveryError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
            access_token: self.config.private_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.into()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status, body = %body, "EmailJS rejected the request");
        }

        Ok(status)
    }
}
