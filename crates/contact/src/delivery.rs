use async_trait::async_trait;

use crate::{DeliveryError, TemplateParams};

/// Status code the delivery provider answers with when the email was accepted.
pub const STATUS_OK: u16 = 200;

/// Third-party service that turns template variables into an email.
#[async_trait]
pub trait Delivery: Send + Sync {
    /// Sends the template and returns the status code reported by the
    /// provider. Transport and provider failures come back as errors.
    async fn send(&self, params: &TemplateParams) -> Result<u16, DeliveryError>;
}

/// Sends `params` and folds every outcome other than [`STATUS_OK`] into a
/// [`DeliveryError`].
pub async fn deliver(delivery: &dyn Delivery, params: &TemplateParams) -> Result<(), DeliveryError> {
    match delivery.send(params).await? {
        STATUS_OK => Ok(()),
        status => Err(DeliveryError::Status(status)),
    }
}
