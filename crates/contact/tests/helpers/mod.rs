use std::sync::Mutex;

use async_trait::async_trait;
use pantheo_contact::{ContactInput, Delivery, DeliveryError, TemplateParams};

/// Delivery double answering every call with a fixed reply and keeping the
/// params it received.
pub struct RecordingDelivery {
    reply: Reply,
    pub sent: Mutex<Vec<TemplateParams>>,
}

#[allow(dead_code)]
pub enum Reply {
    Status(u16),
    Transport(&'static str),
}

impl RecordingDelivery {
    pub fn status(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            sent: Mutex::default(),
        }
    }

    #[allow(dead_code)]
    pub fn transport_error(message: &'static str) -> Self {
        Self {
            reply: Reply::Transport(message),
            sent: Mutex::default(),
        }
    }

    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delivery for RecordingDelivery {
    async fn send(&self, params: &TemplateParams) -> Result<u16, DeliveryError> {
        self.sent.lock().unwrap().push(params.clone());

        match self.reply {
            Reply::Status(status) => Ok(status),
            Reply::Transport(message) => Err(anyhow::anyhow!(message).into()),
        }
    }
}

pub fn valid_input() -> ContactInput {
    ContactInput {
        name: "Ana".to_owned(),
        company: "Acme".to_owned(),
        email: "ana@acme.com".to_owned(),
        phone: "11999999999".to_owned(),
        services: vec!["APIs".to_owned()],
        message: String::new(),
    }
}
