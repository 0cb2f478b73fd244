use serde::Serialize;

use crate::Service;

/// Placeholder sent to the delivery service when no message was written.
pub const DEFAULT_MESSAGE: &str = "Sem mensagem";

/// A validated contact request. Text fields are trimmed, services hold no
/// duplicates and keep the order in which they were selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<Service>,
    pub message: Option<String>,
}

impl Submission {
    pub fn services_label(&self) -> String {
        self.services
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.to_owned(),
            company: self.company.to_owned(),
            email: self.email.to_owned(),
            phone: self.phone.to_owned(),
            services: self.services_label(),
            message: self
                .message
                .to_owned()
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned()),
        }
    }
}

/// Variables expected by the email template of the delivery provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub services: String,
    pub message: String,
}

impl From<&Submission> for TemplateParams {
    fn from(value: &Submission) -> Self {
        value.template_params()
    }
}
