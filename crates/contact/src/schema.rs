use std::{borrow::Cow, str::FromStr};

use serde::Deserialize;
use strum::VariantArray;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::{ErrorKind, Field, FieldError, FieldErrors, Service, Submission};

/// Raw contact form values as posted by the browser.
#[derive(Validate, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactInput {
    #[validate(custom(function = "validate_name"))]
    #[serde(default)]
    pub name: String,
    #[validate(custom(function = "validate_company"))]
    #[serde(default)]
    pub company: String,
    #[validate(custom(function = "validate_email"))]
    #[serde(default)]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    #[serde(default)]
    pub phone: String,
    #[validate(custom(function = "validate_services"))]
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    /// Checks every rule at once and returns either the normalized
    /// submission or all field errors.
    pub fn validate_submission(&self) -> Result<Submission, FieldErrors> {
        if let Err(errors) = self.validate() {
            return Err(FieldErrors::from(&errors));
        }

        Ok(self.normalize())
    }

    fn normalize(&self) -> Submission {
        let mut services: Vec<Service> = Vec::with_capacity(self.services.len());
        for service in self.services.iter().filter_map(|s| Service::from_str(s).ok()) {
            if !services.contains(&service) {
                services.push(service);
            }
        }

        let message = self.message.trim();

        Submission {
            name: self.name.trim().to_owned(),
            company: self.company.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            services,
            message: (!message.is_empty()).then(|| message.to_owned()),
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(value: &ValidationErrors) -> Self {
        let field_errors = value.field_errors();
        let mut errors = FieldErrors::default();

        for field in Field::VARIANTS {
            let name: &str = field.as_ref();
            let Some(error) = field_errors
                .get(name)
                .and_then(|errors| errors.first())
            else {
                continue;
            };

            let Ok(kind) = ErrorKind::from_str(&error.code) else {
                tracing::warn!(field = %field, code = %error.code, "unknown validation code");
                continue;
            };

            errors.push(FieldError {
                field: *field,
                kind,
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            });
        }

        errors
    }
}

fn error(kind: ErrorKind, message: &'static str) -> ValidationError {
    ValidationError::new(kind.into()).with_message(Cow::Borrowed(message))
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error(ErrorKind::RequiredField, message));
    }

    Ok(())
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    required(value, "Nome é obrigatório")
}

fn validate_company(value: &str) -> Result<(), ValidationError> {
    required(value, "Nome da empresa é obrigatório")
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    required(value, "Telefone é obrigatório")
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    required(value, "Email é obrigatório")?;

    let value = value.trim();
    if !value.validate_email() || !has_dotted_domain(value) {
        return Err(error(ErrorKind::InvalidFormat, "Email inválido"));
    }

    Ok(())
}

/// Intranet-style hosts such as `ana@acme` are not accepted.
fn has_dotted_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.split_once('.'))
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn validate_services(value: &[String]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error(
            ErrorKind::EmptySelection,
            "Selecione pelo menos um serviço",
        ));
    }

    if value.iter().any(|s| Service::from_str(s).is_err()) {
        return Err(error(ErrorKind::InvalidOption, "Serviço inválido"));
    }

    Ok(())
}
