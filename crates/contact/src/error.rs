use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Fields of the contact form, in the order they appear on the page.
#[derive(
    EnumString, Display, VariantArray, AsRefStr, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Services,
    Message,
}

#[derive(EnumString, Display, AsRefStr, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    RequiredField,
    InvalidFormat,
    EmptySelection,
    InvalidOption,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: String,
}

/// Every error found by one validation pass, ordered by [`Field`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
        self.0.sort_by_key(|e| e.field as usize);
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.first() {
            Some(error) => write!(f, "{}", error.message),
            None => write!(f, "no validation errors"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery service answered with status {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(FieldErrors),

    #[error("delivery failed: {0}")]
    DeliveryFailed(#[from] DeliveryError),
}

impl From<FieldErrors> for Error {
    fn from(value: FieldErrors) -> Self {
        Self::Validate(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn error(field: Field, kind: ErrorKind) -> FieldError {
        FieldError {
            field,
            kind,
            message: format!("{field} {kind}"),
        }
    }

    #[test]
    fn test_first_follows_field_order() {
        let mut errors = FieldErrors::default();
        errors.push(error(Field::Services, ErrorKind::EmptySelection));
        errors.push(error(Field::Email, ErrorKind::InvalidFormat));
        errors.push(error(Field::Name, ErrorKind::RequiredField));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.first().map(|e| e.field), Some(Field::Name));
        assert_eq!(
            errors.get(Field::Email).map(|e| e.kind),
            Some(ErrorKind::InvalidFormat)
        );
        assert_eq!(errors.message(Field::Phone), None);
    }

    #[test]
    fn test_field_names_are_snake_case() {
        assert_eq!(Field::Name.as_ref(), "name");
        assert_eq!(Field::Services.as_ref(), "services");
        assert_eq!(ErrorKind::RequiredField.as_ref(), "required_field");
    }
}
