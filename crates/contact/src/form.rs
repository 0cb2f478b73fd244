use strum::{AsRefStr, Display};

use crate::{
    ContactInput, Delivery, Error, Field, FieldErrors, Notification, Notifier, Result, Submission,
    deliver,
};

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso!";
pub const FAILURE_MESSAGE: &str = "Erro ao enviar a mensagem. Tente novamente.";
pub const SUBMIT_LABEL: &str = "Enviar";
pub const SUBMITTING_LABEL: &str = "Enviando...";

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    SubmitSucceeded,
    SubmitFailed,
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent.
    Rejected,
    Delivered,
    Failed,
}

/// One contact form session: the values being edited, the inline errors of
/// the last submit attempt and the submission state.
#[derive(Default, Clone, Debug)]
pub struct ContactForm {
    input: ContactInput,
    errors: FieldErrors,
    state: FormState,
    transitions: Vec<FormState>,
}

impl From<ContactInput> for ContactForm {
    fn from(input: ContactInput) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }
}

impl ContactForm {
    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// States entered by the last [`ContactForm::submit`] call, in order.
    pub fn transitions(&self) -> &[FormState] {
        &self.transitions
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.input.name,
            Field::Company => &self.input.company,
            Field::Email => &self.input.email,
            Field::Phone => &self.input.phone,
            Field::Message => &self.input.message,
            Field::Services => "",
        }
    }

    /// Replaces the value of a text field. The service selection only changes
    /// through [`ContactForm::toggle_service`].
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.input.name = value,
            Field::Company => self.input.company = value,
            Field::Email => self.input.email = value,
            Field::Phone => self.input.phone = value,
            Field::Message => self.input.message = value,
            Field::Services => {}
        }
    }

    pub fn services(&self) -> &[String] {
        &self.input.services
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.input.services.iter().any(|s| s == label)
    }

    pub fn toggle_service(&mut self, label: &str) {
        if self.is_selected(label) {
            self.input.services.retain(|s| s != label);
        } else {
            self.input.services.push(label.to_owned());
        }
    }

    pub fn reset(&mut self) {
        self.input = ContactInput::default();
        self.errors = FieldErrors::default();
    }

    fn transition(&mut self, next: FormState) {
        tracing::debug!(from = %self.state, to = %next, "contact form transition");
        self.state = next;
        self.transitions.push(next);
    }

    async fn try_submit(&mut self, delivery: &dyn Delivery) -> Result<Submission> {
        let submission = self.input.validate_submission()?;

        self.errors = FieldErrors::default();
        self.transition(FormState::Submitting);

        if let Err(err) = deliver(delivery, &submission.template_params()).await {
            self.transition(FormState::SubmitFailed);
            return Err(err.into());
        }

        self.transition(FormState::SubmitSucceeded);

        Ok(submission)
    }

    /// Validates the current values and, when they are well formed, sends
    /// them through `delivery`. Every path reports to `notifier` and leaves
    /// the form [`FormState::Idle`].
    pub async fn submit(
        &mut self,
        delivery: &dyn Delivery,
        notifier: &mut impl Notifier,
    ) -> SubmitOutcome {
        self.transitions.clear();

        let outcome = match self.try_submit(delivery).await {
            Ok(submission) => {
                tracing::info!(services = %submission.services_label(), "contact form delivered");
                notifier.notify(Notification::success(SUCCESS_MESSAGE));
                self.reset();

                SubmitOutcome::Delivered
            }
            Err(Error::Validate(errors)) => {
                if let Some(error) = errors.first() {
                    tracing::debug!(field = %error.field, kind = %error.kind, "contact form rejected");
                    notifier.notify(Notification::error(error.message.to_owned()));
                }
                self.errors = errors;

                SubmitOutcome::Rejected
            }
            Err(err @ Error::DeliveryFailed(_)) => {
                tracing::error!("{err}");
                notifier.notify(Notification::error(FAILURE_MESSAGE));

                SubmitOutcome::Failed
            }
        };

        if self.state != FormState::Idle {
            self.transition(FormState::Idle);
        }

        outcome
    }
}
