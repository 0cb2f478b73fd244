use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::Form;
use pantheo_contact::{
    ContactForm, ContactInput, Field as FormField, Notification, SUBMITTING_LABEL, Service,
    SubmitOutcome,
};
use strum::VariantArray;

use crate::{
    components::{Button, Field},
    routes::{
        AppState,
        index::{DELIVERED_PARAM, IndexTemplate},
    },
    template::Template,
};

pub struct ServiceOption {
    pub label: &'static str,
    pub checked: bool,
}

/// The contact form as rendered for one [`ContactForm`] session.
#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactSection {
    pub fields: Vec<Field>,
    pub services: Vec<ServiceOption>,
    pub services_error: Option<String>,
    pub message: String,
    pub submit: Button,
    pub submitting_label: &'static str,
}

impl ContactSection {
    pub fn new(form: &ContactForm) -> Self {
        let fields = vec![
            Field::text(FormField::Name, "Nome", "text", "Digite seu nome", form),
            Field::text(
                FormField::Company,
                "Nome da empresa",
                "text",
                "Digite o nome da empresa",
                form,
            ),
            Field::text(FormField::Email, "Email", "email", "Digite seu email", form),
            Field::text(FormField::Phone, "Telefone", "text", "DDD + Número", form),
        ];

        let services = Service::VARIANTS
            .iter()
            .map(|service| ServiceOption {
                label: service.label(),
                checked: form.is_selected(service.label()),
            })
            .collect();

        Self {
            fields,
            services,
            services_error: form.error(FormField::Services).map(ToOwned::to_owned),
            message: form.value(FormField::Message).to_owned(),
            submit: Button::new(form.submit_label(), "btn-submit", None, None)
                .disabled(form.is_submitting()),
            submitting_label: SUBMITTING_LABEL,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-response.html")]
pub struct ContactResponseTemplate<'a> {
    pub contact: ContactSection,
    pub notifications: &'a [Notification],
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    let mut form = ContactForm::from(input);
    let mut notifications: Vec<Notification> = vec![];

    let outcome = form.submit(app.delivery.as_ref(), &mut notifications).await;
    tracing::info!(%outcome, partial = template.is_partial(), "contact form submitted");

    if template.is_partial() {
        return template.render(ContactResponseTemplate {
            contact: ContactSection::new(&form),
            notifications: &notifications,
        });
    }

    // Post/redirect/get for delivered plain browser posts
    if outcome == SubmitOutcome::Delivered {
        return Redirect::to(&format!("/?{DELIVERED_PARAM}=1#contact")).into_response();
    }

    template.render(IndexTemplate::new(&app.config, &form, &notifications))
}
