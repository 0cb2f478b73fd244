use pantheo_contact::ContactForm;

/// A labeled input bound to one value of the contact form.
///
/// `required` only adds a visual cue, the schema decides what is valid.
#[derive(askama::Template, Clone, Debug)]
#[template(path = "partials/field.html")]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub required: bool,
}

impl Field {
    pub fn text(
        field: pantheo_contact::Field,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
        form: &ContactForm,
    ) -> Self {
        Self {
            name: field.into(),
            label,
            input_type,
            placeholder,
            value: form.value(field).to_owned(),
            error: form.error(field).map(ToOwned::to_owned),
            required: true,
        }
    }
}
