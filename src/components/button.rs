/// Message pre-filled in the WhatsApp conversation.
pub const GREETING: &str = "Olá! Gostaria de saber mais sobre as soluções da pantheo.tech.";

const BASE_CLASSES: &str = "btn";

/// Builds `https://wa.me/<handle>?text=<greeting>` with the greeting URL-encoded.
pub fn whatsapp_link(handle: &str) -> String {
    format!("https://wa.me/{handle}?text={}", urlencoding::encode(GREETING))
}

/// What a [`Button`] does when activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Client-side handler run on click. `None` keeps the browser default,
    /// which submits the enclosing form.
    Callback(Option<String>),
    /// Opens the URL in a new browsing context.
    ExternalLink(String),
}

impl Action {
    /// A contact handle always wins over a click handler.
    pub fn resolve(on_click: Option<&str>, whatsapp: Option<&str>) -> Self {
        match whatsapp.filter(|h| !h.is_empty()) {
            Some(handle) => Action::ExternalLink(whatsapp_link(handle)),
            None => Action::Callback(on_click.map(ToOwned::to_owned)),
        }
    }
}

#[derive(askama::Template, Clone, Debug)]
#[template(path = "partials/button.html")]
pub struct Button {
    pub text: String,
    pub class: String,
    pub action: Action,
    pub disabled: bool,
}

impl Button {
    pub fn new(
        text: impl Into<String>,
        class: impl Into<String>,
        on_click: Option<&str>,
        whatsapp: Option<&str>,
    ) -> Self {
        Self {
            text: text.into(),
            class: class.into(),
            action: Action::resolve(on_click, whatsapp),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn classes(&self) -> String {
        format!("{BASE_CLASSES} {}", self.class)
    }

    pub fn href(&self) -> Option<&str> {
        match &self.action {
            Action::ExternalLink(url) => Some(url),
            Action::Callback(_) => None,
        }
    }

    pub fn on_click(&self) -> Option<&str> {
        match &self.action {
            Action::Callback(handler) => handler.as_deref(),
            Action::ExternalLink(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use askama::Template;

    use super::*;

    #[test]
    fn test_link_embeds_handle_and_encoded_greeting() {
        let button = Button::new("WhatsApp", "bg-green", None, Some("5511999999999"));
        let href = button.href().unwrap();

        let (base, text) = href.split_once("?text=").unwrap();
        assert_eq!(base, "https://wa.me/5511999999999");
        assert!(!text.contains(' '));
        assert_eq!(urlencoding::decode(text).unwrap(), GREETING);
    }

    #[test]
    fn test_handle_takes_precedence_over_callback() {
        let action = Action::resolve(Some("scrollToContact()"), Some("5511999999999"));
        assert!(matches!(action, Action::ExternalLink(_)));

        let action = Action::resolve(Some("scrollToContact()"), None);
        assert_eq!(action, Action::Callback(Some("scrollToContact()".to_owned())));
    }

    #[test]
    fn test_link_opens_new_context_without_opener() {
        let html = Button::new("Fale conosco", "bg-green", None, Some("5511999999999"))
            .render()
            .unwrap();

        assert!(html.contains("<a"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_callback_renders_button() {
        let html = Button::new("Enviar", "w-full", None, None)
            .disabled(true)
            .render()
            .unwrap();

        assert!(html.contains("<button"));
        assert!(html.contains("disabled"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("btn w-full"));
    }
}
