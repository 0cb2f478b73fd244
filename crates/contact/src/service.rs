use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Services offered on the contact form. The string form is the label shown
/// next to each checkbox and the value posted back by the browser.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Service {
    #[serde(rename = "Desenvolvimento de apps")]
    #[strum(serialize = "Desenvolvimento de apps")]
    AppDevelopment,
    #[serde(rename = "Desenvolvimento de sites")]
    #[strum(serialize = "Desenvolvimento de sites")]
    WebsiteDevelopment,
    #[serde(rename = "E-commerce")]
    #[strum(serialize = "E-commerce")]
    ECommerce,
    #[serde(rename = "APIs")]
    #[strum(serialize = "APIs")]
    Apis,
    #[serde(rename = "Software personalizado")]
    #[strum(serialize = "Software personalizado")]
    CustomSoftware,
    #[serde(rename = "Manutenção de sites")]
    #[strum(serialize = "Manutenção de sites")]
    WebsiteMaintenance,
    #[serde(rename = "Manutenção de apps")]
    #[strum(serialize = "Manutenção de apps")]
    AppMaintenance,
}

impl Service {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}
