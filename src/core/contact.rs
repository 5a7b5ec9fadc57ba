use serde::Serialize;

/// Field values bound from the contact form at submit time.
///
/// No client-side validation happens here; the delivery service is the only
/// judge of the content. On a failed delivery the caller keeps these values
/// so the visitor can retry without retyping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Credentials for the outbound email-delivery service, baked in at build time.
#[derive(Clone, Copy, Debug)]
pub struct DeliveryConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl DeliveryConfig {
    /// Read the three secrets from the build environment. `None` when any is
    /// missing, which disables the form instead of failing at send time.
    pub fn from_build_env() -> Option<Self> {
        Some(Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")?,
            template_id: option_env!("EMAILJS_TEMPLATE_ID")?,
            public_key: option_env!("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

/// Wire payload for the delivery service's REST endpoint.
#[derive(Debug, Serialize)]
pub struct DeliveryRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> DeliveryRequest<'a> {
    pub fn new(config: &'a DeliveryConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: message,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
