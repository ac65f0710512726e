//! Email service configuration
//!
//! Built once at startup and handed to the contact flow. Nothing reads it
//! from global state afterwards.

/// Address that receives contact messages unless overridden
pub const DEFAULT_RECIPIENT: &str = "antoniobernabiopereira@gmail.com";

/// EmailJS REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Whether the optional email service can be used
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DispatchCapability {
    /// All credentials present
    Ready,
    /// Something is missing; only the mail draft path is available
    #[default]
    NotReady,
}

impl DispatchCapability {
    pub fn is_ready(&self) -> bool {
        matches!(self, DispatchCapability::Ready)
    }
}

/// Credentials and addressing for the email service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    /// Where contact messages go, for both dispatch and mail drafts
    pub recipient: String,
    pub endpoint: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            recipient: DEFAULT_RECIPIENT.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl EmailConfig {
    /// Fully configured instance, mostly useful in tests
    pub fn with_credentials(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
            ..Self::default()
        }
    }

    /// Ready only when service id, template id and public key are all non-blank
    pub fn capability(&self) -> DispatchCapability {
        let present = |value: &Option<String>| {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        };

        if present(&self.service_id) && present(&self.template_id) && present(&self.public_key) {
            DispatchCapability::Ready
        } else {
            DispatchCapability::NotReady
        }
    }

    /// Log which delivery path is active. Called once at startup.
    pub fn log_capability(&self) {
        match self.capability() {
            DispatchCapability::Ready => {
                tracing::info!(recipient = %self.recipient, "Email service configured");
            }
            DispatchCapability::NotReady => {
                tracing::info!(
                    "Set service id, template id and public key to enable automatic sending; \
                     keeping the mail draft fallback"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_ready() {
        let config = EmailConfig::default();
        assert_eq!(config.capability(), DispatchCapability::NotReady);
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn all_credentials_make_it_ready() {
        let config = EmailConfig::with_credentials("svc", "tpl", "key");
        assert!(config.capability().is_ready());
    }

    #[test]
    fn any_blank_credential_is_not_ready() {
        let mut config = EmailConfig::with_credentials("svc", "tpl", "key");
        config.public_key = Some("   ".to_string());
        assert_eq!(config.capability(), DispatchCapability::NotReady);

        let mut config = EmailConfig::with_credentials("svc", "tpl", "key");
        config.template_id = None;
        assert_eq!(config.capability(), DispatchCapability::NotReady);
    }
}
