//! Email dispatch
//!
//! The optional third-party service that sends the contact message without
//! leaving the page. [`EmailJsClient`] talks to the EmailJS REST API; tests
//! substitute their own [`EmailDispatcher`].

use async_trait::async_trait;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::contact::ContactRequest;
use crate::error::{DispatchError, DispatchResult};

/// Template parameters sent to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePayload {
    pub from_name: String,
    pub reply_to: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
}

impl TemplatePayload {
    pub fn new(request: &ContactRequest, recipient: &str) -> Self {
        Self {
            from_name: request.name.clone(),
            reply_to: request.email.clone(),
            phone: request.phone_or_default().to_string(),
            message: request.message.clone(),
            to_email: recipient.to_string(),
        }
    }
}

/// Something that can send a templated email.
///
/// Failure detection is left entirely to the implementation; callers impose
/// no timeout and never cancel.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &TemplatePayload,
    ) -> DispatchResult<()>;
}

#[async_trait]
impl<T: EmailDispatcher + ?Sized> EmailDispatcher for std::sync::Arc<T> {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &TemplatePayload,
    ) -> DispatchResult<()> {
        (**self).send(service_id, template_id, payload).await
    }
}

/// Request body of the EmailJS `email/send` endpoint
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplatePayload,
}

/// EmailJS REST client
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
    public_key: Option<String>,
}

impl EmailJsClient {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

#[async_trait]
impl EmailDispatcher for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &TemplatePayload,
    ) -> DispatchResult<()> {
        let public_key = self
            .public_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(DispatchError::NotConfigured)?;

        let body = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: payload,
        };

        tracing::debug!(endpoint = %self.endpoint, service_id, template_id, "Sending contact email");

        let resp = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
