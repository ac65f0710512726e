#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::config::{DEFAULT_ENDPOINT, DEFAULT_RECIPIENT};
use portfolio_core::EmailConfig;
use tracing_subscriber::EnvFilter;

/// Email configuration, set once from the command line before launch
static EMAIL_CONFIG: OnceLock<EmailConfig> = OnceLock::new();

/// Get the email configuration (set from command line or default)
pub fn get_email_config() -> EmailConfig {
    EMAIL_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - personal portfolio page
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio page with a contact form")]
struct Args {
    /// EmailJS service id (automatic sending needs all three credentials)
    #[arg(long, env = "PORTFOLIO_EMAILJS_SERVICE_ID")]
    service_id: Option<String>,

    /// EmailJS template id
    #[arg(long, env = "PORTFOLIO_EMAILJS_TEMPLATE_ID")]
    template_id: Option<String>,

    /// EmailJS public key
    #[arg(long, env = "PORTFOLIO_EMAILJS_PUBLIC_KEY")]
    public_key: Option<String>,

    /// Address that receives contact messages
    #[arg(long, env = "PORTFOLIO_CONTACT_RECIPIENT", default_value = DEFAULT_RECIPIENT)]
    recipient: String,

    /// Email service endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

impl Args {
    fn email_config(&self) -> EmailConfig {
        EmailConfig {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
            recipient: self.recipient.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = args.email_config();
    config.log_capability();
    let _ = EMAIL_CONFIG.set(config);

    tracing::info!("Portfolio of Antônio Bernabio Júnior - RPA & automation specialist");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Antônio Bernabio Júnior - Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_without_credentials_are_not_ready() {
        let args = Args::parse_from(["portfolio-desktop"]);
        let config = args.email_config();
        assert!(!config.capability().is_ready());
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn args_with_credentials_are_ready() {
        let args = Args::parse_from([
            "portfolio-desktop",
            "--service-id",
            "svc",
            "--template-id",
            "tpl",
            "--public-key",
            "key",
        ]);
        assert!(args.email_config().capability().is_ready());
    }
}
