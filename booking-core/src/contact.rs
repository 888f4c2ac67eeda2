use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ContactConfig;
use crate::host::FormValues;
use crate::i18n::Localized;

pub const CONTACT_FORM_ID: &str = "contact-form";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("Network error occurred")]
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn from_values(values: &FormValues) -> Result<Self, ContactError> {
        let field = |key: &str| {
            values
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            name: field("name").ok_or(ContactError::MissingField("name"))?,
            email: field("email").ok_or(ContactError::MissingField("email"))?,
            company: field("company"),
            message: field("message").ok_or(ContactError::MissingField("message"))?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ContactStatus {
    pub fn notice(self) -> Option<Localized> {
        match self {
            ContactStatus::Sent => Some(Localized::new(
                "Thank you! Your message has been sent successfully.",
                "Vielen Dank! Ihre Nachricht wurde erfolgreich gesendet.",
            )),
            ContactStatus::Failed => Some(Localized::new(
                "Sorry, there was an error sending your message. Please try again.",
                "Entschuldigung, beim Senden Ihrer Nachricht ist ein Fehler aufgetreten. Bitte versuchen Sie es erneut.",
            )),
            ContactStatus::Idle | ContactStatus::Sending => None,
        }
    }
}

/// Stand-in for a form backend: waits `submit_delay_ms`, then accepts unless
/// the roll lands under the failure rate.
#[derive(Debug, Clone, Default)]
pub struct ContactSimulator {
    config: ContactConfig,
}

impl ContactSimulator {
    pub fn new(config: ContactConfig) -> Self {
        Self { config }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.config.submit_delay_ms)
    }

    pub fn resolve(&self, form: &ContactForm, roll: f64) -> Result<(), ContactError> {
        if roll < self.config.failure_rate {
            warn!(email = %form.email, "simulated contact form failure");
            return Err(ContactError::Network);
        }
        info!(name = %form.name, email = %form.email, "contact form submitted");
        Ok(())
    }

    pub fn status_for(&self, result: &Result<(), ContactError>) -> ContactStatus {
        match result {
            Ok(()) => ContactStatus::Sent,
            Err(_) => ContactStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn requires_name_email_and_message() {
        let form = ContactForm::from_values(&values(&[
            ("name", "Grace Hopper"),
            ("email", "grace@navy.mil"),
            ("message", "Team workshop?"),
        ]))
        .unwrap();
        assert_eq!(form.company, None);

        assert_eq!(
            ContactForm::from_values(&values(&[("name", "Grace"), ("email", "g@x.com")])),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn low_roll_fails_with_network_error() {
        let simulator = ContactSimulator::default();
        let form = ContactForm {
            name: "Grace".into(),
            email: "g@x.com".into(),
            company: None,
            message: "Hi".into(),
        };

        assert_eq!(simulator.delay(), Duration::from_millis(1500));
        let failed = simulator.resolve(&form, 0.01);
        assert_eq!(failed, Err(ContactError::Network));
        assert_eq!(simulator.status_for(&failed), ContactStatus::Failed);
        assert_eq!(simulator.status_for(&simulator.resolve(&form, 0.5)), ContactStatus::Sent);
    }
}
