use booking_core::contact::{ContactError, ContactForm, ContactSimulator, ContactStatus, CONTACT_FORM_ID};
use booking_core::host::FormValues;
use booking_core::{ContactConfig, Localized, Roll};
use leptos::prelude::*;
use thaw::*;

use super::localized::{use_i18n, T};
use crate::host::BrowserRoll;

#[component]
pub fn ContactFormView(config: ContactConfig) -> impl IntoView {
    let i18n = use_i18n();
    let simulator = StoredValue::new(ContactSimulator::new(config));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(ContactStatus::Idle);
    let missing = RwSignal::new(None::<&'static str>);

    let sending = Signal::derive(move || status.get() == ContactStatus::Sending);
    let fields = ContactFields { name, email, company, message };

    let pending_send = StoredValue::new(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = pending_send.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == ContactStatus::Sending {
            return;
        }

        let values: FormValues = [("name", name), ("email", email), ("company", company), ("message", message)]
            .into_iter()
            .map(|(key, signal)| (key.to_string(), signal.get_untracked()))
            .collect();
        let form = match ContactForm::from_values(&values) {
            Ok(form) => form,
            Err(ContactError::MissingField(field)) => {
                missing.set(Some(field));
                return;
            }
            Err(e) => {
                leptos::logging::error!("Unexpected contact form error: {}", e);
                return;
            }
        };

        missing.set(None);
        status.set(ContactStatus::Sending);
        leptos::logging::log!("contact form submitted by {}", form.email);
        let delay = simulator.with_value(|s| s.delay());
        let scheduled = set_timeout_with_handle(
            move || finish_send(simulator, &form, BrowserRoll.roll(), status, fields),
            delay,
        );
        match scheduled {
            Ok(handle) => pending_send.set_value(Some(handle)),
            Err(_) => {
                leptos::logging::error!("Failed to schedule contact form send");
                status.set(ContactStatus::Failed);
            }
        }
    };

    let notice = move || {
        let (class, text) = match (missing.get(), status.get().notice()) {
            (Some(field), _) => ("form-notice form-notice--error", missing_field_notice(field)),
            (None, Some(text)) if status.get() == ContactStatus::Sent => ("form-notice form-notice--success", text),
            (None, Some(text)) => ("form-notice form-notice--error", text),
            (None, None) => return None,
        };
        Some(view! { <div class=class role="status">{i18n.text(&text)}</div> })
    };

    view! {
        <form id=CONTACT_FORM_ID class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <label for="contact-name"><T en="Name *" de="Name *"/></label>
                <Input id="contact-name" value=name/>
            </div>
            <div class="form-group">
                <label for="contact-email"><T en="Email Address *" de="E-Mail-Adresse *"/></label>
                <Input id="contact-email" input_type=InputType::Email value=email/>
            </div>
            <div class="form-group">
                <label for="contact-company"><T en="Company" de="Unternehmen"/></label>
                <Input id="contact-company" value=company/>
            </div>
            <div class="form-group">
                <label for="contact-message"><T en="Message *" de="Nachricht *"/></label>
                <Textarea id="contact-message" value=message/>
            </div>

            {notice}

            <Button
                button_type=ButtonType::Submit
                appearance=ButtonAppearance::Primary
                disabled=sending
                loading=sending
            >
                {move || if sending.get() {
                    view! { <T en="Sending..." de="Wird gesendet..."/> }.into_any()
                } else {
                    view! { <T en="Send Message" de="Nachricht Senden"/> }.into_any()
                }}
            </Button>
        </form>
    }
}

#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    company: RwSignal<String>,
    message: RwSignal<String>,
}

/// Resolves a simulated send. Does nothing once the form has unmounted.
fn finish_send(
    simulator: StoredValue<ContactSimulator>,
    form: &ContactForm,
    roll: f64,
    status: RwSignal<ContactStatus>,
    fields: ContactFields,
) {
    let Some(next) = simulator.try_with_value(|s| s.status_for(&s.resolve(form, roll))) else {
        return;
    };
    if next == ContactStatus::Sent {
        for field in [fields.name, fields.email, fields.company, fields.message] {
            let _ = field.try_set(String::new());
        }
    }
    let _ = status.try_set(next);
}

fn missing_field_notice(field: &str) -> Localized {
    match field {
        "name" => Localized::new("Please enter your name.", "Bitte geben Sie Ihren Namen an."),
        "email" => Localized::new(
            "Please enter your email address.",
            "Bitte geben Sie Ihre E-Mail-Adresse an.",
        ),
        _ => Localized::new("Please enter a message.", "Bitte geben Sie eine Nachricht ein."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(owner: &Owner) -> (StoredValue<ContactSimulator>, RwSignal<ContactStatus>, ContactFields) {
        owner.with(|| {
            let filled = || RwSignal::new("x".to_string());
            (
                StoredValue::new(ContactSimulator::new(ContactConfig::default())),
                RwSignal::new(ContactStatus::Sending),
                ContactFields {
                    name: filled(),
                    email: filled(),
                    company: filled(),
                    message: filled(),
                },
            )
        })
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Grace Hopper".into(),
            email: "grace@navy.mil".into(),
            company: None,
            message: "Hello".into(),
        }
    }

    #[test]
    fn successful_send_clears_the_form() {
        let owner = Owner::new();
        let (simulator, status, fields) = setup(&owner);

        finish_send(simulator, &form(), 1.0, status, fields);

        assert_eq!(status.get_untracked(), ContactStatus::Sent);
        assert_eq!(fields.name.get_untracked(), "");
        assert_eq!(fields.message.get_untracked(), "");
    }

    #[test]
    fn failed_send_keeps_the_input() {
        let owner = Owner::new();
        let (simulator, status, fields) = setup(&owner);

        finish_send(simulator, &form(), 0.0, status, fields);

        assert_eq!(status.get_untracked(), ContactStatus::Failed);
        assert_eq!(fields.email.get_untracked(), "x");
    }

    #[test]
    fn send_finishing_after_unmount_is_ignored() {
        let owner = Owner::new();
        let (simulator, status, fields) = setup(&owner);

        owner.cleanup();

        finish_send(simulator, &form(), 1.0, status, fields);
        assert!(status.try_get_untracked().is_none());
    }
}
