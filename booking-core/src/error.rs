use thiserror::Error;

use crate::i18n::Localized;
use crate::widget::BookingStep;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("day {0} is not available for booking")]
    DayUnavailable(u32),

    #[error("unknown time slot `{0}`")]
    UnknownTimeSlot(String),

    #[error("cannot move from {from:?} to {to:?}")]
    StepSkipped { from: BookingStep, to: BookingStep },

    #[error("a booking submission is already in flight")]
    SubmissionInFlight,

    #[error("the booking could not be scheduled")]
    SubmissionFailed,

    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid widget configuration: {0}")]
    InvalidConfig(String),
}

impl BookingError {
    /// Inline message shown next to the details form. Only errors a visitor can
    /// act on have one.
    pub fn user_message(&self) -> Option<Localized> {
        match self {
            BookingError::MissingField(field) => Some(Localized::new(
                format!("Please fill in your {}.", field_label_en(field)),
                format!("Bitte geben Sie {} an.", field_label_de(field)),
            )),
            BookingError::SubmissionFailed => Some(Localized::new(
                "Sorry, something went wrong. Please try again.",
                "Entschuldigung, etwas ist schiefgelaufen. Bitte versuchen Sie es erneut.",
            )),
            _ => None,
        }
    }
}

fn field_label_en(field: &str) -> &'static str {
    match field {
        "first-name" => "first name",
        "last-name" => "last name",
        "email" => "email address",
        _ => "details",
    }
}

fn field_label_de(field: &str) -> &'static str {
    match field {
        "first-name" => "Ihren Vornamen",
        "last-name" => "Ihren Nachnamen",
        "email" => "Ihre E-Mail-Adresse",
        _ => "Ihre Angaben",
    }
}
