pub mod animated_counter;
pub mod booking_methods_modal;
pub mod booking_widget;
pub mod contact_form;
pub mod error;
pub mod loading;
pub mod localized;
pub mod navbar;
pub mod page_meta;

// Re-export commonly used types
pub use animated_counter::AnimatedCounter;
pub use booking_methods_modal::BookingMethodsModal;
pub use booking_widget::BookingWidget;
pub use contact_form::ContactFormView;
pub use error::{ErrorView, InlineError};
pub use loading::LoadingView;
pub use localized::{use_i18n, T};
pub use navbar::Navbar;
pub use page_meta::PageMeta;
