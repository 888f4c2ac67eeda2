use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Localized};

pub const SITE_NAME: &str = "ProTrainers Academy";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Trainers,
    Method,
    Resources,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Trainers,
        Page::Method,
        Page::Resources,
        Page::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Trainers => "trainers",
            Page::Method => "method",
            Page::Resources => "resources",
            Page::Contact => "contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Trainers => "/trainers",
            Page::Method => "/method",
            Page::Resources => "/resources",
            Page::Contact => "/contact",
        }
    }

    /// Resolves legacy `#page` links; anything unknown lands on the home page.
    pub fn from_hash(hash: &str) -> Self {
        let id = hash.trim_start_matches('#');
        Page::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or_default()
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "ProTrainers Academy - Professional Business Training",
            Page::Trainers => "Our Expert Trainers - ProTrainers Academy",
            Page::Method => "Our Proven Method - ProTrainers Academy",
            Page::Resources => "Training Resources - ProTrainers Academy",
            Page::Contact => "Contact Us - ProTrainers Academy",
        }
    }

    pub fn nav_label(self) -> Localized {
        match self {
            Page::Home => Localized::new("Home", "Startseite"),
            Page::Trainers => Localized::new("Trainers", "Trainer"),
            Page::Method => Localized::new("Our Method", "Unsere Methode"),
            Page::Resources => Localized::new("Resources", "Ressourcen"),
            Page::Contact => Localized::new("Contact", "Kontakt"),
        }
    }

    pub fn meta_description(self, language: Language) -> &'static str {
        match (self, language) {
            (Page::Home, Language::En) => "ProTrainers Academy - Professional business training and development solutions for corporate success and leadership excellence.",
            (Page::Home, Language::De) => "ProTrainers Academy - Professionelle Unternehmensschulungen und Entwicklungslösungen für unternehmerischen Erfolg und Führungsexzellenz.",
            (Page::Trainers, Language::En) => "Meet our expert business trainers with decades of experience in corporate training and professional development.",
            (Page::Trainers, Language::De) => "Lernen Sie unsere erfahrenen Unternehmenstrainer mit jahrzehntelanger Erfahrung in Unternehmensschulungen und beruflicher Entwicklung kennen.",
            (Page::Method, Language::En) => "Discover our proven training methodology combining theory with practical application for lasting business transformation.",
            (Page::Method, Language::De) => "Entdecken Sie unsere bewährte Trainingsmethodik, die Theorie mit praktischer Anwendung für nachhaltige Unternehmenstransformation verbindet.",
            (Page::Resources, Language::En) => "Access comprehensive training resources, tools, and materials to support your professional development journey.",
            (Page::Resources, Language::De) => "Zugang zu umfassenden Trainingsressourcen, Tools und Materialien zur Unterstützung Ihrer beruflichen Entwicklungsreise.",
            (Page::Contact, Language::En) => "Get in touch with ProTrainers Academy to discuss your training needs and schedule a consultation.",
            (Page::Contact, Language::De) => "Kontaktieren Sie die ProTrainers Academy, um Ihre Schulungsbedürfnisse zu besprechen und eine Beratung zu vereinbaren.",
        }
    }
}

/// Viewport width at which the mobile menu is no longer used.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn mobile_menu_open_after_resize(open: bool, viewport_width: f64) -> bool {
    open && viewport_width < MOBILE_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingMethod {
    Calendly,
    Email,
    Phone,
}

impl BookingMethod {
    pub const ALL: [BookingMethod; 3] = [
        BookingMethod::Calendly,
        BookingMethod::Email,
        BookingMethod::Phone,
    ];

    pub fn href(self) -> &'static str {
        match self {
            BookingMethod::Calendly => "https://calendly.com/protrainers-academy/consultation",
            BookingMethod::Email => "mailto:info@protrainers-academy.com?subject=Consultation%20Request&body=Hello%2C%20I%20would%20like%20to%20schedule%20a%20free%20consultation%20to%20discuss%20my%20training%20needs.",
            BookingMethod::Phone => "tel:+493012345678",
        }
    }

    pub fn opens_new_tab(self) -> bool {
        matches!(self, BookingMethod::Calendly)
    }

    pub fn label(self) -> Localized {
        match self {
            BookingMethod::Calendly => Localized::new("Book via Calendly", "Über Calendly Buchen"),
            BookingMethod::Email => Localized::new("Request via Email", "Per E-Mail Anfragen"),
            BookingMethod::Phone => Localized::new("Call to Schedule", "Anrufen zum Vereinbaren"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_hash_falls_back_to_home() {
        assert_eq!(Page::from_hash("#contact"), Page::Contact);
        assert_eq!(Page::from_hash("method"), Page::Method);
        assert_eq!(Page::from_hash("#pricing"), Page::Home);
        assert_eq!(Page::from_hash(""), Page::Home);
    }

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/contact/"), Some(Page::Contact));
        assert_eq!(Page::from_path("/nope"), None);
    }

    #[test]
    fn mobile_menu_closes_on_wide_viewports() {
        assert!(mobile_menu_open_after_resize(true, 500.0));
        assert!(!mobile_menu_open_after_resize(true, 768.0));
        assert!(!mobile_menu_open_after_resize(false, 500.0));
    }
}
