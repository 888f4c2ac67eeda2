use booking_core::{ContactConfig, WidgetConfig};
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    pub booking: WidgetConfig,
    pub contact: ContactConfig,
    /// The server's calendar date, used for the booking grid on both sides.
    pub today: NaiveDate,
}

#[cfg(feature = "ssr")]
fn read_json_file<T: serde::de::DeserializeOwned>(var: &str) -> Result<Option<T>, ServerFnError> {
    let Ok(path) = std::env::var(var) else {
        return Ok(None);
    };
    let json = std::fs::read_to_string(&path)
        .map_err(|e| ServerFnError::new(format!("Failed to read {}: {}", path, e)))?;
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| ServerFnError::new(format!("Invalid config in {}: {}", path, e)))
}

/// Widget settings for the page. `BOOKING_CONFIG` and `CONTACT_CONFIG` may
/// point at JSON files overriding the defaults.
#[server]
pub async fn get_site_config() -> Result<SiteConfig, ServerFnError> {
    let booking = match read_json_file::<WidgetConfig>("BOOKING_CONFIG")? {
        Some(config) => {
            config
                .validate()
                .map_err(|e| ServerFnError::new(e.to_string()))?;
            tracing::info!("Loaded booking config from BOOKING_CONFIG");
            config
        }
        None => WidgetConfig::default(),
    };
    let contact = read_json_file::<ContactConfig>("CONTACT_CONFIG")?.unwrap_or_default();

    Ok(SiteConfig {
        booking,
        contact,
        today: chrono::Local::now().date_naive(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_travels_with_the_config_payload() {
        let config = SiteConfig {
            today: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            ..SiteConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.today, config.today);
        assert_eq!(restored, config);
    }
}
