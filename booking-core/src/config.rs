use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::error::BookingError;

/// How the calendar decides which cell is highlighted as "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodayPolicy {
    /// Highlight the real current date, only in its own month.
    #[default]
    Actual,
    /// Highlight this day number in every month, as the original demo page did.
    DemoDay(u32),
}

impl TodayPolicy {
    pub fn day_in(self, month: YearMonth, today: NaiveDate) -> Option<u32> {
        match self {
            TodayPolicy::Actual if YearMonth::of(today) == month => Some(today.day()),
            TodayPolicy::Actual => None,
            TodayPolicy::DemoDay(day) if day <= month.days_in_month() => Some(day),
            TodayPolicy::DemoDay(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub available_days: Vec<u32>,
    pub time_slots: Vec<String>,
    pub submit_delay_ms: u64,
    pub failure_rate: f64,
    pub today: TodayPolicy,
    pub timezone_label: String,
    pub timezone_abbreviation: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            available_days: vec![9, 13, 16, 17, 18, 19, 20, 23, 24, 25, 26, 27, 30],
            time_slots: [
                "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
                "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            submit_delay_ms: 2000,
            failure_rate: 0.0,
            today: TodayPolicy::Actual,
            timezone_label: "Central European Time".to_string(),
            timezone_abbreviation: "CET".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, BookingError> {
        let config: WidgetConfig = serde_json::from_str(json)
            .map_err(|e| BookingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        if let Some(day) = self.available_days.iter().find(|d| !(1..=31).contains(*d)) {
            return Err(BookingError::InvalidConfig(format!(
                "available day {} is outside 1..=31",
                day
            )));
        }

        if self.time_slots.is_empty() {
            return Err(BookingError::InvalidConfig("no time slots configured".into()));
        }
        let mut seen = BTreeSet::new();
        for slot in &self.time_slots {
            if slot.trim().is_empty() {
                return Err(BookingError::InvalidConfig("empty time slot label".into()));
            }
            if !seen.insert(slot.as_str()) {
                return Err(BookingError::InvalidConfig(format!(
                    "duplicate time slot `{}`",
                    slot
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(BookingError::InvalidConfig(format!(
                "failure rate {} is outside 0..=1",
                self.failure_rate
            )));
        }

        if let TodayPolicy::DemoDay(day) = self.today {
            if !(1..=31).contains(&day) {
                return Err(BookingError::InvalidConfig(format!(
                    "demo day {} is outside 1..=31",
                    day
                )));
            }
        }

        Ok(())
    }

    pub fn available_day_set(&self) -> BTreeSet<u32> {
        self.available_days.iter().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
    pub failure_rate: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            failure_rate: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WidgetConfig::default();
        config.validate().unwrap();
        assert_eq!(config.time_slots.len(), 12);
        assert_eq!(config.time_slots[5], "11:30 AM");
        assert_eq!(config.time_slots[6], "1:00 PM");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            WidgetConfig::from_json(r#"{ "submit_delay_ms": 10, "today": { "demo_day": 5 } }"#)
                .unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.today, TodayPolicy::DemoDay(5));
        assert_eq!(config.available_days.len(), 13);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(WidgetConfig::from_json(r#"{ "available_days": [0] }"#).is_err());
        assert!(WidgetConfig::from_json(r#"{ "failure_rate": 1.5 }"#).is_err());
        assert!(WidgetConfig::from_json(r#"{ "time_slots": ["9:00 AM", "9:00 AM"] }"#).is_err());
        assert!(matches!(
            WidgetConfig::from_json("not json"),
            Err(BookingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn today_policy_resolution() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let june = YearMonth::new(2025, 6).unwrap();
        let july = YearMonth::new(2025, 7).unwrap();
        let february = YearMonth::new(2025, 2).unwrap();

        assert_eq!(TodayPolicy::Actual.day_in(june, today), Some(12));
        assert_eq!(TodayPolicy::Actual.day_in(july, today), None);
        assert_eq!(TodayPolicy::DemoDay(5).day_in(july, today), Some(5));
        assert_eq!(TodayPolicy::DemoDay(30).day_in(february, today), None);
    }
}
