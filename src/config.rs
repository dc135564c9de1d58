//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

use crate::analytics::AnalyticsRules;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `HIGH_UTILIZATION_THRESHOLD` (optional): alert threshold in percent, defaults to 30
/// - `FIVE_24_WINDOW_MONTHS` (optional): 5/24 look-back window, defaults to 24
/// - `FIVE_24_CARD_LIMIT` (optional): cards allowed in the window, defaults to 5
/// - `TOP_UTILIZATION_LIMIT` (optional): size of the high-utilization list, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_high_utilization_threshold")]
    pub high_utilization_threshold: i64,

    #[serde(default = "default_five_24_window_months")]
    pub five_24_window_months: u32,

    #[serde(default = "default_five_24_card_limit")]
    pub five_24_card_limit: usize,

    #[serde(default = "default_top_utilization_limit")]
    pub top_utilization_limit: usize,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_high_utilization_threshold() -> i64 {
    AnalyticsRules::default().high_utilization_threshold
}

fn default_five_24_window_months() -> u32 {
    AnalyticsRules::default().five_24_window_months
}

fn default_five_24_card_limit() -> usize {
    AnalyticsRules::default().five_24_card_limit
}

fn default_top_utilization_limit() -> usize {
    AnalyticsRules::default().top_utilization_limit
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are converted automatically: five_24_card_limit -> FIVE_24_CARD_LIMIT
        envy::from_env::<Config>()
    }

    /// Rules handed to the analytics engine on every report.
    pub fn analytics_rules(&self) -> AnalyticsRules {
        AnalyticsRules {
            high_utilization_threshold: self.high_utilization_threshold,
            five_24_window_months: self.five_24_window_months,
            five_24_card_limit: self.five_24_card_limit,
            top_utilization_limit: self.top_utilization_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_overrides_are_read_from_variables() {
        let vars = vec![
            ("DATABASE_URL".to_string(), "postgres://localhost/cards".to_string()),
            ("HIGH_UTILIZATION_THRESHOLD".to_string(), "50".to_string()),
            ("FIVE_24_WINDOW_MONTHS".to_string(), "12".to_string()),
        ];

        let config: Config = envy::from_iter(vars).unwrap();
        let rules = config.analytics_rules();

        assert_eq!(config.server_port, 3000);
        assert_eq!(rules.high_utilization_threshold, 50);
        assert_eq!(rules.five_24_window_months, 12);
        assert_eq!(rules.five_24_card_limit, 5);
        assert_eq!(rules.top_utilization_limit, 5);
    }

    #[test]
    fn database_url_is_required() {
        let vars: Vec<(String, String)> = vec![("SERVER_PORT".to_string(), "8080".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
