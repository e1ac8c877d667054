//! Business profile shown on the page.
//!
//! Defaults are compiled in. A deployment can override any subset of fields
//! with a `<script id="site-config" type="application/json">` block in
//! `index.html`; bad overrides are logged and ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Element id of the optional JSON override.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand word shown large in the logo ("PRECISION")
    pub brand: String,
    /// Small word under the brand ("PLUMBING")
    pub brand_suffix: String,
    /// Full business name used in copy and the copyright line
    pub business_name: String,
    /// Phone number as displayed
    pub phone_display: String,
    /// Phone number in E.164 form, used for `tel:` links
    pub phone_e164: String,
    pub email: String,
    pub street: String,
    pub city_line: String,
    pub founded: u16,
    /// Simulated submission latency
    pub submit_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "PRECISION".into(),
            brand_suffix: "PLUMBING".into(),
            business_name: "Precision Plumbing".into(),
            phone_display: "(555) 123-4567".into(),
            phone_e164: "+15551234567".into(),
            email: "info@precisionplumbing.com".into(),
            street: "123 Plumber Lane,".into(),
            city_line: "Cityville, ST 12345".into(),
            founded: 2010,
            submit_delay_ms: 1500,
        }
    }
}

/// Where the active config came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    Override,
}

impl SiteConfig {
    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the override from the live document, falling back to defaults.
    pub fn resolve() -> (Self, ConfigSource) {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        Self::resolve_from(raw.as_deref())
    }

    /// [`SiteConfig::resolve`] without the DOM lookup.
    pub fn resolve_from(raw: Option<&str>) -> (Self, ConfigSource) {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return (Self::default(), ConfigSource::Defaults);
        };

        match Self::from_json(raw) {
            Ok(config) => (config, ConfigSource::Override),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring site config override");
                (Self::default(), ConfigSource::Defaults)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.business_name.trim().is_empty() {
            return Err(SiteError::InvalidConfig("business_name is empty".into()));
        }
        let digits = self.phone_e164.strip_prefix('+').unwrap_or_default();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) || digits.len() > 15 {
            return Err(SiteError::InvalidConfig(format!(
                "phone_e164 `{}` is not E.164",
                self.phone_e164
            )));
        }
        if !self.email.contains('@') {
            return Err(SiteError::InvalidConfig(format!(
                "email `{}` has no `@`",
                self.email
            )));
        }
        if self.submit_delay_ms == 0 {
            return Err(SiteError::InvalidConfig("submit_delay_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_e164)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.tel_href(), "tel:+15551234567");
        assert_eq!(config.mailto_href(), "mailto:info@precisionplumbing.com");
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "phone_e164": "+15559876543", "phone_display": "(555) 987-6543" }"#)
            .unwrap();

        assert_eq!(
            config,
            SiteConfig {
                phone_e164: "+15559876543".into(),
                phone_display: "(555) 987-6543".into(),
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn bad_values_are_rejected() {
        for raw in [
            r#"{ "phone_e164": "555-1234" }"#,
            r#"{ "phone_e164": "+" }"#,
            r#"{ "email": "nobody" }"#,
            r#"{ "business_name": "  " }"#,
            r#"{ "submit_delay_ms": 0 }"#,
        ] {
            let err = SiteConfig::from_json(raw).unwrap_err();
            assert!(matches!(err, SiteError::InvalidConfig(_)), "{raw} accepted");
        }
    }

    #[test]
    fn resolve_falls_back_to_defaults() {
        assert_eq!(
            SiteConfig::resolve_from(None),
            (SiteConfig::default(), ConfigSource::Defaults)
        );
        assert_eq!(
            SiteConfig::resolve_from(Some("   \n")),
            (SiteConfig::default(), ConfigSource::Defaults)
        );
        assert_eq!(
            SiteConfig::resolve_from(Some(r#"{ "email": "broken" }"#)),
            (SiteConfig::default(), ConfigSource::Defaults)
        );
    }

    #[test]
    fn resolve_uses_valid_override() {
        let (config, source) = SiteConfig::resolve_from(Some(r#"{ "submit_delay_ms": 250 }"#));
        assert_eq!(source, ConfigSource::Override);
        assert_eq!(config.submit_delay(), Duration::from_millis(250));
    }
}
