//! Page configuration: selectors, styling tokens, timings and opt-in behaviors.
//!
//! Defaults reproduce the markup contract the server templates already use.
//! A page may override any subset through a JSON object; absent fields keep
//! their default.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

pub const DEFAULT_FADE_DELAY_MS: u32 = 5000;
pub const DEFAULT_FADE_DURATION_MS: u32 = 500;
pub const DEFAULT_REQUIRED_NOTICE: &str = "Please fill in all required fields.";

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "pageglue-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub form_selector: String,
    pub required_selector: String,
    pub confirm_attribute: String,
    pub message_selector: String,
    pub date_input_selector: String,
    pub toggle_id: String,
    pub theme_attribute: String,
    pub storage_key: String,
    pub required_notice: String,
    pub invalid_border: String,
    pub valid_border: String,
    pub fade_delay_ms: u32,
    pub fade_duration_ms: u32,
    /// Wire the date floor at load. Off by default: the page script this
    /// replaces defined the behavior but never attached it.
    pub date_floor: bool,
    /// Apply the stored theme at load instead of trusting the server-rendered attribute.
    pub restore_theme: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".into(),
            required_selector: "[required]".into(),
            confirm_attribute: "data-confirm".into(),
            message_selector: ".message".into(),
            date_input_selector: "input[type=\"date\"]".into(),
            toggle_id: "theme-toggle".into(),
            theme_attribute: "data-theme".into(),
            storage_key: "theme".into(),
            required_notice: DEFAULT_REQUIRED_NOTICE.into(),
            invalid_border: "var(--danger-color)".into(),
            valid_border: "var(--border-color)".into(),
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            date_floor: false,
            restore_theme: false,
        }
    }
}

impl PageConfig {
    /// Parse overrides from a JSON object and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a page given the text of its config element, if any.
    ///
    /// Invalid overrides are logged and replaced by defaults so a typo never
    /// disables the page behaviors.
    pub fn from_page(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            Self::default()
        })
    }

    /// Reject values that would make a behavior match nothing or misbehave.
    pub fn validate(&self) -> Result<(), PageError> {
        let required = [
            ("form_selector", &self.form_selector),
            ("required_selector", &self.required_selector),
            ("confirm_attribute", &self.confirm_attribute),
            ("message_selector", &self.message_selector),
            ("date_input_selector", &self.date_input_selector),
            ("toggle_id", &self.toggle_id),
            ("theme_attribute", &self.theme_attribute),
            ("storage_key", &self.storage_key),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(PageError::Config(format!("{name} must not be empty")));
            }
        }
        if self.fade_duration_ms == 0 {
            return Err(PageError::Config("fade_duration_ms must be greater than zero".into()));
        }
        Ok(())
    }

    /// Selector matching every element that carries the confirmation attribute.
    pub fn confirm_selector(&self) -> String {
        format!("[{}]", self.confirm_attribute)
    }

    /// CSS `transition` value for the message fade, e.g. `opacity 0.5s ease`.
    pub fn fade_transition(&self) -> String {
        let secs = f64::from(self.fade_duration_ms) / 1000.0;
        format!("opacity {secs}s ease")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
