//! Page presentation configuration

use serde::Deserialize;

use crate::application::tool_list::{ToastOptions, ToastPosition, ToastTheme, ViewSettings};

use super::error::ValidationError;

/// Page presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Document title of the page
    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Delay before a toast closes itself, in milliseconds
    #[serde(default = "default_toast_auto_close")]
    pub toast_auto_close_ms: u64,

    /// Toast color scheme
    #[serde(default)]
    pub toast_theme: ToastTheme,

    /// Corner the toasts stack in
    #[serde(default)]
    pub toast_position: ToastPosition,
}

impl UiConfig {
    /// Settings handed to the tool list view
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            page_title: self.page_title.clone(),
            toast: ToastOptions {
                position: self.toast_position,
                auto_close_ms: self.toast_auto_close_ms,
                theme: self.toast_theme,
                ..ToastOptions::default()
            },
        }
    }

    /// Validate UI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.toast_auto_close_ms == 0 || self.toast_auto_close_ms > 60_000 {
            return Err(ValidationError::InvalidToastDuration);
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            toast_auto_close_ms: default_toast_auto_close(),
            toast_theme: ToastTheme::default(),
            toast_position: ToastPosition::default(),
        }
    }
}

fn default_page_title() -> String {
    "TOP PAGE".to_string()
}

fn default_toast_auto_close() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_defaults_match_view_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.view_settings(), ViewSettings::default());
    }

    #[test]
    fn test_custom_toast_settings_flow_into_view() {
        let config = UiConfig {
            toast_auto_close_ms: 5000,
            toast_theme: ToastTheme::Light,
            ..Default::default()
        };
        let settings = config.view_settings();
        assert_eq!(settings.toast.auto_close_ms, 5000);
        assert_eq!(settings.toast.theme, ToastTheme::Light);
        assert!(settings.toast.close_on_click);
    }

    #[test]
    fn test_validation_invalid_toast_duration() {
        let config = UiConfig {
            toast_auto_close_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidToastDuration));
    }
}
