//! Adapter configuration.
//!
//! `AdapterConfig` holds the widget appearance applied when an adapter is
//! attached, and the animations used for each kind of incremental update.
//! It can be built in code or loaded from TOML:
//!
//! ```
//! use ribbon::{AdapterConfig, RowAnimation, SeparatorStyle};
//!
//! let config = AdapterConfig::from_toml_str(r#"
//!     estimated_row_height = 64.0
//!     separator_style = "single-line"
//!     insert_animation = "top"
//! "#).unwrap();
//!
//! assert_eq!(config.estimated_row_height, 64.0);
//! assert_eq!(config.separator_style, SeparatorStyle::SingleLine);
//! assert_eq!(config.insert_animation, RowAnimation::Top);
//! // Unset fields keep their defaults.
//! assert!(config.transparent_background);
//! ```

use serde::{Deserialize, Serialize};
use ribbon_core::logging::targets;

use crate::error::Result;
use crate::widget::RowAnimation;

/// How rows are separated visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorStyle {
    /// No separators; cells draw their own dividers if they want any.
    #[default]
    None,
    /// A single hairline between rows.
    SingleLine,
}

/// Configuration for a [`ListAdapter`](crate::ListAdapter) and its widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Initial height estimate for automatically sized rows.
    pub estimated_row_height: f32,
    /// Row separator style.
    pub separator_style: SeparatorStyle,
    /// Whether the widget background is cleared.
    pub transparent_background: bool,
    /// Animation for rows appended to the last section.
    pub append_animation: RowAnimation,
    /// Animation for rows inserted at a position.
    pub insert_animation: RowAnimation,
    /// Animation for removed rows.
    pub delete_animation: RowAnimation,
    /// Animation for rows reloaded in place.
    pub reload_animation: RowAnimation,
    /// Whether the selection highlight fades out after a tap.
    pub animate_deselection: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            estimated_row_height: 100.0,
            separator_style: SeparatorStyle::None,
            transparent_background: true,
            append_animation: RowAnimation::Automatic,
            insert_animation: RowAnimation::Fade,
            delete_animation: RowAnimation::Fade,
            reload_animation: RowAnimation::None,
            animate_deselection: true,
        }
    }
}

impl AdapterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`](crate::AdapterError::Config) on
    /// malformed TOML or unknown enum values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded adapter configuration");
        Ok(config)
    }

    /// Sets the estimated row height.
    pub fn with_estimated_row_height(mut self, height: f32) -> Self {
        self.estimated_row_height = height;
        self
    }

    /// Sets the separator style.
    pub fn with_separator_style(mut self, style: SeparatorStyle) -> Self {
        self.separator_style = style;
        self
    }

    /// Sets whether the widget background is cleared.
    pub fn with_transparent_background(mut self, transparent: bool) -> Self {
        self.transparent_background = transparent;
        self
    }

    /// Sets the animation for appended rows.
    pub fn with_append_animation(mut self, animation: RowAnimation) -> Self {
        self.append_animation = animation;
        self
    }

    /// Sets the animation for inserted rows.
    pub fn with_insert_animation(mut self, animation: RowAnimation) -> Self {
        self.insert_animation = animation;
        self
    }

    /// Sets the animation for removed rows.
    pub fn with_delete_animation(mut self, animation: RowAnimation) -> Self {
        self.delete_animation = animation;
        self
    }

    /// Sets the animation for reloaded rows.
    pub fn with_reload_animation(mut self, animation: RowAnimation) -> Self {
        self.reload_animation = animation;
        self
    }

    /// Sets whether deselection after a tap is animated.
    pub fn with_animate_deselection(mut self, animate: bool) -> Self {
        self.animate_deselection = animate;
        self
    }
}
