//! Marquee configuration.
//!
//! Every option has a default, so an empty `[marquee]` table is valid.
//! Durations are written in milliseconds in TOML (`*_ms` keys).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::direction::TextDirection;
use crate::error::{GlintError, GlintResult};

/// Default wait before a triggered marquee starts.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);
/// Default wait after a completed pass before resetting.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1000);
/// Reset delays shorter than this are raised to it.
pub const MIN_RESET_DELAY: Duration = Duration::from_millis(40);
/// Default scroll rate in pixels per second.
pub const DEFAULT_SPEED: f32 = 60.0;

/// Which interaction drives a marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeOn {
    /// Start while the pointer is over the widget.
    Hover,
    /// Start while the widget holds focus.
    #[default]
    Focus,
    /// Start as soon as the widget is mounted, and keep cycling.
    Render,
}

/// Placement of content that fits inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush left.
    Left,
    /// Flush right.
    Right,
    /// Centered.
    Center,
}

/// Per-instance marquee options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Trigger mode.
    pub marquee_on: MarqueeOn,
    /// Wait before starting after a trigger.
    #[serde(rename = "marquee_delay_ms", with = "millis")]
    pub marquee_delay: Duration,
    /// Wait before starting when the trigger mode is `render`.
    #[serde(rename = "marquee_on_render_delay_ms", with = "millis")]
    pub marquee_on_render_delay: Duration,
    /// Wait after a completed pass before resetting. Floored at [`MIN_RESET_DELAY`].
    #[serde(rename = "marquee_reset_delay_ms", with = "millis")]
    pub marquee_reset_delay: Duration,
    /// Scroll rate in pixels per second.
    pub marquee_speed: f32,
    /// Suppress animation.
    pub disabled: bool,
    /// Suppress animation and the clip markup around the text.
    pub marquee_disabled: bool,
    /// Overrides the direction inferred from the content.
    pub force_direction: Option<TextDirection>,
    /// Attribute names whose change forces remeasurement.
    pub invalidate_props: Vec<String>,
    /// Placement of fitting content. `None` follows the text direction.
    pub alignment: Option<Alignment>,
}

impl MarqueeConfig {
    /// Sets the trigger mode.
    #[must_use]
    pub fn with_marquee_on(mut self, marquee_on: MarqueeOn) -> Self {
        self.marquee_on = marquee_on;
        self
    }

    /// Sets the trigger delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.marquee_delay = delay;
        self
    }

    /// Sets the render-mode start delay.
    #[must_use]
    pub fn with_on_render_delay(mut self, delay: Duration) -> Self {
        self.marquee_on_render_delay = delay;
        self
    }

    /// Sets the reset delay.
    #[must_use]
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.marquee_reset_delay = delay;
        self
    }

    /// Sets the scroll speed in pixels per second.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.marquee_speed = speed;
        self
    }

    /// Forces a text direction.
    #[must_use]
    pub fn with_force_direction(mut self, direction: TextDirection) -> Self {
        self.force_direction = Some(direction);
        self
    }

    /// Adds an attribute name whose change forces remeasurement.
    #[must_use]
    pub fn with_invalidate_prop(mut self, name: impl Into<String>) -> Self {
        self.invalidate_props.push(name.into());
        self
    }

    /// Returns the reset delay actually used, never below [`MIN_RESET_DELAY`].
    #[must_use]
    pub fn effective_reset_delay(&self) -> Duration {
        self.marquee_reset_delay.max(MIN_RESET_DELAY)
    }

    /// Returns the delay used for the start triggered by mounting.
    #[must_use]
    pub fn mount_delay(&self) -> Duration {
        match self.marquee_on {
            MarqueeOn::Render => self.marquee_on_render_delay,
            MarqueeOn::Focus | MarqueeOn::Hover => self.marquee_delay,
        }
    }

    /// Returns true if animation is suppressed.
    #[inline]
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.disabled || self.marquee_disabled
    }

    /// Returns true if `name` is a layout-affecting attribute.
    #[must_use]
    pub fn invalidates(&self, name: &str) -> bool {
        self.invalidate_props.iter().any(|p| p == name)
    }

    /// Returns true if switching from `self` to `next` must cancel a running pass.
    #[must_use]
    pub fn interrupts(&self, next: &Self) -> bool {
        self.marquee_on != next.marquee_on
            || self.marquee_disabled != next.marquee_disabled
            || self.disabled != next.disabled
            || (self.marquee_speed - next.marquee_speed).abs() > f32::EPSILON
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::InvalidConfig`] for a non-positive or
    /// non-finite speed, or a forced `inherit` direction.
    pub fn validate(&self) -> GlintResult<()> {
        if !self.marquee_speed.is_finite() || self.marquee_speed <= 0.0 {
            return Err(GlintError::InvalidConfig(format!(
                "marquee_speed must be a positive number, got {}",
                self.marquee_speed
            )));
        }
        if self.force_direction == Some(TextDirection::Inherit) {
            return Err(GlintError::InvalidConfig(
                "force_direction must be \"ltr\" or \"rtl\"".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            marquee_on: MarqueeOn::default(),
            marquee_delay: DEFAULT_DELAY,
            marquee_on_render_delay: DEFAULT_DELAY,
            marquee_reset_delay: DEFAULT_RESET_DELAY,
            marquee_speed: DEFAULT_SPEED,
            disabled: false,
            marquee_disabled: false,
            force_direction: None,
            invalidate_props: Vec::new(),
            alignment: None,
        }
    }
}

/// Serde adapter storing a [`Duration`] as whole milliseconds.
pub(crate) mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Serde adapter for an optional [`Duration`] in milliseconds.
pub(crate) mod millis_opt {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => super::millis::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<u64>::deserialize(deserializer).map(|ms| ms.map(Duration::from_millis))
    }
}
