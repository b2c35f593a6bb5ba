//! Marquee text: overflow measurement, scroll timing and group sync.
//!
//! A [`Marquee`] scrolls text that is wider than its box, then snaps back
//! and (while its trigger holds) goes again. A [`MarqueeController`] keeps
//! a group of marquees in step: they start together, and restart together
//! only once every member has finished.

mod config;
mod controller;
mod direction;
mod instance;
mod metrics;
mod scroll;

pub use config::{
    Alignment, MarqueeConfig, MarqueeOn, DEFAULT_DELAY, DEFAULT_RESET_DELAY, DEFAULT_SPEED,
    MIN_RESET_DELAY,
};
pub use controller::{Command, Completion, ControllerConfig, MarqueeController, MarqueeId};
pub use direction::{is_rtl_char, TextDirection};
pub use instance::{Job, Marquee, MarqueeResponse};
pub use metrics::{
    overflow_distance, Metrics, MonospaceMeasure, OverflowStyle, TextExtent, TextMeasure,
};
pub use scroll::ScrollAnimation;
