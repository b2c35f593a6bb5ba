//! Widget system for UI components.
//!
//! Widgets own their state and advance it through [`Widget::update`];
//! rendering only reads it.

mod core;
mod marquee_row;
mod marquee_text;

pub use core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use marquee_row::MarqueeRow;
pub use marquee_text::MarqueeText;
