//! # GLINT UI
//!
//! Themed widgets whose labels scroll when their text does not fit:
//! - Overflow measured per label, scrolled at a fixed speed
//! - Start, reset and restart timing driven by frame time
//! - Groups of labels that start and restart in step
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MARQUEE PIPELINE                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  Interaction → Widget → Marquee → Timer → Render Commands │
//! │                   ↓         ↕                             │
//! │              TextMeasure  MarqueeController (AND-join)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use glint_ui::marquee::{Marquee, MarqueeConfig, MarqueeOn, MonospaceMeasure};
//!
//! let config = MarqueeConfig::default().with_marquee_on(MarqueeOn::Render);
//! let mut marquee = Marquee::new("a headline far too long for its box", config);
//! let measure = MonospaceMeasure::new(8.0, 100.0);
//!
//! marquee.update(Duration::from_millis(1000), &measure);
//! assert!(marquee.is_animating());
//! assert_eq!(marquee.distance(), Some(35.0 * 8.0 - 100.0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod layout;
pub mod marquee;
pub mod render;
pub mod style;
pub mod widget;

pub use config::GlintConfig;
pub use error::{GlintError, GlintResult};
pub use layout::{Rect, RowLayout};
pub use marquee::{Marquee, MarqueeConfig, MarqueeController, MarqueeOn};
pub use render::{RenderCommand, UIBatch, UIRenderer};
pub use style::{Color, TextStyle};
pub use widget::{MarqueeRow, MarqueeText, Widget, WidgetId};
