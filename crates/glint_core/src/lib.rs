//! # GLINT Core
//!
//! Host-independent primitives shared by every GLINT widget:
//! - An owned, single-slot [`Timer`] driven by frame time
//! - The [`Interaction`] events a widget reacts to
//!
//! ## Time Model
//!
//! Nothing here reads a wall clock. The host advances time by calling
//! `advance(dt)` / `update(dt)` once per frame, which keeps every
//! delayed behavior deterministic and testable.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use glint_core::Timer;
//!
//! let mut timer = Timer::new();
//! timer.schedule(Duration::from_millis(100), "start");
//! assert!(timer.advance(Duration::from_millis(60)).is_none());
//! let fired = timer.advance(Duration::from_millis(60)).map(|f| f.action);
//! assert_eq!(fired, Some("start"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod event;
pub mod timer;

pub use event::Interaction;
pub use timer::{Fired, Timer};
