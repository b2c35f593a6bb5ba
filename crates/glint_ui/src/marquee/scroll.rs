//! The scrolling primitive.
//!
//! Linear translation of the content by the overflow distance. Marquee text
//! has to be readable while it moves, so there is no easing here.

use std::time::Duration;

use super::direction::TextDirection;

/// One scroll pass from the start position to the end of the content.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    /// Pixels to travel.
    distance: f32,
    /// Offset sign from the text direction.
    sign: f32,
    /// Total pass duration.
    duration: Duration,
    /// Time spent so far.
    elapsed: Duration,
}

impl ScrollAnimation {
    /// Creates a pass over `distance` pixels at `speed` pixels per second.
    ///
    /// A non-positive `speed` produces a pass that completes on the first
    /// advance.
    #[must_use]
    pub fn new(distance: f32, speed: f32, direction: TextDirection) -> Self {
        let duration = if speed > 0.0 && distance > 0.0 {
            Duration::try_from_secs_f32(distance / speed).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };

        Self {
            distance,
            sign: direction.scroll_sign(),
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the total pass duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the pixels travelled at the end of the pass.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Returns progress through the pass (0-1).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Returns the current horizontal offset of the content.
    ///
    /// Negative for left-to-right text, positive for right-to-left.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.sign * self.distance * self.progress()
    }

    /// Returns true once the content has reached its end position.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances the pass by `dt`.
    ///
    /// Returns the unused part of `dt` on the advance that completes the
    /// pass, `None` otherwise.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        if self.is_complete() {
            return None;
        }

        let left = self.duration - self.elapsed;
        if dt < left {
            self.elapsed += dt;
            None
        } else {
            self.elapsed = self.duration;
            Some(dt - left)
        }
    }
}
