//! Per-instance marquee behavior.
//!
//! ## Lifecycle
//!
//! ```text
//!            trigger                 delay elapsed            pass done
//!   Idle ─────────────▶ Pending ──────────────────▶ Scrolling ─────────▶ Resetting
//!    ▲   (focus/enter/     │     measure; fits? ─┐                          │
//!    │    mount)           │                     │ report Fits             │ max(40ms, reset)
//!    │                     ▼                     ▼                          ▼
//!    └──────────── stop (blur/leave, Stop) ◀── Idle ◀──────── report Scrolled / restart
//! ```
//!
//! Only one job (start or reset) is ever pending. Time moves through
//! [`Marquee::update`].

use std::time::Duration;

use glint_core::{Interaction, Timer};

use super::config::{MarqueeConfig, MarqueeOn};
use super::controller::{Command, Completion, MarqueeController, MarqueeId};
use super::direction::TextDirection;
use super::metrics::{Metrics, OverflowStyle, TextMeasure};
use super::scroll::ScrollAnimation;

/// Delayed work a marquee can have pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Measure and begin a pass.
    Start,
    /// Snap back to the start position after a pass.
    Reset,
}

/// What happened during one [`Marquee::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarqueeResponse {
    /// A scroll pass began.
    pub started: bool,
    /// A scroll pass reached the end of the content.
    pub completed: bool,
    /// The content snapped back to its start position.
    pub reset: bool,
}

/// One marqueeing text region.
#[derive(Debug)]
pub struct Marquee {
    id: MarqueeId,
    content: String,
    config: MarqueeConfig,
    direction: TextDirection,
    metrics: Metrics,
    animating: bool,
    scroll: Option<ScrollAnimation>,
    timer: Timer<Job>,
    sync: Option<MarqueeController>,
    focused: bool,
    hovered: bool,
}

impl Marquee {
    /// Mounts a standalone marquee.
    #[must_use]
    pub fn new(content: impl Into<String>, config: MarqueeConfig) -> Self {
        Self::mount(content.into(), config, None)
    }

    /// Mounts a marquee that takes part in `controller`'s group.
    #[must_use]
    pub fn with_controller(
        content: impl Into<String>,
        config: MarqueeConfig,
        controller: MarqueeController,
    ) -> Self {
        Self::mount(content.into(), config, Some(controller))
    }

    fn mount(content: String, config: MarqueeConfig, sync: Option<MarqueeController>) -> Self {
        let id = MarqueeId::allocate();
        if let Some(controller) = &sync {
            controller.register(id);
        }

        let mut marquee = Self {
            id,
            direction: TextDirection::resolve(&content, config.force_direction),
            content,
            config,
            metrics: Metrics::UNKNOWN,
            animating: false,
            scroll: None,
            timer: Timer::new(),
            sync,
            focused: false,
            hovered: false,
        };

        if marquee.config.marquee_on == MarqueeOn::Render {
            marquee.start_animation(marquee.config.marquee_on_render_delay);
        }
        marquee
    }

    /// Returns this instance's ID.
    #[must_use]
    pub fn id(&self) -> MarqueeId {
        self.id
    }

    /// Returns the current text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Returns the resolved text direction.
    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Returns the overflow metrics.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Returns the overflow distance, `None` until measured.
    #[must_use]
    pub fn distance(&self) -> Option<f32> {
        self.metrics.distance
    }

    /// Returns true if the content was measured and needs no scrolling.
    #[must_use]
    pub fn content_fits(&self) -> bool {
        self.metrics.content_fits
    }

    /// Returns the edge treatment.
    #[must_use]
    pub fn overflow(&self) -> OverflowStyle {
        self.metrics.overflow
    }

    /// Returns true from the start of a pass until its reset.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Returns the active scroll pass.
    #[must_use]
    pub fn scroll(&self) -> Option<&ScrollAnimation> {
        self.scroll.as_ref()
    }

    /// Returns the current horizontal offset of the content.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.scroll.as_ref().map_or(0.0, ScrollAnimation::offset)
    }

    /// Returns the pending job, if any.
    #[must_use]
    pub fn pending_job(&self) -> Option<Job> {
        self.timer.pending().copied()
    }

    /// Returns the time until the pending job fires.
    #[must_use]
    pub fn time_to_pending(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Returns true if this instance belongs to a controller group.
    #[must_use]
    pub fn is_synchronized(&self) -> bool {
        self.sync.is_some()
    }

    /// Routes a user interaction.
    ///
    /// Returns true if the event drives this marquee's trigger mode.
    pub fn handle(&mut self, event: Interaction) -> bool {
        match event {
            Interaction::Focus => self.focused = true,
            Interaction::Blur => self.focused = false,
            Interaction::PointerEnter => self.hovered = true,
            Interaction::PointerLeave => self.hovered = false,
        }

        let drives = matches!(
            (self.config.marquee_on, event),
            (MarqueeOn::Focus, Interaction::Focus | Interaction::Blur)
                | (MarqueeOn::Hover, Interaction::PointerEnter | Interaction::PointerLeave)
        );
        if !drives {
            return false;
        }

        if event.is_activation() {
            self.start_animation(self.config.marquee_delay);
        } else {
            self.cancel_animation();
        }
        true
    }

    /// Replaces the text. A change forces remeasurement.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        if content == self.content {
            return;
        }
        self.content = content;
        self.direction = TextDirection::resolve(&self.content, self.config.force_direction);
        self.invalidate();
    }

    /// Notifies the marquee that the named attributes changed.
    ///
    /// Forces remeasurement if any of them is listed in `invalidate_props`.
    pub fn props_changed<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        if names.into_iter().any(|name| self.config.invalidates(name)) {
            self.invalidate();
        }
    }

    /// Replaces the configuration.
    ///
    /// Changing the trigger mode, speed or either disable flag cancels a
    /// running pass but keeps the measured metrics. A marquee that becomes
    /// suppressed stops alone and counts as finished for its group.
    pub fn set_config(&mut self, config: MarqueeConfig) {
        let interrupts = self.config.interrupts(&config);
        let redirect = self.config.force_direction != config.force_direction;
        self.config = config;

        if redirect {
            self.direction = TextDirection::resolve(&self.content, self.config.force_direction);
        }
        if !(interrupts || redirect) {
            return;
        }
        if self.config.is_suppressed() {
            // The rest of the group keeps running without this member.
            self.stop();
            self.report(Completion::Fits);
        } else {
            self.cancel_animation();
            self.restart_if_triggered();
        }
    }

    /// Drops the measured metrics, cancels any pass and restarts if the
    /// trigger is still active.
    pub fn invalidate(&mut self) {
        tracing::trace!(id = self.id.raw(), "marquee metrics invalidated");
        self.metrics = Metrics::UNKNOWN;
        self.cancel_animation();
        self.restart_if_triggered();
    }

    /// Begins a pass after `delay`, without notifying the group.
    ///
    /// This is what the controller invokes. A request while animating is
    /// ignored. A suppressed marquee, or content already known to fit,
    /// reports completion at once.
    pub fn start(&mut self, delay: Duration) {
        if self.animating {
            return;
        }
        if self.config.is_suppressed() || (self.metrics.is_known() && self.metrics.content_fits) {
            self.report(Completion::Fits);
            return;
        }
        tracing::trace!(id = self.id.raw(), ?delay, "marquee start scheduled");
        self.timer.schedule(delay, Job::Start);
    }

    /// Stops immediately, without notifying the group.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.animating = false;
        self.scroll = None;
    }

    /// Starts this marquee and, if grouped, the rest of its group.
    ///
    /// A suppressed marquee does not drive its group.
    pub fn start_animation(&mut self, delay: Duration) {
        if self.animating {
            return;
        }
        if let Some(sync) = self.group() {
            sync.start(self.id);
        }
        self.start(delay);
    }

    /// Stops this marquee and, if grouped, the rest of its group.
    ///
    /// A suppressed marquee does not drive its group.
    pub fn cancel_animation(&mut self) {
        if let Some(sync) = self.group() {
            sync.cancel(self.id);
        }
        self.stop();
    }

    /// Advances time by `dt`, measuring through `measure` when a pass starts.
    pub fn update(&mut self, dt: Duration, measure: &dyn TextMeasure) -> MarqueeResponse {
        let mut response = MarqueeResponse::default();
        self.drain_commands();

        let mut remaining = dt;
        loop {
            if let Some(scroll) = self.scroll.as_mut().filter(|s| !s.is_complete()) {
                match scroll.advance(remaining) {
                    Some(rest) => {
                        remaining = rest;
                        response.completed = true;
                        self.timer
                            .schedule(self.config.effective_reset_delay(), Job::Reset);
                        continue;
                    }
                    None => break,
                }
            }

            let Some(fired) = self.timer.advance(remaining) else {
                break;
            };
            remaining = fired.overshoot;
            self.run(fired.action, measure, &mut response);
            self.drain_commands();
        }
        response
    }

    fn run(&mut self, job: Job, measure: &dyn TextMeasure, response: &mut MarqueeResponse) {
        match job {
            Job::Start => self.begin_pass(measure, response),
            Job::Reset => {
                self.animating = false;
                self.scroll = None;
                response.reset = true;

                if self.sync.is_some() {
                    self.report(Completion::Scrolled);
                } else if self.is_triggered() {
                    self.start(self.config.marquee_delay);
                }
            }
        }
    }

    fn begin_pass(&mut self, measure: &dyn TextMeasure, response: &mut MarqueeResponse) {
        if self.config.is_suppressed() {
            self.report(Completion::Fits);
            return;
        }
        if !self.metrics.is_known() {
            let Some(extent) = measure.measure(&self.content) else {
                tracing::debug!(id = self.id.raw(), "marquee layout unavailable, skipping pass");
                return;
            };
            self.metrics = Metrics::from_extent(extent);
        }

        let distance = match self.metrics.distance {
            Some(distance) if !self.metrics.content_fits => distance,
            _ => {
                self.report(Completion::Fits);
                return;
            }
        };

        let scroll = ScrollAnimation::new(distance, self.config.marquee_speed, self.direction);
        tracing::debug!(
            id = self.id.raw(),
            distance,
            duration = ?scroll.duration(),
            "marquee pass started"
        );
        self.scroll = Some(scroll);
        self.animating = true;
        response.started = true;
    }

    /// The controller this marquee relays its own start and cancel to.
    fn group(&self) -> Option<&MarqueeController> {
        self.sync.as_ref().filter(|_| !self.config.is_suppressed())
    }

    fn report(&self, completion: Completion) {
        if let Some(sync) = &self.sync {
            sync.complete(self.id, completion);
        }
    }

    fn drain_commands(&mut self) {
        loop {
            let commands = match &self.sync {
                Some(sync) => sync.take_commands(self.id),
                None => return,
            };
            if commands.is_empty() {
                return;
            }
            for command in commands {
                match command {
                    Command::Start => self.start(self.config.marquee_delay),
                    Command::Stop => self.stop(),
                }
            }
        }
    }

    fn is_triggered(&self) -> bool {
        match self.config.marquee_on {
            MarqueeOn::Focus => self.focused,
            MarqueeOn::Hover => self.hovered,
            MarqueeOn::Render => true,
        }
    }

    fn restart_if_triggered(&mut self) {
        if self.is_triggered() {
            self.start_animation(self.config.mount_delay());
        }
    }
}

impl Drop for Marquee {
    fn drop(&mut self) {
        if let Some(sync) = &self.sync {
            sync.unregister(self.id);
        }
    }
}
