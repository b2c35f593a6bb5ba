//! Group synchronization for sibling marquees.
//!
//! A [`MarqueeController`] makes a set of marquees (the columns of one row,
//! say) start together and restart together once *every* one of them has
//! finished its pass.
//!
//! ## Protocol
//!
//! ```text
//!   start(initiator)   → mark all incomplete, Start → everyone else
//!   cancel(initiator)  → mark all incomplete, Stop  → everyone else
//!   complete(id)       → mark id complete
//!                        all complete? → mark all incomplete, Start → everyone
//! ```
//!
//! Commands are not delivered by calling into the instances. They are
//! queued in a per-instance inbox, in registration order, and each
//! [`Marquee`](super::Marquee) drains its inbox during its own update. The
//! registry lock is therefore never held while instance code runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use glint_core::{Interaction, Timer};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::config::millis_opt;

/// Unique identifier of a marquee instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarqueeId(u64);

impl MarqueeId {
    /// Allocates a process-unique ID.
    #[must_use]
    pub fn allocate() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A command the controller sends to one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a pass (after the instance's own start delay).
    Start,
    /// Abort any pass or pending start.
    Stop,
}

/// How an instance finished its part of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// It scrolled to the end and reset.
    Scrolled,
    /// Its content fits, there was nothing to scroll.
    Fits,
}

/// Controller options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Focus on the controller itself starts the group, blur stops it.
    pub start_on_focus: bool,
    /// Force a restart if a round is still incomplete this long after its
    /// first completion. `None` waits forever.
    #[serde(rename = "stall_timeout_ms", with = "millis_opt")]
    pub stall_timeout: Option<Duration>,
}

#[derive(Debug)]
struct Entry {
    id: MarqueeId,
    complete: bool,
    scrolled: bool,
    inbox: Vec<Command>,
}

#[derive(Debug)]
struct Registry {
    entries: Vec<Entry>,
    config: ControllerConfig,
    stall: Timer<()>,
    restarts: u64,
}

impl Registry {
    fn entry_mut(&mut self, id: MarqueeId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    fn mark_all_incomplete(&mut self) {
        for entry in &mut self.entries {
            entry.complete = false;
            entry.scrolled = false;
        }
        self.stall.cancel();
    }

    fn dispatch(&mut self, command: Command, except: Option<MarqueeId>) {
        for entry in &mut self.entries {
            if Some(entry.id) != except {
                entry.inbox.push(command);
            }
        }
    }

    /// Restarts the group if every instance is complete and at least one
    /// actually scrolled this round.
    fn try_join(&mut self) -> bool {
        let all_complete = !self.entries.is_empty() && self.entries.iter().all(|e| e.complete);
        if !all_complete || !self.entries.iter().any(|e| e.scrolled) {
            return false;
        }

        self.mark_all_incomplete();
        self.dispatch(Command::Start, None);
        self.restarts += 1;
        tracing::debug!(members = self.entries.len(), restarts = self.restarts, "marquee group restart");
        true
    }
}

/// Shared handle to a marquee synchronization group.
///
/// Cloning the handle shares the group. Pass a clone to each
/// [`Marquee`](super::Marquee) that should take part.
#[derive(Debug, Clone)]
pub struct MarqueeController {
    inner: Arc<Mutex<Registry>>,
}

impl MarqueeController {
    /// Creates an empty group.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                entries: Vec::with_capacity(8),
                config,
                stall: Timer::new(),
                restarts: 0,
            })),
        }
    }

    /// Adds an instance to the group. Registering twice is a no-op.
    pub fn register(&self, id: MarqueeId) {
        let mut registry = self.inner.lock();
        if registry.entries.iter().any(|e| e.id == id) {
            return;
        }
        registry.entries.push(Entry {
            id,
            complete: false,
            scrolled: false,
            inbox: Vec::new(),
        });
        tracing::trace!(id = id.raw(), "marquee registered");
    }

    /// Removes an instance and drops its undelivered commands.
    ///
    /// If the remaining instances were only waiting on this one, the group
    /// restarts.
    pub fn unregister(&self, id: MarqueeId) {
        let mut registry = self.inner.lock();
        let before = registry.entries.len();
        registry.entries.retain(|e| e.id != id);
        if registry.entries.len() != before {
            tracing::trace!(id = id.raw(), "marquee unregistered");
            registry.try_join();
        }
    }

    /// An instance started on its own: start everyone else.
    pub fn start(&self, initiator: MarqueeId) {
        self.start_from(Some(initiator));
    }

    /// An instance was cancelled on its own: stop everyone else.
    pub fn cancel(&self, initiator: MarqueeId) {
        self.cancel_from(Some(initiator));
    }

    /// Starts every instance in the group.
    pub fn start_all(&self) {
        self.start_from(None);
    }

    /// Stops every instance in the group.
    pub fn cancel_all(&self) {
        self.cancel_from(None);
    }

    fn start_from(&self, initiator: Option<MarqueeId>) {
        let mut registry = self.inner.lock();
        registry.mark_all_incomplete();
        registry.dispatch(Command::Start, initiator);
    }

    fn cancel_from(&self, initiator: Option<MarqueeId>) {
        let mut registry = self.inner.lock();
        registry.mark_all_incomplete();
        registry.dispatch(Command::Stop, initiator);
    }

    /// Records that `id` finished its part of the round.
    ///
    /// Returns true if this completion restarted the group.
    pub fn complete(&self, id: MarqueeId, completion: Completion) -> bool {
        let mut registry = self.inner.lock();
        let Some(entry) = registry.entry_mut(id) else {
            return false;
        };
        entry.complete = true;
        entry.scrolled |= completion == Completion::Scrolled;

        if registry.try_join() {
            return true;
        }

        let stall_timeout = registry.config.stall_timeout;
        if let Some(timeout) = stall_timeout {
            if !registry.stall.is_pending() {
                registry.stall.schedule(timeout, ());
            }
        }
        false
    }

    /// Routes an interaction aimed at the controller itself.
    ///
    /// Only acts when `start_on_focus` is set. Returns true if handled.
    pub fn handle(&self, event: Interaction) -> bool {
        if !self.inner.lock().config.start_on_focus {
            return false;
        }
        match event {
            Interaction::Focus => self.start_all(),
            Interaction::Blur => self.cancel_all(),
            Interaction::PointerEnter | Interaction::PointerLeave => return false,
        }
        true
    }

    /// Advances the stall timer.
    ///
    /// Returns true if a stalled round was forced to restart.
    pub fn update(&self, dt: Duration) -> bool {
        let mut registry = self.inner.lock();
        if registry.stall.advance(dt).is_none() {
            return false;
        }

        let stragglers: Vec<MarqueeId> = registry
            .entries
            .iter()
            .filter(|e| !e.complete)
            .map(|e| e.id)
            .collect();
        if stragglers.is_empty() {
            return false;
        }

        tracing::warn!(
            stalled = stragglers.len(),
            members = registry.entries.len(),
            "marquee group stalled, forcing restart"
        );
        for id in stragglers {
            if let Some(entry) = registry.entry_mut(id) {
                entry.inbox.push(Command::Stop);
            }
        }
        registry.mark_all_incomplete();
        registry.dispatch(Command::Start, None);
        registry.restarts += 1;
        true
    }

    /// Takes the commands queued for `id`, oldest first.
    #[must_use]
    pub fn take_commands(&self, id: MarqueeId) -> Vec<Command> {
        self.inner
            .lock()
            .entry_mut(id)
            .map(|e| std::mem::take(&mut e.inbox))
            .unwrap_or_default()
    }

    /// Returns the completion flag of `id`, `None` if not registered.
    #[must_use]
    pub fn is_complete(&self, id: MarqueeId) -> Option<bool> {
        self.inner
            .lock()
            .entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.complete)
    }

    /// Returns true if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: MarqueeId) -> bool {
        self.inner.lock().entries.iter().any(|e| e.id == id)
    }

    /// Returns the number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns true if no instance is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Returns how many times the group has restarted.
    #[must_use]
    pub fn restarts(&self) -> u64 {
        self.inner.lock().restarts
    }

    /// Returns true if a stall timeout is armed.
    #[must_use]
    pub fn is_stall_armed(&self) -> bool {
        self.inner.lock().stall.is_pending()
    }
}

impl Default for MarqueeController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(n: usize) -> (MarqueeController, Vec<MarqueeId>) {
        let controller = MarqueeController::default();
        let ids: Vec<_> = (0..n).map(|_| MarqueeId::allocate()).collect();
        for &id in &ids {
            controller.register(id);
        }
        (controller, ids)
    }

    #[test]
    fn test_start_skips_initiator() {
        let (controller, ids) = group(3);
        controller.start(ids[0]);

        assert!(controller.take_commands(ids[0]).is_empty());
        assert_eq!(controller.take_commands(ids[1]), vec![Command::Start]);
        assert_eq!(controller.take_commands(ids[2]), vec![Command::Start]);
    }

    #[test]
    fn test_cancel_skips_initiator() {
        let (controller, ids) = group(2);
        controller.cancel(ids[1]);
        assert_eq!(controller.take_commands(ids[0]), vec![Command::Stop]);
        assert!(controller.take_commands(ids[1]).is_empty());
    }

    #[test]
    fn test_and_join_waits_for_everyone() {
        let (controller, ids) = group(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);

        assert!(!controller.complete(a, Completion::Scrolled));
        assert!(!controller.complete(b, Completion::Scrolled));
        for &id in &ids {
            assert!(controller.take_commands(id).is_empty());
        }

        assert!(controller.complete(c, Completion::Scrolled));
        for &id in &ids {
            assert_eq!(controller.take_commands(id), vec![Command::Start]);
            assert_eq!(controller.is_complete(id), Some(false));
        }
        assert_eq!(controller.restarts(), 1);
    }

    #[test]
    fn test_start_resets_completion() {
        let (controller, ids) = group(2);
        controller.complete(ids[0], Completion::Scrolled);
        controller.start(ids[1]);
        assert_eq!(controller.is_complete(ids[0]), Some(false));

        // ids[0] must complete again before the group can join.
        assert!(!controller.complete(ids[1], Completion::Scrolled));
    }

    #[test]
    fn test_all_fitting_round_does_not_restart() {
        let (controller, ids) = group(2);
        controller.complete(ids[0], Completion::Fits);
        assert!(!controller.complete(ids[1], Completion::Fits));
        assert_eq!(controller.restarts(), 0);

        let (controller, ids) = group(2);
        controller.complete(ids[0], Completion::Fits);
        assert!(controller.complete(ids[1], Completion::Scrolled));
    }

    #[test]
    fn test_unregister_releases_waiting_group() {
        let (controller, ids) = group(3);
        controller.complete(ids[0], Completion::Scrolled);
        controller.complete(ids[1], Completion::Scrolled);

        controller.unregister(ids[2]);
        assert_eq!(controller.len(), 2);
        assert_eq!(controller.take_commands(ids[0]), vec![Command::Start]);
        assert!(controller.take_commands(ids[2]).is_empty());
    }

    #[test]
    fn test_register_is_idempotent() {
        let (controller, ids) = group(1);
        controller.register(ids[0]);
        assert_eq!(controller.len(), 1);
        assert!(!controller.is_empty());
    }

    #[test]
    fn test_start_on_focus() {
        let controller = MarqueeController::new(ControllerConfig {
            start_on_focus: true,
            ..ControllerConfig::default()
        });
        let id = MarqueeId::allocate();
        controller.register(id);

        assert!(controller.handle(Interaction::Focus));
        assert!(controller.handle(Interaction::Blur));
        assert!(!controller.handle(Interaction::PointerEnter));
        assert_eq!(
            controller.take_commands(id),
            vec![Command::Start, Command::Stop]
        );

        let passive = MarqueeController::default();
        assert!(!passive.handle(Interaction::Focus));
    }

    #[test]
    fn test_stall_timeout_forces_restart() {
        let controller = MarqueeController::new(ControllerConfig {
            stall_timeout: Some(Duration::from_secs(5)),
            ..ControllerConfig::default()
        });
        let (a, b) = (MarqueeId::allocate(), MarqueeId::allocate());
        controller.register(a);
        controller.register(b);

        assert!(!controller.is_stall_armed());
        controller.complete(a, Completion::Scrolled);
        assert!(controller.is_stall_armed());

        assert!(!controller.update(Duration::from_secs(4)));
        assert!(controller.update(Duration::from_secs(1)));
        assert_eq!(controller.take_commands(a), vec![Command::Start]);
        assert_eq!(controller.take_commands(b), vec![Command::Stop, Command::Start]);
    }

    #[test]
    fn test_no_stall_timeout_by_default() {
        let (controller, ids) = group(2);
        controller.complete(ids[0], Completion::Scrolled);
        assert!(!controller.is_stall_armed());
        assert!(!controller.update(Duration::from_secs(3600)));
    }
}
