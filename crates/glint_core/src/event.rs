//! Interaction events delivered by the host.
//!
//! These are the only user-input signals the marquee cares about. Key and
//! pointer-button handling stays with the host's focus system.

/// A user interaction routed to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The widget (or a descendant) received focus.
    Focus,
    /// The widget lost focus.
    Blur,
    /// The pointer entered the widget bounds.
    PointerEnter,
    /// The pointer left the widget bounds.
    PointerLeave,
}

impl Interaction {
    /// Returns true for events that begin an interaction (focus, enter).
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Focus | Self::PointerEnter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_events() {
        assert!(Interaction::Focus.is_activation());
        assert!(Interaction::PointerEnter.is_activation());
        assert!(!Interaction::Blur.is_activation());
        assert!(!Interaction::PointerLeave.is_activation());
    }
}
