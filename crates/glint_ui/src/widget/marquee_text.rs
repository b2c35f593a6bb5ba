//! A text label with marquee behavior.
//!
//! The marquee is composed into the widget's own update and render path:
//! interactions drive the trigger, layout changes invalidate the metrics,
//! and rendering translates the text inside a clip region.

use std::collections::BTreeMap;
use std::time::Duration;

use glint_core::Interaction;

use super::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::layout::Rect;
use crate::marquee::{
    Alignment, Marquee, MarqueeConfig, MarqueeController, MonospaceMeasure, TextDirection,
};
use crate::render::RenderCommand;
use crate::style::TextStyle;

/// Text that scrolls when it does not fit its box.
#[derive(Debug)]
pub struct MarqueeText {
    state: WidgetState,
    marquee: Marquee,
    measure: MonospaceMeasure,
    style: TextStyle,
    /// Attributes passed through to the host untouched.
    attributes: BTreeMap<String, String>,
}

impl MarqueeText {
    /// Creates a standalone marquee label.
    #[must_use]
    pub fn new(id: WidgetId, text: impl Into<String>, config: MarqueeConfig) -> Self {
        Self::from_marquee(id, Marquee::new(text, config))
    }

    /// Creates a label that takes part in `controller`'s group.
    #[must_use]
    pub fn with_controller(
        id: WidgetId,
        text: impl Into<String>,
        config: MarqueeConfig,
        controller: MarqueeController,
    ) -> Self {
        Self::from_marquee(id, Marquee::with_controller(text, config, controller))
    }

    fn from_marquee(id: WidgetId, marquee: Marquee) -> Self {
        let mut state = WidgetState::new(id);
        state.flags.assign(WidgetFlags::ENABLED, !marquee.config().disabled);
        Self {
            state,
            marquee,
            measure: MonospaceMeasure::default(),
            style: TextStyle::default(),
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the text style.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the monospace cell width used for measurement.
    #[must_use]
    pub fn with_cell_width(mut self, cell_width: f32) -> Self {
        self.measure.cell_width = cell_width;
        self
    }

    /// Returns the marquee behind this label.
    #[must_use]
    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.marquee.content()
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.marquee.content() {
            self.marquee.set_content(text);
            self.state.mark_dirty();
        }
    }

    /// Places the label. A width change invalidates the overflow metrics.
    pub fn set_bounds(&mut self, rect: Rect) {
        let width_changed = self.measure.box_width != Some(rect.width);
        self.state.rect = rect;
        self.measure.box_width = Some(rect.width);
        if width_changed {
            self.marquee.invalidate();
        }
        self.state.mark_dirty();
    }

    /// Enables or disables the label. Disabled labels never scroll.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.marquee.config().disabled == disabled {
            return;
        }
        let config = MarqueeConfig {
            disabled,
            ..self.marquee.config().clone()
        };
        self.marquee.set_config(config);
        self.state.flags.assign(WidgetFlags::ENABLED, !disabled);
        self.state.mark_dirty();
    }

    /// Replaces the marquee configuration.
    pub fn set_config(&mut self, config: MarqueeConfig) {
        self.state.flags.assign(WidgetFlags::ENABLED, !config.disabled);
        self.marquee.set_config(config);
        self.state.mark_dirty();
    }

    /// Sets a pass-through attribute.
    ///
    /// Attributes named in the config's `invalidate_props` force
    /// remeasurement when their value changes.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if self.attributes.get(&name) == Some(&value) {
            return;
        }
        self.marquee.props_changed([name.as_str()]);
        self.attributes.insert(name, value);
        self.state.mark_dirty();
    }

    /// Returns a pass-through attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns all pass-through attributes, sorted by name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Horizontal position of the text origin relative to the box, before
    /// the scroll offset.
    fn text_origin(&self) -> f32 {
        let direction = self.marquee.direction();
        let slack = self.state.rect.width - self.measure.content_width(self.text());

        if slack < 0.0 {
            // Overflowing RTL text shows its start at the right edge.
            return if direction == TextDirection::Rtl { slack } else { 0.0 };
        }

        let alignment = self.marquee.config().alignment.unwrap_or(match direction {
            TextDirection::Rtl => Alignment::Right,
            TextDirection::Ltr | TextDirection::Inherit => Alignment::Left,
        });
        match alignment {
            Alignment::Left => 0.0,
            Alignment::Right => slack,
            Alignment::Center => slack * 0.5,
        }
    }
}

impl Widget for MarqueeText {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle(&mut self, event: Interaction) -> WidgetResponse {
        let mut response = self.state.apply(event);
        if self.marquee.handle(event) {
            response.changed = true;
            self.state.mark_dirty();
        }
        response
    }

    fn update(&mut self, dt: Duration) -> WidgetResponse {
        let marquee = self.marquee.update(dt, &self.measure);
        let changed = marquee.started || marquee.reset || self.marquee.is_animating();
        if changed {
            self.state.mark_dirty();
        }
        WidgetResponse {
            changed,
            ..WidgetResponse::default()
        }
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }

        let rect = self.state.rect;
        let color = if self.state.is_enabled() {
            self.style.color
        } else {
            self.style.disabled_color
        };
        let text = self.text().to_owned();
        let x = rect.x + self.text_origin();

        if self.marquee.config().marquee_disabled {
            commands.push(RenderCommand::Text {
                text,
                x,
                y: rect.y,
                color,
                font_size: self.style.font_size,
                direction: self.marquee.direction(),
                overflow: None,
            });
            return;
        }

        commands.push(RenderCommand::PushClip { bounds: rect });
        commands.push(RenderCommand::Text {
            text,
            x: x + self.marquee.offset(),
            y: rect.y,
            color,
            font_size: self.style.font_size,
            direction: self.marquee.direction(),
            overflow: Some(self.marquee.overflow()),
        });
        commands.push(RenderCommand::PopClip);
    }

    fn min_size(&self) -> (f32, f32) {
        (self.measure.cell_width, self.style.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marquee::{MarqueeOn, OverflowStyle};
    use crate::style::Color;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// 30 cells of 10px in a 100px box: 200px of overflow.
    fn label(config: MarqueeConfig) -> MarqueeText {
        let mut label = MarqueeText::new(WidgetId::new(1), "a".repeat(30), config)
            .with_cell_width(10.0);
        label.set_bounds(Rect::new(0.0, 0.0, 100.0, 20.0));
        label
    }

    fn text_x(commands: &[RenderCommand]) -> f32 {
        commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::Text { x, .. } => Some(*x),
                _ => None,
            })
            .expect("text command")
    }

    #[test]
    fn test_focus_scrolls_text() {
        let mut label = label(MarqueeConfig::default());
        assert!(label.handle(Interaction::Focus).focused);

        label.update(ms(1_000));
        label.update(ms(1_500));
        assert!(label.marquee().is_animating());

        let mut commands = Vec::new();
        label.render(&mut commands);
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], RenderCommand::PushClip { .. }));
        assert!(text_x(&commands) < 0.0);
        assert!(matches!(
            commands[1],
            RenderCommand::Text {
                overflow: Some(OverflowStyle::Ellipsis),
                ..
            }
        ));
    }

    #[test]
    fn test_marquee_disabled_strips_clip() {
        let config = MarqueeConfig {
            marquee_disabled: true,
            ..MarqueeConfig::default()
        };
        let label = label(config);

        let mut commands = Vec::new();
        label.render(&mut commands);
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], RenderCommand::Text { overflow: None, .. }));
    }

    #[test]
    fn test_resize_invalidates() {
        let mut label = label(MarqueeConfig::default().with_marquee_on(MarqueeOn::Render));
        label.update(ms(1_000));
        assert_eq!(label.marquee().distance(), Some(200.0));

        label.set_bounds(Rect::new(0.0, 0.0, 400.0, 20.0));
        assert_eq!(label.marquee().distance(), None);

        label.update(ms(1_000));
        assert!(label.marquee().content_fits());
        assert!(!label.marquee().is_animating());
    }

    #[test]
    fn test_attributes_pass_through() {
        let config = MarqueeConfig::default().with_invalidate_prop("font");
        let mut label = label(config);
        label.handle(Interaction::Focus);
        label.update(ms(1_000));

        label.set_attribute("aria-label", "Title");
        assert_eq!(label.attribute("aria-label"), Some("Title"));
        assert!(label.marquee().is_animating());

        label.set_attribute("font", "large");
        assert!(!label.marquee().is_animating());
        assert_eq!(label.marquee().distance(), None);
        assert_eq!(label.attributes().count(), 2);
    }

    #[test]
    fn test_fitting_text_alignment() {
        let config = MarqueeConfig {
            alignment: Some(Alignment::Center),
            ..MarqueeConfig::default()
        };
        let mut label = MarqueeText::new(WidgetId::new(2), "abcd", config).with_cell_width(10.0);
        label.set_bounds(Rect::new(0.0, 0.0, 100.0, 20.0));

        let mut commands = Vec::new();
        label.render(&mut commands);
        assert!((text_x(&commands) - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_disabled_label_uses_disabled_color() {
        let style = TextStyle {
            color: Color::rgba(1.0, 0.8, 0.0, 1.0),
            disabled_color: Color::rgba(0.3, 0.3, 0.3, 1.0),
            font_size: 12.0,
        };
        let mut label = label(MarqueeConfig::default()).with_style(style);

        let color_of = |label: &MarqueeText| {
            let mut commands = Vec::new();
            label.render(&mut commands);
            commands.iter().find_map(|c| match c {
                RenderCommand::Text { color, font_size, .. } => Some((*color, *font_size)),
                _ => None,
            })
        };
        assert_eq!(color_of(&label), Some((style.color, 12.0)));

        label.set_disabled(true);
        assert_eq!(color_of(&label), Some((style.disabled_color, 12.0)));
    }

    #[test]
    fn test_disabled_label_stays_still() {
        let mut label = label(MarqueeConfig::default());
        label.set_disabled(true);
        assert!(!label.state().is_enabled());

        label.handle(Interaction::Focus);
        label.update(ms(5_000));
        assert!(!label.marquee().is_animating());
    }
}
