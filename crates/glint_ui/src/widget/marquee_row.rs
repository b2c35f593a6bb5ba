//! A row of marquee columns that scroll as one group.

use std::time::Duration;

use glint_core::Interaction;

use super::core::{Widget, WidgetId, WidgetResponse, WidgetState};
use super::marquee_text::MarqueeText;
use crate::layout::{Rect, RowLayout};
use crate::marquee::{ControllerConfig, MarqueeConfig, MarqueeController, MonospaceMeasure};
use crate::render::RenderCommand;

/// Container owning a [`MarqueeController`] shared by its columns.
///
/// Columns start together and, once every column has finished its pass,
/// restart together.
#[derive(Debug)]
pub struct MarqueeRow {
    state: WidgetState,
    controller: MarqueeController,
    column_config: MarqueeConfig,
    columns: Vec<MarqueeText>,
    widths: Vec<f32>,
    layout: RowLayout,
    cell_width: f32,
}

impl MarqueeRow {
    /// Creates an empty row. New columns use `column_config`.
    #[must_use]
    pub fn new(id: WidgetId, controller: ControllerConfig, column_config: MarqueeConfig) -> Self {
        Self {
            state: WidgetState::new(id),
            controller: MarqueeController::new(controller),
            column_config,
            columns: Vec::new(),
            widths: Vec::new(),
            layout: RowLayout::default(),
            cell_width: MonospaceMeasure::DEFAULT_CELL_WIDTH,
        }
    }

    /// Sets the row layout.
    #[must_use]
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the monospace cell width used by new columns.
    #[must_use]
    pub fn with_cell_width(mut self, cell_width: f32) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Returns the group controller.
    #[must_use]
    pub fn controller(&self) -> &MarqueeController {
        &self.controller
    }

    /// Appends a column of the given width and returns it.
    pub fn push_column(
        &mut self,
        id: WidgetId,
        text: impl Into<String>,
        width: f32,
    ) -> &mut MarqueeText {
        let column = MarqueeText::with_controller(
            id,
            text,
            self.column_config.clone(),
            self.controller.clone(),
        )
        .with_cell_width(self.cell_width);
        self.columns.push(column);
        self.widths.push(width);
        self.relayout();

        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    /// Removes and drops a column, releasing it from the group.
    ///
    /// Returns false if no column has that id.
    pub fn remove_column(&mut self, id: WidgetId) -> bool {
        let Some(index) = self.columns.iter().position(|c| c.state().id == id) else {
            return false;
        };
        self.widths.remove(index);
        drop(self.columns.remove(index));
        self.relayout();
        true
    }

    /// Returns a column by id.
    #[must_use]
    pub fn column(&self, id: WidgetId) -> Option<&MarqueeText> {
        self.columns.iter().find(|c| c.state().id == id)
    }

    /// Returns a column by id, mutably.
    pub fn column_mut(&mut self, id: WidgetId) -> Option<&mut MarqueeText> {
        self.columns.iter_mut().find(|c| c.state().id == id)
    }

    /// Returns all columns in order.
    #[must_use]
    pub fn columns(&self) -> &[MarqueeText] {
        &self.columns
    }

    /// Places the row and lays out its columns.
    pub fn set_bounds(&mut self, rect: Rect) {
        self.state.rect = rect;
        self.relayout();
    }

    fn relayout(&mut self) {
        let rects = self.layout.arrange(self.state.rect, &self.widths);
        for (column, rect) in self.columns.iter_mut().zip(rects) {
            if column.state().rect != rect {
                column.set_bounds(rect);
            }
        }
        self.state.mark_dirty();
    }
}

impl Widget for MarqueeRow {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle(&mut self, event: Interaction) -> WidgetResponse {
        let mut response = self.state.apply(event);
        if self.controller.handle(event) {
            response.changed = true;
            return response;
        }
        for column in &mut self.columns {
            response.changed |= column.handle(event).changed;
        }
        response
    }

    fn update(&mut self, dt: Duration) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        self.controller.update(dt);

        for column in &mut self.columns {
            response = response.merge(column.update(dt));
        }
        // Commands raised by later columns reach earlier ones this frame.
        for column in &mut self.columns {
            response = response.merge(column.update(Duration::ZERO));
        }

        if response.changed {
            self.state.mark_dirty();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }
        commands.push(RenderCommand::PushClip {
            bounds: self.state.rect,
        });
        for column in &self.columns {
            column.render(commands);
        }
        commands.push(RenderCommand::PopClip);
    }

    #[allow(clippy::cast_precision_loss)]
    fn min_size(&self) -> (f32, f32) {
        let gaps = self.widths.len().saturating_sub(1) as f32 * self.layout.gap;
        let width = self.widths.iter().sum::<f32>() + gaps + self.layout.padding * 2.0;
        let height = self
            .columns
            .iter()
            .map(|c| c.min_size().1)
            .fold(0.0, f32::max);
        (width, height + self.layout.padding * 2.0)
    }
}
