use ratatui::prelude::*;
use ratatui::widgets::Clear;

use crate::app::Model;

use super::layout::split_screen;
use super::{cards, overlays, status};

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let areas = split_screen(area);

    status::render_search_bar(model, frame, areas.top_bar);

    // Clear the list first so image cells from earlier frames do not linger.
    frame.render_widget(Clear, areas.list);
    cards::render_cards(model, frame, areas.list);

    status::render_status_bar(model, frame, areas.status);

    if let Some(index) = model.open_detail() {
        overlays::render_detail_overlay(model, frame, area, index);
    }
    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}
