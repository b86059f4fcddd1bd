use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::catalog::{DISMISS_LABEL, Destination};

use super::text::{truncate_to_width, wrap_words};

const DIALOG_MIN_WIDTH: u16 = 30;
const DIALOG_MAX_WIDTH: u16 = 60;

/// Where the detail dialog for `destination` sits inside `area`.
pub fn detail_dialog_rect(area: Rect, destination: &Destination) -> Rect {
    let width = area
        .width
        .saturating_sub(8)
        .clamp(DIALOG_MIN_WIDTH, DIALOG_MAX_WIDTH);
    let inner_width = width.saturating_sub(4) as usize;
    let body_rows = wrap_words(destination.description, inner_width).len().max(1);
    // border + padding on both sides, title, gap, body, gap, button
    let needed = u16::try_from(body_rows).unwrap_or(u16::MAX).saturating_add(8);
    centered_popup_rect(width, needed, area)
}

/// The dismiss button inside a detail dialog.
pub fn detail_dismiss_rect(popup: Rect) -> Rect {
    let label_width = u16::try_from(dismiss_button_label().width()).unwrap_or(u16::MAX);
    let inner_right = popup.right().saturating_sub(2);
    let y = popup.bottom().saturating_sub(3);
    let x = inner_right.saturating_sub(label_width).max(popup.x);
    Rect::new(x, y, label_width.min(popup.width), 1)
}

fn dismiss_button_label() -> String {
    format!("[ {DISMISS_LABEL} ]")
}

pub fn render_detail_overlay(model: &Model, frame: &mut Frame, area: Rect, index: usize) {
    let destination = Destination::at(index);
    let popup = detail_dialog_rect(area, &destination);
    let theme = &model.theme;
    let inner_width = popup.width.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled(
        truncate_to_width(&destination.title, inner_width),
        theme.dialog_title,
    ));
    lines.push(Line::raw(""));
    for body in wrap_words(destination.description, inner_width) {
        lines.push(Line::raw(body));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::uniform(1))
        .style(theme.dialog);
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    let button = detail_dismiss_rect(popup);
    frame.render_widget(
        Paragraph::new(dismiss_button_label()).style(theme.button_selected),
        button,
    );
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);
    let theme = &model.theme;

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("List", theme.section));
    lines.push(Line::raw("  j/k or Up/Down      Next / previous card"));
    lines.push(Line::raw("  Space/PageDown      Page down"));
    lines.push(Line::raw("  b/PageUp            Page up"));
    lines.push(Line::raw("  g / G               First / last card"));
    lines.push(Line::raw("  Enter or click      Show detail"));
    lines.push(Line::raw("  Esc / Enter         Close detail"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Search", theme.section));
    lines.push(Line::raw("  /                   Focus search field"));
    lines.push(Line::raw("  Esc / Tab / Down    Back to the list"));
    lines.push(Line::raw("  Ctrl-u              Clear field"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", theme.section));
    lines.push(Line::raw("  q / Ctrl-c          Quit"));
    lines.push(Line::raw("  ? / F1              Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", theme.section));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));
    lines.push(Line::raw(format!(
        "  Assets: {}",
        model.assets.dir().display()
    )));
    lines.push(Line::raw(""));
    lines.push(Line::styled("any key closes", theme.dim));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(theme.dialog);

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
