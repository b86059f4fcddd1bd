use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::catalog::ITEM_COUNT;
use crate::search::SEARCH_PLACEHOLDER;

/// Decorative icon drawn at the start of the search field.
pub const SEARCH_ICON: &str = "⌕";

/// Draw the bordered search field that fills the top bar.
pub fn render_search_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let theme = &model.theme;
    let focused = model.search.is_focused();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme.search_border_focused
        } else {
            theme.search_border
        });
    let inner = block.inner(area);

    let mut spans = vec![
        Span::styled(SEARCH_ICON, theme.search_icon),
        Span::raw(" "),
    ];
    let text = model.search.text();
    let prefix_width = SEARCH_ICON.width() + 1;
    let room = (inner.width as usize).saturating_sub(prefix_width + 1);
    if text.is_empty() && !focused {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, theme.search_placeholder));
    } else {
        spans.push(Span::styled(tail_to_width(text, room), theme.search_text));
    }
    if focused {
        spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let focus_indicator = if model.search.is_focused() {
        "  [search]"
    } else {
        ""
    };
    let status = format!(
        " Wisata Jogja  {}/{}  [{}%]{}  ?:help",
        model.selected + 1,
        ITEM_COUNT,
        model.viewport.scroll_percent(),
        focus_indicator
    );
    let bar = Paragraph::new(status).style(model.theme.status_bar);
    frame.render_widget(bar, area);
}

/// Keep the end of `text` so the most recent keystrokes stay visible.
fn tail_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            break;
        }
        kept.push(c);
        used += w;
    }
    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_to_width_keeps_end() {
        assert_eq!(tail_to_width("yogyakarta", 4), "arta");
        assert_eq!(tail_to_width("jogja", 10), "jogja");
    }
}
