use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Message, Model};
use crate::catalog::Destination;
use crate::ui::layout::{card_columns, split_screen};

use super::event_loop::ResizeDebouncer;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                tracing::debug!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if let Some(index) = model.open_detail() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ' | 'q') => {
                    Some(Message::DismissDetail(index))
                }
                KeyCode::Char('c') if ctrl => Some(Message::Quit),
                _ => None,
            };
        }

        if model.search.is_focused() {
            return match key.code {
                KeyCode::Esc | KeyCode::Tab | KeyCode::Down => Some(Message::BlurSearch),
                KeyCode::Enter => Some(Message::SubmitSearch),
                KeyCode::Backspace => Some(Message::SearchInput(model.search.without_last_char())),
                KeyCode::Char('c') if ctrl => Some(Message::Quit),
                KeyCode::Char('u') if ctrl => Some(Message::SearchInput(String::new())),
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    Some(Message::SearchInput(model.search.with_char(c)))
                }
                _ => None,
            };
        }

        match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),
            KeyCode::Char(' ') | KeyCode::PageDown => {
                if model.viewport.can_scroll_down() {
                    Some(Message::PageDown)
                } else {
                    None
                }
            }
            KeyCode::Char('b') | KeyCode::PageUp => {
                if model.viewport.can_scroll_up() {
                    Some(Message::PageUp)
                } else {
                    None
                }
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Message::SelectFirst),
            KeyCode::Char('G') | KeyCode::End => Some(Message::SelectLast),

            KeyCode::Enter => Some(Message::ShowDetail(model.selected)),
            KeyCode::Char('/') => Some(Message::FocusSearch),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Quit
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('c') if ctrl => Some(Message::Quit),

            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let click = matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left));
        let pos = Position::new(mouse.column, mouse.row);
        let screen = screen_area(model);

        if model.help_visible {
            return click.then_some(Message::HideHelp);
        }

        if let Some(index) = model.open_detail() {
            if !click {
                return None;
            }
            let popup = crate::ui::detail_dialog_rect(screen, &Destination::at(index));
            let button = crate::ui::detail_dismiss_rect(popup);
            if button.contains(pos) || !popup.contains(pos) {
                return Some(Message::DismissDetail(index));
            }
            return None;
        }

        let areas = split_screen(screen);
        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                if areas.top_bar.contains(pos) {
                    return Some(Message::FocusSearch);
                }
                if areas.list.contains(pos) {
                    return card_at(model, areas.list, pos).map(Message::ShowDetail);
                }
                None
            }
            MouseEventKind::ScrollDown => {
                if model.viewport.can_scroll_down() {
                    Some(Message::ScrollDown(WHEEL_STEP))
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp => {
                if model.viewport.can_scroll_up() {
                    Some(Message::ScrollUp(WHEEL_STEP))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

fn screen_area(model: &Model) -> Rect {
    let (width, height) = model.terminal_size;
    Rect::new(0, 0, width, height)
}

/// Card under a list position; blank rows between cards and the side
/// margins hit nothing.
fn card_at(model: &Model, list: Rect, pos: Position) -> Option<usize> {
    let (card_x, card_width) = card_columns(list);
    if pos.x < card_x || pos.x >= card_x.saturating_add(card_width) {
        return None;
    }
    let row = model.viewport.offset() + usize::from(pos.y - list.y);
    model.layout.hit(row).map(|(index, _)| index)
}
