use crate::app::Model;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Move keyboard focus to the next card
    SelectNext,
    /// Move keyboard focus to the previous card
    SelectPrev,
    /// Focus the first card
    SelectFirst,
    /// Focus the last card
    SelectLast,
    /// Scroll up by n rows
    ScrollUp(usize),
    /// Scroll down by n rows
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,

    // Cards
    /// Card body or action button activated
    ShowDetail(usize),
    /// Detail dialog dismissed
    DismissDetail(usize),

    // Search
    /// Give the search field keyboard focus
    FocusSearch,
    /// Return keyboard focus to the list
    BlurSearch,
    /// Replace the search text
    SearchInput(String),
    /// Submit the search field
    SubmitSearch,

    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::SelectNext => {
            let last = model.layout.len().saturating_sub(1);
            let next = (model.selected + 1).min(last);
            model.select(next);
        }
        Message::SelectPrev => {
            let prev = model.selected.saturating_sub(1);
            model.select(prev);
        }
        Message::SelectFirst => {
            model.select(0);
            model.viewport.go_to_top();
        }
        Message::SelectLast => {
            model.select(model.layout.len().saturating_sub(1));
            model.viewport.go_to_bottom();
        }
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),

        // Cards
        Message::ShowDetail(index) => {
            if index < model.layout.len() {
                model.selected = index;
                model.show_detail(index);
            }
        }
        Message::DismissDetail(index) => model.dismiss_detail(index),

        // Search
        Message::FocusSearch => model.search.focus(),
        Message::BlurSearch => model.search.blur(),
        Message::SearchInput(text) => model.search.set_text(text),
        Message::SubmitSearch => model.search.submit(),

        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => {
            model.resize(width, height);
        }
        Message::Redraw => {}

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model
}
