//! Screen and card geometry.
//!
//! A card is a bordered block with one row each for the title, description
//! and action button, an image area of `image_rows`, and single blank rows
//! separating those parts. Cards are stacked with [`CARD_GAP`] rows after
//! each one.

use std::ops::Range;

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows occupied by the bordered search bar.
pub const TOP_BAR_HEIGHT: u16 = 3;
/// Blank rows after each card.
pub const CARD_GAP: usize = 1;
/// Columns left blank on each side of a card.
pub const CARD_SIDE_MARGIN: u16 = 2;

/// The three stacked regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub top_bar: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Split the frame into search bar, card list and status bar.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let [top_bar, list, status] = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas {
        top_bar,
        list,
        status,
    }
}

/// Height of the list viewport for a terminal of `height` rows.
pub fn list_height(width: u16, height: u16) -> u16 {
    split_screen(Rect::new(0, 0, width, height)).list.height
}

/// Horizontal extent of the cards inside the list area.
pub const fn card_columns(list: Rect) -> (u16, u16) {
    let x = list.x.saturating_add(CARD_SIDE_MARGIN);
    let width = list.width.saturating_sub(CARD_SIDE_MARGIN * 2);
    (x, width)
}

/// Columns available to a card's content (inside border and padding).
pub const fn card_content_width(list_width: u16) -> u16 {
    list_width.saturating_sub(CARD_SIDE_MARGIN * 2 + 4)
}

/// Part of a card under a given row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRegion {
    Border,
    Title,
    Image,
    Description,
    Action,
    Spacing,
}

/// Where one card sits in the list, in list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub top: usize,
    pub height: usize,
}

impl CardSlot {
    pub const fn rows(&self) -> Range<usize> {
        self.top..self.top + self.height
    }
}

/// Vertical layout of every card in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    image_rows: u16,
    slots: Vec<CardSlot>,
    total_rows: usize,
}

impl ListLayout {
    pub fn new(count: usize, image_rows: u16) -> Self {
        let height = Self::card_height(image_rows);
        let slots: Vec<CardSlot> = (0..count)
            .map(|i| CardSlot {
                top: i * (height + CARD_GAP),
                height,
            })
            .collect();
        Self {
            image_rows,
            slots,
            total_rows: count * (height + CARD_GAP),
        }
    }

    /// Card height including its border.
    pub const fn card_height(image_rows: u16) -> usize {
        image_rows as usize + 8
    }

    pub const fn image_rows(&self) -> u16 {
        self.image_rows
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn slot(&self, index: usize) -> Option<CardSlot> {
        self.slots.get(index).copied()
    }

    /// Card index and region under list row `row`, if any.
    pub fn hit(&self, row: usize) -> Option<(usize, CardRegion)> {
        let stride = self.slots.first()?.height + CARD_GAP;
        let index = row / stride;
        let slot = self.slot(index)?;
        let within = row - slot.top;
        if within >= slot.height {
            return None;
        }
        Some((index, self.region_at(within)))
    }

    /// Region for a row offset inside a card.
    pub const fn region_at(&self, within: usize) -> CardRegion {
        let img = self.image_rows as usize;
        match within {
            0 => CardRegion::Border,
            1 => CardRegion::Title,
            r if r >= 3 && r < 3 + img => CardRegion::Image,
            r if r == 4 + img => CardRegion::Description,
            r if r == 6 + img => CardRegion::Action,
            r if r == 7 + img => CardRegion::Border,
            _ => CardRegion::Spacing,
        }
    }

    /// Row offset of `region` inside a card (first row for the image).
    pub const fn region_offset(&self, region: CardRegion) -> usize {
        let img = self.image_rows as usize;
        match region {
            CardRegion::Border => 0,
            CardRegion::Title => 1,
            CardRegion::Spacing => 2,
            CardRegion::Image => 3,
            CardRegion::Description => 4 + img,
            CardRegion::Action => 6 + img,
        }
    }
}
