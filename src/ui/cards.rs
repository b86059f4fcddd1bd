use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Widget};
use ratatui_image::protocol::StatefulProtocolType;
use ratatui_image::{Resize, StatefulImage};

use crate::app::Model;
use crate::catalog::Destination;

use super::layout::{CardRegion, card_columns};
use super::text::{center_offset, truncate_to_width};

/// Draw every card that overlaps the viewport.
///
/// Each card is drawn whole into a scratch buffer and its visible rows are
/// copied into the frame, so partially scrolled cards clip cleanly.
pub fn render_cards(model: &mut Model, frame: &mut Frame, list: Rect) {
    let (card_x, card_width) = card_columns(list);
    if card_width < 6 || list.height == 0 {
        return;
    }
    let visible = model.viewport.visible_range();

    for index in 0..model.layout.len() {
        let Some(slot) = model.layout.slot(index) else {
            continue;
        };
        let rows = slot.rows();
        if rows.end <= visible.start || rows.start >= visible.end {
            continue;
        }

        let destination = Destination::at(index);
        let height = u16::try_from(slot.height).unwrap_or(u16::MAX);
        let card_area = Rect::new(0, 0, card_width, height);
        let mut card_buf = Buffer::empty(card_area);
        let fully_visible = rows.start >= visible.start && rows.end <= visible.end;
        let image_area = draw_card(model, &destination, card_area, &mut card_buf);

        let direct_image = draw_image(model, &destination, image_area, &mut card_buf, fully_visible);

        // Copy the visible slice of the card into the frame.
        let first = visible.start.max(rows.start);
        let last = visible.end.min(rows.end);
        let frame_buf = frame.buffer_mut();
        for row in first..last {
            let src_row = u16::try_from(row - rows.start).unwrap_or(u16::MAX);
            let dst_row = list.y + u16::try_from(row - visible.start).unwrap_or(u16::MAX);
            if dst_row >= frame_buf.area.bottom() || src_row >= card_area.height {
                continue;
            }
            for col in 0..card_width {
                let dst_col = card_x + col;
                if dst_col >= frame_buf.area.right() {
                    break;
                }
                frame_buf[(dst_col, dst_row)] = card_buf[(col, src_row)].clone();
            }
        }

        // iTerm2 keeps the whole payload in one anchor cell, so it can only be
        // drawn straight into the frame when the card is fully on screen.
        if let Some(centered) = direct_image {
            let top = list.y + u16::try_from(rows.start - visible.start).unwrap_or(u16::MAX);
            let target = Rect {
                x: card_x + centered.x,
                y: top + centered.y,
                ..centered
            };
            if let Some((protocol, _, _)) = model.image_protocols.get_mut(&destination.image) {
                StatefulImage::default()
                    .resize(Resize::Fit(None))
                    .render(target, frame.buffer_mut(), protocol);
            }
        }
    }
}

/// Draw the card chrome and text; returns the image area (card-relative).
fn draw_card(model: &Model, destination: &Destination, area: Rect, buf: &mut Buffer) -> Rect {
    let theme = &model.theme;
    let selected = model.selected == destination.index;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            theme.card_border_selected
        } else {
            theme.card_border
        })
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);

    let width = inner.width as usize;
    let row = |region: CardRegion| {
        let offset = model.layout.region_offset(region);
        area.y + u16::try_from(offset).unwrap_or(u16::MAX)
    };

    buf.set_stringn(
        inner.x,
        row(CardRegion::Title),
        truncate_to_width(&destination.title, width),
        width,
        theme.card_title,
    );
    buf.set_stringn(
        inner.x,
        row(CardRegion::Description),
        truncate_to_width(destination.description, width),
        width,
        theme.card_description,
    );

    let button_style = if selected {
        theme.button_selected
    } else {
        theme.button
    };
    let button_row = row(CardRegion::Action);
    let label = truncate_to_width(&destination.action_label, width);
    buf.set_style(Rect::new(inner.x, button_row, inner.width, 1), button_style);
    buf.set_stringn(
        inner.x + center_offset(&label, inner.width),
        button_row,
        &label,
        width,
        button_style,
    );

    Rect::new(
        inner.x,
        row(CardRegion::Image),
        inner.width,
        model.layout.image_rows(),
    )
}

/// Draw the destination image or its placeholder into the card buffer.
///
/// Returns the card-relative rect to draw into when the image must instead
/// be drawn directly on the frame.
fn draw_image(
    model: &mut Model,
    destination: &Destination,
    area: Rect,
    buf: &mut Buffer,
    fully_visible: bool,
) -> Option<Rect> {
    if area.height == 0 || area.width == 0 {
        return None;
    }
    let placeholder_style = model.theme.image_placeholder;
    let images_enabled = model.images_enabled;
    let protocol = model
        .image_protocols
        .get_mut(&destination.image)
        .filter(|_| images_enabled);

    let Some((protocol, width_cols, height_rows)) = protocol else {
        draw_placeholder(&destination.title, area, buf, placeholder_style, false);
        return None;
    };

    let image_area = centered_image_rect(area, *width_cols, *height_rows);

    if matches!(protocol.protocol_type(), StatefulProtocolType::ITerm2(_)) {
        if fully_visible {
            return Some(image_area);
        }
        draw_placeholder(&destination.title, area, buf, placeholder_style, true);
        return None;
    }

    StatefulImage::default()
        .resize(Resize::Fit(None))
        .render(image_area, buf, protocol);
    None
}

/// Center a `cols` x `rows` image inside `area`, clamped to it.
fn centered_image_rect(area: Rect, cols: u16, rows: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(cols) / 2,
        y: area.y + area.height.saturating_sub(rows) / 2,
        width: cols.min(area.width),
        height: rows.min(area.height),
    }
}

fn draw_placeholder(title: &str, area: Rect, buf: &mut Buffer, style: Style, shaded: bool) {
    if shaded {
        buf.set_style(area, Style::default().bg(Color::DarkGray));
    }
    let label = truncate_to_width(&format!("[Image: {title}]"), area.width as usize);
    let y = area.y + area.height / 2;
    buf.set_stringn(
        area.x + center_offset(&label, area.width),
        y,
        &label,
        area.width as usize,
        style,
    );
}
