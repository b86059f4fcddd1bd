use super::*;
use crate::app::Model;
use crate::catalog::ImageAsset;
use crate::image::AssetLoader;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui_image::picker::Picker;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_text(model: &mut Model) -> String {
    let (width, height) = model.terminal_size;
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn write_test_png(dir: &std::path::Path, name: &str) {
    use image::{Rgb, RgbImage};
    let img = RgbImage::from_pixel(40, 20, Rgb([200, 120, 40]));
    img.save(dir.join(format!("{name}.png"))).unwrap();
}

#[test]
fn test_render_shows_image_placeholder_without_picker() {
    let mut model = Model::new((80, 24), 8);
    let content = render_text(&mut model);
    assert!(
        content.contains("[Image: Candi Prambanan]"),
        "Should show image placeholder"
    );
}

#[test]
fn test_missing_assets_yield_placeholder_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = Model::new((80, 24), 8).with_picker(Some(Picker::halfblocks()));
    model.assets = AssetLoader::new(dir.path());

    model.load_nearby_images();

    assert!(model.image_protocols.is_empty());
    assert!(model.asset_failed(ImageAsset::CandiPrambanan));
    let content = render_text(&mut model);
    assert!(content.contains("[Image: Candi Prambanan]"));
}

#[test]
fn test_failed_asset_is_not_retried() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = Model::new((80, 24), 8).with_picker(Some(Picker::halfblocks()));
    model.assets = AssetLoader::new(dir.path());
    model.load_nearby_images();

    // Appearing later does not help; the failure is remembered.
    write_test_png(dir.path(), "candiprambanan");
    model.load_nearby_images();
    assert!(!model.image_protocols.contains_key(&ImageAsset::CandiPrambanan));
}

#[test]
fn test_load_nearby_images_creates_protocol_from_asset_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_test_png(dir.path(), "candiprambanan");

    let mut model = Model::new((80, 24), 8).with_picker(Some(Picker::halfblocks()));
    model.assets = AssetLoader::new(dir.path());
    model.load_nearby_images();

    let (_, width_cols, height_rows) = model
        .image_protocols
        .get(&ImageAsset::CandiPrambanan)
        .expect("protocol for candiprambanan");
    assert!(*width_cols > 0 && *width_cols <= 72);
    assert!(*height_rows > 0 && *height_rows <= 8);

    let content = render_text(&mut model);
    assert!(
        !content.contains("[Image: Candi Prambanan]"),
        "Loaded image should replace the placeholder"
    );
}

#[test]
fn test_assets_outside_lookahead_rescale_after_width_change() {
    let dir = tempfile::tempdir().unwrap();
    write_test_png(dir.path(), "candiprambanan");
    write_test_png(dir.path(), "tebingbreksi");

    // A two-row list only looks ahead four rows, so the second card is out of reach.
    let mut model = Model::new((80, 6), 8).with_picker(Some(Picker::halfblocks()));
    model.assets = AssetLoader::new(dir.path());
    model.load_nearby_images();
    assert_eq!(model.image_scale_width(ImageAsset::CandiPrambanan), Some(72));
    assert_eq!(model.image_scale_width(ImageAsset::TebingBreksi), None);

    model.viewport.scroll_down(17);
    model.load_nearby_images();
    assert_eq!(model.image_scale_width(ImageAsset::TebingBreksi), Some(72));

    // Widen while the second card is far away.
    model.viewport.go_to_top();
    let mut model = crate::app::update(model, crate::app::Message::Resize(120, 6));
    model.load_nearby_images();
    assert_eq!(model.image_scale_width(ImageAsset::CandiPrambanan), Some(112));
    assert_eq!(model.image_scale_width(ImageAsset::TebingBreksi), Some(72));

    model.viewport.scroll_down(17);
    model.load_nearby_images();
    assert_eq!(model.image_scale_width(ImageAsset::TebingBreksi), Some(112));
}

#[test]
fn test_oversized_image_rows_render_without_panic() {
    let mut model = Model::new((80, 24), 65530);
    assert_eq!(model.layout.image_rows(), crate::config::MAX_IMAGE_ROWS);
    let content = render_text(&mut model);
    assert!(content.contains("Candi Prambanan"));
}

#[test]
fn test_max_image_rows_render_without_panic() {
    let mut model = Model::new((80, 24), crate::config::MAX_IMAGE_ROWS);
    let content = render_text(&mut model);
    assert!(content.contains("Candi Prambanan"));
}

#[test]
fn test_images_disabled_skips_loading() {
    let dir = tempfile::tempdir().unwrap();
    write_test_png(dir.path(), "candiprambanan");

    let mut model = Model::new((80, 24), 8).with_picker(Some(Picker::halfblocks()));
    model.assets = AssetLoader::new(dir.path());
    model.images_enabled = false;
    model.load_nearby_images();

    assert!(model.image_protocols.is_empty());
    assert!(render_text(&mut model).contains("[Image: Candi Prambanan]"));
}

#[test]
fn test_render_with_inserted_protocol_does_not_crash() {
    use image::{DynamicImage, RgbImage};

    let picker = Picker::halfblocks();
    let protocol = picker.new_resize_protocol(DynamicImage::ImageRgb8(RgbImage::new(100, 50)));
    let mut model = Model::new((80, 24), 8).with_picker(Some(picker));
    model
        .image_protocols
        .insert(ImageAsset::TebingBreksi, (protocol, 40, 8));

    // Card 1 straddles the bottom edge of the list at this size.
    let mut terminal = create_test_terminal(80, 24);
    let result = terminal.draw(|frame| render(&mut model, frame));
    assert!(result.is_ok(), "Rendering with image protocol should not crash");
}

#[test]
fn test_search_placeholder_shown_when_empty() {
    let mut model = Model::new((80, 24), 8);
    assert!(render_text(&mut model).contains("Cari tempat wisata"));
}

#[test]
fn test_search_placeholder_hidden_when_focused() {
    let mut model = Model::new((80, 24), 8);
    model.search.focus();
    assert!(!render_text(&mut model).contains("Cari tempat wisata"));
}

#[test]
fn test_narrow_terminal_truncates_title() {
    let mut model = Model::new((20, 24), 8);
    let content = render_text(&mut model);
    assert!(content.contains("Candi Pramb…"), "got: {content}");
}

#[test]
fn test_selected_card_border_is_highlighted() {
    let mut model = Model::new((80, 40), 8);
    let mut terminal = create_test_terminal(80, 40);
    terminal.draw(|frame| render(&mut model, frame)).unwrap();
    let buffer = terminal.backend().buffer();

    // Card 0 top-left corner sits at the list origin plus the side margin.
    assert_eq!(buffer[(2, 3)].fg, Color::Yellow);
    // Card 1 starts one gap row after card 0's 16 rows.
    assert_eq!(buffer[(2, 3 + 17)].fg, Color::DarkGray);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    for (width, height) in [(1, 1), (10, 5), (30, 4)] {
        let mut model = Model::new((width, height), 8);
        let mut terminal = create_test_terminal(width, height);
        terminal.draw(|frame| render(&mut model, frame)).unwrap();
    }
}

#[test]
fn test_scrolled_render_clips_partial_card() {
    let mut model = Model::new((80, 24), 8);
    model.viewport.scroll_down(5);
    let content = render_text(&mut model);
    // Card 0's title row is above the viewport; its button is still visible.
    assert!(!content.contains("Candi Prambanan "));
    assert!(content.contains("Lihat Detail 0"));
}
