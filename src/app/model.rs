use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use image::DynamicImage;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;

use crate::catalog::{self, ITEM_COUNT, ImageAsset};
use crate::config::{DEFAULT_ASSET_DIR, DEFAULT_IMAGE_ROWS, MAX_IMAGE_ROWS};
use crate::image::{AssetError, AssetLoader};
use crate::search::SearchField;
use crate::ui::layout::{ListLayout, card_content_width, list_height};
use crate::ui::style::Theme;
use crate::ui::viewport::Viewport;

/// Whether a card's detail dialog is open.
///
/// Each card owns one of these; opening or closing it never touches
/// another card's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailVisibility {
    #[default]
    Hidden,
    Visible,
}

impl DetailVisibility {
    pub const fn show(&mut self) {
        *self = Self::Visible;
    }

    pub const fn dismiss(&mut self) {
        *self = Self::Hidden;
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Scroll window over the card list
    pub viewport: Viewport,
    /// Row geometry of every card
    pub layout: ListLayout,
    /// Detail dialog state, one per card
    details: Vec<DetailVisibility>,
    /// Card with keyboard focus
    pub selected: usize,
    /// Top-bar search input
    pub search: SearchField,
    /// Full terminal size (columns, rows)
    pub terminal_size: (u16, u16),
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Colors and text styles
    pub theme: Theme,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether destination images are drawn
    pub images_enabled: bool,
    /// Image picker for terminal rendering
    pub picker: Option<Picker>,
    /// Where asset files are looked up
    pub assets: AssetLoader,
    /// Render protocols per asset, with their (`width_cols`, `height_rows`)
    pub image_protocols: HashMap<ImageAsset, (StatefulProtocol, u16, u16)>,
    /// Decoded images before scaling, reused on resize
    original_images: HashMap<ImageAsset, DynamicImage>,
    /// Assets that failed to load; not retried
    failed_assets: HashSet<ImageAsset>,
    /// Content width each cached protocol was scaled for
    image_scale_widths: HashMap<ImageAsset, u16>,
    /// True while a resize is being debounced
    resize_pending: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("selected", &self.selected)
            .field("details", &self.details)
            .field("search", &self.search)
            .field("help_visible", &self.help_visible)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model for a terminal of the given size.
    ///
    /// `image_rows` is clamped to `1..=MAX_IMAGE_ROWS`.
    pub fn new(terminal_size: (u16, u16), image_rows: u16) -> Self {
        let layout = ListLayout::new(ITEM_COUNT, image_rows.clamp(1, MAX_IMAGE_ROWS));
        let (width, height) = terminal_size;
        Self {
            viewport: Viewport::new(width, list_height(width, height), layout.total_rows()),
            layout,
            details: vec![DetailVisibility::Hidden; ITEM_COUNT],
            selected: 0,
            search: SearchField::new(),
            terminal_size,
            help_visible: false,
            should_quit: false,
            theme: Theme::default(),
            config_global_path: None,
            config_local_path: None,
            images_enabled: true,
            picker: None,
            assets: AssetLoader::new(DEFAULT_ASSET_DIR),
            image_protocols: HashMap::new(),
            original_images: HashMap::new(),
            failed_assets: HashSet::new(),
            image_scale_widths: HashMap::new(),
            resize_pending: false,
        }
    }

    /// Set the image picker.
    #[must_use]
    pub fn with_picker(mut self, picker: Option<Picker>) -> Self {
        self.picker = picker;
        self
    }

    /// Detail state of card `index` (`Hidden` for unknown cards).
    pub fn detail(&self, index: usize) -> DetailVisibility {
        self.details.get(index).copied().unwrap_or_default()
    }

    /// Card whose dialog is showing, if any.
    pub fn open_detail(&self) -> Option<usize> {
        self.details.iter().position(|d| d.is_visible())
    }

    pub(super) fn show_detail(&mut self, index: usize) {
        if let Some(detail) = self.details.get_mut(index) {
            detail.show();
            tracing::debug!(index, "detail shown");
        }
    }

    pub(super) fn dismiss_detail(&mut self, index: usize) {
        if let Some(detail) = self.details.get_mut(index) {
            detail.dismiss();
            tracing::debug!(index, "detail dismissed");
        }
    }

    /// Give card `index` keyboard focus and scroll it into view.
    pub(super) fn select(&mut self, index: usize) {
        let Some(slot) = self.layout.slot(index) else {
            return;
        };
        self.selected = index;
        self.viewport.scroll_into_view(slot.rows());
    }

    pub(super) fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.viewport.resize(width, list_height(width, height));
    }

    pub(super) const fn set_resize_pending(&mut self, pending: bool) {
        self.resize_pending = pending;
    }

    /// Whether an asset could not be loaded.
    pub fn asset_failed(&self, asset: ImageAsset) -> bool {
        self.failed_assets.contains(&asset)
    }

    /// Card content width the cached protocol for `asset` was scaled to.
    pub fn image_scale_width(&self, asset: ImageAsset) -> Option<u16> {
        self.image_scale_widths.get(&asset).copied()
    }

    /// Load images for cards near the viewport (lazy loading with lookahead).
    pub fn load_nearby_images(&mut self) {
        if self.resize_pending || !self.images_enabled {
            return;
        }
        let Some(picker) = &self.picker else { return };

        let target_cols = card_content_width(self.viewport.width());
        let target_rows = self.layout.image_rows();
        if target_cols == 0 || target_rows == 0 {
            return;
        }
        let use_halfblocks = matches!(picker.protocol_type(), ProtocolType::Halfblocks);
        let font_size = picker.font_size();

        // Load images within 2 viewport heights of current position
        let lookahead = self.viewport.height() as usize * 2;
        let visible = self.viewport.visible_range();
        let load_start = visible.start.saturating_sub(lookahead);
        let load_end = visible.end + lookahead;

        let mut wanted: Vec<ImageAsset> = (0..self.layout.len())
            .filter(|&i| {
                self.layout
                    .slot(i)
                    .is_some_and(|slot| slot.top + slot.height > load_start && slot.top < load_end)
            })
            .map(catalog::image_for)
            .collect();
        wanted.sort_unstable();
        wanted.dedup();

        for asset in wanted {
            let scaled_width = self.image_scale_widths.get(&asset).copied();
            let needs_protocol = match self.image_protocols.get(&asset) {
                None => !self.failed_assets.contains(&asset),
                Some(_) => scaled_width != Some(target_cols),
            };
            if !needs_protocol {
                continue;
            }

            let original = if let Some(img) = self.original_images.get(&asset) {
                img.clone()
            } else {
                match self.assets.load(asset) {
                    Ok(img) => {
                        self.original_images.insert(asset, img.clone());
                        img
                    }
                    Err(err) => {
                        match &err {
                            AssetError::NotFound { .. } => {
                                tracing::debug!(%asset, %err, "asset missing");
                            }
                            AssetError::Decode { .. } => {
                                tracing::warn!(%asset, %err, "asset unreadable");
                            }
                        }
                        self.failed_assets.insert(asset);
                        continue;
                    }
                }
            };

            let scaled = crate::image::fit_to_cells(
                &original,
                target_cols,
                target_rows,
                font_size,
                use_halfblocks,
            );
            let protocol = picker.new_resize_protocol(scaled);
            let (width_cols, height_rows) = protocol_render_size(&protocol, target_cols, target_rows);
            tracing::debug!(%asset, width_cols, height_rows, ?scaled_width, "image protocol ready");
            self.image_protocols
                .insert(asset, (protocol, width_cols, height_rows));
            self.image_scale_widths.insert(asset, target_cols);
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24), DEFAULT_IMAGE_ROWS)
    }
}

fn protocol_render_size(protocol: &StatefulProtocol, cols: u16, rows: u16) -> (u16, u16) {
    use ratatui::layout::Rect;
    use ratatui_image::Resize;
    let rect = protocol.size_for(Resize::Fit(None), Rect::new(0, 0, cols, rows));
    (rect.width.clamp(1, cols), rect.height.clamp(1, rows))
}
