//! Destination image loading and terminal graphics setup.
//!
//! Supports the protocols `ratatui-image` can detect:
//! - Kitty graphics protocol
//! - Sixel
//! - iTerm2
//! - Unicode half-blocks (fallback)

mod loader;

pub use loader::{AssetError, AssetLoader, SUPPORTED_EXTENSIONS};

use std::time::Duration;

use image::DynamicImage;
use image::imageops::FilterType;
use ratatui_image::picker::Picker;
#[cfg(unix)]
use ratatui_image::picker::cap_parser::QueryStdioOptions;

const PICKER_QUERY_TIMEOUT_MS: u64 = 250;

/// Create a picker for terminal image rendering.
///
/// The picker detects terminal capabilities and chooses the best protocol.
pub fn create_picker(force_half_cell: bool) -> Option<Picker> {
    if force_half_cell {
        tracing::debug!(protocol = "Halfblocks", "image picker forced to half cells");
        return Some(Picker::halfblocks());
    }

    // Querying stdio on Windows consoles can leave a reader thread blocking
    // keyboard input, so stay on half-blocks there.
    #[cfg(not(unix))]
    {
        tracing::debug!(protocol = "Halfblocks", "image picker windows fallback");
        return Some(Picker::halfblocks());
    }

    #[cfg(unix)]
    {
        let picker = Picker::from_query_stdio_with_options(query_options())
            .inspect_err(|err| tracing::warn!(?err, "terminal graphics query failed"))
            .ok()?;
        tracing::debug!(
            term = %std::env::var("TERM").unwrap_or_else(|_| "<unset>".to_string()),
            protocol = ?picker.protocol_type(),
            "image picker created"
        );
        Some(picker)
    }
}

/// Scale `image` so it fits inside a `cols` x `rows` cell area.
///
/// Aspect ratio is preserved; `font_size` is the cell size in pixels.
pub fn fit_to_cells(
    image: &DynamicImage,
    cols: u16,
    rows: u16,
    font_size: (u16, u16),
    smooth: bool,
) -> DynamicImage {
    let max_w = (u32::from(cols) * u32::from(font_size.0)).max(1);
    let max_h = (u32::from(rows) * u32::from(font_size.1)).max(1);
    let filter = if smooth {
        FilterType::CatmullRom
    } else {
        FilterType::Nearest
    };
    image.resize(max_w, max_h, filter)
}

#[cfg(unix)]
fn query_options() -> QueryStdioOptions {
    let mut options = QueryStdioOptions::default();
    options.timeout = Duration::from_millis(PICKER_QUERY_TIMEOUT_MS);
    options
}
