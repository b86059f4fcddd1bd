//! Wisata - A terminal guide to Yogyakarta tourist destinations.
//!
//! # Usage
//!
//! ```bash
//! wisata
//! wisata --assets ./pictures
//! wisata --no-images --theme light
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wisata::app::App;
use wisata::config::{
    ConfigFlags, DEFAULT_ASSET_DIR, DEFAULT_IMAGE_ROWS, MAX_IMAGE_ROWS, ThemeMode,
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use wisata::logging;

/// Environment fallback for `--debug-log`.
const DEBUG_LOG_ENV: &str = "WISATA_DEBUG_LOG";

/// A terminal guide to Yogyakarta tourist destinations
#[derive(Parser, Debug)]
#[command(name = "wisata", version, about, long_about = None)]
struct Cli {
    /// Directory holding the destination pictures
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Disable inline image rendering (show placeholders only)
    #[arg(long)]
    no_images: bool,

    /// Force image rendering to use half-cell fallback mode
    #[arg(long)]
    force_half_cell: bool,

    /// Height of each card's picture, in terminal rows
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_IMAGE_ROWS))
    )]
    image_rows: Option<u16>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Log timing scopes
    #[arg(long)]
    perf: bool,

    /// Write debug-level events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults in the global config
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in the global config
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// The flags given on this command line, in config-file form.
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            no_images: self.no_images,
            force_half_cell: self.force_half_cell,
            perf: self.perf,
            theme: self.theme,
            assets: self.assets.clone(),
            image_rows: self.image_rows,
            debug_log: self.debug_log.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let debug_log = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os(DEBUG_LOG_ENV).map(PathBuf::from));
    logging::init(debug_log.as_deref()).context("Failed to initialize logging")?;
    logging::set_perf_enabled(effective.perf);
    tracing::debug!(?effective, "effective flags");

    let mut app = App::new()
        .with_assets_dir(
            effective
                .assets
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR)),
        )
        .with_images_enabled(!effective.no_images)
        .with_force_half_cell(effective.force_half_cell)
        .with_image_rows(effective.image_rows.unwrap_or(DEFAULT_IMAGE_ROWS))
        .with_theme(effective.theme.unwrap_or(ThemeMode::Auto))
        .with_config_paths(
            Some(global_path),
            if local_path.exists() {
                Some(local_path)
            } else {
                None
            },
        );

    app.run().context("Application error")
}
