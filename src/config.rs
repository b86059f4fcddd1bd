use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Default directory searched for destination images.
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Default height of a card's image area, in terminal rows.
pub const DEFAULT_IMAGE_ROWS: u16 = 8;

/// Largest accepted `--image-rows` value.
pub const MAX_IMAGE_ROWS: u16 = 64;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_images: bool,
    pub force_half_cell: bool,
    pub perf: bool,
    pub theme: Option<ThemeMode>,
    pub assets: Option<PathBuf>,
    pub image_rows: Option<u16>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_images: self.no_images || other.no_images,
            force_half_cell: self.force_half_cell || other.force_half_cell,
            perf: self.perf || other.perf,
            theme: other.theme.or(self.theme),
            assets: other.assets.clone().or_else(|| self.assets.clone()),
            image_rows: other.image_rows.or(self.image_rows),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("wisata").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("wisata")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("wisata").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("wisata").join("config");
        }
    }

    PathBuf::from(".wisatarc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".wisatarc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# wisata defaults (saved with --save)".to_string());
    if flags.no_images {
        lines.push("--no-images".to_string());
    }
    if flags.force_half_cell {
        lines.push("--force-half-cell".to_string());
    }
    if let Some(theme) = flags.theme {
        lines.push(format!("--theme {}", theme_name(theme)));
    }
    if let Some(dir) = &flags.assets {
        lines.push(format!("--assets {}", dir.display()));
    }
    if let Some(rows) = flags.image_rows {
        lines.push(format!("--image-rows {rows}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from raw CLI or config-file tokens.
///
/// Unknown tokens are skipped, as are values that fail to parse.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-images" {
            flags.no_images = true;
        } else if token == "--force-half-cell" {
            flags.force_half_cell = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if let Some((name, inline)) = split_valued(token) {
            let value = match inline {
                Some(v) => Some(v.to_string()),
                None => {
                    let next = tokens.get(i + 1).cloned();
                    if next.is_some() {
                        i += 1;
                    }
                    next
                }
            };
            if let Some(value) = value {
                apply_valued(&mut flags, name, &value);
            }
        }
        i += 1;
    }
    flags
}

/// Split one config line into flag tokens.
///
/// A valued flag takes the rest of its line as the value, so paths may
/// contain spaces.
fn line_tokens(line: &str) -> Vec<String> {
    if let Some((name, rest)) = line.split_once(char::is_whitespace) {
        if VALUED_FLAGS.contains(&name) {
            return vec![name.to_string(), rest.trim().to_string()];
        }
    }
    if split_valued(line).is_some_and(|(_, inline)| inline.is_some()) {
        return vec![line.to_string()];
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

const VALUED_FLAGS: [&str; 4] = ["--theme", "--assets", "--image-rows", "--debug-log"];

fn split_valued(token: &str) -> Option<(&'static str, Option<&str>)> {
    VALUED_FLAGS.iter().find_map(|name| {
        if token == *name {
            Some((*name, None))
        } else {
            token
                .strip_prefix(*name)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| (*name, Some(value)))
        }
    })
}

fn apply_valued(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--theme" => flags.theme = parse_theme(value),
        "--assets" => flags.assets = Some(PathBuf::from(value)),
        "--image-rows" => {
            flags.image_rows = value
                .parse()
                .ok()
                .filter(|rows| (1..=MAX_IMAGE_ROWS).contains(rows));
        }
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

const fn theme_name(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Auto => "auto",
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "wisata".to_string(),
            "--no-images".to_string(),
            "--theme".to_string(),
            "dark".to_string(),
            "--assets=./pics".to_string(),
            "--image-rows".to_string(),
            "6".to_string(),
            "--debug-log=render.log".to_string(),
            "--force-half-cell".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.no_images);
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.assets, Some(PathBuf::from("./pics")));
        assert_eq!(flags.image_rows, Some(6));
        assert_eq!(flags.debug_log, Some(PathBuf::from("render.log")));
        assert!(flags.force_half_cell);
    }

    #[test]
    fn test_parse_flag_tokens_rejects_zero_image_rows() {
        let args = vec!["--image-rows=0".to_string()];
        assert_eq!(parse_flag_tokens(&args).image_rows, None);
    }

    #[test]
    fn test_parse_flag_tokens_caps_image_rows() {
        let at_cap = vec!["--image-rows".to_string(), MAX_IMAGE_ROWS.to_string()];
        assert_eq!(parse_flag_tokens(&at_cap).image_rows, Some(MAX_IMAGE_ROWS));

        let over = vec!["--image-rows=65".to_string()];
        assert_eq!(parse_flag_tokens(&over).image_rows, None);
        let huge = vec!["--image-rows=65530".to_string()];
        assert_eq!(parse_flag_tokens(&huge).image_rows, None);
    }

    #[test]
    fn test_save_load_keeps_paths_with_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        let flags = ConfigFlags {
            assets: Some(PathBuf::from("/home/me/My Pictures")),
            debug_log: Some(PathBuf::from("/tmp/wisata logs/debug.log")),
            perf: true,
            ..ConfigFlags::default()
        };

        save_config_flags(&path, &flags).unwrap();
        assert_eq!(load_config_flags(&path).unwrap(), flags);
    }

    #[test]
    fn test_line_tokens_keeps_inline_value_whole() {
        assert_eq!(
            line_tokens("--assets=/home/me/My Pictures"),
            vec!["--assets=/home/me/My Pictures".to_string()]
        );
        assert_eq!(
            line_tokens("--no-images --perf"),
            vec!["--no-images".to_string(), "--perf".to_string()]
        );
    }

    #[test]
    fn test_parse_flag_tokens_ignores_lookalike_prefix() {
        let args = vec!["--assetsdir".to_string(), "x".to_string()];
        assert_eq!(parse_flag_tokens(&args), ConfigFlags::default());
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_images: true,
            theme: Some(ThemeMode::Light),
            image_rows: Some(4),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            perf: true,
            theme: Some(ThemeMode::Dark),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_images);
        assert!(merged.perf);
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
        assert_eq!(merged.image_rows, Some(4));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".wisatarc");
        let flags = ConfigFlags {
            no_images: true,
            force_half_cell: true,
            perf: true,
            theme: Some(ThemeMode::Dark),
            assets: Some(PathBuf::from("pics")),
            image_rows: Some(10),
            debug_log: Some(PathBuf::from("render.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
