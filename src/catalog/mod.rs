//! The destination catalog.
//!
//! The list is fixed at [`ITEM_COUNT`] entries. Titles come from a positional
//! table; images and descriptions cycle through three shared entries keyed by
//! `index % 3`, so positions 0, 3, 6, 9 look alike, as do 1, 4, 7 and 2, 5, 8.
//! Only the action label is guaranteed unique.

use std::fmt;

/// Number of destinations in the list.
pub const ITEM_COUNT: usize = 10;

/// Label for the dialog's dismiss button.
pub const DISMISS_LABEL: &str = "Tutup";

/// A bundled destination image, referenced by a static identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageAsset {
    CandiPrambanan,
    TebingBreksi,
    TuguJogja,
    Malioboro,
}

impl ImageAsset {
    /// Every bundled asset, including the one the modulus table never reaches.
    pub const ALL: [Self; 4] = [
        Self::CandiPrambanan,
        Self::TebingBreksi,
        Self::TuguJogja,
        Self::Malioboro,
    ];

    /// File stem of the asset inside the asset directory.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::CandiPrambanan => "candiprambanan",
            Self::TebingBreksi => "tebingbreksi",
            Self::TuguJogja => "tugujogja",
            Self::Malioboro => "malioboro",
        }
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// One card's worth of content, assembled on demand from its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub index: usize,
    pub title: String,
    pub description: &'static str,
    pub image: ImageAsset,
    pub action_label: String,
}

impl Destination {
    /// Resolve the record at `index`.
    ///
    /// Indices outside the list still resolve through the fallback branches
    /// of each lookup, so this never panics.
    pub fn at(index: usize) -> Self {
        Self {
            index,
            title: title_for(index),
            description: description_for(index),
            image: image_for(index),
            action_label: action_label_for(index),
        }
    }
}

/// Build the full list, positions `0..ITEM_COUNT` in order.
pub fn destinations() -> Vec<Destination> {
    (0..ITEM_COUNT).map(Destination::at).collect()
}

/// Title for a list position.
pub fn title_for(index: usize) -> String {
    match index {
        0 => "Candi Prambanan".to_string(),
        1 => "Tebing Breksi".to_string(),
        2 => "Tugu Jogja".to_string(),
        3..=9 => format!("Judul Tempat Wisata {index}"),
        _ => "Judul Tempat Wisata Default".to_string(),
    }
}

/// Image for a list position.
#[allow(clippy::match_same_arms)]
pub const fn image_for(index: usize) -> ImageAsset {
    // `3` cannot come out of `% 3`; it keeps Malioboro addressable.
    match index % 3 {
        0 => ImageAsset::CandiPrambanan,
        1 => ImageAsset::TebingBreksi,
        2 => ImageAsset::TuguJogja,
        3 => ImageAsset::Malioboro,
        _ => ImageAsset::CandiPrambanan,
    }
}

/// Description for a list position.
#[allow(clippy::match_same_arms)]
pub const fn description_for(index: usize) -> &'static str {
    match index % 3 {
        0 => "JawaTengah Indonesia",
        1 | 2 | 3 => "Yogyakarta Indonesia",
        _ => "Deskripsi singkat tentang tempat wisata default.",
    }
}

/// Label of the card's action button.
pub fn action_label_for(index: usize) -> String {
    format!("Lihat Detail {index}")
}
