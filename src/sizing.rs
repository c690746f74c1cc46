//! The size resolver — the one pure function everything else wraps.
//!
//! Given a band and bust measurement plus two free-form labels, produce the
//! size label shown to the user, the coarse cup group used to pick imagery,
//! and the product name fed into retailer search links. No I/O, no clock,
//! no failure modes: the function is total over finite reals and arbitrary
//! strings. Input validation (missing or non-numeric fields) is the HTTP
//! boundary's job — see [`crate::api`].
//!
//! Two classifications run off the same cup difference and their thresholds
//! do not line up: the five-way letter splits at 12/14/16/18, the three-way
//! group splits at 14/16, so group `Small` absorbs both letter A and B.
//! That drift is inherited from the sizing charts this service was built
//! against and is kept verbatim.

use std::fmt;

// ── Activity ─────────────────────────────────────────────────────────────────

/// Simplified activity bucket, used in asset file names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActivityKey {
    Casual,
    Sports,
    HighImpact,
}

impl ActivityKey {
    /// Normalizes a frontend activity label.
    ///
    /// This is a closed, exact-string table — case- and punctuation-sensitive,
    /// no fuzzy matching. Anything the table does not list (empty strings,
    /// unseen phrasings, even the key names themselves: `"casual"` is not a
    /// label) falls back to [`ActivityKey::Casual`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Daily / Casual" | "Daily/Casual" | "Daily" | "Casual" => Self::Casual,
            "Sports / Active" | "Sports/Active" | "Sports" => Self::Sports,
            "High Impact" | "High-Impact" | "HighImpact" => Self::HighImpact,
            _ => Self::Casual,
        }
    }

    /// The file-name fragment (e.g. `model_casual_small_front.jpg`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Sports => "sports",
            Self::HighImpact => "highimpact",
        }
    }
}

impl fmt::Display for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Cup group ────────────────────────────────────────────────────────────────

/// Coarse three-way bucket that selects product imagery.
///
/// Not shown to the user — the user sees the five-way cup letter. The
/// boundaries here (14/16) intentionally differ from the letter boundaries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CupGroup {
    Small,
    Medium,
    Large,
}

impl CupGroup {
    pub fn from_diff(diff: u32) -> Self {
        match diff {
            0..=13 => Self::Small,
            14 | 15 => Self::Medium,
            _ => Self::Large,
        }
    }

    /// The file-name fragment (e.g. `model_casual_small_front.jpg`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for CupGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SizeResult ───────────────────────────────────────────────────────────────

/// Everything derived from one pair of measurements. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeResult {
    /// `max(0, round(bust - band))`.
    pub cup_diff: u32,
    /// Five-way cup classification shown to the user.
    pub cup_letter: &'static str,
    /// Band rounded to the nearest multiple of 5.
    pub band_rounded: i64,
    /// `{band_rounded}{cup_letter}`, e.g. `"80B"`.
    pub size_label: String,
    /// Three-way bucket for asset lookup only.
    pub cup_group: CupGroup,
    /// Normalized activity bucket for asset lookup only.
    pub activity_key: ActivityKey,
    /// Display name, also the retailer search term.
    pub product_name: String,
}

/// Resolves measurements and labels into a [`SizeResult`].
///
/// Rounding is half-away-from-zero (`f64::round`); for the positive values
/// that survive the `max(0, _)` clamp this is plain round-half-up.
///
/// `fit_root` only matters when it is exactly `"Wide"`, which selects the
/// full-coverage product name; every other value behaves as `"Narrow"`. The
/// comfort product name embeds the *original* activity string verbatim, not
/// the normalized key.
pub fn resolve(band: f64, bust: f64, activity: &str, fit_root: &str) -> SizeResult {
    let cup_diff = (bust - band).round().max(0.0) as u32;

    let cup_letter = match cup_diff {
        0..=11 => "A",
        12 | 13 => "B",
        14 | 15 => "C",
        16 | 17 => "D",
        _ => "DD/E",
    };

    let band_rounded = ((band / 5.0).round() * 5.0) as i64;
    let size_label = format!("{band_rounded}{cup_letter}");

    let product_name = if fit_root == "Wide" {
        format!("Full coverage {size_label} bra")
    } else {
        format!("Comfort {size_label} {activity} bra")
    };

    SizeResult {
        cup_diff,
        cup_letter,
        band_rounded,
        size_label,
        cup_group: CupGroup::from_diff(cup_diff),
        activity_key: ActivityKey::from_label(activity),
        product_name,
    }
}
