//! The stock face palette.
//!
//! | z | category    | kind  | options |
//! |---|-------------|-------|---------|
//! | 0 | `skin`      | paint | 6       |
//! | 1 | `shape`     | layer | 4       |
//! | 2 | `brows`     | layer | 4       |
//! | 3 | `eyes`      | layer | 6       |
//! | 4 | `mouth`     | layer | 5       |
//! | 5 | `accessory` | layer | 5       |
//!
//! 6 * 4 * 4 * 6 * 5 * 5 = 14,400 combinations. Option order is part of the seed compatibility
//! contract: reordering or inserting options changes the face of every existing seed.

use crate::{
    catalog::model::{Category, CategoryKind, ComponentCatalog, ComponentOption},
    foundation::core::Canvas,
    foundation::error::FaceResult,
};

/// Combination count of [`ComponentCatalog::builtin`].
pub const BUILTIN_COMBINATIONS: u64 = 14_400;

const CANVAS: Canvas = Canvas {
    width: 400,
    height: 480,
};

const SKIN: &[(&str, &str)] = &[
    ("peach", "#f9d5b5"),
    ("tan", "#e0ac69"),
    ("olive", "#c68642"),
    ("brown", "#8d5524"),
    ("mint", "#a8e6cf"),
    ("lilac", "#cdb4db"),
];

const SHAPE: &[(&str, &str)] = &[
    (
        "round",
        r##"<circle cx="200" cy="270" r="150" fill="{skin}" stroke="#2b2b2b" stroke-width="6"/>"##,
    ),
    (
        "square",
        r##"<rect x="60" y="130" width="280" height="280" rx="60" fill="{skin}" stroke="#2b2b2b" stroke-width="6"/>"##,
    ),
    (
        "oval",
        r##"<ellipse cx="200" cy="270" rx="125" ry="165" fill="{skin}" stroke="#2b2b2b" stroke-width="6"/>"##,
    ),
    (
        "wide",
        r##"<ellipse cx="200" cy="280" rx="170" ry="135" fill="{skin}" stroke="#2b2b2b" stroke-width="6"/>"##,
    ),
];

const BROWS: &[(&str, &str)] = &[
    ("none", "<g/>"),
    (
        "flat",
        r##"<path d="M115 195 H175 M225 195 H285" fill="none" stroke="#2b2b2b" stroke-width="8" stroke-linecap="round"/>"##,
    ),
    (
        "raised",
        r##"<path d="M115 200 Q145 175 175 200 M225 200 Q255 175 285 200" fill="none" stroke="#2b2b2b" stroke-width="8" stroke-linecap="round"/>"##,
    ),
    (
        "angry",
        r##"<path d="M115 185 L175 205 M225 205 L285 185" fill="none" stroke="#2b2b2b" stroke-width="8" stroke-linecap="round"/>"##,
    ),
];

const EYES: &[(&str, &str)] = &[
    (
        "dots",
        r##"<circle cx="145" cy="235" r="12" fill="#2b2b2b"/><circle cx="255" cy="235" r="12" fill="#2b2b2b"/>"##,
    ),
    (
        "big",
        r##"<g stroke="#2b2b2b" stroke-width="5"><circle cx="145" cy="235" r="26" fill="#ffffff"/><circle cx="255" cy="235" r="26" fill="#ffffff"/></g><circle cx="150" cy="238" r="11" fill="#2b2b2b"/><circle cx="260" cy="238" r="11" fill="#2b2b2b"/>"##,
    ),
    (
        "closed",
        r##"<path d="M125 235 Q145 252 165 235 M235 235 Q255 252 275 235" fill="none" stroke="#2b2b2b" stroke-width="7" stroke-linecap="round"/>"##,
    ),
    (
        "wink",
        r##"<circle cx="145" cy="235" r="12" fill="#2b2b2b"/><path d="M235 235 Q255 252 275 235" fill="none" stroke="#2b2b2b" stroke-width="7" stroke-linecap="round"/>"##,
    ),
    (
        "sleepy",
        r##"<path d="M120 232 A25 25 0 0 0 170 232 Z M230 232 A25 25 0 0 0 280 232 Z" fill="#2b2b2b"/><path d="M118 232 H172 M228 232 H282" stroke="#2b2b2b" stroke-width="6" stroke-linecap="round"/>"##,
    ),
    (
        "ring",
        r##"<g fill="#ffffff" stroke="#2b2b2b" stroke-width="8"><circle cx="145" cy="235" r="16"/><circle cx="255" cy="235" r="16"/></g>"##,
    ),
];

const MOUTH: &[(&str, &str)] = &[
    (
        "smile",
        r##"<path d="M150 320 Q200 370 250 320" fill="none" stroke="#2b2b2b" stroke-width="8" stroke-linecap="round"/>"##,
    ),
    (
        "grin",
        r##"<path d="M140 315 Q200 395 260 315 Z" fill="#7a2e2e" stroke="#2b2b2b" stroke-width="6" stroke-linejoin="round"/>"##,
    ),
    (
        "flat",
        r##"<path d="M160 340 H240" fill="none" stroke="#2b2b2b" stroke-width="8" stroke-linecap="round"/>"##,
    ),
    (
        "o",
        r##"<ellipse cx="200" cy="340" rx="18" ry="24" fill="#7a2e2e" stroke="#2b2b2b" stroke-width="6"/>"##,
    ),
    (
        "frown",
        r##"<path d="M150 355 Q200 310 250 355" fill="none" stroke="#2b2b2b" stroke-width="8" stroke-linecap="round"/>"##,
    ),
];

const ACCESSORY: &[(&str, &str)] = &[
    ("none", "<g/>"),
    (
        "party_hat",
        r##"<path d="M200 40 L250 150 H150 Z" fill="#ff6f91" stroke="#2b2b2b" stroke-width="6" stroke-linejoin="round"/><circle cx="200" cy="40" r="14" fill="#ffd166" stroke="#2b2b2b" stroke-width="5"/>"##,
    ),
    (
        "bow",
        r##"<path d="M200 120 L150 90 V150 Z M200 120 L250 90 V150 Z" fill="#ef476f" stroke="#2b2b2b" stroke-width="5" stroke-linejoin="round"/><circle cx="200" cy="120" r="12" fill="#ef476f" stroke="#2b2b2b" stroke-width="5"/>"##,
    ),
    (
        "glasses",
        r##"<g fill="none" stroke="#2b2b2b" stroke-width="6"><circle cx="145" cy="235" r="34"/><circle cx="255" cy="235" r="34"/><path d="M179 235 H221"/></g>"##,
    ),
    (
        "crown",
        r##"<path d="M130 140 L140 60 L175 105 L200 45 L225 105 L260 60 L270 140 Z" fill="#ffd166" stroke="#2b2b2b" stroke-width="6" stroke-linejoin="round"/>"##,
    ),
];

fn category(name: &str, kind: CategoryKind, options: &[(&str, &str)]) -> Category {
    Category {
        name: name.to_string(),
        kind,
        options: options
            .iter()
            .map(|&(id, value)| ComponentOption::new(id, value))
            .collect(),
    }
}

impl ComponentCatalog {
    /// The stock 400x480 palette with [`BUILTIN_COMBINATIONS`] faces.
    pub fn builtin() -> FaceResult<Self> {
        Self::new(
            CANVAS,
            vec![
                category("skin", CategoryKind::Paint, SKIN),
                category("shape", CategoryKind::Layer, SHAPE),
                category("brows", CategoryKind::Layer, BROWS),
                category("eyes", CategoryKind::Layer, EYES),
                category("mouth", CategoryKind::Layer, MOUTH),
                category("accessory", CategoryKind::Layer, ACCESSORY),
            ],
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/builtin.rs"]
mod tests;
