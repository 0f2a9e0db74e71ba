//! Waste Categories
//!
//! Fixed closed set, six entries, order is part of the contract (argmax
//! tie-breaks resolve to the lowest index).

use serde::{Deserialize, Serialize};

/// Number of waste categories
pub const CATEGORY_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WasteCategory {
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
}

impl WasteCategory {
    /// All categories in canonical order
    pub const ALL: [WasteCategory; CATEGORY_COUNT] = [
        WasteCategory::Cardboard,
        WasteCategory::Glass,
        WasteCategory::Metal,
        WasteCategory::Paper,
        WasteCategory::Plastic,
        WasteCategory::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Cardboard => "Cardboard",
            WasteCategory::Glass => "Glass",
            WasteCategory::Metal => "Metal",
            WasteCategory::Paper => "Paper",
            WasteCategory::Plastic => "Plastic",
            WasteCategory::Trash => "Trash",
        }
    }

    /// Chart color for this category
    pub fn color(&self) -> &'static str {
        match self {
            WasteCategory::Cardboard => "#8b5cf6",
            WasteCategory::Glass => "#06b6d4",
            WasteCategory::Metal => "#f59e0b",
            WasteCategory::Paper => "#10b981",
            WasteCategory::Plastic => "#ef4444",
            WasteCategory::Trash => "#6b7280",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
