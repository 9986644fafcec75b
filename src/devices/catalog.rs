use std::{fmt, str::FromStr};

use crate::foundation::{
    core::TargetDims,
    error::{WatchshotError, WatchshotResult},
};

/// Physical outline of a display. Round displays inset their digit grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayShape {
    Rect,
    Round,
}

/// Device variants the watch face ships on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Aplite,
    Basalt,
    Chalk,
    Diorite,
    Emery,
}

struct PlatformInfo {
    name: &'static str,
    model: &'static str,
    width: u32,
    height: u32,
    shape: DisplayShape,
}

static CATALOG: [(Platform, PlatformInfo); 5] = [
    (
        Platform::Aplite,
        PlatformInfo {
            name: "aplite",
            model: "Pebble",
            width: 144,
            height: 168,
            shape: DisplayShape::Rect,
        },
    ),
    (
        Platform::Basalt,
        PlatformInfo {
            name: "basalt",
            model: "Pebble Time",
            width: 144,
            height: 168,
            shape: DisplayShape::Rect,
        },
    ),
    (
        Platform::Chalk,
        PlatformInfo {
            name: "chalk",
            model: "Pebble Time Round",
            width: 180,
            height: 180,
            shape: DisplayShape::Round,
        },
    ),
    (
        Platform::Diorite,
        PlatformInfo {
            name: "diorite",
            model: "Pebble 2",
            width: 144,
            height: 168,
            shape: DisplayShape::Rect,
        },
    ),
    (
        Platform::Emery,
        PlatformInfo {
            name: "emery",
            model: "Pebble Time 2",
            width: 200,
            height: 228,
            shape: DisplayShape::Rect,
        },
    ),
];

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Aplite,
        Platform::Basalt,
        Platform::Chalk,
        Platform::Diorite,
        Platform::Emery,
    ];

    fn info(self) -> &'static PlatformInfo {
        // CATALOG is ordered like the enum.
        &CATALOG[self as usize].1
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn model(self) -> &'static str {
        self.info().model
    }

    pub fn dims(self) -> TargetDims {
        let info = self.info();
        TargetDims {
            width: info.width,
            height: info.height,
        }
    }

    pub fn shape(self) -> DisplayShape {
        self.info().shape
    }

    /// Two platforms render identical screenshots when size and shape agree.
    pub fn shares_display_with(self, other: Platform) -> bool {
        self.dims() == other.dims() && self.shape() == other.shape()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = WatchshotError;

    fn from_str(s: &str) -> WatchshotResult<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Platform::ALL.iter().map(|p| p.name()).collect();
                WatchshotError::validation(format!(
                    "unknown platform '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/devices/catalog.rs"]
mod tests;
