//! Layout label types.
//!
//! Callers fill in `width`/`height` on nodes and the spacing fields on the graph label; the
//! pipeline writes `x`, `y`, `rank` and `order` back. Coordinates are node centers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary axis of the drawing: the direction in which ranks advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::TB => "TB",
            RankDir::BT => "BT",
            RankDir::LR => "LR",
            RankDir::RL => "RL",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, RankDir::LR | RankDir::RL)
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rank direction `{0}` (expected TB, BT, LR or RL)")]
pub struct ParseRankDirError(pub String);

impl FromStr for RankDir {
    type Err = ParseRankDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" | "TD" => Ok(Self::TB),
            "BT" => Ok(Self::BT),
            "LR" => Ok(Self::LR),
            "RL" => Ok(Self::RL),
            _ => Err(ParseRankDirError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    pub nodesep: f64,
    pub ranksep: f64,
    pub edgesep: f64,
    pub marginx: f64,
    pub marginy: f64,
    /// Drawing extent, written by `layout`.
    pub width: f64,
    pub height: f64,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            edgesep: 20.0,
            marginx: 0.0,
            marginy: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    /// Set on the zero-size placeholders that `normalize` threads through long edges.
    pub dummy: bool,
}

impl NodeLabel {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    /// Minimum number of ranks between tail and head.
    pub minlen: usize,
    pub weight: f64,
    pub reversed: bool,
    pub forward_name: Option<String>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            reversed: false,
            forward_name: None,
        }
    }
}
