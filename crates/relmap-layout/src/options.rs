use serde::{Deserialize, Serialize};
use stratum::{GraphLabel, RankDir};

/// Bounding box used for every node; the engine needs uniform boxes.
pub const NODE_WIDTH: f64 = 172.0;
pub const NODE_HEIGHT: f64 = 36.0;

/// The layout knobs callers may set: `{ "rankdir": "TB", "nodesep": 50, "ranksep": 70 }`.
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub rankdir: RankDir,
    pub nodesep: f64,
    pub ranksep: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 70.0,
        }
    }
}

impl LayoutOptions {
    pub fn graph_label(&self) -> GraphLabel {
        GraphLabel {
            rankdir: self.rankdir,
            nodesep: self.nodesep,
            ranksep: self.ranksep,
            ..Default::default()
        }
    }
}
