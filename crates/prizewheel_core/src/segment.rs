//! Wheel segments and winner rotation

use serde::{Deserialize, Serialize};

/// One labeled slice of the wheel.
///
/// Unknown fields are ignored when deserializing, so records carrying extra
/// prize metadata can be passed straight through.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    #[serde(default)]
    pub winner: bool,
}

impl Segment {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            winner: false,
        }
    }

    pub fn winner(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            winner: true,
        }
    }
}

/// Index of the first segment flagged as winner
pub fn winner_index(segments: &[Segment]) -> Option<usize> {
    segments.iter().position(|s| s.winner)
}

/// Rotate `segments` so the winner comes first.
///
/// The result is a cyclic shift: `segments[k..]` followed by `segments[..k]`.
/// Without a winner the order is returned unchanged.
pub fn rotate_to_winner(segments: &[Segment]) -> Vec<Segment> {
    let mut rotated = segments.to_vec();
    if let Some(k) = winner_index(segments) {
        rotated.rotate_left(k);
    }
    rotated
}
