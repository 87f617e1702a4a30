use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Quad,
}

/// Declarative animation metadata recorded on a group.
///
/// The static SVG writer ignores transitions; an animating renderer would
/// interpolate attribute changes over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    /// The single shared transition both dashboard charts use.
    pub fn quad(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            easing: Easing::Quad,
        }
    }
}
