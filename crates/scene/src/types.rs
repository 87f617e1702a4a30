use serde::{Deserialize, Serialize};

use crate::group::Group;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A drawing surface: a sized root group.
///
/// One scene per chart — no two charts share bound elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub root: Group,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            root: Group::new(),
        }
    }

    /// Find a descendant group by id, depth-first.
    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.root.group_mut(id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.root.group(id)
    }
}
