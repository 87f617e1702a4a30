use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::shape::Shape;

/// One bound visual element: geometry plus the attributes interaction
/// handlers toggle (id, classes, a fill override, a rotation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub shape: Shape,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Style override. `None` means the stylesheet default applies.
    pub fill: Option<String>,
    /// Rotation in degrees about the shape's anchor point.
    pub rotate: Option<f64>,
}

impl Element {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            id: None,
            classes: Vec::new(),
            fill: None,
            rotate: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = Some(fill.into());
    }

    /// Clear the fill override, reverting to the stylesheet default.
    pub fn clear_fill(&mut self) {
        self.fill = None;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element(Element),
    Group(Group),
}
