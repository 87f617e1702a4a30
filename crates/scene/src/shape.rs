use serde::{Deserialize, Serialize};

/// The geometry of a single visual element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Path {
        d: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
    },
}

/// Shape discriminant. A join is scoped to one kind the way a tag
/// selector scopes a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Circle,
    Line,
    Path,
    Text,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Path { .. } => ShapeKind::Path,
            Shape::Text { .. } => ShapeKind::Text,
        }
    }
}

impl ShapeKind {
    /// The shape a newly entered element starts from, before the join's
    /// apply step fills in real attributes.
    pub fn zero(self) -> Shape {
        match self {
            ShapeKind::Rect => Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            ShapeKind::Circle => Shape::Circle {
                cx: 0.0,
                cy: 0.0,
                r: 0.0,
            },
            ShapeKind::Line => Shape::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: 0.0,
            },
            ShapeKind::Path => Shape::Path { d: String::new() },
            ShapeKind::Text => Shape::Text {
                x: 0.0,
                y: 0.0,
                content: String::new(),
            },
        }
    }
}
