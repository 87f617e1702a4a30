pub mod element;
pub mod group;
pub mod shape;
pub mod transition;
pub mod types;

pub use element::{Element, Node};
pub use group::{Group, JoinStats};
pub use shape::{Shape, ShapeKind};
pub use transition::{Easing, Transition};
pub use types::{Point, Scene};
