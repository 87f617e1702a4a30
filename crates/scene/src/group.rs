use serde::{Deserialize, Serialize};

use crate::element::{Element, Node};
use crate::shape::ShapeKind;
use crate::transition::Transition;

/// Result of one join: how many elements entered, were updated in place,
/// and exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// A container node. Charts bind data into groups via [`Group::join`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Translation applied to all children.
    pub transform: Option<(f64, f64)>,
    /// Declarative animation metadata. Renderers may honor or ignore it.
    pub transition: Option<Transition>,
    pub children: Vec<Node>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            id: None,
            classes: Vec::new(),
            transform: None,
            transition: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        let mut g = Self::new();
        g.id = Some(id.into());
        g
    }

    /// Bind `data` to this group's elements of `kind`: the enter/update/exit
    /// step.
    ///
    /// In document order, the first `min(bound, data.len())` elements of
    /// `kind` are updated in place; missing elements are created from the
    /// kind's zero shape, appended after the last child, and updated;
    /// surplus elements of `kind` are removed. Children of other kinds and
    /// nested groups are untouched.
    ///
    /// Closure invariant: afterwards the number of `kind` elements in this
    /// group equals `data.len()`, whatever the prior state.
    pub fn join<T>(
        &mut self,
        kind: ShapeKind,
        data: &[T],
        mut apply: impl FnMut(&T, usize, &mut Element),
    ) -> JoinStats {
        let bound: Vec<usize> = self
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, node)| match node {
                Node::Element(el) if el.shape.kind() == kind => Some(i),
                _ => None,
            })
            .collect();

        let updated = bound.len().min(data.len());
        for (slot, &child) in bound.iter().take(updated).enumerate() {
            if let Node::Element(el) = &mut self.children[child] {
                apply(&data[slot], slot, el);
            }
        }

        let entered = data.len() - updated;
        for (slot, datum) in data.iter().enumerate().skip(bound.len()) {
            let mut el = Element::new(kind.zero());
            apply(datum, slot, &mut el);
            self.children.push(Node::Element(el));
        }

        let exited = bound.len() - updated;
        for &child in bound[updated..].iter().rev() {
            self.children.remove(child);
        }

        JoinStats {
            entered,
            updated,
            exited,
        }
    }

    /// Number of elements of `kind` among the direct children.
    pub fn count(&self, kind: ShapeKind) -> usize {
        self.elements(kind).count()
    }

    /// Direct-child elements of `kind`, in document order.
    pub fn elements(&self, kind: ShapeKind) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(el) if el.shape.kind() == kind => Some(el),
            _ => None,
        })
    }

    /// Mutable direct-child elements of `kind`, in document order.
    pub fn elements_mut(&mut self, kind: ShapeKind) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(move |node| match node {
            Node::Element(el) if el.shape.kind() == kind => Some(el),
            _ => None,
        })
    }

    /// Find a descendant element by id, depth-first.
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        for node in &mut self.children {
            match node {
                Node::Element(el) => {
                    if el.id.as_deref() == Some(id) {
                        return Some(el);
                    }
                }
                Node::Group(g) => {
                    if let Some(found) = g.element_by_id_mut(id) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }

    /// Find a descendant group by id, depth-first.
    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        for node in &mut self.children {
            if let Node::Group(g) = node {
                if g.id.as_deref() == Some(id) {
                    return Some(g);
                }
                if let Some(found) = g.group_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        for node in &self.children {
            if let Node::Group(g) = node {
                if g.id.as_deref() == Some(id) {
                    return Some(g);
                }
                if let Some(found) = g.group(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }
}
