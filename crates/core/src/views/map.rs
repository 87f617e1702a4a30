//! Map rendering: the one-time geometry render plus per-edition
//! highlighting.

use vizjoin_scene::{Group, Node, Scene, Shape, ShapeKind};

use crate::geo::WORLD_VIEW;
use crate::model::{MapGeometry, WorldCup};

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 700.0;

const MARKER_RADIUS: f64 = 8.0;

/// The map scene: country and graticule groups plus an empty `points`
/// group reserved for the finalist markers.
pub fn map_scene() -> Scene {
    let mut scene = Scene::new(MAP_WIDTH, MAP_HEIGHT);
    scene.root.children.push(Node::Group(Group::with_id("countries")));
    scene.root.children.push(Node::Group(Group::with_id("graticule")));
    scene.root.children.push(Node::Group(Group::with_id("points")));
    scene
}

/// Render the worker's geometry, once. Countries keep their id so
/// highlight classes can find them; the geometry is never re-rendered
/// afterwards.
pub fn install_geometry(scene: &mut Scene, geometry: &MapGeometry) {
    if let Some(countries) = scene.group_mut("countries") {
        countries.join(ShapeKind::Path, &geometry.countries, |country, _, el| {
            el.shape = Shape::Path {
                d: country.path.clone(),
            };
            el.id = Some(country.id.clone());
            el.add_class("country");
        });
    }
    if let Some(graticule) = scene.group_mut("graticule") {
        graticule.join(ShapeKind::Path, &geometry.graticule, |line, _, el| {
            el.shape = Shape::Path { d: line.clone() };
            el.add_class("grat");
        });
    }
}

/// The currently displayed edition's derived highlight set. Overwritten
/// wholesale on each new selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub host: String,
    pub teams: Vec<String>,
    pub gold_pos: vizjoin_scene::Point,
    pub silver_pos: vizjoin_scene::Point,
}

/// Remove the previous selection's marks: the `team` class from each
/// marked country, `host` from the previous host, and the markers.
pub fn clear_highlight(scene: &mut Scene, last: &Highlight) {
    for code in &last.teams {
        if let Some(el) = scene.root.element_by_id_mut(code) {
            el.remove_class("team");
        }
    }
    if let Some(el) = scene.root.element_by_id_mut(&last.host) {
        el.remove_class("host");
    }
    if let Some(points) = scene.group_mut("points") {
        points.clear();
    }
}

/// Mark the selected edition's teams and host and place the two finalist
/// markers. Codes with no matching country element are skipped silently.
pub fn apply_highlight(scene: &mut Scene, cup: &WorldCup) -> Highlight {
    let highlight = Highlight {
        host: cup.host_country_code.clone(),
        teams: cup.teams_iso.clone(),
        gold_pos: WORLD_VIEW.project(cup.win_pos[0], cup.win_pos[1]),
        silver_pos: WORLD_VIEW.project(cup.ru_pos[0], cup.ru_pos[1]),
    };

    for code in &highlight.teams {
        if let Some(el) = scene.root.element_by_id_mut(code) {
            el.add_class("team");
        }
    }
    if let Some(el) = scene.root.element_by_id_mut(&highlight.host) {
        el.add_class("host");
    }

    if let Some(points) = scene.group_mut("points") {
        for (class, pos) in [("gold", highlight.gold_pos), ("silver", highlight.silver_pos)] {
            let mut el = vizjoin_scene::Element::new(Shape::Circle {
                cx: pos.x,
                cy: pos.y,
                r: MARKER_RADIUS,
            });
            el.add_class(class);
            points.children.push(Node::Element(el));
        }
    }

    highlight
}
