use vizjoin_scene::{Group, Shape, ShapeKind};

use crate::model::WorldCup;

const LINE_HEIGHT: f64 = 16.0;

/// The info panel: four text slots plus the joined team-name list.
///
/// All fields derive from the selected record on each update; nothing is
/// cached separately.
#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    pub edition: String,
    pub host: String,
    pub winner: String,
    pub runner_up: String,
    pub teams: Group,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self {
            teams: Group::with_id("teams"),
            ..Self::default()
        }
    }

    /// Overwrite the panel from the selected edition. The team list is an
    /// enter/update/exit join, so shrinking editions drop surplus rows.
    pub fn update(&mut self, cup: &WorldCup) {
        self.edition = cup.edition.clone();
        self.host = cup.host.clone();
        self.winner = cup.winner.clone();
        self.runner_up = cup.runner_up.clone();

        self.teams
            .join(ShapeKind::Text, &cup.teams_names, |name, i, el| {
                el.shape = Shape::Text {
                    x: 0.0,
                    y: (i + 1) as f64 * LINE_HEIGHT,
                    content: name.clone(),
                };
            });
    }

    /// Team names currently listed, in document order.
    pub fn team_names(&self) -> Vec<&str> {
        self.teams
            .elements(ShapeKind::Text)
            .filter_map(|el| match &el.shape {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}
