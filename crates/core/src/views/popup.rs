use std::fmt;

use crate::model::{WorldCup, worldcup};

pub const NEVER_PARTICIPATED: &str = "This country has never participated in a FIFA World Cup.";

pub const TABLE_HEADER: [&str; 3] = ["Participating editions", "Winner", "Runner up"];

/// The read-only popup shown when a country is clicked: titled by the ISO
/// code, with either the no-participation message or one table row per
/// edition the country played in.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub body: PopupBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupBody {
    NeverParticipated,
    Table { rows: Vec<[String; 3]> },
}

pub fn country_popup(iso: &str, data: &[WorldCup]) -> Popup {
    let cups = worldcup::participations(data, iso);
    let body = if cups.is_empty() {
        PopupBody::NeverParticipated
    } else {
        PopupBody::Table {
            rows: cups
                .iter()
                .map(|cup| {
                    [
                        cup.edition.clone(),
                        cup.winner.clone(),
                        cup.runner_up.clone(),
                    ]
                })
                .collect(),
        }
    };
    Popup {
        title: iso.to_string(),
        body,
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        match &self.body {
            PopupBody::NeverParticipated => writeln!(f, "{NEVER_PARTICIPATED}"),
            PopupBody::Table { rows } => {
                writeln!(f, "{}", TABLE_HEADER.join(" | "))?;
                for row in rows {
                    writeln!(f, "{}", row.join(" | "))?;
                }
                Ok(())
            }
        }
    }
}
