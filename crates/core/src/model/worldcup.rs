use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One FIFA World Cup edition. Keyed implicitly by `year`, assumed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldCup {
    pub year: i32,
    pub teams: f64,
    pub matches: f64,
    pub goals: f64,
    pub avg_goals: f64,
    pub attendance: f64,
    /// ISO code of the host country.
    pub host_country_code: String,
    /// Winner's position as a lon/lat pair.
    pub win_pos: [f64; 2],
    /// Runner-up's position as a lon/lat pair.
    pub ru_pos: [f64; 2],
    pub teams_iso: Vec<String>,
    pub teams_names: Vec<String>,
    // Passthrough display fields.
    pub edition: String,
    pub host: String,
    pub winner: String,
    pub runner_up: String,
}

/// The four metrics the bar chart can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Goals,
    Matches,
    Attendance,
    Teams,
}

impl Metric {
    pub fn value(self, cup: &WorldCup) -> f64 {
        match self {
            Metric::Goals => cup.goals,
            Metric::Matches => cup.matches,
            Metric::Attendance => cup.attendance,
            Metric::Teams => cup.teams,
        }
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goals" => Ok(Metric::Goals),
            "matches" => Ok(Metric::Matches),
            "attendance" => Ok(Metric::Attendance),
            "teams" => Ok(Metric::Teams),
            other => Err(UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Goals => "goals",
            Metric::Matches => "matches",
            Metric::Attendance => "attendance",
            Metric::Teams => "teams",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric {0:?} (expected goals, matches, attendance, or teams)")]
pub struct UnknownMetric(pub String);

/// One bar of the metric chart: the edition year and the selected metric's
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub year: i32,
    pub datum: f64,
}

/// Project every edition to the selected metric, sorted ascending by year.
pub fn metric_rows(data: &[WorldCup], metric: Metric) -> Vec<MetricRow> {
    let mut rows: Vec<MetricRow> = data
        .iter()
        .map(|cup| MetricRow {
            year: cup.year,
            datum: metric.value(cup),
        })
        .collect();
    rows.sort_by_key(|row| row.year);
    rows
}

/// Every edition in which `iso` participated, in data order.
pub fn participations<'a>(data: &'a [WorldCup], iso: &str) -> Vec<&'a WorldCup> {
    data.iter()
        .filter(|cup| cup.teams_iso.iter().any(|code| code == iso))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::WorldCup;

    /// A minimal edition for view tests.
    pub fn cup(year: i32, host_code: &str, teams: &[&str]) -> WorldCup {
        WorldCup {
            year,
            teams: teams.len() as f64,
            matches: 64.0,
            goals: 171.0,
            avg_goals: 2.7,
            attendance: 53000.0,
            host_country_code: host_code.to_string(),
            win_pos: [-58.4, -34.6],
            ru_pos: [2.35, 48.85],
            teams_iso: teams.iter().map(|s| s.to_string()).collect(),
            teams_names: teams.iter().map(|s| format!("Team {s}")).collect(),
            edition: format!("World Cup {year}"),
            host: host_code.to_string(),
            winner: "Winnerland".to_string(),
            runner_up: "Runnerupia".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_rows_sorted_by_year() {
        let data = vec![
            fixtures::cup(2014, "BRA", &["BRA", "GER"]),
            fixtures::cup(2006, "DEU", &["DEU", "ITA"]),
        ];
        let rows = metric_rows(&data, Metric::Matches);
        assert_eq!(rows[0].year, 2006);
        assert_eq!(rows[1].year, 2014);
        assert_eq!(rows[0].datum, 64.0);
    }

    #[test]
    fn participations_filters_by_iso() {
        let data = vec![
            fixtures::cup(2006, "DEU", &["DEU", "ITA"]),
            fixtures::cup(2010, "ZAF", &["ESP", "NLD"]),
            fixtures::cup(2014, "BRA", &["DEU", "ARG"]),
        ];
        let hits = participations(&data, "DEU");
        assert_eq!(
            hits.iter().map(|c| c.year).collect::<Vec<_>>(),
            vec![2006, 2014]
        );
        assert!(participations(&data, "XYZ").is_empty());
    }

    #[test]
    fn metric_parse_round_trip() {
        for name in ["goals", "matches", "attendance", "teams"] {
            let metric: Metric = match name.parse() {
                Ok(m) => m,
                Err(e) => panic!("{e}"),
            };
            assert_eq!(metric.to_string(), name);
        }
        assert!("points".parse::<Metric>().is_err());
    }
}
