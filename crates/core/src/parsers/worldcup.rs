use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::WorldCup;
use crate::model::coerce;

#[derive(Debug, Error)]
pub enum WorldCupError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw CSV row. Every field arrives as text; numeric coercion happens in a
/// second step so junk values propagate as NaN instead of failing the load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "YEAR")]
    year: String,
    #[serde(rename = "EDITION")]
    edition: String,
    host: String,
    winner: String,
    runner_up: String,
    host_country_code: String,
    #[serde(rename = "TEAMS")]
    teams: String,
    #[serde(rename = "MATCHES")]
    matches: String,
    #[serde(rename = "GOALS")]
    goals: String,
    #[serde(rename = "AVERAGE_GOALS")]
    avg_goals: String,
    #[serde(rename = "AVERAGE_ATTENDANCE")]
    attendance: String,
    #[serde(rename = "WIN_LON")]
    win_lon: String,
    #[serde(rename = "WIN_LAT")]
    win_lat: String,
    #[serde(rename = "RUP_LON")]
    rup_lon: String,
    #[serde(rename = "RUP_LAT")]
    rup_lat: String,
    #[serde(rename = "TEAM_LIST")]
    team_list: String,
    #[serde(rename = "TEAM_NAMES")]
    team_names: String,
}

/// Parse the World Cup editions dataset.
///
/// `TEAM_LIST` and `TEAM_NAMES` are CSV-escaped columns holding one CSV
/// line each; they are parsed with a second, headerless read.
pub fn parse_worldcup(data: &[u8]) -> Result<Vec<WorldCup>, WorldCupError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(data);
    let mut editions = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row?;
        editions.push(WorldCup {
            year: coerce::to_number(&row.year) as i32,
            teams: coerce::to_number(&row.teams),
            matches: coerce::to_number(&row.matches),
            goals: coerce::to_number(&row.goals),
            avg_goals: coerce::to_number(&row.avg_goals),
            attendance: coerce::to_number(&row.attendance),
            host_country_code: row.host_country_code,
            win_pos: [
                coerce::to_number(&row.win_lon),
                coerce::to_number(&row.win_lat),
            ],
            ru_pos: [
                coerce::to_number(&row.rup_lon),
                coerce::to_number(&row.rup_lat),
            ],
            teams_iso: parse_embedded_list(&row.team_list)?,
            teams_names: parse_embedded_list(&row.team_names)?,
            edition: row.edition,
            host: row.host,
            winner: row.winner,
            runner_up: row.runner_up,
        });
    }
    Ok(editions)
}

pub fn load_worldcup(path: &Path) -> Result<Vec<WorldCup>, WorldCupError> {
    let data = std::fs::read(path)?;
    parse_worldcup(&data)
}

/// An embedded sub-list is itself one CSV line ("ARG,BRA,FRA").
fn parse_embedded_list(field: &str) -> Result<Vec<String>, WorldCupError> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(field.as_bytes());
    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        items.extend(record.iter().map(str::to_string));
        break; // one line per field
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
YEAR,EDITION,host,winner,runner_up,host_country_code,TEAMS,MATCHES,GOALS,AVERAGE_GOALS,AVERAGE_ATTENDANCE,WIN_LON,WIN_LAT,RUP_LON,RUP_LAT,TEAM_LIST,TEAM_NAMES
2014,World Cup 2014,Brazil,Germany,Argentina,BRA,32,64,171,2.7,53592,10.45,51.16,-63.62,-38.42,\"DEU,ARG,BRA\",\"Germany,Argentina,Brazil\"
";

    #[test]
    fn parses_editions_with_embedded_lists() {
        let editions = match parse_worldcup(SAMPLE.as_bytes()) {
            Ok(e) => e,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(editions.len(), 1);
        let cup = &editions[0];
        assert_eq!(cup.year, 2014);
        assert_eq!(cup.teams, 32.0);
        assert_eq!(cup.attendance, 53592.0);
        assert_eq!(cup.win_pos, [10.45, 51.16]);
        assert_eq!(cup.teams_iso, vec!["DEU", "ARG", "BRA"]);
        assert_eq!(cup.teams_names, vec!["Germany", "Argentina", "Brazil"]);
        assert_eq!(cup.winner, "Germany");
    }

    #[test]
    fn numeric_junk_coerces_to_nan() {
        let data = SAMPLE.replace("171", "many");
        let editions = match parse_worldcup(data.as_bytes()) {
            Ok(e) => e,
            Err(e) => panic!("{e}"),
        };
        assert!(editions[0].goals.is_nan());
    }
}
