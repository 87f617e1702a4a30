//! Integration test: load the World Cup dataset and the reduced world
//! topology, drive the dashboard through metric choice, bar clicks, and a
//! country click, and check the three views stay consistent.

use vizjoin_core::app::{Dashboard, MapState};
use vizjoin_core::model::Metric;
use vizjoin_core::parsers::worldcup::parse_worldcup;
use vizjoin_core::svg::write_svg;
use vizjoin_core::views::popup::PopupBody;
use vizjoin_core::worker::GeometryTask;
use vizjoin_scene::ShapeKind;

const WORLD_CUP_CSV: &str = include_str!("fixtures/fifa-world-cup.csv");
const WORLD_JSON: &str = include_str!("fixtures/world.json");

fn build_dashboard() -> Dashboard {
    let cups = parse_worldcup(WORLD_CUP_CSV.as_bytes()).expect("failed to parse dataset");
    assert_eq!(cups.len(), 4);
    let task = GeometryTask::spawn(WORLD_JSON.as_bytes().to_vec());
    Dashboard::new(cups, task)
}

#[test]
fn full_dashboard_flow() {
    let mut dashboard = build_dashboard();

    // Startup: attendance bars, one per edition, map still loading.
    assert_eq!(dashboard.metric(), Metric::Attendance);
    let bar_count = dashboard
        .bar_chart
        .group("bars")
        .map(|bars| bars.count(ShapeKind::Rect))
        .unwrap_or_default();
    assert_eq!(bar_count, 4);

    dashboard.wait_for_map().expect("map geometry failed");
    assert_eq!(dashboard.map.state(), MapState::Ready);
    let countries = dashboard
        .map
        .scene
        .group("countries")
        .map(|g| g.count(ShapeKind::Path))
        .unwrap_or_default();
    assert_eq!(countries, 11);

    // Click 2014, then 2018: exactly the last selection remains.
    dashboard.choose_metric(Metric::Goals);
    dashboard.click_bar(2014);
    dashboard.click_bar(2018);
    assert_eq!(dashboard.map.state(), MapState::Selected);
    assert_eq!(dashboard.info.edition, "FIFA World Cup Russia 2018");
    assert_eq!(dashboard.info.winner, "France");

    let team_marks: Vec<&str> = dashboard
        .map
        .scene
        .group("countries")
        .expect("countries group")
        .elements(ShapeKind::Path)
        .filter(|el| el.has_class("team"))
        .filter_map(|el| el.id.as_deref())
        .collect();
    // BEL has no country element in the reduced topology and is skipped.
    assert_eq!(team_marks, vec!["URY", "ARG", "BRA", "FRA", "ESP", "RUS", "HRV"]);
    let hosts: Vec<&str> = dashboard
        .map
        .scene
        .group("countries")
        .expect("countries group")
        .elements(ShapeKind::Path)
        .filter(|el| el.has_class("host"))
        .filter_map(|el| el.id.as_deref())
        .collect();
    assert_eq!(hosts, vec!["RUS"]);
    let markers = dashboard
        .map
        .scene
        .group("points")
        .map(|g| g.count(ShapeKind::Circle))
        .unwrap_or_default();
    assert_eq!(markers, 2);

    // Popups from the same single source of truth.
    let popup = dashboard.click_country("URY");
    match popup.body {
        PopupBody::Table { rows } => assert_eq!(rows.len(), 4),
        PopupBody::NeverParticipated => panic!("URY participated in every fixture edition"),
    }
    let popup = dashboard.click_country("ZZZ");
    assert_eq!(popup.body, PopupBody::NeverParticipated);

    // Both SVG documents serialize.
    let bar_svg = write_svg(&dashboard.bar_chart);
    assert!(bar_svg.contains(r#"id="bars""#));
    let map_svg = write_svg(&dashboard.map.scene);
    assert!(map_svg.contains(r#"class="country team""#) || map_svg.contains(r#"class="country host""#));
}

#[test]
fn reselecting_the_same_year_is_idempotent() {
    let mut dashboard = build_dashboard();
    dashboard.wait_for_map().expect("map geometry failed");

    dashboard.click_bar(2010);
    let first_map = write_svg(&dashboard.map.scene);
    let first_bars = write_svg(&dashboard.bar_chart);

    dashboard.click_bar(2010);
    assert_eq!(write_svg(&dashboard.map.scene), first_map);
    assert_eq!(write_svg(&dashboard.bar_chart), first_bars);
}
