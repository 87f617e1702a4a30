use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

use vizjoin_core::app::{BarChart, Dashboard, SampleCharts};
use vizjoin_core::model::{Metric, samples};
use vizjoin_core::parsers::{samples as sample_csv, worldcup};
use vizjoin_core::svg::write_svg;
use vizjoin_core::worker::GeometryTask;
use vizjoin_scene::Point;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("charts") => run_charts(&args[2..]),
        Some("worldcup") => run_worldcup(&args[2..]),
        _ => {
            eprintln!("Usage: vizjoin charts [--dataset <path>] [--random] [--seed <n>] [--out <dir>]");
            eprintln!("       vizjoin worldcup [--data <dir>] [--metric <m>] [--year <y>] [--country <iso>] [--out <dir>]");
            std::process::exit(1);
        }
    }
}

/// App A: the synthetic bar/line/area/scatter charts.
fn run_charts(args: &[String]) -> Result<()> {
    let mut dataset = PathBuf::from("data/dataset1.csv");
    let mut random = false;
    let mut seed: Option<u64> = None;
    let mut out = PathBuf::from("out");

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--dataset" => dataset = PathBuf::from(next_value(&mut it, "--dataset")?),
            "--random" => random = true,
            "--seed" => seed = Some(next_value(&mut it, "--seed")?.parse()?),
            "--out" => out = PathBuf::from(next_value(&mut it, "--out")?),
            other => bail!("unknown argument {other:?}"),
        }
    }

    let mut rows = match sample_csv::load_samples(&dataset) {
        Ok(rows) => rows,
        Err(err) => {
            // The exercise's alert path: no retry, no partial render.
            error!("dataset load failed: {err}");
            eprintln!("Couldn't load the dataset!");
            std::process::exit(1);
        }
    };
    if random {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        rows = samples::random_subset(&rows, &mut rng);
    }

    let mut charts = SampleCharts::new();
    charts.render(&rows);

    // The scripted interaction pass: a hover pair, a tooltip, a click.
    if !rows.is_empty() {
        charts.hover_bar(BarChart::A, 0);
        charts.hover_point(Point::new(100.0, 100.0));
        charts.click_point(&rows[0]);
    }

    std::fs::create_dir_all(&out)?;
    write_chart(&out, "bar-chart-a.svg", &charts.bar_a)?;
    write_chart(&out, "bar-chart-b.svg", &charts.bar_b)?;
    write_chart(&out, "line-chart-a.svg", &charts.line_a)?;
    write_chart(&out, "line-chart-b.svg", &charts.line_b)?;
    write_chart(&out, "area-chart-a.svg", &charts.area_a)?;
    write_chart(&out, "area-chart-b.svg", &charts.area_b)?;
    write_chart(&out, "scatterplot.svg", &charts.scatter)?;

    // The static staircase rewrite, as its own variant of chart a.
    charts.staircase();
    write_chart(&out, "staircase.svg", &charts.bar_a)?;

    Ok(())
}

/// App B: the World Cup dashboard.
fn run_worldcup(args: &[String]) -> Result<()> {
    let mut data_dir = PathBuf::from("data");
    let mut metric: Option<Metric> = None;
    let mut year: Option<i32> = None;
    let mut country: Option<String> = None;
    let mut out = PathBuf::from("out");

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--data" => data_dir = PathBuf::from(next_value(&mut it, "--data")?),
            "--metric" => metric = Some(next_value(&mut it, "--metric")?.parse()?),
            "--year" => year = Some(next_value(&mut it, "--year")?.parse()?),
            "--country" => country = Some(next_value(&mut it, "--country")?.to_string()),
            "--out" => out = PathBuf::from(next_value(&mut it, "--out")?),
            other => bail!("unknown argument {other:?}"),
        }
    }

    // The map geometry goes off the critical path first, exactly once.
    let topology = std::fs::read(data_dir.join("world.json"))
        .inspect_err(|err| error!("topology load failed: {err}"))
        .context("loading world.json")?;
    let task = GeometryTask::spawn(topology);

    let cups = worldcup::load_worldcup(&data_dir.join("fifa-world-cup.csv"))
        .inspect_err(|err| error!("dataset load failed: {err}"))
        .context("loading fifa-world-cup.csv")?;
    if cups.is_empty() {
        bail!("fifa-world-cup.csv holds no editions");
    }

    let mut dashboard = Dashboard::new(cups, task);
    if let Some(metric) = metric {
        dashboard.choose_metric(metric);
    }

    dashboard
        .wait_for_map()
        .inspect_err(|err| error!("map geometry failed: {err}"))
        .context("computing map geometry")?;

    // Default to the latest edition, the way a first click would.
    let year = match year {
        Some(year) => year,
        None => dashboard
            .data()
            .iter()
            .map(|cup| cup.year)
            .max()
            .unwrap_or_default(),
    };
    dashboard.click_bar(year);

    std::fs::create_dir_all(&out)?;
    write_chart(&out, "barchart.svg", &dashboard.bar_chart)?;
    write_chart(&out, "map.svg", &dashboard.map.scene)?;
    std::fs::write(out.join("info.txt"), info_text(&dashboard))?;

    if let Some(iso) = country {
        let popup = dashboard.click_country(&iso);
        std::fs::write(out.join("popup.txt"), popup.to_string())?;
    }

    Ok(())
}

fn info_text(dashboard: &Dashboard) -> String {
    let info = &dashboard.info;
    let mut text = format!(
        "Edition: {}\nHost: {}\nWinner: {}\nRunner up: {}\nTeams:\n",
        info.edition, info.host, info.winner, info.runner_up
    );
    for name in info.team_names() {
        text.push_str("  ");
        text.push_str(name);
        text.push('\n');
    }
    text
}

fn write_chart(out: &Path, name: &str, scene: &vizjoin_scene::Scene) -> Result<()> {
    let path = out.join(name);
    std::fs::write(&path, write_svg(scene)).with_context(|| format!("writing {}", path.display()))
}

fn next_value<'a>(
    it: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a String> {
    it.next().with_context(|| format!("{flag} needs a value"))
}
