//! Offscreen map-geometry computation.
//!
//! One dedicated thread, used exactly once at startup: it decodes the
//! topology document, projects every country and the graticule under
//! [`crate::geo::WORLD_VIEW`], and sends a single message back — the JSON
//! serialization of [`MapGeometry`]. No cancellation, no timeout, no
//! retry; failures come back as values.

use std::sync::mpsc;
use std::thread;

use thiserror::Error;
use tracing::error;

use crate::geo::{self, WORLD_VIEW};
use crate::model::{CountryPath, MapGeometry};
use crate::parsers::topology::{self, TopologyError};

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("topology: {0}")]
    Topology(#[from] TopologyError),
    #[error("wire format: {0}")]
    Wire(#[from] serde_json::Error),
    #[error("geometry worker terminated without a result")]
    WorkerGone,
}

/// Handle to the in-flight geometry computation: one outbound dispatch
/// (the spawn carries the topology bytes), one inbound message.
pub struct GeometryTask {
    rx: mpsc::Receiver<Result<String, GeometryError>>,
}

impl GeometryTask {
    /// Dispatch the worker. The topology document is moved to the worker
    /// thread; the main thread does nothing with it afterwards.
    pub fn spawn(topology_json: Vec<u8>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = compute(&topology_json);
            if let Err(err) = &result {
                error!("geometry worker failed: {err}");
            }
            // The receiver may already be gone; nothing to do then.
            let _ = tx.send(result);
        });
        Self { rx }
    }

    /// Block until the worker's single message arrives.
    pub fn wait(self) -> Result<MapGeometry, GeometryError> {
        match self.rx.recv() {
            Ok(wire) => decode(wire?),
            Err(mpsc::RecvError) => Err(GeometryError::WorkerGone),
        }
    }

    /// Non-blocking check for the worker's message. `None` while the
    /// worker is still computing.
    pub fn try_wait(&mut self) -> Option<Result<MapGeometry, GeometryError>> {
        match self.rx.try_recv() {
            Ok(wire) => Some(wire.and_then(decode)),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(GeometryError::WorkerGone)),
        }
    }
}

/// Worker side: topology document in, wire string out.
fn compute(topology_json: &[u8]) -> Result<String, GeometryError> {
    let countries = topology::parse_topology(topology_json)?;

    let geometry = MapGeometry {
        countries: countries
            .iter()
            .map(|country| CountryPath {
                id: country.id.clone(),
                path: geo::path_for_rings(&WORLD_VIEW, &country.rings),
            })
            .collect(),
        graticule: geo::graticule_lines()
            .iter()
            .map(|line| geo::path_for_line(&WORLD_VIEW, line))
            .collect(),
    };

    Ok(serde_json::to_string(&geometry)?)
}

fn decode(wire: String) -> Result<MapGeometry, GeometryError> {
    Ok(serde_json::from_str(&wire)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPOLOGY: &str = r#"{
        "type": "Topology",
        "transform": { "scale": [1.0, 1.0], "translate": [0.0, 0.0] },
        "arcs": [[[0, 0], [10, 0], [0, 10], [-10, 0], [0, -10]]],
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "id": "BOX", "arcs": [[0]] }
                ]
            }
        }
    }"#;

    #[test]
    fn round_trips_geometry_through_the_wire() {
        let task = GeometryTask::spawn(TOPOLOGY.as_bytes().to_vec());
        let geometry = match task.wait() {
            Ok(g) => g,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(geometry.countries.len(), 1);
        assert_eq!(geometry.countries[0].id, "BOX");
        assert!(geometry.countries[0].path.ends_with('Z'));
        assert_eq!(geometry.graticule.len(), 54);
    }

    #[test]
    fn parse_failure_is_a_value() {
        let task = GeometryTask::spawn(b"not json".to_vec());
        assert!(matches!(task.wait(), Err(GeometryError::Topology(_))));
    }

    #[test]
    fn try_wait_eventually_yields_the_result() {
        let mut task = GeometryTask::spawn(TOPOLOGY.as_bytes().to_vec());
        let result = loop {
            if let Some(result) = task.try_wait() {
                break result;
            }
            thread::yield_now();
        };
        assert!(result.is_ok());
    }
}
