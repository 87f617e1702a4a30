pub mod samples;
pub mod topology;
pub mod worldcup;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("samples: {0}")]
    Samples(#[from] samples::SamplesError),
    #[error("worldcup: {0}")]
    WorldCup(#[from] worldcup::WorldCupError),
    #[error("topology: {0}")]
    Topology(#[from] topology::TopologyError),
}
