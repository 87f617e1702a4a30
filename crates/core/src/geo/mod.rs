pub mod graticule;
pub mod path;
pub mod projection;

pub use graticule::graticule_lines;
pub use path::{path_for_line, path_for_rings};
pub use projection::{ConicConformal, WORLD_VIEW};
