pub mod check;
pub mod explore;
pub mod init;
pub mod map;
pub mod nodes;

use std::path::Path;

use sanctum_graph::{GraphStore, SafetyConfig};

/// Load and validate a graph definition directory.
fn load_dir(dir: &Path) -> Result<(GraphStore, SafetyConfig), String> {
    sanctum_graph::load_dir(dir).map_err(|e| e.to_string())
}
