use std::path::PathBuf;

use bsq_common::config::Config;
use bsq_common::layer::Layer;
use bsq_core::analysis;

pub const MAP_ERROR: &str = "map error\n";

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// What `bsq` prints for a single map file.
pub fn report(name: &str) -> String {
    report_layer(name, Layer::Map)
}

pub fn report_layer(name: &str, layer: Layer) -> String {
    let cfg: Config = Config {
        quiet: true,
        verbose: 0,
        layer,
    };
    analysis::report_file(&fixture(name), &cfg)
}
