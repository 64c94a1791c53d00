use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use bsq_common::config::Config;
use bsq_core::analysis;
use tracing::debug;

/// Analyses each map in turn and writes its output to stdout.
///
/// A map that fails validation prints `map error` and does not stop the
/// maps after it.
pub fn analyse(maps: &[PathBuf], cfg: &Config) -> anyhow::Result<()> {
    if maps.is_empty() {
        debug!("no map given, nothing to analyse");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in maps {
        let text: String = analysis::report_file(path, cfg);
        out.write_all(text.as_bytes())
            .with_context(|| format!("writing output for {}", path.display()))?;
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
