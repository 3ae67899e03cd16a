//! Output writer for generated artifacts

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::ApidocError;
use crate::fs::test_file_name;
use crate::generate::{render_test_source, MonitorConfig, TestSourceOptions};
use crate::model::ApiDoc;

/// Path argument meaning "write to stdout"
pub const STDOUT_PATH: &str = "-";

/// Write text to a file, or to stdout when the path is `-`
///
/// Parent directories are created as needed.
pub fn write_text(path: &Path, text: &str) -> Result<(), ApidocError> {
    if path.as_os_str() == STDOUT_PATH {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, text)?;
    info!(path = %path.display(), bytes = text.len(), "Wrote file");
    Ok(())
}

/// Render and write one test suite per group into `dir`
///
/// Every suite is rendered before anything is written, so a failing
/// condition leaves the directory untouched. Returns the written paths in
/// group order.
pub fn write_test_sources(
    dir: &Path,
    docs: &[ApiDoc],
    options: &TestSourceOptions,
    extension: &str,
) -> Result<Vec<PathBuf>, ApidocError> {
    let rendered = docs.iter()
        .map(|doc| {
            render_test_source(doc, options)
                .map(|source| (dir.join(test_file_name(&doc.group_name, extension)), source))
        })
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(rendered.len());
    for (path, source) in rendered {
        write_text(&path, &source)?;
        written.push(path);
    }

    Ok(written)
}

/// Write a monitoring configuration as compact JSON
pub fn write_monitor_config(path: &Path, config: &MonitorConfig<'_>) -> Result<(), ApidocError> {
    write_text(path, &config.to_json()?)
}
