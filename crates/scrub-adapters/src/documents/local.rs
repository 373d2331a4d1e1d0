//! Local filesystem document adapter using std::fs.

use std::io;
use std::path::Path;

use scrub_core::{
    application::{ApplicationError, ports::DocumentStore},
    domain::Value,
    error::{ScrubError, ScrubResult},
};
use tracing::debug;

use super::Format;

/// Path that reads JSON from stdin and writes to stdout.
pub const STDIO_PATH: &str = "-";

/// Production document store on the local filesystem.
#[derive(Debug, Clone, Copy)]
pub struct LocalDocuments;

impl LocalDocuments {
    /// Create a new local document adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalDocuments {
    fn default() -> Self {
        Self::new()
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

impl DocumentStore for LocalDocuments {
    fn read(&self, path: &Path) -> ScrubResult<Value> {
        if is_stdio(path) {
            let text = io::read_to_string(io::stdin()).map_err(|e| map_read_error(path, e))?;
            return Format::Json.parse(&text, path);
        }

        let format = Format::require(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| map_read_error(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "Document read");
        format.parse(&text, path)
    }

    fn write(&self, path: &Path, value: &Value, pretty: bool) -> ScrubResult<()> {
        if is_stdio(path) {
            let text = Format::Json.render(value, pretty, path)?;
            return io::Write::write_all(&mut io::stdout().lock(), text.as_bytes())
                .map_err(|e| map_write_error(path, e));
        }

        let text = Format::require(path)?.render(value, pretty, path)?;
        std::fs::write(path, text).map_err(|e| map_write_error(path, e))
    }
}

fn map_read_error(path: &Path, e: io::Error) -> ScrubError {
    ApplicationError::DocumentRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_write_error(path: &Path, e: io::Error) -> ScrubError {
    ApplicationError::DocumentWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
