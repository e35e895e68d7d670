//! Compiling source files.

use std::fs;
use std::path::Path;

use tracing::info;

use citegraph_foundation::{EntityId, Error, ErrorContext, ErrorKind, Result};
use citegraph_language::{Compilation, ParseConfig, compile_with_config};

/// Reads `path` as UTF-8 and compiles it into a fresh store.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or the compile error
/// with the file name attached as context.
pub fn compile_file<P: AsRef<Path>>(path: P, config: &ParseConfig) -> Result<Compilation> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    let compilation = compile_with_config(&source, config).map_err(|e| {
        let mut context = ErrorContext::new().with_source(path.display().to_string());
        if let Some((line, column)) = e.position() {
            context = context.with_position(line as usize, column as usize);
        }
        e.with_context(context)
    })?;

    info!(
        path = %path.display(),
        triples = compilation.store.len(),
        "compiled file"
    );
    Ok(compilation)
}

/// Parses a subject given on the command line.
///
/// Canonical id text (`_:user/a`, `_:auto_expr/3`, `rdf:subject`) is parsed
/// as such; anything else names a user entity.
///
/// # Errors
///
/// Returns an error if the text looks canonical but is malformed.
pub fn parse_subject(text: &str) -> Result<EntityId> {
    if text.starts_with("_:") || text.starts_with("rdf:") {
        text.parse()
    } else {
        Ok(EntityId::user(text))
    }
}
