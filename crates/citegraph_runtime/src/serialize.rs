//! Graph snapshots using `MessagePack`.
//!
//! A snapshot is the compiled triples plus their provenance, detached from
//! the id counters of the store that produced them.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use citegraph_foundation::{EntityId, Error, ErrorKind, Result, Span};
use citegraph_store::{GraphStore, Triple};

/// Serializable view of a compiled graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Triples in emission order.
    pub triples: Vec<Triple>,
    /// Source position of each statement id, ordered by id.
    pub provenance: Vec<(EntityId, Span)>,
}

impl GraphSnapshot {
    /// Captures the triples and provenance of `store`.
    #[must_use]
    pub fn from_store(store: &GraphStore) -> Self {
        Self {
            triples: store.triples().to_vec(),
            provenance: store
                .provenance_map()
                .iter()
                .map(|(id, span)| (id.clone(), *span))
                .collect(),
        }
    }

    /// Returns the source position recorded for `id`.
    #[must_use]
    pub fn provenance_of(&self, id: &EntityId) -> Option<Span> {
        self.provenance
            .iter()
            .find(|(candidate, _)| candidate == id)
            .map(|(_, span)| *span)
    }
}

impl From<&GraphStore> for GraphSnapshot {
    fn from(store: &GraphStore) -> Self {
        Self::from_store(store)
    }
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &GraphSnapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<GraphSnapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!(
        "failed to {action} file '{}': {e}",
        path.display()
    )))
}

/// Saves a snapshot to a file, creating or overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &GraphSnapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(snapshot)?;

    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    debug!(path = %path.display(), bytes = bytes.len(), "snapshot saved");
    Ok(())
}

/// Loads a snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<GraphSnapshot> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes)
}
