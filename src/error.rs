//! Import failure modes.

use std::{io, path::PathBuf};

use fbxcel_dom::fbxcel::low::FbxVersion;
use thiserror::Error;

/// Why an import produced no geometry.
///
/// There are no partial results: whatever was gathered before the failure is
/// discarded with the loader.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be opened.
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The byte stream is not a well-formed FBX binary document, or the
    /// document is missing data the importer needs (no normal layer, an
    /// out-of-range control point index, ...).
    #[error("failed to parse FBX document: {0:#}")]
    Parse(anyhow::Error),
    /// Parsed fine, but not an FBX 7.4/7.5 document.
    #[error("unsupported FBX version {0:?}, only FBX 7.4/7.5 binary documents are supported")]
    UnsupportedVersion(FbxVersion),
    /// A polygon with more or fewer than 3 corners.
    #[error("polygon has {arity} vertices, only triangulated meshes are supported")]
    UnsupportedPolygonArity { arity: usize },
    /// The combined vertex count of all meshes overflows 16-bit indices.
    #[error("geometry has {count} vertices, more than a 16-bit index buffer can address")]
    TooManyVertices { count: usize },
}

impl ImportError {
    /// Recovers a typed error from the `anyhow` chains of the extraction
    /// code; anything untyped is a malformed document.
    pub(crate) fn from_extraction(err: anyhow::Error) -> Self {
        match err.downcast::<ImportError>() {
            Ok(err) => err,
            Err(err) => ImportError::Parse(err),
        }
    }
}

impl From<fbxcel_dom::any::Error> for ImportError {
    fn from(err: fbxcel_dom::any::Error) -> Self {
        ImportError::Parse(anyhow::Error::new(err))
    }
}
