//! Flattens triangulated FBX scenes into render-ready vertex/index buffers.
//!
//! Every mesh found in the document is gathered triangle by triangle,
//! normalized to a single winding order, converted into the renderer's
//! coordinate space and appended to one flat position buffer. The index
//! buffer is the identity permutation over it: no deduplication, 16-bit
//! indices, ready for direct upload.
//!
//! ```no_run
//! let geometry = fbx_flat::load_from_file("model.fbx")?;
//! assert_eq!(geometry.indices().len(), geometry.vertex_count());
//! # Ok::<(), fbx_flat::ImportError>(())
//! ```

mod data;
mod error;
mod loader;
mod utils;

pub use crate::{
    data::geometry::{ImportedGeometry, MAX_VERTEX_COUNT},
    error::ImportError,
    loader::{load_from_file, load_from_reader},
};
