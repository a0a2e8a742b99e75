//! Strict triangulator.
//!
//! The importer only accepts meshes that already are triangle lists; this
//! "triangulator" forwards triangles unchanged and reports any other arity
//! instead of cutting the polygon up.

use fbxcel_dom::v7400::data::mesh::{PolygonVertexIndex, PolygonVertices};

use crate::error::ImportError;

/// Forwards an already-triangulated polygon.
pub fn strict(
    _vertices: &PolygonVertices<'_>,
    indices: &[PolygonVertexIndex],
    triangles: &mut Vec<[PolygonVertexIndex; 3]>,
) -> Result<(), ImportError> {
    require_triangle(indices.len())?;
    triangles.push([indices[0], indices[1], indices[2]]);
    Ok(())
}

pub(crate) fn require_triangle(arity: usize) -> Result<(), ImportError> {
    if arity == 3 {
        Ok(())
    } else {
        Err(ImportError::UnsupportedPolygonArity { arity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quads_are_rejected_not_cut() {
        let err = require_triangle(4).unwrap_err();
        assert!(matches!(
            err,
            ImportError::UnsupportedPolygonArity { arity: 4 }
        ));
    }

    #[test]
    fn degenerate_arities_are_rejected() {
        for arity in [0, 1, 2, 5] {
            assert!(require_triangle(arity).is_err());
        }
        assert!(require_triangle(3).is_ok());
    }
}
