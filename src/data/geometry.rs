//! Flattened geometry buffers.

use glam::Vec3;

use crate::error::ImportError;

/// Highest vertex count addressable with a 16-bit index buffer.
pub const MAX_VERTEX_COUNT: usize = u16::MAX as usize;

/// Render-ready triangle list geometry.
///
/// Positions and indices are parallel buffers: `indices[i] == i` for all `i`,
/// every triangle owns its 3 vertices and nothing is shared. The position
/// count is always a multiple of 3 and never exceeds [`MAX_VERTEX_COUNT`].
#[derive(Debug, Clone, Default)]
pub struct ImportedGeometry {
    positions: Vec<Vec3>,
    indices: Vec<u16>,
}

impl ImportedGeometry {
    /// Vertex positions, 3 consecutive entries per triangle.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Identity index buffer, parallel to [`positions`](Self::positions).
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Accumulates emitted triangles during a single import.
#[derive(Debug, Default)]
pub(crate) struct GeometryBuilder {
    positions: Vec<Vec3>,
}

impl GeometryBuilder {
    pub(crate) fn push_triangle(&mut self, corners: [Vec3; 3]) -> Result<(), ImportError> {
        let count = self.positions.len() + 3;
        if count > MAX_VERTEX_COUNT {
            return Err(ImportError::TooManyVertices { count });
        }
        self.positions.extend(corners);
        Ok(())
    }

    pub(crate) fn finish(self) -> ImportedGeometry {
        // The cast is lossless, push_triangle keeps the count under 2^16.
        let indices = (0..self.positions.len() as u16).collect();
        ImportedGeometry {
            positions: self.positions,
            indices,
        }
    }
}
