//! Document traversal and mesh extraction.

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use anyhow::{anyhow, bail, Context};
use fbxcel_dom::{
    any::AnyDocument,
    v7400::{
        data::mesh::layer::TypedLayerElementHandle,
        object::{self, model::TypedModelHandle, TypedObjectHandle},
        Document,
    },
};
use glam::{DVec3, Vec3};
use tracing::{debug, info, trace};

use crate::{
    data::geometry::{GeometryBuilder, ImportedGeometry},
    error::ImportError,
    utils::{orient, triangulate},
};

/// Imports every triangulated mesh of an FBX file into flat buffers.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ImportedGeometry, ImportError> {
    let path = path.as_ref();
    info!("Started loading geometry from {}", path.display());

    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_owned(),
        source,
    })?;
    let geometry = load_from_reader(BufReader::new(file))?;

    info!(
        "Successfully loaded {} triangles from {}",
        geometry.triangle_count(),
        path.display(),
    );
    Ok(geometry)
}

/// Imports from any seekable FBX byte source.
pub fn load_from_reader(reader: impl Read + Seek) -> Result<ImportedGeometry, ImportError> {
    match AnyDocument::from_seekable_reader(reader)? {
        AnyDocument::V7400(ver, doc) => {
            trace!("Parsed FBX document, version {ver:?}");
            Loader::new().load(&doc)
        }
        other => Err(ImportError::UnsupportedVersion(other.fbx_version())),
    }
}

/// Per-import state, created inside the import call and dropped with it.
struct Loader {
    builder: GeometryBuilder,
}

impl Loader {
    fn new() -> Self {
        Self {
            builder: GeometryBuilder::default(),
        }
    }

    fn load(mut self, doc: &Document) -> Result<ImportedGeometry, ImportError> {
        // Anything that is not a mesh model is skipped, not an error.
        for obj in doc.objects() {
            if let TypedObjectHandle::Model(TypedModelHandle::Mesh(mesh)) = obj.get_typed() {
                self.load_mesh(mesh).map_err(ImportError::from_extraction)?;
            }
        }
        Ok(self.builder.finish())
    }

    fn load_mesh(&mut self, mesh_obj: object::model::MeshHandle<'_>) -> anyhow::Result<()> {
        let label = match mesh_obj.name() {
            Some(name) if !name.is_empty() => format!("FbxMesh@{name}"),
            _ => format!("FbxMesh{}", mesh_obj.object_id().raw()),
        };
        debug!("Flattening FBX mesh: {label}");

        let geometry_obj = mesh_obj.geometry().context("Failed to get geometry")?;
        let polygon_vertices = geometry_obj
            .polygon_vertices()
            .context("Failed to get polygon vertices")?;
        let triangle_pvi_indices = polygon_vertices
            .triangulate_each(|vertices, indices, triangles| {
                triangulate::strict(vertices, indices, triangles).map_err(anyhow::Error::from)
            })
            .context("Mesh is not a pure triangle list")?;

        // Positions are narrowed to f32 here; the winding arithmetic below
        // runs on the narrowed values, widened back to f64.
        let get_position = |pos: Option<_>| -> anyhow::Result<Vec3> {
            let cpi = pos.ok_or_else(|| anyhow!("Failed to get control point index"))?;
            let point = polygon_vertices
                .control_point(cpi)
                .ok_or_else(|| anyhow!("Failed to get control point: cpi={cpi:?}"))?;
            Ok(DVec3::from(point).as_vec3())
        };
        let positions = triangle_pvi_indices
            .iter_control_point_indices()
            .map(get_position)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to reconstruct position vertices")?;

        let normals = {
            let layer = geometry_obj
                .layers()
                .next()
                .ok_or_else(|| anyhow!("Failed to get layer"))?;
            let normals = layer
                .layer_element_entries()
                .find_map(|entry| match entry.typed_layer_element() {
                    Ok(TypedLayerElementHandle::Normal(handle)) => Some(handle),
                    _ => None,
                })
                .ok_or_else(|| anyhow!("Failed to get normals"))?
                .normals()
                .context("Failed to get normals")?;
            let get_normal = |tri_vi| -> anyhow::Result<DVec3> {
                let v = normals.normal(&triangle_pvi_indices, tri_vi)?;
                Ok(DVec3::from(v))
            };
            triangle_pvi_indices
                .triangle_vertex_indices()
                .map(get_normal)
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to reconstruct corner normals")?
        };

        if normals.len() != positions.len() {
            bail!(
                "mismatched length of buffers: pos{} normals{}",
                positions.len(),
                normals.len(),
            );
        }

        for (corners, corner_normals) in positions.chunks_exact(3).zip(normals.chunks_exact(3)) {
            let corners = [corners[0], corners[1], corners[2]];
            // Unweighted sum of the corner normals, a sign oracle only.
            let polygon_normal: DVec3 = corner_normals.iter().sum();
            let wound = orient::wind_clockwise(corners, polygon_normal);
            self.builder.push_triangle(wound.map(orient::to_output_space))?;
        }

        trace!("{label}: {} triangles", positions.len() / 3);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Minimal FBX 7.4 binary: header, empty `Documents`, `Objects` and
    /// `Connections` nodes, top-level terminator record. No footer; the parser records
    /// footer problems inside the tree instead of failing on them.
    fn minimal_document() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Kaydara FBX Binary  \0");
        bytes.extend_from_slice(&[0x1a, 0x00]);
        bytes.extend_from_slice(&7400u32.to_le_bytes());
        for name in ["Documents", "Objects", "Connections"] {
            // A node record without properties or children ends right
            // after its name.
            let end_offset = (bytes.len() + 13 + name.len()) as u32;
            bytes.extend_from_slice(&end_offset.to_le_bytes());
            bytes.extend_from_slice(&0u32.to_le_bytes());
            bytes.extend_from_slice(&0u32.to_le_bytes());
            bytes.push(name.len() as u8);
            bytes.extend_from_slice(name.as_bytes());
        }
        bytes.extend_from_slice(&[0u8; 13]);
        bytes
    }

    #[test]
    fn zero_mesh_document_imports_as_empty_geometry() {
        let geometry = load_from_reader(Cursor::new(minimal_document())).unwrap();
        assert!(geometry.is_empty());
        assert!(geometry.indices().is_empty());
        assert_eq!(geometry.triangle_count(), 0);
    }

    #[test]
    fn nonexistent_file_fails_to_open() {
        let err = load_from_file("does/not/exist.fbx").unwrap_err();
        assert!(matches!(err, ImportError::Open { .. }));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = load_from_reader(Cursor::new(&b"not an fbx document"[..])).unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn typed_errors_survive_context_chains() {
        let err = anyhow::Error::new(ImportError::UnsupportedPolygonArity { arity: 4 })
            .context("Mesh is not a pure triangle list");
        match ImportError::from_extraction(err) {
            ImportError::UnsupportedPolygonArity { arity } => assert_eq!(arity, 4),
            other => panic!("expected an arity error, got {other}"),
        }
    }

    #[test]
    fn untyped_extraction_errors_become_parse_errors() {
        let err = ImportError::from_extraction(anyhow!("Failed to get normals"));
        assert!(matches!(err, ImportError::Parse(_)));
    }
}
