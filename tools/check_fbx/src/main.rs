// Imports the given fbx file and prints the flattened buffers.

fn main() {
    tracing_subscriber::fmt::init();

    let path = match std::env::args_os().nth(1) {
        Some(v) => std::path::PathBuf::from(v),
        None => {
            eprintln!("Usage: check_fbx <FBX_FILE>");

            std::process::exit(1);
        }
    };

    let geometry = match fbx_flat::load_from_file(&path) {
        Ok(geometry) => geometry,
        Err(err) => {
            eprintln!("Import failed: {err}");

            std::process::exit(1);
        }
    };

    println!("Imported {}", path.display());
    println!("  Triangles - {}", geometry.triangle_count());
    println!("  Vertices  - {}", geometry.vertex_count());
    println!("  Indices   - {}", geometry.indices().len());

    for (i, triangle) in geometry.positions().chunks_exact(3).take(4).enumerate() {
        println!("  Triangle {i} - {triangle:?}");
    }
}
