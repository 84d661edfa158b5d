use std::fs;
use std::path::Path;

use nixwall_core::scene::Scene;

use crate::svg::{render_document, SvgError};

/// Render the scene in memory, then write it to `path` in one call.
///
/// Returns the number of bytes written. Nothing is written if rendering fails.
pub fn write_svg_file(scene: &Scene, path: &Path) -> Result<usize, SvgError> {
    let document = render_document(scene)?;
    fs::write(path, &document)?;
    log::info!(
        "Wrote {} shapes ({} bytes) to {}",
        scene.shape_count(),
        document.len(),
        path.display()
    );
    Ok(document.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nixwall_core::config::GeneratorConfig;
    use nixwall_core::scene::SceneComposer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_scene() -> Scene {
        let config = GeneratorConfig {
            scatter_count: 50,
            ..Default::default()
        };
        SceneComposer::new(config)
            .unwrap()
            .compose(&mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let scene = small_scene();
        let written = write_svg_file(&scene, &path).unwrap();

        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk.len(), written);
        assert_eq!(on_disk, render_document(&scene).unwrap());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.svg");
        let err = write_svg_file(&small_scene(), &path).unwrap_err();
        assert!(matches!(err, SvgError::Io(_)));
        assert!(!path.exists());
    }
}
