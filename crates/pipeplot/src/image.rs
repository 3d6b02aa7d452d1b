use crate::{pdf, png, svg, PipePlot};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders the plot in the format implied by the extension of `path`.
///
/// The image is first written to a temporary file next to `path` and only moved
/// into place once rendering has fully succeeded, so a failed run never leaves a
/// partial image behind.
pub fn generate(plot: &PipePlot, path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(format!("Failed to get extension from path: {path:?}"))?;
    let file_type = FileType::from_extension(extension)
        .ok_or(format!("Unsupported file extension: {extension:?}"))?;

    let svg_content = svg::generate_string(plot);
    let bytes = match file_type {
        FileType::Svg => svg_content.into_bytes(),
        FileType::Png => png::render_from_string(&svg_content)?,
        FileType::Pdf => pdf::render_from_string(&svg_content)?,
    };

    persist_atomically(&bytes, path)
}

fn persist_atomically(bytes: &[u8], path: &Path) -> Result<(), String> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| e.to_string())?;
    temp_file.write_all(bytes).map_err(|e| e.to_string())?;
    temp_file.flush().map_err(|e| e.to_string())?;
    temp_file
        .persist(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e.error))?;
    Ok(())
}

#[derive(Debug, PartialEq)]
enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Legend;

    fn empty_plot() -> PipePlot {
        PipePlot {
            width: 100,
            height: 50,
            pipes: Vec::new(),
            legend: Legend {
                xpos: 0,
                ypos: 0,
                height: 10,
                title: None,
                entries: Vec::new(),
            },
            font_family: "monospace".to_string(),
        }
    }

    #[test]
    fn file_type_is_case_insensitive() {
        assert_eq!(FileType::from_extension("PNG"), Some(FileType::Png));
        assert_eq!(FileType::from_extension("svg"), Some(FileType::Svg));
        assert_eq!(FileType::from_extension("jpg"), None);
    }

    #[test]
    fn unsupported_extension_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.jpg");
        assert!(generate(&empty_plot(), &path).is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn svg_is_written_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        generate(&empty_plot(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
