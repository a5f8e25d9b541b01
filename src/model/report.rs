use std::path::{Path, PathBuf};

/// Layout selector for the investigations browser. Transient UI state,
/// scoped to the lifetime of the containing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Coarse file-type tag carried by every report. Anything that is not a
/// recognized raster image is treated as a document so that a missing or
/// unknown extension degrades to the embedded-document branch instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp") => FileKind::Image,
            _ => FileKind::Pdf,
        }
    }

    pub fn mime(self, path: &Path) -> String {
        match self {
            FileKind::Pdf => "application/pdf".to_string(),
            FileKind::Image => {
                let subtype = match path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_ascii_lowercase())
                    .as_deref()
                {
                    Some("jpg" | "jpeg") => "jpeg",
                    Some("gif") => "gif",
                    Some("bmp") => "bmp",
                    Some("webp") => "webp",
                    _ => "png",
                };
                format!("image/{subtype}")
            }
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Image => "🖼",
        }
    }
}

/// Metadata record describing one uploaded investigation result file.
/// Read-only from the view's perspective; the id is the stable identity
/// that keeps entries recognizable across layout-mode switches.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: usize,
    pub file_name: String,
    pub uploaded: String,
    pub kind: FileKind,
    pub path: PathBuf,
    pub thumbnail: Option<PathBuf>,
}

impl Report {
    /// Builds a report entry for a freshly picked file, stamped with
    /// today's date.
    pub fn from_path(id: usize, path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unnamed")
            .to_string();

        Self {
            id,
            file_name,
            uploaded: chrono::Local::now().format("%Y-%m-%d").to_string(),
            kind: FileKind::from_path(&path),
            path,
            thumbnail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_map_to_image_kind() {
        for name in ["scan.png", "scan.JPG", "scan.jpeg", "scan.webp"] {
            assert_eq!(FileKind::from_path(Path::new(name)), FileKind::Image);
        }
    }

    #[test]
    fn everything_else_falls_through_to_document() {
        for name in ["report.pdf", "report.docx", "report", "report."] {
            assert_eq!(FileKind::from_path(Path::new(name)), FileKind::Pdf);
        }
    }

    #[test]
    fn mime_reflects_kind_and_extension() {
        assert_eq!(
            FileKind::Pdf.mime(Path::new("report.pdf")),
            "application/pdf"
        );
        assert_eq!(FileKind::Image.mime(Path::new("scan.jpg")), "image/jpeg");
        assert_eq!(FileKind::Image.mime(Path::new("scan.png")), "image/png");
    }

    #[test]
    fn from_path_uses_the_file_name_and_tags_the_kind() {
        let report = Report::from_path(7, PathBuf::from("/tmp/uploads/chest-x-ray.png"));
        assert_eq!(report.id, 7);
        assert_eq!(report.file_name, "chest-x-ray.png");
        assert_eq!(report.kind, FileKind::Image);
    }
}
