use std::path::PathBuf;

use crate::model::Report;

/// Target of the preview modal: where the file lives, what to call it,
/// and the MIME type that decides the preview branch.
#[derive(Debug, Clone)]
pub struct ViewerFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
}

impl ViewerFile {
    pub fn for_report(report: &Report) -> Self {
        Self {
            path: report.path.clone(),
            name: report.file_name.clone(),
            mime: report.kind.mime(&report.path),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileKind, Report};

    fn report(name: &str, kind: FileKind) -> Report {
        Report {
            id: 1,
            file_name: name.to_string(),
            uploaded: "2025-11-02".to_string(),
            kind,
            path: PathBuf::from(name),
            thumbnail: None,
        }
    }

    #[test]
    fn image_mime_takes_the_image_branch() {
        let file = ViewerFile::for_report(&report("scan.png", FileKind::Image));
        assert!(file.is_image());
    }

    #[test]
    fn any_other_mime_takes_the_document_branch() {
        let file = ViewerFile::for_report(&report("fbc.pdf", FileKind::Pdf));
        assert!(!file.is_image());
    }
}
