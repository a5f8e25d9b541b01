use std::path::PathBuf;

use crate::model::{Tab, ViewMode};

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SetViewMode(ViewMode),
    OpenViewer(usize),
    CloseViewer,
    DownloadViewerFile,
    DownloadFinished(Result<(), String>),
    PickReportFiles,
    ReportFilesPicked(Vec<PathBuf>),
}
