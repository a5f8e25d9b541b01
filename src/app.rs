use crate::message::Message;
use crate::model::{sample, Patient, Report, Tab, ViewMode, ViewerFile};
use crate::views::{investigations_tab, patient_card, placeholder_panel, viewer_modal};
use crate::components::tab_bar;
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text};
use iced::{application, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;

const APP_TITLE: &str = "Chartview";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run()
}

/// Single owner of all chart state. Children report intents through
/// `Message`; none of them mutate anything themselves.
pub struct App {
    patient: Patient,
    reports: Vec<Report>,
    active_tab: Tab,
    view_mode: ViewMode,
    viewer: Option<ViewerFile>,
    next_report_id: usize,
    last_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        let reports = sample::reports();
        let next_report_id = reports.iter().map(|report| report.id + 1).max().unwrap_or(1);

        Self {
            patient: sample::patient(),
            reports,
            active_tab: Tab::Investigations,
            view_mode: ViewMode::default(),
            viewer: None,
            next_report_id,
            last_error: None,
        }
    }
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Task::none()
            }
            Message::SetViewMode(mode) => {
                if self.view_mode != mode {
                    self.view_mode = mode;
                }
                Task::none()
            }
            Message::OpenViewer(id) => {
                if let Some(report) = self.reports.iter().find(|report| report.id == id) {
                    self.viewer = Some(ViewerFile::for_report(report));
                }
                Task::none()
            }
            Message::CloseViewer => {
                self.viewer = None;
                Task::none()
            }
            Message::DownloadViewerFile => match &self.viewer {
                Some(file) => {
                    log::info!("Saving a copy of {}", file.name);
                    Task::perform(save_copy(file.clone()), Message::DownloadFinished)
                }
                None => Task::none(),
            },
            Message::DownloadFinished(result) => {
                match result {
                    Ok(()) => {
                        if self.last_error.is_some() {
                            self.last_error = None;
                        }
                    }
                    Err(err) => {
                        log::error!("{err}");
                        self.last_error = Some(err);
                    }
                }
                Task::none()
            }
            Message::PickReportFiles => Task::perform(
                async {
                    match AsyncFileDialog::new().pick_files().await {
                        Some(handles) => handles
                            .into_iter()
                            .map(|handle| handle.path().to_path_buf())
                            .collect(),
                        None => Vec::new(),
                    }
                },
                Message::ReportFilesPicked,
            ),
            Message::ReportFilesPicked(paths) => {
                for path in paths {
                    log::info!("Adding report file: {}", path.display());
                    let id = self.next_report_id;
                    self.next_report_id += 1;
                    self.reports.push(Report::from_path(id, path));
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.active_tab {
            Tab::Investigations => investigations_tab(&self.reports, self.view_mode),
            other => placeholder_panel(other),
        };

        let mut page = column![
            patient_card(&self.patient),
            tab_bar(self.active_tab),
            container(body)
                .padding(16)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .padding(20)
        .spacing(16);

        if let Some(error) = &self.last_error {
            page = page.push(text(error).size(14).wrapping(Wrapping::Word));
        }

        viewer_modal(page.into(), self.viewer.as_ref())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

async fn save_copy(file: ViewerFile) -> Result<(), String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_file_name(&file.name)
        .save_file()
        .await
    else {
        // dialog dismissed, nothing to report
        return Ok(());
    };

    std::fs::copy(&file.path, handle.path())
        .map(|_| ())
        .map_err(|err| format!("{}: failed to save copy ({err})", file.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TABS;
    use std::path::PathBuf;

    #[test]
    fn selecting_a_tab_activates_exactly_that_tab() {
        let mut app = App::default();
        for descriptor in &TABS {
            let _ = app.update(Message::TabSelected(descriptor.tab));
            assert_eq!(app.active_tab, descriptor.tab);
        }
    }

    #[test]
    fn view_mode_starts_in_grid() {
        assert_eq!(App::default().view_mode, ViewMode::Grid);
    }

    #[test]
    fn reselecting_the_active_mode_is_a_no_op() {
        let mut app = App::default();
        let _ = app.update(Message::SetViewMode(ViewMode::Grid));
        assert_eq!(app.view_mode, ViewMode::Grid);
    }

    #[test]
    fn mode_round_trip_leaves_reports_untouched() {
        let mut app = App::default();
        let before: Vec<usize> = app.reports.iter().map(|report| report.id).collect();

        let _ = app.update(Message::SetViewMode(ViewMode::List));
        let _ = app.update(Message::SetViewMode(ViewMode::Grid));

        let after: Vec<usize> = app.reports.iter().map(|report| report.id).collect();
        assert_eq!(before, after);
        assert_eq!(app.view_mode, ViewMode::Grid);
    }

    #[test]
    fn opening_a_known_report_populates_the_viewer() {
        let mut app = App::default();
        let first = app.reports[0].clone();

        let _ = app.update(Message::OpenViewer(first.id));

        let file = app.viewer.as_ref().unwrap();
        assert_eq!(file.name, first.file_name);
    }

    #[test]
    fn opening_an_unknown_report_does_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::OpenViewer(9999));
        assert!(app.viewer.is_none());
    }

    #[test]
    fn closing_the_viewer_clears_it() {
        let mut app = App::default();
        let id = app.reports[0].id;
        let _ = app.update(Message::OpenViewer(id));
        let _ = app.update(Message::CloseViewer);
        assert!(app.viewer.is_none());
    }

    #[test]
    fn download_with_no_open_viewer_is_a_no_op() {
        let mut app = App::default();
        let _ = app.update(Message::DownloadViewerFile);
        assert!(app.viewer.is_none());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn failed_download_surfaces_an_error_banner() {
        let mut app = App::default();
        let _ = app.update(Message::DownloadFinished(Err("disk full".to_string())));
        assert_eq!(app.last_error.as_deref(), Some("disk full"));

        let _ = app.update(Message::DownloadFinished(Ok(())));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn picked_files_are_appended_with_fresh_ids() {
        let mut app = App::default();
        let existing = app.reports.len();

        let _ = app.update(Message::ReportFilesPicked(vec![
            PathBuf::from("/tmp/new-scan.png"),
            PathBuf::from("/tmp/new-results.pdf"),
        ]));

        assert_eq!(app.reports.len(), existing + 2);
        let mut ids: Vec<usize> = app.reports.iter().map(|report| report.id).collect();
        let before_dedup = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before_dedup);
    }
}
