use crate::message::Message;
use crate::model::{Report, ViewMode};
use crate::views::report_card::{report_row, report_tile};
use iced::widget::{column, row, text, Space};
use iced::{Element, Length};

const GRID_COLUMNS: usize = 3;

/// Pure function of `(reports, view_mode)` to a layout. Entries keep
/// their identity (report id) and ordering across mode switches.
pub fn reports_grid(reports: &[Report], mode: ViewMode) -> Element<'_, Message> {
    if reports.is_empty() {
        return text("No reports uploaded for this patient").into();
    }

    match mode {
        ViewMode::Grid => grid_rows(reports, GRID_COLUMNS)
            .fold(column![].spacing(12), |grid, chunk| {
                let mut cells = row![].spacing(12);
                for report in chunk {
                    cells = cells.push(report_tile(report));
                }
                // pad the last row so tiles keep their column width
                for _ in chunk.len()..GRID_COLUMNS {
                    cells = cells.push(Space::with_width(Length::Fill));
                }
                grid.push(cells)
            })
            .into(),
        ViewMode::List => reports
            .iter()
            .fold(column![].spacing(8), |list, report| {
                list.push(report_row(report))
            })
            .into(),
    }
}

fn grid_rows(reports: &[Report], columns: usize) -> impl Iterator<Item = &[Report]> {
    reports.chunks(columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;
    use std::path::PathBuf;

    fn reports(count: usize) -> Vec<Report> {
        (0..count)
            .map(|i| Report {
                id: i,
                file_name: format!("report-{i}.pdf"),
                uploaded: "2025-11-02".to_string(),
                kind: FileKind::Pdf,
                path: PathBuf::from(format!("report-{i}.pdf")),
                thumbnail: None,
            })
            .collect()
    }

    #[test]
    fn grid_rows_preserve_order_and_count() {
        let reports = reports(7);
        let flattened: Vec<usize> = grid_rows(&reports, 3)
            .flatten()
            .map(|report| report.id)
            .collect();
        assert_eq!(flattened, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn grid_rows_fill_full_rows_first() {
        let reports = reports(7);
        let sizes: Vec<usize> = grid_rows(&reports, 3).map(<[Report]>::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn zero_columns_never_panics() {
        let reports = reports(2);
        assert_eq!(grid_rows(&reports, 0).count(), 2);
    }
}
