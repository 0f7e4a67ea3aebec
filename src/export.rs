use crate::config::ExportSettings;
use crate::model::{AssignmentRow, Schedule, TABLE_HEADERS};
use crate::scheduler::SchedError;
use crate::storage::write_atomic;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Transforme un planning en document binaire.
pub trait ScheduleExporter {
    /// Rendu complet en mémoire.
    fn render(&self, schedule: &Schedule) -> Result<Vec<u8>, SchedError>;

    /// Rendu puis écriture atomique : aucun fichier partiel en cas d'échec.
    fn export_to_path(&self, path: &Path, schedule: &Schedule) -> Result<(), SchedError> {
        let bytes = self.render(schedule)?;
        write_atomic(path, &bytes)?;
        Ok(())
    }
}

/// Classeur XLSX à deux feuilles : codes puis noms.
#[derive(Debug, Clone, Default)]
pub struct XlsxExporter {
    settings: ExportSettings,
}

impl XlsxExporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }
}

impl ScheduleExporter for XlsxExporter {
    fn render(&self, schedule: &Schedule) -> Result<Vec<u8>, SchedError> {
        let mut workbook = Workbook::new();
        let formats = SheetFormats::new();

        write_sheet(&mut workbook, &self.settings.coded_sheet, &schedule.coded, &formats)
            .map_err(xlsx_error)?;
        write_sheet(
            &mut workbook,
            &self.settings.resolved_sheet,
            &schedule.resolved,
            &formats,
        )
        .map_err(xlsx_error)?;

        workbook.save_to_buffer().map_err(xlsx_error)
    }
}

/// Enveloppe le rendu d'un autre exporteur dans une archive ZIP (deflate).
#[derive(Debug, Clone)]
pub struct ZipExporter<E> {
    inner: E,
    entry: String,
}

impl<E: ScheduleExporter> ZipExporter<E> {
    pub fn new<S: Into<String>>(inner: E, entry: S) -> Self {
        Self {
            inner,
            entry: entry.into(),
        }
    }
}

impl<E: ScheduleExporter> ScheduleExporter for ZipExporter<E> {
    fn render(&self, schedule: &Schedule) -> Result<Vec<u8>, SchedError> {
        let payload = self.inner.render(schedule)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(self.entry.as_str(), options)
            .map_err(|e| SchedError::Export(format!("zip entry {}: {e}", self.entry)))?;
        zip.write_all(&payload)
            .map_err(|e| SchedError::Export(format!("zip write: {e}")))?;
        let cursor = zip
            .finish()
            .map_err(|e| SchedError::Export(format!("zip finish: {e}")))?;
        Ok(cursor.into_inner())
    }
}

struct SheetFormats {
    header: Format,
    order: Format,
    text: Format,
}

impl SheetFormats {
    fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let order = Format::new()
            .set_num_format("0")
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let text = Format::new().set_border(FormatBorder::Thin);
        Self {
            header,
            order,
            text,
        }
    }
}

fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    rows: &[AssignmentRow],
    formats: &SheetFormats,
) -> Result<(), XlsxError> {
    let sheet: &mut Worksheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    for (col, header) in TABLE_HEADERS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, &formats.header)?;
    }
    for (col, width) in [8, 12, 18, 40, 40].into_iter().enumerate() {
        sheet.set_column_width(col as u16, width)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        let date = row.formatted_date();
        sheet.write_with_format(r, 0, row.order as f64, &formats.order)?;
        sheet.write_with_format(r, 1, date.as_str(), &formats.text)?;
        sheet.write_with_format(r, 2, row.day_label.as_str(), &formats.text)?;
        sheet.write_with_format(r, 3, row.primary.as_str(), &formats.text)?;
        sheet.write_with_format(r, 4, row.support.as_str(), &formats.text)?;
    }
    Ok(())
}

fn xlsx_error(e: XlsxError) -> SchedError {
    SchedError::Export(format!("workbook: {e}"))
}
