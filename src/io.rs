use crate::config::{delimiter_byte, RunConfig};
use crate::model::{AssignmentRow, CodeDirectory, HolidaySet, Roster, RosterEntry, Schedule};
use crate::scheduler::{InputSource, SchedError};
use crate::storage::write_atomic;
use calamine::{Data, Reader, Xlsx};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Import des fériés : une colonne de dates `YYYY-MM-DD` (par défaut `fecha`).
pub fn import_holidays_csv<P: AsRef<Path>>(
    path: P,
    config: &RunConfig,
) -> Result<HolidaySet, SchedError> {
    let file = open(path.as_ref(), InputSource::Holidays)?;
    read_holidays(file, config)
}

pub fn read_holidays<R: Read>(reader: R, config: &RunConfig) -> Result<HolidaySet, SchedError> {
    let origin = InputSource::Holidays;
    let mut rdr = csv_reader(reader, config.delimiters.holidays)?;
    let date_col = column_index(&mut rdr, origin, &config.columns.holiday_date)?;

    let mut holidays = HolidaySet::new();
    for rec in records(&mut rdr, origin) {
        let (line, rec) = rec?;
        let raw = rec.get(date_col).map(str::trim).unwrap_or("");
        if raw.is_empty() {
            continue;
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            SchedError::input(origin, format!("row {line}: invalid date `{raw}` (YYYY-MM-DD)"))
        })?;
        holidays.insert(date);
    }
    Ok(holidays)
}

/// Import du roster : l'ordre des lignes est l'ordre de rotation.
pub fn import_roster_csv<P: AsRef<Path>>(
    path: P,
    config: &RunConfig,
) -> Result<Roster, SchedError> {
    let file = open(path.as_ref(), InputSource::Roster)?;
    read_roster(file, config)
}

pub fn read_roster<R: Read>(reader: R, config: &RunConfig) -> Result<Roster, SchedError> {
    let origin = InputSource::Roster;
    let mut rdr = csv_reader(reader, config.delimiters.roster)?;
    let primary_col = column_index(&mut rdr, origin, &config.columns.roster_primary)?;
    let support_col = column_index(&mut rdr, origin, &config.columns.roster_support)?;

    let mut entries = Vec::new();
    for rec in records(&mut rdr, origin) {
        let (line, rec) = rec?;
        if rec.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let primary = required_field(&rec, primary_col, origin, line, &config.columns.roster_primary)?;
        let support = required_field(&rec, support_col, origin, line, &config.columns.roster_support)?;
        entries.push(RosterEntry::new(primary, support));
    }
    Ok(Roster::new(entries))
}

/// Import de l'annuaire code → nom, CSV ou XLSX selon l'extension.
pub fn import_directory<P: AsRef<Path>>(
    path: P,
    config: &RunConfig,
) -> Result<CodeDirectory, SchedError> {
    let path = path.as_ref();
    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xlsm"));
    if is_workbook {
        import_directory_xlsx(path, config)
    } else {
        import_directory_csv(path, config)
    }
}

pub fn import_directory_csv<P: AsRef<Path>>(
    path: P,
    config: &RunConfig,
) -> Result<CodeDirectory, SchedError> {
    let file = open(path.as_ref(), InputSource::Directory)?;
    read_directory(file, config)
}

pub fn read_directory<R: Read>(
    reader: R,
    config: &RunConfig,
) -> Result<CodeDirectory, SchedError> {
    let origin = InputSource::Directory;
    let mut rdr = csv_reader(reader, config.delimiters.directory)?;
    let code_col = column_index(&mut rdr, origin, &config.columns.directory_code)?;
    let name_col = column_index(&mut rdr, origin, &config.columns.directory_name)?;

    let rows = records(&mut rdr, origin).map(|rec| {
        rec.map(|(line, rec)| {
            let cell = |col: usize| rec.get(col).map(str::trim).unwrap_or("").to_string();
            (line, cell(code_col), cell(name_col))
        })
    });
    collect_directory(rows)
}

/// Annuaire depuis la première feuille d'un classeur (header en première ligne).
pub fn import_directory_xlsx<P: AsRef<Path>>(
    path: P,
    config: &RunConfig,
) -> Result<CodeDirectory, SchedError> {
    let file = open(path.as_ref(), InputSource::Directory)?;
    read_directory_xlsx(BufReader::new(file), config)
}

pub fn read_directory_xlsx<R: Read + Seek>(
    reader: R,
    config: &RunConfig,
) -> Result<CodeDirectory, SchedError> {
    let origin = InputSource::Directory;
    let mut workbook: Xlsx<R> = Xlsx::new(reader)
        .map_err(|e| SchedError::input(origin, format!("opening workbook: {e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SchedError::input(origin, "workbook has no sheet"))?
        .map_err(|e| SchedError::input(origin, format!("reading first sheet: {e}")))?;

    // Numéro de ligne Excel (1-based) de la première ligne utilisée.
    let first_line = range.start().map_or(1, |(row, _)| u64::from(row) + 1);
    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let find = |name: &str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| SchedError::input(origin, format!("missing column `{name}`")))
    };
    let code_col = find(config.columns.directory_code.as_str())?;
    let name_col = find(config.columns.directory_name.as_str())?;

    let entries = rows.enumerate().map(|(idx, cells)| {
        let cell = |col: usize| cells.get(col).map(cell_text).unwrap_or_default();
        Ok((first_line + 1 + idx as u64, cell(code_col), cell(name_col)))
    });
    collect_directory(entries)
}

fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

fn collect_directory<I>(rows: I) -> Result<CodeDirectory, SchedError>
where
    I: Iterator<Item = Result<(u64, String, String), SchedError>>,
{
    let mut directory = CodeDirectory::new();
    for row in rows {
        let (line, code, name) = row?;
        if code.is_empty() {
            continue;
        }
        if name.is_empty() {
            return Err(SchedError::input(
                InputSource::Directory,
                format!("row {line}: missing name for code `{code}`"),
            ));
        }
        directory.insert(code, name);
    }
    Ok(directory)
}

/// CSV d'une vue : header `ORDEN,FECHA,DIA,DESPACHO,TURNO DE APOYO`
pub fn rows_csv_bytes(rows: &[AssignmentRow]) -> anyhow::Result<Vec<u8>> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    w.write_record(crate::model::TABLE_HEADERS)?;
    let mut order = itoa::Buffer::new();
    for row in rows {
        let date = row.formatted_date();
        w.write_record([
            order.format(row.order),
            date.as_str(),
            row.day_label.as_str(),
            row.primary.as_str(),
            row.support.as_str(),
        ])?;
    }
    w.into_inner().map_err(|e| anyhow::anyhow!("{e}"))
}

pub fn export_rows_csv<P: AsRef<Path>>(path: P, rows: &[AssignmentRow]) -> anyhow::Result<()> {
    write_atomic(path, &rows_csv_bytes(rows)?)
}

/// JSON des deux vues (jolie mise en forme)
pub fn schedule_json_bytes(schedule: &Schedule) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(schedule)?)
}

pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    write_atomic(path, &schedule_json_bytes(schedule)?)
}

fn open(path: &Path, origin: InputSource) -> Result<File, SchedError> {
    File::open(path)
        .map_err(|e| SchedError::input(origin, format!("reading {}: {e}", path.display())))
}

fn csv_reader<R: Read>(reader: R, delimiter: char) -> Result<csv::Reader<R>, SchedError> {
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter_byte(delimiter)?)
        .flexible(true)
        .from_reader(reader))
}

fn column_index<R: Read>(
    rdr: &mut csv::Reader<R>,
    origin: InputSource,
    name: &str,
) -> Result<usize, SchedError> {
    let headers = rdr
        .headers()
        .map_err(|e| SchedError::input(origin, format!("reading header: {e}")))?;
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| SchedError::input(origin, format!("missing column `{name}`")))
}

/// Enregistrements avec leur ligne d'origine dans le fichier (header = ligne 1).
fn records<'r, R: Read>(
    rdr: &'r mut csv::Reader<R>,
    origin: InputSource,
) -> impl Iterator<Item = Result<(u64, StringRecord), SchedError>> + 'r {
    rdr.records().map(move |rec| match rec {
        Ok(rec) => {
            let line = rec.position().map_or(0, |p| p.line());
            Ok((line, rec))
        }
        Err(e) => {
            let message = match e.position() {
                Some(p) => format!("row {}: {e}", p.line()),
                None => e.to_string(),
            };
            Err(SchedError::input(origin, message))
        }
    })
}

fn required_field(
    rec: &StringRecord,
    col: usize,
    origin: InputSource,
    line: u64,
    column: &str,
) -> Result<String, SchedError> {
    match rec.get(col).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(SchedError::input(
            origin,
            format!("row {line}: empty `{column}`"),
        )),
    }
}
