use crate::scheduler::{InputSource, SchedError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Noms de colonnes attendus dans les fichiers sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub holiday_date: String,
    pub roster_primary: String,
    pub roster_support: String,
    pub directory_code: String,
    pub directory_name: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            holiday_date: "fecha".into(),
            roster_primary: "codigo_despacho".into(),
            roster_support: "codigo_despacho_apoyo".into(),
            directory_code: "Código".into(),
            directory_name: "Despacho o Dependencia".into(),
        }
    }
}

/// Séparateurs CSV par source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    pub holidays: char,
    pub roster: char,
    pub directory: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            holidays: ',',
            roster: ';',
            directory: ',',
        }
    }
}

/// Paramètres de l'export classeur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub coded_sheet: String,
    pub resolved_sheet: String,
    /// Nom du classeur à l'intérieur de l'archive ZIP.
    pub archive_entry: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            coded_sheet: "Turnos_Codigos".into(),
            resolved_sheet: "Turnos_Nombres".into(),
            archive_entry: "turnos.xlsx".into(),
        }
    }
}

/// Configuration d'un run, chargeable depuis un JSON partiel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub columns: Columns,
    pub delimiters: Delimiters,
    pub export: ExportSettings,
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SchedError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            SchedError::input(
                InputSource::Config,
                format!("reading {}: {e}", path.display()),
            )
        })?;
        let config: RunConfig = serde_json::from_slice(&data).map_err(|e| {
            SchedError::input(
                InputSource::Config,
                format!("parsing {}: {e}", path.display()),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        let columns = [
            ("holiday_date", &self.columns.holiday_date),
            ("roster_primary", &self.columns.roster_primary),
            ("roster_support", &self.columns.roster_support),
            ("directory_code", &self.columns.directory_code),
            ("directory_name", &self.columns.directory_name),
        ];
        for (key, value) in columns {
            if value.trim().is_empty() {
                return Err(SchedError::Configuration(format!(
                    "column name `{key}` cannot be empty"
                )));
            }
        }

        for delimiter in [
            self.delimiters.holidays,
            self.delimiters.roster,
            self.delimiters.directory,
        ] {
            delimiter_byte(delimiter)?;
        }

        let export = &self.export;
        if export.coded_sheet.trim().is_empty() || export.resolved_sheet.trim().is_empty() {
            return Err(SchedError::Configuration(
                "sheet names cannot be empty".to_string(),
            ));
        }
        if export.coded_sheet == export.resolved_sheet {
            return Err(SchedError::Configuration(
                "coded and resolved sheets must have distinct names".to_string(),
            ));
        }
        if export.archive_entry.trim().is_empty() {
            return Err(SchedError::Configuration(
                "archive entry name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Séparateur CSV sous forme d'octet ; seul l'ASCII est accepté.
pub fn delimiter_byte(delimiter: char) -> Result<u8, SchedError> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            SchedError::Configuration(format!("delimiter {delimiter:?} is not an ASCII character"))
        })
}
