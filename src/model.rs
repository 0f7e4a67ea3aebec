use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Valeur affichée quand un code est absent de l'annuaire.
pub const UNKNOWN_NAME: &str = "Desconocido";

/// Ensemble des jours fériés fournis par l'appelant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère une date ; un doublon est sans effet.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}

/// Une ligne de rotation : despacho principal + turno de apoyo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub primary_code: String,
    pub support_code: String,
}

impl RosterEntry {
    pub fn new<P: Into<String>, S: Into<String>>(primary_code: P, support_code: S) -> Self {
        Self {
            primary_code: primary_code.into(),
            support_code: support_code.into(),
        }
    }
}

/// Rotation ordonnée ; l'ordre des entrées définit le cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Longueur du cycle de rotation.
    pub fn cycle_len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Annuaire code → nom affiché. Non total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeDirectory {
    names: HashMap<String, String>,
}

impl CodeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute ou remplace un code ; la dernière occurrence gagne.
    pub fn insert<C: Into<String>, N: Into<String>>(&mut self, code: C, name: N) {
        self.names.insert(code.into(), name.into());
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Résout un code, ou renvoie [`UNKNOWN_NAME`] s'il est absent.
    pub fn resolve<'a>(&'a self, code: &str) -> &'a str {
        self.get(code).unwrap_or(UNKNOWN_NAME)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for CodeDirectory {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        }
    }
}

/// Ligne du planning. `primary`/`support` portent soit des codes, soit des noms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub order: usize,
    pub date: NaiveDate,
    pub day_label: String,
    pub primary: String,
    pub support: String,
}

impl AssignmentRow {
    /// Date au format `DD/MM/YYYY` (colonne FECHA).
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Les deux vues alignées produites par un run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub coded: Vec<AssignmentRow>,
    pub resolved: Vec<AssignmentRow>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.coded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coded.is_empty()
    }
}

/// En-têtes des tableaux exportés.
pub const TABLE_HEADERS: [&str; 5] = ["ORDEN", "FECHA", "DIA", "DESPACHO", "TURNO DE APOYO"];
