use crate::model::{AssignmentRow, CodeDirectory, UNKNOWN_NAME};

/// Remplace les codes par les noms de l'annuaire, ligne à ligne.
///
/// Un code absent donne `"Desconocido"` ; jamais d'erreur.
pub fn resolve_rows(coded: &[AssignmentRow], directory: &CodeDirectory) -> Vec<AssignmentRow> {
    coded
        .iter()
        .map(|row| AssignmentRow {
            order: row.order,
            date: row.date,
            day_label: row.day_label.clone(),
            primary: resolve_code(&row.primary, directory),
            support: resolve_code(&row.support, directory),
        })
        .collect()
}

fn resolve_code(code: &str, directory: &CodeDirectory) -> String {
    match directory.get(code) {
        Some(name) => name.to_string(),
        None => {
            #[cfg(feature = "logging")]
            tracing::warn!(code, "code absent from directory");
            UNKNOWN_NAME.to_string()
        }
    }
}
