use crate::model::{AssignmentRow, TABLE_HEADERS};

/// Rendu texte aligné d'une vue du planning (aperçu terminal).
pub fn render_table(rows: &[AssignmentRow]) -> String {
    let mut cells: Vec<[String; 5]> = Vec::with_capacity(rows.len() + 1);
    cells.push(TABLE_HEADERS.map(str::to_string));
    for row in rows {
        cells.push([
            row.order.to_string(),
            row.formatted_date(),
            row.day_label.clone(),
            row.primary.clone(),
            row.support.clone(),
        ]);
    }

    let mut widths = [0usize; 5];
    for line in &cells {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &cells {
        let last = line.len() - 1;
        for (col, cell) in line.iter().enumerate() {
            out.push_str(cell);
            if col < last {
                let pad = widths[col] - cell.chars().count();
                out.extend(std::iter::repeat(' ').take(pad));
                out.push_str(" | ");
            }
        }
        out.push('\n');
    }
    out
}
