use crate::schemas::Patient;

const HEADERS: [&str; 4] = ["Name", "ID", "Date of Birth", "Date of Registration"];

/// Render patients as a plain-text table: one header row plus one row
/// per patient, columns padded to the widest cell.
pub fn format_patient_table(patients: &[Patient]) -> String {
    let rows: Vec<[String; 4]> = patients
        .iter()
        .map(|patient| {
            [
                patient.display_name(),
                patient.id.clone(),
                patient.date_of_birth.clone(),
                patient.date_of_registration.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let width = *width;
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
