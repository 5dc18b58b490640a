//! Terminal tables for previews and column reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use limpa::{Classification, ColumnProfile, ColumnRole, DataTable, RoleSource};

/// Render the masked preview with headers colored by role.
pub fn preview_table(preview: &DataTable, classification: &Classification) -> Table {
    let mut table = styled_table();
    table.set_header(
        preview
            .headers
            .iter()
            .map(|header| header_cell(header, &classification.roles_of(header))),
    );
    for row in &preview.rows {
        table.add_row(row.iter().map(Cell::new));
    }
    table
}

/// Note shown under a preview that holds fewer rows than the file.
pub fn truncation_note(shown: usize, total: usize) -> Option<String> {
    (shown < total).then(|| format!("Showing {} of {} data rows.", shown, total))
}

/// Render one line per column with its role and phone score.
pub fn columns_table(columns: &[ColumnProfile]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        plain_header("#"),
        plain_header("Column"),
        plain_header("Normalized"),
        plain_header("Role"),
        plain_header("Source"),
        plain_header("Numeric"),
    ]);

    for column in columns {
        let source = match column.source {
            RoleSource::Header => "header",
            RoleSource::Detection => "detection",
            RoleSource::None => "-",
        };
        table.add_row(vec![
            Cell::new(column.position + 1),
            Cell::new(&column.header),
            Cell::new(&column.normalized_header),
            roles_cell(&column.roles),
            Cell::new(source),
            Cell::new(format!(
                "{}/{} ({:.0}%)",
                column.score.numeric_like,
                column.score.non_empty,
                column.score.ratio() * 100.0
            )),
        ]);
    }
    table
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

// A column formatted as phone is shown in the phone color even if it also
// carries a name role.
fn roles_color(roles: &[ColumnRole]) -> Option<Color> {
    if roles.contains(&ColumnRole::Phone) {
        Some(Color::Yellow)
    } else if roles.contains(&ColumnRole::Surname) {
        Some(Color::Cyan)
    } else if roles.contains(&ColumnRole::Name) {
        Some(Color::Green)
    } else {
        None
    }
}

fn header_cell(header: &str, roles: &[ColumnRole]) -> Cell {
    let cell = Cell::new(header).add_attribute(Attribute::Bold);
    match roles_color(roles) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

fn plain_header(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn roles_cell(roles: &[ColumnRole]) -> Cell {
    if roles.is_empty() {
        return Cell::new("-").add_attribute(Attribute::Dim);
    }
    let labels: Vec<String> = roles.iter().map(ToString::to_string).collect();
    let cell = Cell::new(labels.join(" + "));
    match roles_color(roles) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_note() {
        assert_eq!(
            truncation_note(10, 25).as_deref(),
            Some("Showing 10 of 25 data rows.")
        );
        assert_eq!(truncation_note(4, 4), None);
    }

    #[test]
    fn test_preview_contains_masked_values() {
        let preview = DataTable::from_rows(&["nome", "telefone"], &[&["AnaXXX", "55119XXXX..."]]);
        let mut classification = Classification::new();
        classification.name_columns.insert("nome".to_string());

        let rendered = preview_table(&preview, &classification).to_string();
        assert!(rendered.contains("AnaXXX"));
        assert!(rendered.contains("55119XXXX..."));
        assert!(rendered.contains("telefone"));
    }

    #[test]
    fn test_columns_table_lists_stacked_roles() {
        let columns = vec![ColumnProfile {
            header: "nome".to_string(),
            position: 0,
            normalized_header: "nome".to_string(),
            roles: vec![ColumnRole::Name, ColumnRole::Phone],
            source: RoleSource::Header,
            score: limpa::schema::ColumnScore {
                non_empty: 2,
                numeric_like: 2,
            },
        }];

        let rendered = columns_table(&columns).to_string();
        assert!(rendered.contains("name + phone"));
        assert!(rendered.contains("2/2 (100%)"));
    }
}
