use prettytable::format::{Alignment, FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

/// Grid format shared by every report table: `+---+` rules around and
/// between all rows, a `+===+` rule under the header, one space of
/// padding on each side of a cell.
fn grid_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separators(
            &[LinePosition::Top, LinePosition::Intern, LinePosition::Bottom],
            LineSeparator::new('-', '+', '+', '+'),
        )
        .separator(LinePosition::Title, LineSeparator::new('=', '+', '+', '+'))
        .padding(1, 1)
        .build()
}

/// True when a value should be aligned like a number.
fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// Render a header row and data rows as an aligned, bordered grid.
///
/// Text cells are left-aligned and numeric-looking cells centered; column
/// widths grow to the widest rendered value (Unicode-aware, courtesy of
/// prettytable). Callers must not pass zero rows; empty sections are
/// filtered out upstream instead of being rendered as header-only tables.
pub fn render(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(grid_format());

    table.set_titles(Row::new(
        headers
            .iter()
            .map(|label| Cell::new_align(label, Alignment::LEFT))
            .collect(),
    ));

    for row in rows {
        table.add_row(Row::new(
            row.iter()
                .map(|value| {
                    let align = if looks_numeric(value) {
                        Alignment::CENTER
                    } else {
                        Alignment::LEFT
                    };
                    Cell::new_align(value, align)
                })
                .collect(),
        ));
    }

    table.to_string()
}
