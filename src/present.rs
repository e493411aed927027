//! Plain-text tables for list contents.
//!
//! A table is a title line, an optional column header, a rule, and one line
//! per row. Some record kinds also print the rule after every row.

use std::io;

/// A record that can be rendered as one row of a table.
pub trait Tabular {
    /// Message written instead of a table when there is nothing to show.
    const NOT_FOUND: &'static str;

    /// Column header line, if the record kind has one.
    const COLUMNS: Option<&'static str>;

    /// Horizontal rule separating the header from the rows.
    const RULE: &'static str;

    /// Whether the rule is repeated after every row.
    const RULE_AFTER_EACH_ROW: bool = false;

    /// Title of a table that starts at this record.
    fn title(&self) -> String;

    /// This record formatted as a single table row.
    fn row(&self) -> String;
}

/// A record that can be shown on its own, one field per line.
pub trait Card {
    /// The record as a multi-line card.
    fn card(&self) -> String;
}

/// Writes `rows` as a table under `title`.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_table<'a, T>(
    out: &mut impl io::Write,
    title: &str,
    rows: impl IntoIterator<Item = &'a T>,
) -> io::Result<()>
where
    T: Tabular + 'a,
{
    writeln!(out, "{title}")?;
    if let Some(columns) = T::COLUMNS {
        writeln!(out, "{columns}")?;
    }
    writeln!(out, "{}", T::RULE)?;
    for row in rows {
        writeln!(out, "{}", row.row())?;
        if T::RULE_AFTER_EACH_ROW {
            writeln!(out, "{}", T::RULE)?;
        }
    }
    Ok(())
}
