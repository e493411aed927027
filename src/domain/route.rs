use crate::{
    domain::{ParseError, Record, parse_id},
    present::Tabular,
};

/// A public transport line.
///
/// File layout: `id;line;kind;region`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Numeric identifier.
    pub id: i32,
    /// Name of the line.
    pub line: String,
    /// Transport type, e.g. `Metro` or `Onibus`.
    pub kind: String,
    /// Region served.
    pub region: String,
}

impl Record for Route {
    const FIELDS: usize = 4;

    fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let [id, line, kind, region] = fields else {
            return Err(ParseError::FieldCount {
                expected: Self::FIELDS,
                found: fields.len(),
            });
        };
        Ok(Self {
            id: parse_id(id)?,
            line: (*line).to_string(),
            kind: (*kind).to_string(),
            region: (*region).to_string(),
        })
    }

    /// Substring match on either the transport type or the region.
    fn matches(&self, filter: &str) -> bool {
        self.kind.contains(filter) || self.region.contains(filter)
    }
}

impl Tabular for Route {
    const NOT_FOUND: &'static str = "No routes found.";
    const COLUMNS: Option<&'static str> =
        Some("ID   | Line                 | Type        | Region");
    const RULE: &'static str = "-----------------------------------------------------";

    fn title(&self) -> String {
        "ROUTES".to_string()
    }

    fn row(&self) -> String {
        format!(
            "{:<4} | {:<20} | {:<10} | {}",
            self.id, self.line, self.kind, self.region
        )
    }
}
