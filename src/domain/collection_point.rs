use crate::{
    domain::{ParseError, Record, parse_id},
    present::Tabular,
};

/// A place where a category of recyclable material can be dropped off.
///
/// File layout: `id;category;address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPoint {
    /// Numeric identifier.
    pub id: i32,
    /// Material accepted, e.g. `Plastico`.
    pub category: String,
    /// Street address.
    pub address: String,
}

impl Record for CollectionPoint {
    const FIELDS: usize = 3;

    fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let [id, category, address] = fields else {
            return Err(ParseError::FieldCount {
                expected: Self::FIELDS,
                found: fields.len(),
            });
        };
        Ok(Self {
            id: parse_id(id)?,
            category: (*category).to_string(),
            address: (*address).to_string(),
        })
    }

    /// Exact, case-sensitive match on the category.
    fn matches(&self, filter: &str) -> bool {
        self.category == filter
    }
}

impl Tabular for CollectionPoint {
    const NOT_FOUND: &'static str = "No collection points found.";
    const COLUMNS: Option<&'static str> = None;
    const RULE: &'static str = "----------------------------------------------------";
    const RULE_AFTER_EACH_ROW: bool = true;

    fn title(&self) -> String {
        format!("COLLECTION POINTS FOR: {}", self.category)
    }

    fn row(&self) -> String {
        format!(
            "ID: {:<3} | Type: {:<6} | Address: {:<30}",
            self.id, self.category, self.address
        )
    }
}
