use crate::{
    domain::{ParseError, Record},
    present::{Card, Tabular},
};

/// A vehicle barred from circulating on a given weekday and time window.
///
/// File layout: `plate;weekday;time`. Fields are trimmed when parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    /// Licence plate.
    pub plate: String,
    /// Day of the week the restriction applies, e.g. `Segunda-feira`.
    pub weekday: String,
    /// Time window of the restriction.
    pub time: String,
}

impl Record for Rotation {
    const FIELDS: usize = 3;

    fn from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let [plate, weekday, time] = fields else {
            return Err(ParseError::FieldCount {
                expected: Self::FIELDS,
                found: fields.len(),
            });
        };
        Ok(Self {
            plate: plate.trim().to_string(),
            weekday: weekday.trim().to_string(),
            time: time.trim().to_string(),
        })
    }

    /// Exact match on the weekday.
    fn matches(&self, filter: &str) -> bool {
        self.weekday == filter
    }
}

impl Tabular for Rotation {
    const NOT_FOUND: &'static str = "Empty list.";
    const COLUMNS: Option<&'static str> = Some("Plate       | Weekday           | Time");
    const RULE: &'static str = "---------------------------------------------";

    fn title(&self) -> String {
        "VEHICLES IN ROTATION:".to_string()
    }

    fn row(&self) -> String {
        format!("{:<12}| {:<18}| {}", self.plate, self.weekday, self.time)
    }
}

impl Card for Rotation {
    fn card(&self) -> String {
        format!(
            "PLATE: {}\nDAY: {}\nTIME: {}",
            self.plate, self.weekday, self.time
        )
    }
}
