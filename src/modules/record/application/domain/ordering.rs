use std::cmp::Ordering;

use chrono::NaiveDate;

use super::record::{text_of, Record};

/// Ordering pushed down to the record store and re-applied in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub descending: bool,
}

impl OrderBy {
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    /// Stable sort; rows without a value go last in either direction.
    pub fn sort(&self, rows: &mut [Record]) {
        rows.sort_by(|a, b| {
            let a = SortKey::of(a, self.column);
            let b = SortKey::of(b, self.column);
            match (a, b) {
                (Some(a), Some(b)) if self.descending => b.cmp(&a),
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}

/// Dates compare chronologically; anything else falls back to text order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Date(NaiveDate),
}

impl SortKey {
    fn of(row: &Record, column: &str) -> Option<Self> {
        let text = text_of(row, column).filter(|t| !t.is_empty())?;
        // accepts plain dates and timestamps ("2024-03-01T00:00:00+00:00")
        let date_part = text.get(..10).unwrap_or(text.as_str());
        Some(match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            Ok(date) => SortKey::Date(date),
            Err(_) => SortKey::Text(text),
        })
    }
}
