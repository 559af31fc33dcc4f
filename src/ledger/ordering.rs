//! Comparators used to order expenses, both over ledger records and over
//! the text of rendered table cells.

use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::currency::parse_amount;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// How a cell's text is interpreted when comparing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Number,
    Date,
    Text,
}

/// Expense columns offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Category,
    Amount,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Date, SortField::Category, SortField::Amount];

    /// Table column holding this field.
    pub fn column(self) -> usize {
        match self {
            SortField::Date => 0,
            SortField::Category => 1,
            SortField::Amount => 2,
        }
    }

    pub fn cell_type(self) -> CellType {
        match self {
            SortField::Date => CellType::Date,
            SortField::Category => CellType::Text,
            SortField::Amount => CellType::Number,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Category => "category",
            SortField::Amount => "amount",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "category" => Ok(SortField::Category),
            "amount" => Ok(SortField::Amount),
            other => Err(format!(
                "unknown sort option `{}` (expected date, category or amount)",
                other
            )),
        }
    }
}

/// Parses calendar dates in the common numeric and long-month layouts.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Case-insensitive comparison; on a tie lowercase letters sort before
/// their uppercase forms.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    for (left, right) in a.chars().zip(b.chars()) {
        if left != right {
            return left
                .is_uppercase()
                .cmp(&right.is_uppercase())
                .then(left.cmp(&right));
        }
    }
    a.cmp(b)
}

/// Compares two cell texts as `cell_type`. Text that does not parse as
/// the requested type sorts after every value that does, keeping its
/// relative order.
pub fn compare_cells(a: &str, b: &str, cell_type: CellType) -> Ordering {
    match cell_type {
        CellType::Number => compare_parsed(parse_amount(a), parse_amount(b)),
        CellType::Date => compare_parsed(parse_date(a), parse_date(b)),
        CellType::Text => compare_text(a.trim(), b.trim()),
    }
}

fn compare_parsed<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(compare_cells("10", "23.50", CellType::Number), Ordering::Less);
        assert_eq!(compare_cells("9", "10", CellType::Number), Ordering::Less);
        assert_eq!(compare_cells("10", "10.00", CellType::Number), Ordering::Equal);
    }

    #[test]
    fn unparseable_cells_sort_last() {
        assert_eq!(compare_cells("n/a", "5", CellType::Number), Ordering::Greater);
        assert_eq!(compare_cells("5", "n/a", CellType::Number), Ordering::Less);
        assert_eq!(compare_cells("x", "y", CellType::Number), Ordering::Equal);
        assert_eq!(
            compare_cells("someday", "2024-01-01", CellType::Date),
            Ordering::Greater
        );
    }

    #[test]
    fn dates_compare_chronologically() {
        assert_eq!(
            compare_cells("2024-02-01", "2024-01-31", CellType::Date),
            Ordering::Greater
        );
        assert_eq!(
            compare_cells("01/15/2024", "2024-01-16", CellType::Date),
            Ordering::Less
        );
        assert!(parse_date("2024-01-01T10:30:00Z").is_some());
        assert!(parse_date("March 3, 2024").is_some());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn text_ignores_case_then_prefers_lowercase() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("food", "Food"), Ordering::Less);
        assert_eq!(compare_text("Food", "food"), Ordering::Greater);
        assert_eq!(compare_text("Rent", "Rent"), Ordering::Equal);
    }

    #[test]
    fn sort_fields_map_to_columns() {
        assert_eq!("Amount".parse::<SortField>(), Ok(SortField::Amount));
        assert_eq!(SortField::Date.column(), 0);
        assert_eq!(SortField::Category.cell_type(), CellType::Text);
        assert_eq!(SortField::Amount.column(), 2);
        assert!("price".parse::<SortField>().is_err());
    }
}
