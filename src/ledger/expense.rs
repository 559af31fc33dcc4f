use crate::currency::format_amount;

/// A recorded expense. Date and category are kept as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    date: String,
    category: String,
    amount: f64,
}

impl Expense {
    pub(crate) fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Cell texts for a table row: date, category, formatted amount.
    pub fn cells(&self) -> [String; 3] {
        [
            self.date.clone(),
            self.category.clone(),
            format_amount(self.amount),
        ]
    }
}
