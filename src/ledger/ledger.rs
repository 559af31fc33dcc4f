use tracing::{debug, warn};

use crate::currency::parse_amount;
use crate::errors::{AmountField, LedgerError};

use super::expense::Expense;
use super::ordering::{compare_text, parse_date, CellType, SortField};

/// Describes which derived displays a successful mutation invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    /// Budget replaced: budget and remaining displays are stale.
    BudgetUpdated,
    /// Expense appended: table, total and remaining displays are stale.
    ExpenseAdded,
}

/// Holds the monthly budget and the expenses recorded against it, in the
/// order they were added.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    budget: f64,
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Replaces the budget with `value` parsed as a number.
    ///
    /// Rejects text without a leading number, non-finite values and
    /// negative values; the budget is unchanged on error.
    pub fn set_budget(&mut self, value: &str) -> Result<LedgerChange, LedgerError> {
        let budget = match parse_amount(value) {
            Some(amount) if amount.is_finite() && amount >= 0.0 => amount,
            _ => {
                warn!(input = value, "rejected budget amount");
                return Err(LedgerError::invalid(AmountField::Budget, value));
            }
        };
        self.budget = budget;
        debug!(budget, "budget updated");
        Ok(LedgerChange::BudgetUpdated)
    }

    /// Appends an expense. `date` and `category` are stored verbatim;
    /// `amount` must parse to a finite value greater than zero that keeps
    /// the total finite.
    pub fn add_expense(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
    ) -> Result<LedgerChange, LedgerError> {
        let parsed = match parse_amount(amount) {
            Some(value) if value.is_finite() && value > 0.0 => value,
            _ => {
                warn!(input = amount, "rejected expense amount");
                return Err(LedgerError::invalid(AmountField::Expense, amount));
            }
        };
        if !(self.total_expenses() + parsed).is_finite() {
            warn!(input = amount, "expense would overflow the total");
            return Err(LedgerError::invalid(AmountField::Expense, amount));
        }
        self.expenses.push(Expense::new(date, category, parsed));
        debug!(
            date,
            category,
            amount = parsed,
            count = self.expenses.len(),
            "expense added"
        );
        Ok(LedgerChange::ExpenseAdded)
    }

    /// Sum of every recorded expense, recomputed on each call.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(Expense::amount).sum()
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.total_expenses()
    }

    /// Expenses ordered ascending by `field`, leaving the stored order
    /// untouched. Dates that do not parse sort last.
    pub fn ordered_by(&self, field: SortField) -> Vec<&Expense> {
        let mut ordered: Vec<&Expense> = self.expenses.iter().collect();
        match field.cell_type() {
            CellType::Number => ordered.sort_by(|a, b| a.amount().total_cmp(&b.amount())),
            CellType::Date => ordered.sort_by_key(|expense| {
                let parsed = parse_date(expense.date());
                (parsed.is_none(), parsed)
            }),
            CellType::Text => ordered.sort_by(|a, b| compare_text(a.category(), b.category())),
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(expenses: &[(&str, &str, &str)]) -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        for (date, category, amount) in expenses {
            ledger.add_expense(date, category, amount).unwrap();
        }
        ledger
    }

    #[test]
    fn starts_empty_with_zero_budget() {
        let ledger = ExpenseLedger::new();
        assert_eq!(ledger.budget(), 0.0);
        assert!(ledger.expenses().is_empty());
        assert_eq!(ledger.total_expenses(), 0.0);
        assert_eq!(ledger.remaining(), 0.0);
    }

    #[test]
    fn set_budget_accepts_non_negative_values() {
        let mut ledger = ledger_with(&[("2024-01-01", "Food", "20")]);
        assert_eq!(ledger.set_budget("500"), Ok(LedgerChange::BudgetUpdated));
        assert_eq!(ledger.budget(), 500.0);
        assert_eq!(ledger.remaining(), 480.0);

        ledger.set_budget("0").unwrap();
        assert_eq!(ledger.budget(), 0.0);
        assert_eq!(ledger.remaining(), -20.0);
    }

    #[test]
    fn set_budget_rejects_negative_and_non_numeric() {
        let mut ledger = ExpenseLedger::new();
        ledger.set_budget("100").unwrap();

        for input in ["-5", "abc", "", "Infinity"] {
            let err = ledger.set_budget(input).unwrap_err();
            assert_eq!(
                err,
                LedgerError::InvalidAmount {
                    field: AmountField::Budget,
                    input: input.to_string(),
                }
            );
            assert_eq!(ledger.budget(), 100.0);
        }
    }

    #[test]
    fn add_expense_appends_and_grows_total() {
        let mut ledger = ExpenseLedger::new();
        ledger.add_expense("2024-01-01", "Food", "23.5").unwrap();
        let before = ledger.total_expenses();
        let change = ledger.add_expense("2024-01-02", "Food", "10").unwrap();

        assert_eq!(change, LedgerChange::ExpenseAdded);
        assert_eq!(ledger.expenses().len(), 2);
        assert_eq!(ledger.total_expenses() - before, 10.0);
        assert_eq!(ledger.expenses()[1].category(), "Food");
    }

    #[test]
    fn add_expense_rejects_zero_negative_and_text() {
        let mut ledger = ledger_with(&[("2024-01-01", "Rent", "900")]);
        for input in ["0", "-3", "ten", ""] {
            assert!(matches!(
                ledger.add_expense("2024-01-05", "Misc", input),
                Err(LedgerError::InvalidAmount {
                    field: AmountField::Expense,
                    ..
                })
            ));
        }
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.total_expenses(), 900.0);
    }

    #[test]
    fn add_expense_rejects_overflowing_total() {
        let mut ledger = ledger_with(&[("2024-01-01", "Yacht", "1e308")]);
        let err = ledger.add_expense("2024-01-02", "Yacht", "1e308").unwrap_err();

        assert_eq!(
            err,
            LedgerError::InvalidAmount {
                field: AmountField::Expense,
                input: "1e308".to_string(),
            }
        );
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.total_expenses(), 1e308);
        assert!(ledger.remaining().is_finite());
    }

    #[test]
    fn date_and_category_are_opaque() {
        let ledger = ledger_with(&[("next tuesday", "", "1")]);
        assert_eq!(ledger.expenses()[0].date(), "next tuesday");
        assert_eq!(ledger.expenses()[0].category(), "");
    }

    #[test]
    fn total_is_recomputed_from_expenses() {
        let ledger = ledger_with(&[
            ("2024-01-01", "A", "0.1"),
            ("2024-01-02", "B", "0.2"),
            ("2024-01-03", "C", "0.3"),
        ]);
        assert!((ledger.total_expenses() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn ordered_by_leaves_insertion_order_alone() {
        let ledger = ledger_with(&[
            ("2024-03-01", "rent", "900"),
            ("2024-01-15", "Food", "23.5"),
            ("later", "bills", "10"),
        ]);

        let by_amount: Vec<f64> = ledger
            .ordered_by(SortField::Amount)
            .iter()
            .map(|e| e.amount())
            .collect();
        assert_eq!(by_amount, vec![10.0, 23.5, 900.0]);

        let by_date: Vec<&str> = ledger
            .ordered_by(SortField::Date)
            .iter()
            .map(|e| e.date())
            .collect();
        assert_eq!(by_date, vec!["2024-01-15", "2024-03-01", "later"]);

        let by_category: Vec<&str> = ledger
            .ordered_by(SortField::Category)
            .iter()
            .map(|e| e.category())
            .collect();
        assert_eq!(by_category, vec!["bills", "Food", "rent"]);

        assert_eq!(ledger.expenses()[0].date(), "2024-03-01");
    }
}
