//! Aggregation of store query results for reporting commands.

use rust_decimal::Decimal;

use crate::models::category::Category;
use crate::models::expense::Expense;

/// Arithmetic total of the amounts across the given rows.
pub fn sum_amounts(rows: &[Expense]) -> Decimal {
    rows.iter().map(|e| e.amount).sum()
}

/// Partition rows by category, summing amounts per partition.
///
/// Result order is the insertion order of each category's first occurrence,
/// which is why this is a vector scan and not a map.
pub fn sum_by_category(rows: &[Expense]) -> Vec<(Category, Decimal)> {
    let mut totals: Vec<(Category, Decimal)> = Vec::new();

    for row in rows {
        match totals.iter_mut().find(|(c, _)| *c == row.category) {
            Some((_, total)) => *total += row.amount,
            None => totals.push((row.category, row.amount)),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn expense(amount: &str, description: &str) -> Expense {
        Expense::assemble(
            Decimal::from_str(amount).unwrap(),
            description,
            "26/02/2026",
            NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_sum_amounts() {
        let rows = vec![expense("10.00", "mercado"), expense("5.50", "padaria")];
        assert_eq!(sum_amounts(&rows), Decimal::from_str("15.50").unwrap());
        assert_eq!(sum_amounts(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_sum_by_category_first_occurrence_order() {
        let rows = vec![
            expense("10.00", "padaria"),
            expense("20.00", "mercado"),
            expense("5.00", "restaurante"),
            expense("7.00", "taxi"),
        ];

        let totals = sum_by_category(&rows);

        assert_eq!(
            totals,
            vec![
                (Category::Food, Decimal::from_str("15.00").unwrap()),
                (Category::Supermarket, Decimal::from_str("20.00").unwrap()),
                (Category::Transport, Decimal::from_str("7.00").unwrap()),
            ]
        );
    }
}
