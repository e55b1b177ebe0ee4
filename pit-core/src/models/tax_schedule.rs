use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxBracket;

/// The progressive rate schedule plus the high-income surcharge rule.
///
/// Brackets must be sorted by `min_income` ascending and the last bracket
/// must be unbounded (`max_income` of `None`). The surcharge applies only
/// within that unbounded top bracket, to taxable incomes above
/// `surcharge_threshold`, and is levied on the whole base tax rather than
/// the excess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    pub brackets: Vec<TaxBracket>,
    pub surcharge_threshold: Decimal,
    pub surcharge_rate: Decimal,
}

impl TaxSchedule {
    /// The statutory personal income tax schedule.
    ///
    /// | Taxable income (Nu.) | Rate | Base tax |
    /// |---|---|---|
    /// | 0 – 300,000 | 0% | 0 |
    /// | 300,000 – 400,000 | 10% | 0 |
    /// | 400,000 – 650,000 | 15% | 10,000 |
    /// | 650,000 – 1,000,000 | 20% | 47,500 |
    /// | 1,000,000 – 1,500,000 | 25% | 117,500 |
    /// | above 1,500,000 | 30% | 242,500 |
    ///
    /// Plus a 10% surcharge on the whole base tax in the top bracket.
    pub fn statutory() -> Self {
        Self {
            brackets: vec![
                TaxBracket {
                    min_income: Decimal::ZERO,
                    max_income: Some(Decimal::from(300_000)),
                    tax_rate: Decimal::ZERO,
                    base_tax: Decimal::ZERO,
                },
                TaxBracket {
                    min_income: Decimal::from(300_000),
                    max_income: Some(Decimal::from(400_000)),
                    tax_rate: Decimal::new(10, 2),
                    base_tax: Decimal::ZERO,
                },
                TaxBracket {
                    min_income: Decimal::from(400_000),
                    max_income: Some(Decimal::from(650_000)),
                    tax_rate: Decimal::new(15, 2),
                    base_tax: Decimal::from(10_000),
                },
                TaxBracket {
                    min_income: Decimal::from(650_000),
                    max_income: Some(Decimal::from(1_000_000)),
                    tax_rate: Decimal::new(20, 2),
                    base_tax: Decimal::from(47_500),
                },
                TaxBracket {
                    min_income: Decimal::from(1_000_000),
                    max_income: Some(Decimal::from(1_500_000)),
                    tax_rate: Decimal::new(25, 2),
                    base_tax: Decimal::from(117_500),
                },
                TaxBracket {
                    min_income: Decimal::from(1_500_000),
                    max_income: None,
                    tax_rate: Decimal::new(30, 2),
                    base_tax: Decimal::from(242_500),
                },
            ],
            surcharge_threshold: Decimal::from(1_000_000),
            surcharge_rate: Decimal::new(10, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn statutory_brackets_are_sorted_and_contiguous() {
        let schedule = TaxSchedule::statutory();

        for pair in schedule.brackets.windows(2) {
            assert_eq!(pair[0].max_income, Some(pair[1].min_income));
        }
    }

    #[test]
    fn statutory_top_bracket_is_unbounded() {
        let schedule = TaxSchedule::statutory();
        let top = schedule.brackets.last().unwrap();

        assert_eq!(top.max_income, None);
        assert_eq!(top.tax_rate, dec!(0.30));
        assert_eq!(top.base_tax, dec!(242500));
    }

    #[test]
    fn statutory_base_tax_accumulates_from_prior_brackets() {
        let schedule = TaxSchedule::statutory();

        // Each bracket's base tax equals the tax on a full prior bracket.
        for pair in schedule.brackets.windows(2) {
            let full_prior = pair[0].base_tax
                + (pair[0].max_income.unwrap() - pair[0].min_income) * pair[0].tax_rate;
            assert_eq!(pair[1].base_tax, full_prior);
        }
    }
}
