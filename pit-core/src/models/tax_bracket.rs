use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket of the progressive rate schedule.
///
/// A bracket covers incomes in `(min_income, max_income]`; the top bracket
/// has `max_income` of `None` and is unbounded. `base_tax` is the tax due
/// on income up to `min_income`, so tax within the bracket is
/// `base_tax + (income - min_income) * tax_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}
