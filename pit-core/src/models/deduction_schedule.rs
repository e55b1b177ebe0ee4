use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caps and rates governing allowable deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSchedule {
    /// Education allowance cap per child.
    pub education_cap_per_child: Decimal,

    /// Flat cap on the taxpayer's own further-education allowance.
    pub self_education_cap: Decimal,

    /// Donations are deductible up to this fraction of gross income.
    pub donation_rate: Decimal,
}

impl DeductionSchedule {
    /// The statutory schedule: Nu. 350,000 per child, Nu. 350,000
    /// self-education, donations up to 5% of gross income.
    pub fn statutory() -> Self {
        Self {
            education_cap_per_child: Decimal::from(350_000),
            self_education_cap: Decimal::from(350_000),
            donation_rate: Decimal::new(5, 2),
        }
    }
}
