use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::EmploymentCategory;

/// A single taxpayer's figures for one assessment, as claimed.
///
/// Allowance and donation fields hold the amounts the taxpayer claims;
/// caps are applied later by the deduction worksheet. The one rule
/// enforced here is the category rule: contract employees do not
/// contribute to NPPF, so [`TaxpayerProfile::new`] forces
/// `nppf_contribution` to zero for them regardless of the value supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub category: EmploymentCategory,
    pub gross_income: Decimal,
    pub num_children: u32,
    pub education_allowance: Decimal,
    pub self_education_allowance: Decimal,
    pub donations: Decimal,
    pub nppf_contribution: Decimal,
    pub gis_contribution: Decimal,
}

impl TaxpayerProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category: EmploymentCategory,
        gross_income: Decimal,
        num_children: u32,
        education_allowance: Decimal,
        self_education_allowance: Decimal,
        donations: Decimal,
        nppf_contribution: Decimal,
        gis_contribution: Decimal,
    ) -> Self {
        let nppf_contribution = match category {
            EmploymentCategory::Regular => nppf_contribution,
            EmploymentCategory::Contract => Decimal::ZERO,
        };

        Self {
            category,
            gross_income,
            num_children,
            education_allowance,
            self_education_allowance,
            donations,
            nppf_contribution,
            gis_contribution,
        }
    }
}
