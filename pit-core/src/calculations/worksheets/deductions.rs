//! Deduction worksheet: caps claimed deductions to their allowable amounts.
//!
//! Each deduction is capped independently:
//!
//! | Deduction | Cap |
//! |-----------|-----|
//! | Education allowance | cap per child × number of children |
//! | Self-education allowance | flat cap |
//! | Donations | fraction of gross income |
//! | NPPF contribution | none (zeroed at profile construction for contract employees) |
//! | GIS contribution | none |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::DeductionWorksheet;
//! use pit_core::{DeductionSchedule, EmploymentCategory, TaxpayerProfile};
//!
//! let profile = TaxpayerProfile::new(
//!     EmploymentCategory::Regular,
//!     dec!(1000000), // gross income
//!     2,             // children
//!     dec!(800000),  // claimed education allowance
//!     dec!(0),
//!     dec!(0),
//!     dec!(0),
//!     dec!(0),
//! );
//!
//! let schedule = DeductionSchedule::statutory();
//! let deductions = DeductionWorksheet::new(&schedule).allowed_deductions(&profile);
//!
//! assert_eq!(deductions.education, dec!(700000)); // capped at 350,000 per child
//! assert_eq!(deductions.total(), dec!(700000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::min;
use crate::{DeductionSchedule, TaxpayerProfile};

/// Deduction amounts after capping, ready to subtract from gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedDeductions {
    /// Education allowance, capped per child.
    pub education: Decimal,

    /// Self-education allowance, capped at the flat limit.
    pub self_education: Decimal,

    /// Donations, capped at a fraction of gross income.
    pub donations: Decimal,

    /// NPPF contribution, uncapped. Always zero for contract employees.
    pub nppf: Decimal,

    /// GIS contribution, uncapped.
    pub gis: Decimal,
}

impl AllowedDeductions {
    /// Sum of all allowed deductions.
    pub fn total(&self) -> Decimal {
        self.education + self.self_education + self.donations + self.nppf + self.gis
    }
}

/// Calculator for allowable deductions.
#[derive(Debug, Clone)]
pub struct DeductionWorksheet<'a> {
    schedule: &'a DeductionSchedule,
}

impl<'a> DeductionWorksheet<'a> {
    pub fn new(schedule: &'a DeductionSchedule) -> Self {
        Self { schedule }
    }

    /// Caps each claimed deduction to its allowable amount.
    ///
    /// Pure and infallible: claimed figures are taken as given, without
    /// validation, and each cap is applied independently of the others.
    /// With no children the education allowance cap is zero, so any
    /// claimed amount is disallowed entirely.
    pub fn allowed_deductions(
        &self,
        profile: &TaxpayerProfile,
    ) -> AllowedDeductions {
        AllowedDeductions {
            education: self.education_allowance(profile.num_children, profile.education_allowance),
            self_education: self.self_education_allowance(profile.self_education_allowance),
            donations: self.donations(profile.gross_income, profile.donations),
            nppf: profile.nppf_contribution,
            gis: profile.gis_contribution,
        }
    }

    /// Caps the education allowance at the per-child limit.
    fn education_allowance(
        &self,
        num_children: u32,
        claimed: Decimal,
    ) -> Decimal {
        let cap = self.schedule.education_cap_per_child * Decimal::from(num_children);
        min(cap, claimed)
    }

    /// Caps the self-education allowance at the flat limit.
    fn self_education_allowance(
        &self,
        claimed: Decimal,
    ) -> Decimal {
        min(self.schedule.self_education_cap, claimed)
    }

    /// Caps donations at the allowed fraction of gross income.
    fn donations(
        &self,
        gross_income: Decimal,
        claimed: Decimal,
    ) -> Decimal {
        min(self.schedule.donation_rate * gross_income, claimed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::EmploymentCategory;

    fn profile(
        category: EmploymentCategory,
        gross_income: Decimal,
        num_children: u32,
        education: Decimal,
        self_education: Decimal,
        donations: Decimal,
        nppf: Decimal,
        gis: Decimal,
    ) -> TaxpayerProfile {
        TaxpayerProfile::new(
            category,
            gross_income,
            num_children,
            education,
            self_education,
            donations,
            nppf,
            gis,
        )
    }

    fn worksheet_with(
        schedule: &DeductionSchedule
    ) -> DeductionWorksheet<'_> {
        DeductionWorksheet::new(schedule)
    }

    // =========================================================================
    // education allowance tests
    // =========================================================================

    #[test]
    fn education_allowance_capped_per_child() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.education_allowance(2, dec!(800000));

        assert_eq!(result, dec!(700000));
    }

    #[test]
    fn education_allowance_below_cap_passes_through() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.education_allowance(2, dec!(600000));

        assert_eq!(result, dec!(600000));
    }

    #[test]
    fn education_allowance_zero_children_disallows_claim() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.education_allowance(0, dec!(100000));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // self-education allowance tests
    // =========================================================================

    #[test]
    fn self_education_capped_at_flat_limit() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.self_education_allowance(dec!(400000));

        assert_eq!(result, dec!(350000));
    }

    #[test]
    fn self_education_below_cap_passes_through() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.self_education_allowance(dec!(120000));

        assert_eq!(result, dec!(120000));
    }

    // =========================================================================
    // donations tests
    // =========================================================================

    #[test]
    fn donations_capped_at_fraction_of_gross_income() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.donations(dec!(1000000), dec!(100000));

        assert_eq!(result, dec!(50000.00));
    }

    #[test]
    fn donations_below_cap_pass_through() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);

        let result = worksheet.donations(dec!(1000000), dec!(20000));

        assert_eq!(result, dec!(20000));
    }

    // =========================================================================
    // allowed_deductions tests
    // =========================================================================

    #[test]
    fn allowed_deductions_caps_each_field_independently() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);
        let profile = profile(
            EmploymentCategory::Regular,
            dec!(1000000),
            1,
            dec!(400000),
            dec!(400000),
            dec!(100000),
            dec!(30000),
            dec!(6000),
        );

        let result = worksheet.allowed_deductions(&profile);

        assert_eq!(result.education, dec!(350000));
        assert_eq!(result.self_education, dec!(350000));
        assert_eq!(result.donations, dec!(50000.00));
        assert_eq!(result.nppf, dec!(30000));
        assert_eq!(result.gis, dec!(6000));
        assert_eq!(result.total(), dec!(786000.00));
    }

    #[test]
    fn allowed_deductions_contract_employee_nppf_is_zero() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);
        let profile = profile(
            EmploymentCategory::Contract,
            dec!(500000),
            0,
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(40000), // claimed but not allowed for contract employees
            dec!(3000),
        );

        let result = worksheet.allowed_deductions(&profile);

        assert_eq!(result.nppf, dec!(0));
        assert_eq!(result.total(), dec!(3000));
    }

    #[test]
    fn allowed_deductions_never_exceed_claims() {
        let schedule = DeductionSchedule::statutory();
        let worksheet = worksheet_with(&schedule);
        let profile = profile(
            EmploymentCategory::Regular,
            dec!(2000000),
            3,
            dec!(900000),
            dec!(200000),
            dec!(150000),
            dec!(80000),
            dec!(10000),
        );

        let result = worksheet.allowed_deductions(&profile);

        assert!(result.education <= profile.education_allowance);
        assert!(result.self_education <= profile.self_education_allowance);
        assert!(result.donations <= profile.donations);
        assert_eq!(result.nppf, profile.nppf_contribution);
        assert_eq!(result.gis, profile.gis_contribution);
    }
}
