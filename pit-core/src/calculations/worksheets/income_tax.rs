//! Income tax worksheet: taxable income, bracket lookup and surcharge.
//!
//! Taxable income is gross income minus total allowed deductions, floored
//! at zero. Tax is then read off the progressive schedule: the bracket
//! covering the income supplies a base tax plus a marginal rate on the
//! excess over the bracket floor. In the unbounded top bracket a flat
//! surcharge is added on the whole base tax when taxable income exceeds
//! the surcharge threshold.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::{DeductionWorksheet, IncomeTaxWorksheet};
//! use pit_core::{DeductionSchedule, EmploymentCategory, TaxSchedule, TaxpayerProfile};
//!
//! let profile = TaxpayerProfile::new(
//!     EmploymentCategory::Contract,
//!     dec!(500000),
//!     0,
//!     dec!(0),
//!     dec!(0),
//!     dec!(0),
//!     dec!(0),
//!     dec!(0),
//! );
//!
//! let deduction_schedule = DeductionSchedule::statutory();
//! let deductions = DeductionWorksheet::new(&deduction_schedule).allowed_deductions(&profile);
//!
//! let tax_schedule = TaxSchedule::statutory();
//! let assessment = IncomeTaxWorksheet::new(&tax_schedule)
//!     .assess(&profile, &deductions)
//!     .unwrap();
//!
//! assert_eq!(assessment.taxable_income, dec!(500000));
//! assert_eq!(assessment.tax_owed, dec!(25000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::max;
use crate::calculations::worksheets::AllowedDeductions;
use crate::{TaxBracket, TaxSchedule, TaxpayerProfile};

/// Errors that can occur during income tax worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxWorksheetError {
    /// The schedule contains no tax brackets.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// No tax bracket found for the given taxable income.
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// Result of the income tax worksheet.
///
/// Intermediate amounts are exposed alongside the final liability so the
/// caller can show how the figure was arrived at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Gross income minus allowed deductions, floored at zero.
    pub taxable_income: Decimal,

    /// Tax from the bracket schedule, before any surcharge.
    pub base_tax: Decimal,

    /// High-income surcharge; zero outside the top bracket.
    pub surcharge: Decimal,

    /// Total tax payable (`base_tax + surcharge`).
    pub tax_owed: Decimal,
}

/// Calculator for the income tax worksheet.
#[derive(Debug, Clone)]
pub struct IncomeTaxWorksheet<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> IncomeTaxWorksheet<'a> {
    /// Creates a new worksheet over the given rate schedule.
    ///
    /// Brackets must be sorted by `min_income` ascending and cover all
    /// incomes (the last bracket unbounded).
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Assesses the tax payable for a profile and its allowed deductions.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxWorksheetError`] if the schedule has no brackets
    /// or no bracket covers the taxable income. Neither can happen with
    /// [`TaxSchedule::statutory`].
    pub fn assess(
        &self,
        profile: &TaxpayerProfile,
        deductions: &AllowedDeductions,
    ) -> Result<TaxAssessment, IncomeTaxWorksheetError> {
        if self.schedule.brackets.is_empty() {
            return Err(IncomeTaxWorksheetError::NoTaxBrackets);
        }

        let taxable_income = self.taxable_income(profile.gross_income, deductions.total());
        let (base_tax, surcharge) = self.calculate_tax(taxable_income)?;

        Ok(TaxAssessment {
            taxable_income,
            base_tax,
            surcharge,
            tax_owed: base_tax + surcharge,
        })
    }

    /// Calculates taxable income: gross income minus deductions, floored at zero.
    fn taxable_income(
        &self,
        gross_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        if total_deductions > gross_income {
            warn!(
                %gross_income,
                %total_deductions,
                "allowed deductions exceed gross income, taxable income floored at zero"
            );
        }
        max(gross_income - total_deductions, Decimal::ZERO)
    }

    /// Calculates base tax and surcharge from the rate schedule.
    ///
    /// The surcharge comparison against the threshold is always true in
    /// the unbounded top bracket, since that bracket starts above the
    /// threshold. It is kept as the statutory rule states it: the
    /// surcharge belongs to the top bracket, not to every income above
    /// the threshold.
    fn calculate_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<(Decimal, Decimal), IncomeTaxWorksheetError> {
        if taxable_income <= Decimal::ZERO {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }

        let bracket = self.find_bracket(taxable_income)?;

        let marginal_income = taxable_income - bracket.min_income;
        let base_tax = bracket.base_tax + (marginal_income * bracket.tax_rate);

        let surcharge = if bracket.max_income.is_none()
            && taxable_income > self.schedule.surcharge_threshold
        {
            base_tax * self.schedule.surcharge_rate
        } else {
            Decimal::ZERO
        };

        Ok((base_tax, surcharge))
    }

    /// Finds the bracket covering the income: `min < income <= max`.
    fn find_bracket(
        &self,
        taxable_income: Decimal,
    ) -> Result<&TaxBracket, IncomeTaxWorksheetError> {
        self.schedule
            .brackets
            .iter()
            .find(|b| {
                taxable_income > b.min_income
                    && (b.max_income.is_none()
                        || taxable_income <= b.max_income.unwrap_or(Decimal::MAX))
            })
            .ok_or(IncomeTaxWorksheetError::NoMatchingBracket(taxable_income))
    }
}
