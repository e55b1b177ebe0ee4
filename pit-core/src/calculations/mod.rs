//! Tax calculation modules for the personal income tax assessment.
//!
//! The assessment is split into two worksheet-style calculators: the
//! deduction worksheet, which caps claimed deductions, and the income tax
//! worksheet, which derives taxable income and applies the rate schedule.

pub mod common;
pub mod worksheets;

pub use worksheets::{
    AllowedDeductions, DeductionWorksheet, IncomeTaxWorksheet, IncomeTaxWorksheetError,
    TaxAssessment,
};
