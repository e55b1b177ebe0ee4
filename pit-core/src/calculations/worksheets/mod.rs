pub mod deductions;
pub mod income_tax;

pub use deductions::{AllowedDeductions, DeductionWorksheet};
pub use income_tax::{IncomeTaxWorksheet, IncomeTaxWorksheetError, TaxAssessment};
