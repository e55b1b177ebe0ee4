mod deduction_schedule;
mod employment_category;
mod tax_bracket;
mod tax_schedule;
mod taxpayer_profile;

pub use deduction_schedule::DeductionSchedule;
pub use employment_category::EmploymentCategory;
pub use tax_bracket::TaxBracket;
pub use tax_schedule::TaxSchedule;
pub use taxpayer_profile::TaxpayerProfile;
