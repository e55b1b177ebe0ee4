//! Presentation of a finished assessment.
//!
//! Rounding to two decimal places happens here and only here; the
//! assessment itself carries unrounded amounts.

use rust_decimal::Decimal;

use pit_core::calculations::TaxAssessment;
use pit_core::calculations::common::round_half_up;

/// Formats an amount as Ngultrum with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("Nu. {:.2}", round_half_up(amount))
}

/// The one-line result the original interactive flow prints.
pub fn tax_payable_line(
    name: Option<&str>,
    assessment: &TaxAssessment,
) -> String {
    match name {
        Some(name) => format!(
            "{name} has to pay {} in tax.",
            format_amount(assessment.tax_owed)
        ),
        None => format!("Tax payable: {}", format_amount(assessment.tax_owed)),
    }
}

/// A short breakdown of how the liability was arrived at.
pub fn breakdown(assessment: &TaxAssessment) -> String {
    let mut lines = vec![
        format!(
            "Taxable income:  {}",
            format_amount(assessment.taxable_income)
        ),
        format!("Base tax:        {}", format_amount(assessment.base_tax)),
    ];
    if assessment.surcharge > Decimal::ZERO {
        lines.push(format!(
            "Surcharge (10%): {}",
            format_amount(assessment.surcharge)
        ));
    }
    lines.push(format!("Tax payable:     {}", format_amount(assessment.tax_owed)));
    lines.join("\n")
}
