//! Interactive collection of taxpayer figures.
//!
//! Reads one answer per figure from a line-oriented input. Any malformed
//! numeric answer is reported as a single generic invalid-input error,
//! without identifying which field failed.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;

use pit_core::{EmploymentCategory, TaxpayerProfile};

#[derive(Debug, Error)]
pub enum InputError {
    /// Deliberately generic: the failing field is not named.
    #[error("Invalid input. Please enter numeric values for income, allowances, and contributions.")]
    Invalid,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompts for every figure and builds the profile.
///
/// Returns the taxpayer's name alongside the profile; the name is a
/// presentation concern and not part of the assessment itself.
pub fn collect<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(String, TaxpayerProfile), InputError> {
    let name = read_answer(input, output, "Enter the name of the taxpayer: ")?;
    let gross_income = read_decimal(input, output, "Enter the gross income: ")?;
    let num_children = read_count(input, output, "Enter the number of children: ")?;
    let education = read_decimal(input, output, "Enter the education allowance: ")?;
    let self_education = read_decimal(input, output, "Enter the self education allowance: ")?;
    let donations = read_decimal(input, output, "Enter the amount of donations: ")?;
    let nppf = read_decimal(input, output, "Enter the NPPF contribution: ")?;
    let gis = read_decimal(input, output, "Enter the GIS contribution: ")?;
    let is_contract = read_yes_no(
        input,
        output,
        "Is the individual a contract employee? (yes/no): ",
    )?;

    let category = if is_contract {
        EmploymentCategory::Contract
    } else {
        EmploymentCategory::Regular
    };

    let profile = TaxpayerProfile::new(
        category,
        gross_income,
        num_children,
        education,
        self_education,
        donations,
        nppf,
        gis,
    );

    Ok((name, profile))
}

pub fn parse_decimal(answer: &str) -> Result<Decimal, InputError> {
    answer.trim().parse().map_err(|_| InputError::Invalid)
}

pub fn parse_count(answer: &str) -> Result<u32, InputError> {
    answer.trim().parse().map_err(|_| InputError::Invalid)
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, InputError> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn read_decimal<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<Decimal, InputError> {
    parse_decimal(&read_answer(input, output, question)?)
}

fn read_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<u32, InputError> {
    parse_count(&read_answer(input, output, question)?)
}

/// Any answer other than "yes" (case-insensitive) means no.
fn read_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool, InputError> {
    let answer = read_answer(input, output, question)?;
    Ok(answer.eq_ignore_ascii_case("yes"))
}
