use std::io;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pit_core::calculations::{DeductionWorksheet, IncomeTaxWorksheet};
use pit_core::{DeductionSchedule, EmploymentCategory, TaxSchedule, TaxpayerProfile};

mod prompt;
mod report;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal income tax calculator.
///
/// Assesses the PIT payable by a single taxpayer under the statutory
/// bracket schedule, after capping the claimed deductions. With
/// `--gross-income` all figures are taken from flags (unsupplied ones
/// default to zero); without it the tool prompts for each figure.
#[derive(Debug, Parser)]
#[command(name = "pit", version)]
struct Cli {
    /// Taxpayer name, used only in the printed report.
    #[arg(long)]
    name: Option<String>,

    /// Gross annual income in Nu. Enables flag mode.
    #[arg(long)]
    gross_income: Option<Decimal>,

    /// Number of children, for the education allowance cap.
    #[arg(long, default_value_t = 0)]
    children: u32,

    /// Claimed education allowance in Nu.
    #[arg(long, default_value_t = Decimal::ZERO)]
    education: Decimal,

    /// Claimed self-education allowance in Nu.
    #[arg(long, default_value_t = Decimal::ZERO)]
    self_education: Decimal,

    /// Claimed donations in Nu.
    #[arg(long, default_value_t = Decimal::ZERO)]
    donations: Decimal,

    /// NPPF contribution in Nu. Ignored for contract employees.
    #[arg(long, default_value_t = Decimal::ZERO)]
    nppf: Decimal,

    /// GIS contribution in Nu.
    #[arg(long, default_value_t = Decimal::ZERO)]
    gis: Decimal,

    /// Assess as a contract employee (no NPPF deduction).
    #[arg(long, default_value_t = false)]
    contract: bool,

    /// Print the assessment breakdown, not just the tax payable.
    #[arg(long, default_value_t = false)]
    breakdown: bool,
}

impl Cli {
    fn category(&self) -> EmploymentCategory {
        if self.contract {
            EmploymentCategory::Contract
        } else {
            EmploymentCategory::Regular
        }
    }

    fn profile_from_flags(
        &self,
        gross_income: Decimal,
    ) -> TaxpayerProfile {
        TaxpayerProfile::new(
            self.category(),
            gross_income,
            self.children,
            self.education,
            self.self_education,
            self.donations,
            self.nppf,
            self.gis,
        )
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let (name, profile) = match cli.gross_income {
        Some(gross_income) => (cli.name.clone(), cli.profile_from_flags(gross_income)),
        None => {
            let stdin = io::stdin();
            let (name, profile) = prompt::collect(&mut stdin.lock(), &mut io::stdout())?;
            (Some(name), profile)
        }
    };

    debug!(
        category = profile.category.as_str(),
        %profile.gross_income,
        "assessing profile"
    );

    let deduction_schedule = DeductionSchedule::statutory();
    let deductions = DeductionWorksheet::new(&deduction_schedule).allowed_deductions(&profile);

    let tax_schedule = TaxSchedule::statutory();
    let assessment = IncomeTaxWorksheet::new(&tax_schedule).assess(&profile, &deductions)?;

    if cli.breakdown {
        println!("{}", report::breakdown(&assessment));
    } else {
        println!("{}", report::tax_payable_line(name.as_deref(), &assessment));
    }

    Ok(())
}
