use serde::{Deserialize, Serialize};

/// Employment category of a taxpayer.
///
/// Contract employees do not contribute to the National Pension and
/// Provident Fund, so no NPPF deduction applies to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentCategory {
    Regular,
    Contract,
}

impl EmploymentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "R",
            Self::Contract => "C",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "R" => Some(Self::Regular),
            "C" => Some(Self::Contract),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_codes() {
        assert_eq!(
            EmploymentCategory::parse("R"),
            Some(EmploymentCategory::Regular)
        );
        assert_eq!(
            EmploymentCategory::parse("C"),
            Some(EmploymentCategory::Contract)
        );
        assert_eq!(EmploymentCategory::Regular.as_str(), "R");
        assert_eq!(EmploymentCategory::Contract.as_str(), "C");
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(EmploymentCategory::parse("X"), None);
        assert_eq!(EmploymentCategory::parse(""), None);
    }
}
