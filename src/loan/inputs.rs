use std::fmt::{Display, Formatter};

pub const MIN_CREDIT_SCORE: u16 = 300;
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Loan term in whole years. Only the discrete terms offered by the
/// calculator exist; fractional or odd terms are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanTerm {
    FiveYears,
    TenYears,
    FifteenYears,
    TwentyYears,
    TwentyFiveYears,
    ThirtyYears,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 6] = [
        LoanTerm::FiveYears,
        LoanTerm::TenYears,
        LoanTerm::FifteenYears,
        LoanTerm::TwentyYears,
        LoanTerm::TwentyFiveYears,
        LoanTerm::ThirtyYears,
    ];

    pub fn from_years(years: u32) -> Option<Self> {
        match years {
            5 => Some(Self::FiveYears),
            10 => Some(Self::TenYears),
            15 => Some(Self::FifteenYears),
            20 => Some(Self::TwentyYears),
            25 => Some(Self::TwentyFiveYears),
            30 => Some(Self::ThirtyYears),
            _ => None,
        }
    }

    pub fn years(self) -> u32 {
        match self {
            Self::FiveYears => 5,
            Self::TenYears => 10,
            Self::FifteenYears => 15,
            Self::TwentyYears => 20,
            Self::TwentyFiveYears => 25,
            Self::ThirtyYears => 30,
        }
    }

    pub fn months(self) -> u32 {
        self.years() * 12
    }
}

impl Display for LoanTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} years", self.years())
    }
}

/// The full set of user-adjustable inputs. Recreated implicitly on every
/// mutation; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInputs {
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub credit_score: u16,
    pub term: LoanTerm,
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            monthly_income: 3000.0,
            loan_amount: 10000.0,
            credit_score: 700,
            term: LoanTerm::FiveYears,
        }
    }
}
