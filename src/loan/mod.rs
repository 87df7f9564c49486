mod eligibility;
mod inputs;
mod payment;

pub use eligibility::is_eligible;
pub use inputs::{LoanInputs, LoanTerm, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};
pub use payment::monthly_payment;
