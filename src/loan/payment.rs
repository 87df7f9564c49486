use super::LoanTerm;

/// Fixed-payment amortization: equal monthly installments covering principal
/// and interest over the whole term.
///
/// A zero rate degenerates to flat principal repayment, which also guards the
/// division in the amortization formula. Total over its domain: any
/// non-negative amount and rate produces a finite non-negative payment.
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, term: LoanTerm) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return loan_amount / f64::from(term.months());
    }

    let growth = (1.0 + monthly_rate).powi(term.months() as i32);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}
