use super::commands::ParseError;
use crate::loan::{LoanTerm, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};

/// One submitted line in loan mode: either an input mutation or an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LoanLine {
    SetIncome(f64),
    SetAmount(f64),
    SetScore(u16),
    SetTerm(LoanTerm),
    Show,
    Check,
}

pub(crate) fn parse_loan_line(line: &str) -> Result<LoanLine, ParseError> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("").to_ascii_lowercase();
    let rest = parts.next().map(str::trim).unwrap_or("");

    match keyword.as_str() {
        "income" => parse_money(rest, "usage: income <non-negative amount>").map(LoanLine::SetIncome),
        "amount" => parse_money(rest, "usage: amount <non-negative amount>").map(LoanLine::SetAmount),
        "score" => parse_score(rest),
        "term" => parse_term(rest),
        "show" => expect_no_args(rest, LoanLine::Show, "usage: show"),
        "check" => expect_no_args(rest, LoanLine::Check, "usage: check"),
        _ => Err(ParseError::new(format!(
            "unknown input '{keyword}'. Try /help"
        ))),
    }
}

fn expect_no_args(rest: &str, line: LoanLine, usage: &str) -> Result<LoanLine, ParseError> {
    if rest.is_empty() {
        Ok(line)
    } else {
        Err(ParseError::new(usage))
    }
}

fn parse_money(rest: &str, usage: &str) -> Result<f64, ParseError> {
    let value = rest
        .parse::<f64>()
        .map_err(|_| ParseError::new(usage))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::new(usage));
    }
    Ok(value)
}

fn parse_score(rest: &str) -> Result<LoanLine, ParseError> {
    let usage = format!("usage: score <{MIN_CREDIT_SCORE}-{MAX_CREDIT_SCORE}>");
    let value = rest
        .parse::<u16>()
        .map_err(|_| ParseError::new(usage.clone()))?;
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&value) {
        return Err(ParseError::new(usage));
    }
    Ok(LoanLine::SetScore(value))
}

fn parse_term(rest: &str) -> Result<LoanLine, ParseError> {
    let usage = "usage: term <5|10|15|20|25|30>";
    let years = rest
        .parse::<u32>()
        .map_err(|_| ParseError::new(usage))?;
    LoanTerm::from_years(years)
        .map(LoanLine::SetTerm)
        .ok_or_else(|| ParseError::new(usage))
}
