#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Mode(Option<CommandMode>),
    Clear,
    History(Option<usize>),
    Trace,
    Rate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandMode {
    Loan,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

pub(crate) const HELP_TEXT: &str = "Available commands:\n  /help                Show this command list\n  /mode [loan|ai]      Show or switch active mode\n  /clear               Clear the timeline output\n  /history [n]         Show the chat transcript (or last n exchanges)\n  /trace               Show path to the current trace file\n  /rate                Fetch the current interest rate and payment estimate\n\nLoan mode inputs:\n  income <amount>      Set monthly income\n  amount <amount>      Set loan amount\n  score <300-850>      Set credit score\n  term <years>         Set loan term (5, 10, 15, 20, 25 or 30)\n  show                 Show inputs, rate and payment estimate\n  check                Check loan eligibility";

pub(crate) fn parse_command(line: &str) -> Result<Command, ParseError> {
    if !line.starts_with('/') {
        return Err(ParseError::new("not a command"));
    }

    let trimmed = line.trim();
    if trimmed == "/" {
        return Err(ParseError::new("empty command. Try /help"));
    }

    let command_text = &trimmed[1..];
    let mut parts = command_text.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    if name.is_empty() {
        return Err(ParseError::new("empty command. Try /help"));
    }
    let rest = parts.next().map(str::trim).unwrap_or("");

    match name.as_str() {
        "help" => expect_no_args(rest, Command::Help, "usage: /help"),
        "mode" => parse_mode(rest),
        "clear" => expect_no_args(rest, Command::Clear, "usage: /clear"),
        "history" => parse_history(rest),
        "trace" => expect_no_args(rest, Command::Trace, "usage: /trace"),
        "rate" => expect_no_args(rest, Command::Rate, "usage: /rate"),
        _ => Err(ParseError::new(format!(
            "unknown command '/{name}'. Try /help"
        ))),
    }
}

pub(crate) fn is_command_line(line: &str) -> bool {
    line.starts_with('/')
}

fn expect_no_args(rest: &str, command: Command, usage: &str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::new(usage))
    }
}

fn parse_mode(rest: &str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        return Ok(Command::Mode(None));
    }

    match rest {
        "loan" => Ok(Command::Mode(Some(CommandMode::Loan))),
        "ai" => Ok(Command::Mode(Some(CommandMode::Assistant))),
        _ => Err(ParseError::new("usage: /mode [loan|ai]")),
    }
}

fn parse_history(rest: &str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        return Ok(Command::History(None));
    }

    let value = rest
        .parse::<usize>()
        .map_err(|_| ParseError::new("usage: /history [n]"))?;
    if value == 0 {
        return Err(ParseError::new("usage: /history [n] (n must be >= 1)"));
    }

    Ok(Command::History(Some(value)))
}
