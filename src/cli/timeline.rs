use crate::cli::theme::Theme;
use crate::config::ThemeToken;
use ratatui::text::{Line, Span};

pub(crate) const WELCOME_TEXT: &str =
    "Welcome to LoanAdvisor. TAB toggles Loan/AI mode. Type /help for commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputKind {
    QuoteValue,
    VerdictEligible,
    VerdictRejected,
    AssistantText,
    SystemInfo,
    SystemError,
}

#[derive(Debug, Clone)]
pub(crate) enum TimelineEntry {
    UserInputLoan(String),
    UserInputAssistant(String),
    UserInputCommand(String),
    OutputLine { kind: OutputKind, text: String },
}

/// Ordered record of everything rendered this session. Entries are only
/// appended (or cleared wholesale with /clear); rendering is a pure function
/// of the entries and the theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_output(&mut self, kind: OutputKind, text: &str) {
        for line in split_output_lines(text) {
            self.entries.push(TimelineEntry::OutputLine {
                kind,
                text: line.to_string(),
            });
        }
    }

    pub(crate) fn push_user_input_loan(&mut self, text: &str) {
        for line in split_output_lines(text) {
            self.entries
                .push(TimelineEntry::UserInputLoan(line.to_string()));
        }
    }

    pub(crate) fn push_user_input_assistant(&mut self, text: &str) {
        for line in split_output_lines(text) {
            self.entries
                .push(TimelineEntry::UserInputAssistant(line.to_string()));
        }
    }

    pub(crate) fn push_user_input_command(&mut self, text: &str) {
        for line in split_output_lines(text) {
            self.entries
                .push(TimelineEntry::UserInputCommand(line.to_string()));
        }
    }

    pub(crate) fn render_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        if self.entries.is_empty() {
            return vec![Line::from(Span::styled(
                WELCOME_TEXT,
                theme.style(ThemeToken::SystemInfo),
            ))];
        }

        let mut lines = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            lines.push(render_entry(entry, theme));
        }

        lines
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

fn render_entry(entry: &TimelineEntry, theme: &Theme) -> Line<'static> {
    match entry {
        TimelineEntry::UserInputLoan(text) => Line::from(vec![
            Span::styled("loan> ", theme.style(ThemeToken::LoanPrompt)),
            Span::styled(text.clone(), theme.style(ThemeToken::UserInputLoan)),
        ]),
        TimelineEntry::UserInputAssistant(text) => Line::from(vec![
            Span::styled("ai> ", theme.style(ThemeToken::AssistantPrompt)),
            Span::styled(text.clone(), theme.style(ThemeToken::UserInputAssistant)),
        ]),
        TimelineEntry::UserInputCommand(text) => Line::from(vec![
            Span::styled("cmd> ", theme.style(ThemeToken::CommandPrompt)),
            Span::styled(text.clone(), theme.style(ThemeToken::UserInputLoan)),
        ]),
        TimelineEntry::OutputLine { kind, text } => Line::from(Span::styled(
            text.clone(),
            theme.style(output_token_for(*kind)),
        )),
    }
}

fn split_output_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    text.lines().collect()
}

fn output_token_for(kind: OutputKind) -> ThemeToken {
    match kind {
        OutputKind::QuoteValue => ThemeToken::QuoteValue,
        OutputKind::VerdictEligible => ThemeToken::VerdictEligible,
        OutputKind::VerdictRejected => ThemeToken::VerdictRejected,
        OutputKind::AssistantText => ThemeToken::AssistantText,
        OutputKind::SystemInfo => ThemeToken::SystemInfo,
        OutputKind::SystemError => ThemeToken::SystemError,
    }
}
