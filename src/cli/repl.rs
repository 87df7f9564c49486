use super::commands::{self, Command, CommandMode, HELP_TEXT};
use super::inputs::{LoanLine, parse_loan_line};
use super::theme::Theme;
use super::timeline::{OutputKind, Timeline};
use crate::config::{ThemeConfig, ThemeToken};
use crate::llm::provider::{AssistantInput, LlmProvider};
use crate::loan::{LoanInputs, is_eligible, monthly_payment};
use crate::rates::provider::{RateProvider, RateQuote};
use crate::session::{Sender, Transcript};
use crate::trace::SessionTrace;
use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind, read,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::io;
use std::sync::Arc;

pub(crate) const ELIGIBLE_MESSAGE: &str = "You are eligible for the loan.";
pub(crate) const REJECTED_MESSAGE: &str = "You do not meet the eligibility criteria.";
pub(crate) const ASSISTANT_UNAVAILABLE_MESSAGE: &str = "Assistant unavailable: missing GROQ_API_KEY. Configure it in your shell or .env file (example: GROQ_API_KEY=your_key).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loan,
    Assistant,
}

pub struct AppState {
    pub mode: Mode,
    pub session_id: String,
    pub inputs: LoanInputs,
    pub transcript: Transcript,
    pub rates: Arc<dyn RateProvider>,
    pub llm: Option<Arc<dyn LlmProvider>>,
    pub theme_config: ThemeConfig,
    pub trace: SessionTrace,
}

pub(crate) struct ReplUi {
    pub(crate) timeline: Timeline,
    pub(crate) theme: Theme,
    pub(crate) input: String,
    pub(crate) history: Vec<String>,
    pub(crate) history_index: Option<usize>,
    pub(crate) scroll_from_bottom: u16,
    pub(crate) exit: bool,
}

impl ReplUi {
    pub(crate) fn new(theme: Theme) -> Self {
        Self {
            timeline: Timeline::new(),
            theme,
            input: String::new(),
            history: Vec::new(),
            history_index: None,
            scroll_from_bottom: 0,
            exit: false,
        }
    }

    pub(crate) fn prompt(&self, mode: Mode) -> &'static str {
        if commands::is_command_line(&self.input) {
            "cmd> "
        } else {
            prompt_for(mode)
        }
    }

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
    }

    fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.input = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.input.clear();
        }
    }
}

pub fn prompt_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Loan => "loan> ",
        Mode::Assistant => "ai> ",
    }
}

fn mode_keyword(mode: Mode) -> &'static str {
    match mode {
        Mode::Loan => "loan",
        Mode::Assistant => "ai",
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Loan => "Loan",
        Mode::Assistant => "Assistant",
    }
}

fn toggle_mode(mode: Mode) -> Mode {
    match mode {
        Mode::Loan => Mode::Assistant,
        Mode::Assistant => Mode::Loan,
    }
}

pub async fn run_repl(state: &mut AppState) -> Result<()> {
    let theme_enabled = std::env::var_os("NO_COLOR").is_none();
    let theme = Theme::from_config(theme_enabled, &state.theme_config);
    let mut ui = ReplUi::new(theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(state, &mut ui, &mut terminal).await;

    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();
    result
}

async fn event_loop(
    state: &mut AppState,
    ui: &mut ReplUi,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, state, ui))?;

        match read()? {
            Event::Key(key) => handle_key(state, ui, key).await?,
            Event::Mouse(mouse) => handle_mouse(ui, mouse),
            _ => {}
        }

        if ui.exit {
            return Ok(());
        }
    }
}

pub(crate) async fn handle_key(
    state: &mut AppState,
    ui: &mut ReplUi,
    key: KeyEvent,
) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => {
            ui.exit = true;
        }
        KeyCode::Tab => {
            // Commands run in either mode; switching while typing one would
            // only change the prompt out from under the user.
            if !commands::is_command_line(&ui.input) {
                state.mode = toggle_mode(state.mode);
            }
        }
        KeyCode::Enter => submit_current_line(state, ui).await?,
        KeyCode::Backspace => {
            ui.input.pop();
        }
        KeyCode::Up => ui.history_prev(),
        KeyCode::Down => ui.history_next(),
        KeyCode::Esc => {
            ui.input.clear();
            ui.history_index = None;
        }
        KeyCode::Char(ch) if !ctrl => {
            ui.input.push(ch);
        }
        _ => {}
    }

    Ok(())
}

pub(crate) fn handle_mouse(ui: &mut ReplUi, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            ui.scroll_from_bottom = ui.scroll_from_bottom.saturating_add(1);
        }
        MouseEventKind::ScrollDown => {
            ui.scroll_from_bottom = ui.scroll_from_bottom.saturating_sub(1);
        }
        _ => {}
    }
}

async fn submit_current_line(state: &mut AppState, ui: &mut ReplUi) -> Result<()> {
    let line = ui.input.trim().to_string();
    ui.input.clear();
    ui.history_index = None;
    ui.scroll_from_bottom = 0;

    if line.is_empty() {
        return Ok(());
    }

    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        ui.exit = true;
        return Ok(());
    }

    ui.history.push(line.clone());

    if commands::is_command_line(&line) {
        ui.timeline.push_user_input_command(&line);
        state.trace.log_input_command(&line);
        run_command(state, ui, &line).await;
        return Ok(());
    }

    match state.mode {
        Mode::Loan => {
            ui.timeline.push_user_input_loan(&line);
            state.trace.log_input_loan(&line);
            run_loan_line(state, ui, &line).await;
        }
        Mode::Assistant => {
            ui.timeline.push_user_input_assistant(&line);
            state.trace.log_input_assistant(&line);
            run_assistant_query(state, ui, &line).await;
        }
    }

    Ok(())
}

async fn run_command(state: &mut AppState, ui: &mut ReplUi, line: &str) {
    match commands::parse_command(line) {
        Ok(Command::Help) => emit(state, ui, OutputKind::SystemInfo, HELP_TEXT),
        Ok(Command::Mode(None)) => {
            let text = format!("mode: {}", mode_keyword(state.mode));
            emit(state, ui, OutputKind::SystemInfo, &text);
        }
        Ok(Command::Mode(Some(target))) => {
            state.mode = match target {
                CommandMode::Loan => Mode::Loan,
                CommandMode::Assistant => Mode::Assistant,
            };
            let text = format!("mode: {}", mode_keyword(state.mode));
            emit(state, ui, OutputKind::SystemInfo, &text);
        }
        Ok(Command::Clear) => ui.timeline.clear(),
        Ok(Command::History(count)) => show_history(state, ui, count),
        Ok(Command::Trace) => {
            let text = format!("trace file: {}", state.trace.file_path().display());
            emit(state, ui, OutputKind::SystemInfo, &text);
        }
        Ok(Command::Rate) => show_quote(state, ui).await,
        Err(err) => emit(state, ui, OutputKind::SystemError, err.message()),
    }
}

async fn run_loan_line(state: &mut AppState, ui: &mut ReplUi, line: &str) {
    match parse_loan_line(line) {
        Ok(LoanLine::SetIncome(value)) => {
            state.inputs.monthly_income = value;
            show_quote(state, ui).await;
        }
        Ok(LoanLine::SetAmount(value)) => {
            state.inputs.loan_amount = value;
            show_quote(state, ui).await;
        }
        Ok(LoanLine::SetScore(value)) => {
            state.inputs.credit_score = value;
            show_quote(state, ui).await;
        }
        Ok(LoanLine::SetTerm(term)) => {
            state.inputs.term = term;
            show_quote(state, ui).await;
        }
        Ok(LoanLine::Show) => {
            show_inputs(state, ui);
            show_quote(state, ui).await;
        }
        Ok(LoanLine::Check) => check_eligibility(state, ui),
        Err(err) => emit(state, ui, OutputKind::SystemError, err.message()),
    }
}

async fn run_assistant_query(state: &mut AppState, ui: &mut ReplUi, query: &str) {
    let Some(provider) = state.llm.clone() else {
        emit(state, ui, OutputKind::SystemError, ASSISTANT_UNAVAILABLE_MESSAGE);
        return;
    };

    let result = provider
        .generate(AssistantInput {
            user_query: query.to_string(),
        })
        .await;

    match result {
        Ok(output) => {
            state.transcript.push_exchange(query, &output.text);
            emit(state, ui, OutputKind::AssistantText, &output.text);
        }
        Err(err) => {
            let text = format!("Assistant request failed: {err}");
            emit(state, ui, OutputKind::SystemError, &text);
        }
    }
}

/// Fetch the current rate and display the quote for the active inputs. The
/// feed degrades to the default rate internally, so this cannot fail.
async fn show_quote(state: &mut AppState, ui: &mut ReplUi) {
    let quote = state.rates.current_rate().await;
    let payment = monthly_payment(
        state.inputs.loan_amount,
        quote.annual_rate_percent,
        state.inputs.term,
    );
    for line in quote_lines(quote, payment) {
        emit(state, ui, OutputKind::QuoteValue, &line);
    }
}

pub(crate) fn quote_lines(quote: RateQuote, payment: f64) -> [String; 2] {
    [
        format!("Interest rate: {:.1}%", quote.annual_rate_percent),
        format!("Estimated monthly payment: ${payment:.2}"),
    ]
}

fn show_inputs(state: &AppState, ui: &mut ReplUi) {
    let inputs = &state.inputs;
    let text = format!(
        "Monthly income: ${:.2}\nLoan amount: ${:.2}\nCredit score: {}\nLoan term: {}",
        inputs.monthly_income, inputs.loan_amount, inputs.credit_score, inputs.term
    );
    emit(state, ui, OutputKind::SystemInfo, &text);
}

fn check_eligibility(state: &AppState, ui: &mut ReplUi) {
    let inputs = &state.inputs;
    if is_eligible(inputs.monthly_income, inputs.credit_score, inputs.loan_amount) {
        emit(state, ui, OutputKind::VerdictEligible, ELIGIBLE_MESSAGE);
    } else {
        emit(state, ui, OutputKind::VerdictRejected, REJECTED_MESSAGE);
    }
}

fn show_history(state: &AppState, ui: &mut ReplUi, count: Option<usize>) {
    if state.transcript.is_empty() {
        emit(state, ui, OutputKind::SystemInfo, "No chat history yet.");
        return;
    }

    let entries = match count {
        Some(n) => state.transcript.last_exchanges(n),
        None => state.transcript.entries(),
    };
    for entry in entries {
        let (kind, label) = match entry.sender {
            Sender::User => (OutputKind::SystemInfo, "You"),
            Sender::Assistant => (OutputKind::AssistantText, "Advisor"),
        };
        let text = format!("{label}: {}", entry.text);
        emit(state, ui, kind, &text);
    }
}

fn emit(state: &AppState, ui: &mut ReplUi, kind: OutputKind, text: &str) {
    ui.timeline.push_output(kind, text);
    state.trace.log_output(text);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub timeline: Rect,
    pub input: Rect,
    pub status: Rect,
}

pub(crate) fn compute_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        timeline: chunks[0],
        input: chunks[1],
        status: chunks[2],
    }
}

pub(crate) fn draw(frame: &mut Frame, state: &AppState, ui: &ReplUi) {
    let regions = compute_regions(frame.area());

    let lines = ui.timeline.render_lines(&ui.theme);
    let total = lines.len() as u16;
    let max_scroll = total.saturating_sub(regions.timeline.height);
    let offset = max_scroll.saturating_sub(ui.scroll_from_bottom.min(max_scroll));
    let timeline = Paragraph::new(Text::from(lines)).scroll((offset, 0));
    frame.render_widget(timeline, regions.timeline);

    let prompt = ui.prompt(state.mode);
    let prompt_token = match prompt {
        "cmd> " => ThemeToken::CommandPrompt,
        "ai> " => ThemeToken::AssistantPrompt,
        _ => ThemeToken::LoanPrompt,
    };
    let input_token = match state.mode {
        Mode::Loan => ThemeToken::UserInputLoan,
        Mode::Assistant => ThemeToken::UserInputAssistant,
    };
    let input_line = Line::from(vec![
        Span::styled(prompt.to_string(), ui.theme.style(prompt_token)),
        Span::styled(ui.input.clone(), ui.theme.style(input_token)),
    ]);
    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .style(ui.theme.style(ThemeToken::InputBlock)),
    );
    frame.render_widget(input, regions.input);

    let status_text = format!(
        "LoanAdvisor | Session: {} | Mode: {} | TAB switches mode",
        state.session_id,
        mode_label(state.mode)
    );
    let status = Paragraph::new(Line::from(Span::styled(
        status_text,
        ui.theme.style(ThemeToken::Status),
    )));
    frame.render_widget(status, regions.status);
}
