//! Deterministic UI harness and fake collaborators for rendering tests.

use super::repl::{self, AppState, Mode, ReplUi};
use super::theme::Theme;
use crate::config::ThemeConfig;
use crate::llm::provider::{AssistantInput, AssistantOutput, LlmError, LlmProvider, LlmResult};
use crate::loan::LoanInputs;
use crate::rates::provider::{RateProvider, RateQuote};
use crate::session::Transcript;
use crate::trace::SessionTrace;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub use super::repl::Regions;

/// Annual rate served by the harness's canned feed.
pub const TEST_FEED_RATE: f64 = 4.5;

#[derive(Debug, Clone, Copy)]
pub struct StaticRateProvider {
    pub quote: RateQuote,
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn current_rate(&self) -> RateQuote {
        self.quote
    }
}

/// Replays a fixed sequence of results, one per ask. Exhausting the script
/// yields an error so tests fail loudly instead of hanging on intent.
pub struct ScriptedAssistant {
    replies: Mutex<VecDeque<LlmResult<AssistantOutput>>>,
}

impl ScriptedAssistant {
    pub fn new(replies: Vec<LlmResult<AssistantOutput>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|text| {
                    Ok(AssistantOutput {
                        text: (*text).to_string(),
                    })
                })
                .collect(),
        )
    }
}

#[async_trait]
impl LlmProvider for ScriptedAssistant {
    async fn generate(&self, _input: AssistantInput) -> LlmResult<AssistantOutput> {
        self.replies
            .lock()
            .map_err(|_| LlmError::Transport("scripted assistant poisoned".to_string()))?
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// App state with no live collaborators: a canned rate feed, no assistant,
/// and a trace file under the system temp directory.
pub fn deterministic_app_state(session_id: &str) -> Result<AppState> {
    let trace_dir = std::env::temp_dir()
        .join("loanadvisor-test-traces")
        .join(format!("{session_id}-{}", std::process::id()));
    let trace = SessionTrace::create_in_temp_dir(session_id, &trace_dir)?;

    Ok(AppState {
        mode: Mode::Loan,
        session_id: session_id.to_string(),
        inputs: LoanInputs::default(),
        transcript: Transcript::new(),
        rates: Arc::new(StaticRateProvider {
            quote: RateQuote::live(TEST_FEED_RATE),
        }),
        llm: None,
        theme_config: ThemeConfig::default(),
        trace,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiStateView {
    pub prompt: String,
    pub input: String,
    pub mode: Mode,
}

pub struct UiHarness {
    terminal: Terminal<TestBackend>,
    state: AppState,
    ui: ReplUi,
    width: u16,
    height: u16,
}

impl UiHarness {
    pub fn new(width: u16, height: u16, state: AppState) -> Result<Self> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            terminal,
            state,
            ui: ReplUi::new(Theme::new(false)),
            width,
            height,
        })
    }

    pub fn render(&mut self) -> Result<()> {
        let Self {
            terminal, state, ui, ..
        } = self;
        terminal.draw(|frame| repl::draw(frame, state, ui))?;
        Ok(())
    }

    pub async fn send_key(&mut self, key: KeyEvent) -> Result<()> {
        repl::handle_key(&mut self.state, &mut self.ui, key).await?;
        self.render()
    }

    pub fn send_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        repl::handle_mouse(&mut self.ui, mouse);
        self.render()
    }

    pub fn regions(&self) -> Result<Regions> {
        Ok(repl::compute_regions(Rect::new(0, 0, self.width, self.height)))
    }

    pub fn buffer_lines(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let width = usize::from(area.width);
        let mut lines = Vec::with_capacity(usize::from(area.height));
        for y in 0..usize::from(area.height) {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer.content[y * width + x].symbol());
            }
            lines.push(line);
        }
        lines
    }

    pub fn line(&self, row: u16) -> Option<String> {
        self.buffer_lines().get(usize::from(row)).cloned()
    }

    pub fn ui_state_view(&self) -> UiStateView {
        UiStateView {
            prompt: self.ui.prompt(self.state.mode).to_string(),
            input: self.ui.input.clone(),
            mode: self.state.mode,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_assistant(&mut self, provider: Arc<dyn LlmProvider>) {
        self.state.llm = Some(provider);
    }

    pub fn set_rate_feed(&mut self, quote: RateQuote) {
        self.state.rates = Arc::new(StaticRateProvider { quote });
    }

    pub fn exited(&self) -> bool {
        self.ui.exit
    }
}
