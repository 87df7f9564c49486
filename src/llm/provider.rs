use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantInput {
    pub user_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantOutput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    MissingApiKey,
    HttpStatus { status: u16, body: String },
    Transport(String),
    Parse(String),
    EmptyResponse,
}

impl Display for LlmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "missing GROQ_API_KEY"),
            Self::HttpStatus { status, body } => {
                write!(f, "assistant request failed with status {status}: {body}")
            }
            Self::Transport(msg) => write!(f, "assistant transport error: {msg}"),
            Self::Parse(msg) => write!(f, "assistant parse error: {msg}"),
            Self::EmptyResponse => write!(f, "assistant returned empty response text"),
        }
    }
}

impl Error for LlmError {}

pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// One-shot completion against a hosted model. Errors are surfaced, not
/// defaulted: unlike the rate feed, there is no safe canned answer.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, input: AssistantInput) -> LlmResult<AssistantOutput>;
}
