pub mod groq;
pub mod provider;

pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-specdec";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com";

/// Instructional template wrapped around every user question. `{query}` is
/// the only substitution point.
pub const ADVISOR_PROMPT_TEMPLATE: &str =
    "You are a helpful loan advisor. Answer clearly: {query}";

/// Completion parameters for the hosted model, kept together as one named
/// value so tests can substitute the whole configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub prompt_template: String,
}

impl CompletionSettings {
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.7,
            max_tokens: 4000,
            prompt_template: ADVISOR_PROMPT_TEMPLATE.to_string(),
        }
    }

    pub fn render_prompt(&self, query: &str) -> String {
        self.prompt_template.replace("{query}", query)
    }
}
