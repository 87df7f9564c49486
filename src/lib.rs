pub mod cli;
pub mod config;
pub mod http;
pub mod llm;
pub mod loan;
pub mod rates;
pub mod session;
pub mod trace;

use anyhow::Result;
use cli::{AppState, CliArgs, Mode, run_repl};
use config::AppConfig;
use http::client::HttpClient;
use http::debug::HttpDebugConfig;
use llm::groq::GroqProvider;
use llm::provider::LlmProvider;
use llm::CompletionSettings;
use loan::LoanInputs;
use rates::api_ninjas::ApiNinjasProvider;
use rates::provider::RateProvider;
use session::Transcript;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use trace::SessionTrace;

pub async fn run(args: CliArgs) -> Result<()> {
    let config = AppConfig::load_with_path(args.config.as_deref())?;
    let session_id = generate_session_id();
    let trace = SessionTrace::create(&session_id)?;
    let http = HttpClient::new(
        reqwest::Client::new(),
        HttpDebugConfig::from_verbose(args.verbose_http),
    )
    .with_trace(trace.clone());

    let rates: Arc<dyn RateProvider> = Arc::new(ApiNinjasProvider::new(
        http.clone(),
        config.rates_api_key.clone(),
        config.rates_base_url.clone(),
        config.rate_series.clone(),
    ));
    let llm: Option<Arc<dyn LlmProvider>> = GroqProvider::new(
        http,
        config.groq_api_key.clone(),
        CompletionSettings::for_model(config.groq_model.clone()),
        config.groq_base_url.clone(),
    )
    .ok()
    .map(|provider| Arc::new(provider) as Arc<dyn LlmProvider>);

    let mut app_state = AppState {
        mode: Mode::Loan,
        session_id,
        inputs: LoanInputs::default(),
        transcript: Transcript::new(),
        rates,
        llm,
        theme_config: config.theme.clone(),
        trace,
    };

    run_repl(&mut app_state).await
}

fn generate_session_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis());
    format!("{millis:x}-{:x}", std::process::id())
}
