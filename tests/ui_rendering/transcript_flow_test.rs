use anyhow::Result;
use loanadvisor::cli::test_support::ScriptedAssistant;
use loanadvisor::llm::provider::LlmError;
use loanadvisor::session::Sender;
use std::sync::Arc;

use crate::ui_rendering::common::{new_harness, press_tab, submit_line, timeline_snapshot};

#[tokio::test]
async fn successful_asks_append_alternating_transcript_pairs() -> Result<()> {
    let mut harness = new_harness("transcript-pairs", 100, 24)?;
    harness.set_assistant(Arc::new(ScriptedAssistant::replying(&[
        "A fixed rate never changes.",
        "APR includes fees.",
    ])));

    press_tab(&mut harness).await?;
    submit_line(&mut harness, "what is a fixed rate?").await?;
    submit_line(&mut harness, "and APR?").await?;

    let transcript = harness.state().transcript.entries();
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].sender, Sender::User);
    assert_eq!(transcript[0].text, "what is a fixed rate?");
    assert_eq!(transcript[1].sender, Sender::Assistant);
    assert_eq!(transcript[1].text, "A fixed rate never changes.");
    assert_eq!(transcript[2].sender, Sender::User);
    assert_eq!(transcript[2].text, "and APR?");
    assert_eq!(transcript[3].sender, Sender::Assistant);
    assert_eq!(transcript[3].text, "APR includes fees.");

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("ai> what is a fixed rate?"));
    assert!(timeline.contains("A fixed rate never changes."));

    Ok(())
}

#[tokio::test]
async fn failed_ask_is_visible_but_leaves_transcript_untouched() -> Result<()> {
    let mut harness = new_harness("transcript-failure", 100, 24)?;
    harness.set_assistant(Arc::new(ScriptedAssistant::new(vec![
        Err(LlmError::HttpStatus {
            status: 500,
            body: "provider down".to_string(),
        }),
        Ok(loanadvisor::llm::provider::AssistantOutput {
            text: "Recovered answer".to_string(),
        }),
    ])));

    press_tab(&mut harness).await?;
    submit_line(&mut harness, "first question").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("Assistant request failed"));
    assert_eq!(harness.state().transcript.len(), 0);

    submit_line(&mut harness, "second question").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("Recovered answer"));
    assert_eq!(harness.state().transcript.len(), 2);

    Ok(())
}

#[tokio::test]
async fn missing_provider_reports_configuration_guidance() -> Result<()> {
    let mut harness = new_harness("transcript-no-key", 100, 24)?;

    press_tab(&mut harness).await?;
    submit_line(&mut harness, "hello?").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("Assistant unavailable: missing GROQ_API_KEY"));
    assert!(harness.state().transcript.is_empty());

    Ok(())
}

#[tokio::test]
async fn history_command_lists_labeled_exchanges_in_order() -> Result<()> {
    let mut harness = new_harness("transcript-history", 100, 24)?;
    harness.set_assistant(Arc::new(ScriptedAssistant::replying(&[
        "answer one",
        "answer two",
    ])));

    press_tab(&mut harness).await?;
    submit_line(&mut harness, "question one").await?;
    submit_line(&mut harness, "question two").await?;
    submit_line(&mut harness, "/history 1").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("You: question two"));
    assert!(timeline.contains("Advisor: answer two"));
    // /history 1 limits the listing to the most recent exchange.
    assert!(!timeline.contains("You: question one"));

    Ok(())
}

#[tokio::test]
async fn history_command_reports_empty_transcript() -> Result<()> {
    let mut harness = new_harness("transcript-empty", 100, 24)?;

    submit_line(&mut harness, "/history").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("No chat history yet."));

    Ok(())
}
