use anyhow::Result;
use loanadvisor::cli::Mode;

use crate::ui_rendering::common::{
    new_harness, press_down, press_tab, press_up, status_snapshot, submit_line, timeline_snapshot,
    type_text,
};

#[tokio::test]
async fn initial_render_shows_welcome_and_status_with_session() -> Result<()> {
    let mut harness = new_harness("welcome", 100, 24)?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("Welcome to LoanAdvisor"));

    let status = status_snapshot(&harness)?;
    assert!(status.contains("LoanAdvisor | Session: welcome"));
    assert!(status.contains("Mode: Loan"));
    assert!(status.contains("TAB switches mode"));

    Ok(())
}

#[tokio::test]
async fn prompt_changes_for_loan_assistant_and_command_input() -> Result<()> {
    let mut harness = new_harness("prompt", 100, 24)?;

    assert_eq!(harness.ui_state_view().prompt, "loan> ");

    press_tab(&mut harness).await?;
    assert_eq!(harness.ui_state_view().prompt, "ai> ");
    assert_eq!(harness.ui_state_view().mode, Mode::Assistant);

    type_text(&mut harness, "/trace").await?;
    assert_eq!(harness.ui_state_view().prompt, "cmd> ");

    Ok(())
}

#[tokio::test]
async fn tab_preserves_typed_input_across_mode_switch() -> Result<()> {
    let mut harness = new_harness("tab-preserves", 100, 24)?;

    type_text(&mut harness, "what is this").await?;
    press_tab(&mut harness).await?;

    let view = harness.ui_state_view();
    assert_eq!(view.prompt, "ai> ");
    assert_eq!(view.input, "what is this");

    Ok(())
}

#[tokio::test]
async fn tab_does_not_switch_mode_while_typing_a_command() -> Result<()> {
    let mut harness = new_harness("tab-command", 100, 24)?;

    type_text(&mut harness, "/mode").await?;
    press_tab(&mut harness).await?;

    let view = harness.ui_state_view();
    assert_eq!(view.mode, Mode::Loan);
    assert_eq!(view.input, "/mode");

    Ok(())
}

#[tokio::test]
async fn up_down_history_navigation_works_across_modes() -> Result<()> {
    let mut harness = new_harness("history-nav", 100, 24)?;

    submit_line(&mut harness, "income 3500").await?;
    submit_line(&mut harness, "/help").await?;

    press_up(&mut harness).await?;
    assert_eq!(harness.ui_state_view().input, "/help");
    press_up(&mut harness).await?;
    assert_eq!(harness.ui_state_view().input, "income 3500");
    press_down(&mut harness).await?;
    assert_eq!(harness.ui_state_view().input, "/help");

    press_tab(&mut harness).await?;
    assert_eq!(harness.ui_state_view().prompt, "ai> ");

    submit_line(&mut harness, "what is amortization?").await?;

    press_up(&mut harness).await?;
    assert_eq!(harness.ui_state_view().input, "what is amortization?");
    press_down(&mut harness).await?;
    assert_eq!(harness.ui_state_view().input, "");

    Ok(())
}

#[tokio::test]
async fn parse_failure_does_not_prevent_next_successful_submission() -> Result<()> {
    let mut harness = new_harness("recovery", 100, 24)?;

    submit_line(&mut harness, "term 7").await?;
    submit_line(&mut harness, "check").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("usage: term <5|10|15|20|25|30>"));
    assert!(timeline.contains("You are eligible for the loan."));

    Ok(())
}

#[tokio::test]
async fn mode_command_switches_and_reports() -> Result<()> {
    let mut harness = new_harness("mode-command", 100, 24)?;

    submit_line(&mut harness, "/mode ai").await?;
    assert_eq!(harness.ui_state_view().mode, Mode::Assistant);

    submit_line(&mut harness, "/mode").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("mode: ai"));

    Ok(())
}

#[tokio::test]
async fn quit_line_exits_the_session() -> Result<()> {
    let mut harness = new_harness("quit", 100, 24)?;

    submit_line(&mut harness, "quit").await?;
    assert!(harness.exited());

    Ok(())
}
