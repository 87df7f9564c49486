use anyhow::Result;

use crate::ui_rendering::common::{
    new_harness, scroll_down, scroll_up, submit_line, timeline_snapshot,
};

#[tokio::test]
async fn timeline_sticks_to_newest_lines_when_full() -> Result<()> {
    let mut harness = new_harness("scroll-bottom", 60, 10)?;

    for i in 0..8 {
        submit_line(&mut harness, &format!("score {}", 700 + i)).await?;
    }
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("loan> score 707"));
    assert!(!timeline.contains("loan> score 700"));

    Ok(())
}

#[tokio::test]
async fn mouse_scroll_reveals_older_lines_and_returns() -> Result<()> {
    let mut harness = new_harness("scroll-mouse", 60, 10)?;

    for i in 0..8 {
        submit_line(&mut harness, &format!("score {}", 700 + i)).await?;
    }
    harness.render()?;
    let bottom = timeline_snapshot(&harness)?;

    for _ in 0..30 {
        scroll_up(&mut harness, 5, 3)?;
    }
    let scrolled = timeline_snapshot(&harness)?;
    assert!(scrolled.contains("loan> score 700"));
    assert_ne!(scrolled, bottom);

    for _ in 0..40 {
        scroll_down(&mut harness, 5, 3)?;
    }
    assert_eq!(timeline_snapshot(&harness)?, bottom);

    Ok(())
}

#[tokio::test]
async fn new_submission_snaps_scroll_back_to_bottom() -> Result<()> {
    let mut harness = new_harness("scroll-snap", 60, 10)?;

    for i in 0..8 {
        submit_line(&mut harness, &format!("score {}", 700 + i)).await?;
    }
    for _ in 0..30 {
        scroll_up(&mut harness, 5, 3)?;
    }
    assert!(timeline_snapshot(&harness)?.contains("loan> score 700"));

    submit_line(&mut harness, "check").await?;
    harness.render()?;

    let timeline = timeline_snapshot(&harness)?;
    assert!(timeline.contains("You are eligible for the loan."));
    assert!(!timeline.contains("loan> score 700"));

    Ok(())
}
