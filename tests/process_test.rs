//! Process channel tests against real child processes.

use lasker_referee::{Channel, ProcessChannel, ReadOutcome};
use std::time::Duration;

const GRACE: Duration = Duration::from_millis(200);

#[tokio::test]
async fn test_early_output_is_queued_not_lost() {
    // The child writes before anyone reads. The line must still be
    // waiting in the queue, followed by Closed once it exits.
    let mut channel = ProcessChannel::spawn("echo hello", GRACE).unwrap();

    // Give the child time to finish before the first read.
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(
        channel.read_line(Duration::from_secs(1)).await,
        ReadOutcome::Line("hello".to_string())
    );
    assert_eq!(
        channel.read_line(Duration::from_secs(1)).await,
        ReadOutcome::Closed
    );

    channel.stop().await;
}

#[tokio::test]
async fn test_multiple_lines_arrive_in_order() {
    let mut channel = ProcessChannel::spawn("seq 1 3", GRACE).unwrap();

    for expected in ["1", "2", "3"] {
        assert_eq!(
            channel.read_line(Duration::from_secs(1)).await,
            ReadOutcome::Line(expected.to_string())
        );
    }
    assert_eq!(
        channel.read_line(Duration::from_secs(1)).await,
        ReadOutcome::Closed
    );

    channel.stop().await;
}

#[tokio::test]
async fn test_silent_child_times_out() {
    let mut channel = ProcessChannel::spawn("sleep 5", GRACE).unwrap();

    assert_eq!(
        channel.read_line(Duration::from_millis(50)).await,
        ReadOutcome::TimedOut
    );

    // sleep ignores stdin closing, so stop falls through to kill.
    channel.stop().await;
    // A second stop is a no-op.
    channel.stop().await;
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let mut channel = ProcessChannel::spawn("cat", GRACE).unwrap();

    channel.write_line("ping").await.unwrap();
    assert_eq!(
        channel.read_line(Duration::from_secs(1)).await,
        ReadOutcome::Line("ping".to_string())
    );

    // cat exits when its stdin closes, within the grace window.
    channel.stop().await;
}

#[tokio::test]
async fn test_write_after_stop_fails() {
    let mut channel = ProcessChannel::spawn("cat", GRACE).unwrap();
    channel.stop().await;

    assert!(channel.write_line("ping").await.is_err());
}

#[test]
fn test_empty_command_rejected() {
    assert!(ProcessChannel::spawn("   ", GRACE).is_err());
}
