//! Subprocess-backed player channel.
//!
//! Each player program runs as a child process with piped stdio. One
//! background task per output stream drains lines as they arrive:
//! stdout lines go into an unbounded queue so early or unsolicited
//! output is never lost while the referee is busy elsewhere, stderr
//! lines go straight to the log. The reading side never blocks past
//! the caller-supplied budget.

use super::{Channel, ReadOutcome};
use anyhow::{Context, Result, bail};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// A player reached over a child process's stdin/stdout.
pub struct ProcessChannel {
    name: String,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    lines: mpsc::UnboundedReceiver<String>,
    stop_grace: Duration,
}

impl ProcessChannel {
    /// Launches the player program and starts its output readers.
    ///
    /// `command` is split on whitespace; the first token is the
    /// executable, the rest are arguments. `stop_grace` bounds how
    /// long [`Channel::stop`] waits before force-killing.
    pub fn spawn(command: &str, stop_grace: Duration) -> Result<Self> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some((program, args)) = parts.split_first() else {
            bail!("empty player command");
        };

        info!(command, "starting player process");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Backstop for panics and early returns; normal teardown
            // goes through stop().
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to launch player: {command}"))?;

        let stdin = child
            .stdin
            .take()
            .context("failed to capture player stdin")?;
        let stdout = child
            .stdout
            .take()
            .context("failed to capture player stdout")?;
        let stderr = child
            .stderr
            .take()
            .context("failed to capture player stderr")?;

        let (tx, rx) = mpsc::unbounded_channel();
        let name = command.to_string();

        // Stdout reader: queue every line until EOF. Dropping `tx` at
        // EOF is what lets read_line report Closed once drained.
        let reader_name = name.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(player = %reader_name, line = %line, "stdout line queued");
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!(player = %reader_name, "stdout reader finished");
        });

        // Stderr reader: drain to the log so the child never blocks on
        // a full pipe.
        let stderr_name = name.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(player = %stderr_name, line = %line, "player stderr");
            }
        });

        Ok(Self {
            name,
            child: Some(child),
            stdin: Some(stdin),
            lines: rx,
            stop_grace,
        })
    }
}

#[async_trait::async_trait]
impl Channel for ProcessChannel {
    async fn write_line(&mut self, line: &str) -> Result<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            bail!("player channel already stopped: {}", self.name);
        };
        debug!(player = %self.name, line = %line, "writing line");
        stdin.write_all(line.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
        stdin.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self, budget: Duration) -> ReadOutcome {
        match timeout(budget, self.lines.recv()).await {
            Ok(Some(line)) => {
                debug!(player = %self.name, line = %line, "read line");
                ReadOutcome::Line(line.trim().to_string())
            }
            Ok(None) => {
                debug!(player = %self.name, "channel closed");
                ReadOutcome::Closed
            }
            Err(_) => {
                warn!(player = %self.name, budget_ms = budget.as_millis() as u64, "read timed out");
                ReadOutcome::TimedOut
            }
        }
    }

    async fn stop(&mut self) {
        // Closing stdin asks the player to exit on its own.
        drop(self.stdin.take());

        let Some(mut child) = self.child.take() else {
            return;
        };

        match timeout(self.stop_grace, child.wait()).await {
            Ok(Ok(status)) => {
                info!(player = %self.name, %status, "player exited");
            }
            Ok(Err(e)) => {
                // Process already reaped or gone; nothing left to do.
                debug!(player = %self.name, error = %e, "wait failed during stop");
            }
            Err(_) => {
                warn!(player = %self.name, "player did not exit in time, killing");
                if let Err(e) = child.kill().await {
                    debug!(player = %self.name, error = %e, "kill failed");
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
