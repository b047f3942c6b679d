// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run one external command under a wall-clock timeout.

use std::process::Stdio;
use std::time::{Duration, Instant};

use gt_core::ExecutionResult;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn, Instrument};

/// Spawns suite commands with fully captured stdout/stderr.
///
/// `run` never fails: spawn errors, wait errors, and timeouts all come back
/// as a failed [`ExecutionResult`] with exit code -1.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Execute `command` (argv, program first) and wait at most `timeout`.
    ///
    /// The timeout covers both the child's exit and the end of its output:
    /// a background process that inherits the pipes cannot hold `run` open
    /// past it. On timeout the child is killed and the result carries
    /// `duration_seconds == timeout`. Dropping the returned future also kills
    /// the child.
    pub async fn run(
        &self,
        command: &[String],
        description: &str,
        timeout: Duration,
    ) -> ExecutionResult {
        let Some((program, args)) = command.split_first() else {
            return ExecutionResult::spawn_failed(description, "empty command");
        };

        let cmd_span = tracing::info_span!(
            "suite.cmd",
            description = %description,
            cmd = %command.join(" "),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        self.execute(program, args, description, timeout).instrument(cmd_span).await
    }

    async fn execute(
        &self,
        program: &str,
        args: &[String],
        description: &str,
        timeout: Duration,
    ) -> ExecutionResult {
        let cmd_span = tracing::Span::current();

        let mut process = tokio::process::Command::new(program);
        process.args(args);
        process.stdin(Stdio::null());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());
        process.kill_on_drop(true);

        let start = Instant::now();
        let mut child = match process.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(error = %e, "failed to spawn `{}`", program);
                return ExecutionResult::spawn_failed(
                    description,
                    format!("failed to spawn `{program}`: {e}"),
                );
            }
        };

        // Drain both pipes while waiting so a chatty child cannot block on a full pipe.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let finished = tokio::time::timeout(timeout, async {
            tokio::join!(child.wait(), read_stream(stdout_pipe), read_stream(stderr_pipe))
        })
        .await;

        let (status, stdout, stderr) = match finished {
            Ok((Ok(status), stdout, stderr)) => (status, stdout, stderr),
            Ok((Err(e), _, _)) => {
                warn!(error = %e, "failed waiting on `{}`", program);
                return ExecutionResult::spawn_failed(
                    description,
                    format!("failed to wait on `{program}`: {e}"),
                );
            }
            Err(_) => {
                // The direct child may already be reaped when only its output is still open.
                if let Err(e) = child.kill().await {
                    debug!(error = %e, "kill after timeout: `{}`", program);
                }
                cmd_span.record("exit_code", gt_core::INTERNAL_FAILURE_EXIT_CODE);
                cmd_span.record("duration_ms", timeout.as_millis() as u64);
                warn!(timeout_secs = timeout.as_secs_f64(), "suite command timed out");
                return ExecutionResult::timed_out(description, timeout);
            }
        };

        let duration = start.elapsed();
        // Killed by a signal: no exit code of its own.
        let exit_code = status.code().unwrap_or(gt_core::INTERNAL_FAILURE_EXIT_CODE);

        cmd_span.record("exit_code", exit_code);
        cmd_span.record("duration_ms", duration.as_millis() as u64);
        debug!(stdout_bytes = stdout.len(), stderr_bytes = stderr.len(), "suite command exited");

        ExecutionResult::completed(description, exit_code, stdout, stderr, duration)
    }
}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        if let Err(e) = stream.read_to_end(&mut buf).await {
            debug!(error = %e, "stream read ended early");
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
