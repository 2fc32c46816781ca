//! Line-driven runner (default binary).
//!
//! Reads one input per line from stdin and writes one JSON snapshot per
//! accepted input to stdout. A line is either a button id (`hard-drop`,
//! `rotate-left`, ...) pressed by the configured user, or `<user> <button>`.
//! `stop` ends the session on behalf of the configured user and `quit` exits.
//! The session also ends once it has seen no accepted input for the idle
//! timeout, even while stdin is quiet. Diagnostics go to stderr.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};

use chat_tetris::core::GameSnapshot;
use chat_tetris::host::{HostConfig, Session, SessionOutcome, SettingsStore};

fn main() -> Result<()> {
    let config = HostConfig::from_env();

    let mut settings = SettingsStore::load(&config.state_path);
    if let Some(channel) = settings.take_hello_channel()? {
        eprintln!("[host] hello, channel {}", channel);
    }

    let mut session = Session::from_config(&config, config.user.clone(), Instant::now());
    eprintln!(
        "[host] session started for {} (idle timeout {}s)",
        session.player(),
        config.idle_timeout.as_secs()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_snapshot(&mut out, &session.game().snapshot())?;

    let lines = spawn_stdin_reader();

    while !session.is_finished() {
        let timeout = session.deadline().saturating_duration_since(Instant::now());
        let line = match lines.recv_timeout(timeout) {
            Ok(line) => line.context("read stdin")?,
            Err(RecvTimeoutError::Timeout) => {
                if let Some(SessionOutcome::Finished { snapshot, reason }) =
                    session.expire(Instant::now())
                {
                    eprintln!("[host] session finished: {}", reason);
                    write_snapshot(&mut out, &snapshot)?;
                    break;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" => break,
            "stop" => {
                if session.close_by(&config.user, &config) {
                    eprintln!("[host] session stopped");
                    write_snapshot(&mut out, &session.game().snapshot())?;
                }
                break;
            }
            _ => {}
        }

        let (user, button) = match line.split_once(char::is_whitespace) {
            Some((user, button)) => (user, button.trim()),
            None => (config.user.as_str(), line),
        };

        match session.handle(user, button, Instant::now()) {
            SessionOutcome::Updated(snapshot) => write_snapshot(&mut out, &snapshot)?,
            SessionOutcome::Finished { snapshot, reason } => {
                eprintln!("[host] session finished: {}", reason);
                write_snapshot(&mut out, &snapshot)?;
                break;
            }
            SessionOutcome::NotOwner => eprintln!("[host] ignoring input from {}", user),
            SessionOutcome::UnknownButton => eprintln!("[host] unknown button {:?}", button),
            SessionOutcome::Closed => break,
        }
    }

    Ok(())
}

/// Forward stdin lines over a channel so the main loop can wait with a timeout.
/// The channel disconnects at EOF.
fn spawn_stdin_reader() -> Receiver<io::Result<String>> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

fn write_snapshot(out: &mut impl Write, snapshot: &GameSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot).context("encode snapshot")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
