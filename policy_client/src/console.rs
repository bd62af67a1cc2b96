//! Interactive foreground loop.
//!
//! Input lines arrive from a dedicated stdin thread and worker results from the
//! `ActionWorker`; both are multiplexed with `crossbeam_channel::select!`, so the
//! prompt stays responsive while requests are in flight.
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, select};
use log::{debug, error, info};
use policy_common::Result;

use crate::app::App;
use crate::model::action::WorkerEvent;
use crate::transport::Transport;
use crate::view;

/// How often the loop wakes up to check the shutdown flag.
const POLL_INTERVAL_MS: u64 = 200;

/// Spawns a thread forwarding stdin lines to `tx`; the channel closes on EOF.
pub fn spawn_stdin_reader(tx: Sender<String>) -> Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read console input: {}", e);
                        break;
                    }
                }
            }
            debug!("stdin reader stopping...");
        })?;
    Ok(())
}

/// Runs the console until `quit`, end of input, or `shutdown` is set.
pub fn run<T: Transport + 'static>(
    mut app: App<T>,
    input_rx: Receiver<String>,
    event_rx: Receiver<WorkerEvent>,
    shutdown: Arc<AtomicBool>,
) -> Result<()> {
    let poll = Duration::from_millis(POLL_INTERVAL_MS);
    let mut stdout = io::stdout();

    print_lines(&mut stdout, &[view::login_banner(app.base_url())])?;
    prompt(&mut stdout, &app)?;

    while !shutdown.load(Ordering::Relaxed) {
        select! {
            recv(input_rx) -> line => match line {
                Ok(line) => {
                    let out = app.handle_line(&line);
                    print_lines(&mut stdout, &out)?;
                    if app.should_quit() {
                        break;
                    }
                    prompt(&mut stdout, &app)?;
                }
                Err(_) => {
                    info!("Console input closed");
                    drain_events(&mut app, &event_rx, &shutdown, &mut stdout)?;
                    break;
                }
            },
            recv(event_rx) -> event => if let Ok(event) = event {
                show_event(&mut app, event, &mut stdout)?;
            },
            default(poll) => {}
        }
    }
    info!("Console loop stopping...");
    Ok(())
}

/// Reports worker results still owed after input has closed.
///
/// Returns once nothing is pending and the channel is empty, the channel is
/// disconnected, or `shutdown` is set. Results may dispatch follow-up work
/// (a login triggers the holdings fetch); that is waited for too.
fn drain_events<T: Transport + 'static>(
    app: &mut App<T>,
    event_rx: &Receiver<WorkerEvent>,
    shutdown: &AtomicBool,
    out: &mut impl Write,
) -> Result<()> {
    let poll = Duration::from_millis(POLL_INTERVAL_MS);
    while !shutdown.load(Ordering::Relaxed) {
        match event_rx.recv_timeout(poll) {
            Ok(event) => show_event(app, event, out)?,
            Err(RecvTimeoutError::Timeout) => {
                if !app.has_pending() && event_rx.is_empty() {
                    break;
                }
                debug!("Waiting for outstanding requests...");
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}

fn show_event<T: Transport + 'static>(
    app: &mut App<T>,
    event: WorkerEvent,
    out: &mut impl Write,
) -> Result<()> {
    let lines = app.handle_event(event);
    writeln!(out)?;
    print_lines(out, &lines)?;
    prompt(out, app)
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn prompt<T: Transport + 'static>(out: &mut impl Write, app: &App<T>) -> Result<()> {
    write!(out, "{}> ", app.prompt())?;
    out.flush()?;
    Ok(())
}
