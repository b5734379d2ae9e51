//! The wall-clock driver thread.
//!
//! The [`Driver`] owns a [`Session`] exclusively (moved into the
//! thread via `thread::spawn`) and runs the tick loop on the
//! configured cadence. Loads and start requests arrive over a bounded
//! crossbeam channel and are drained on the same thread between ticks,
//! so installing a new grid or trace set always cancels the run in
//! progress before the next tick can fire; a stale tick can never
//! render against a mismatched grid/trace pair.
//!
//! Render batches go out through a caller-supplied channel, one batch
//! per tick; each batch describes a single coherent step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::config::PlaybackConfig;
use crate::session::Session;
use waymark_core::{FormatError, RenderCommand};

use std::error::Error;
use std::fmt;

/// Errors from submitting a request to the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverError {
    /// The request's file failed to parse; the previous session state
    /// stays active.
    Format(FormatError),
    /// The driver thread has shut down.
    Disconnected,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "{err}"),
            Self::Disconnected => write!(f, "driver thread has shut down"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            Self::Disconnected => None,
        }
    }
}

impl From<FormatError> for DriverError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

/// A control request for the driver thread.
enum Request {
    LoadGrid(String),
    LoadTraces(String),
    Start,
}

/// A request paired with its reply channel.
struct ControlMsg {
    request: Request,
    reply: Sender<Result<(), FormatError>>,
}

/// Handle to the driver thread.
///
/// Dropping the handle without calling [`Driver::shutdown`] detaches
/// the thread; it exits on its own once the control channel
/// disconnects.
pub struct Driver {
    control_tx: Sender<ControlMsg>,
    shutdown_flag: Arc<AtomicBool>,
    handle: Option<JoinHandle<Session>>,
}

impl Driver {
    /// Spawn the driver thread with a fresh session.
    ///
    /// `frame_tx` is the render sink: every tick of a running
    /// playback sends one batch of commands through it.
    pub fn spawn(config: PlaybackConfig, frame_tx: Sender<Vec<RenderCommand>>) -> Self {
        let (control_tx, control_rx) = bounded::<ControlMsg>(16);
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let thread_flag = Arc::clone(&shutdown_flag);
        let session = Session::new(config);

        let handle = std::thread::spawn(move || run(session, control_rx, frame_tx, thread_flag));

        Self {
            control_tx,
            shutdown_flag,
            handle: Some(handle),
        }
    }

    /// Parse and install a new grid, cancelling any run in progress.
    pub fn load_grid(&self, text: impl Into<String>) -> Result<(), DriverError> {
        self.submit(Request::LoadGrid(text.into()))
    }

    /// Parse and install a new trace set, cancelling any run in
    /// progress.
    pub fn load_traces(&self, text: impl Into<String>) -> Result<(), DriverError> {
        self.submit(Request::LoadTraces(text.into()))
    }

    /// Arm playback; the first frame arrives after one tick interval.
    pub fn start(&self) -> Result<(), DriverError> {
        self.submit(Request::Start)
    }

    /// Stop the tick loop and recover the session.
    pub fn shutdown(mut self) -> Session {
        self.shutdown_flag.store(true, Ordering::Release);
        // Dropping the sender wakes the loop even mid recv_timeout.
        drop(std::mem::replace(&mut self.control_tx, bounded(1).0));
        let handle = self.handle.take().expect("driver joined twice");
        handle.join().expect("driver thread panicked")
    }

    fn submit(&self, request: Request) -> Result<(), DriverError> {
        let (reply_tx, reply_rx) = bounded(1);
        let msg = ControlMsg {
            request,
            reply: reply_tx,
        };
        self.control_tx
            .send(msg)
            .map_err(|_| DriverError::Disconnected)?;
        match reply_rx.recv() {
            Ok(result) => result.map_err(DriverError::from),
            Err(_) => Err(DriverError::Disconnected),
        }
    }
}

/// Main loop of the driver thread.
///
/// Waits on the control channel with a deadline at the next tick
/// boundary: requests are handled the moment they arrive, ticks fire
/// on cadence, and whichever happens first runs on this one thread.
fn run(
    mut session: Session,
    control_rx: Receiver<ControlMsg>,
    frame_tx: Sender<Vec<RenderCommand>>,
    shutdown_flag: Arc<AtomicBool>,
) -> Session {
    let interval = session.config().tick_interval;
    let mut next_tick = Instant::now() + interval;

    loop {
        if shutdown_flag.load(Ordering::Acquire) {
            break;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        match control_rx.recv_timeout(timeout) {
            Ok(msg) => {
                let result = handle_request(&mut session, msg.request);
                // Best-effort reply; the caller may have given up.
                let _ = msg.reply.send(result);
            }
            Err(RecvTimeoutError::Timeout) => {
                if session.is_running() {
                    let outcome = session.tick();
                    if frame_tx.send(outcome.commands).is_err() {
                        // Render sink gone; nobody is watching.
                        break;
                    }
                }
                next_tick += interval;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    session
}

fn handle_request(session: &mut Session, request: Request) -> Result<(), FormatError> {
    match request {
        Request::LoadGrid(text) => session.load_grid(&text),
        Request::LoadTraces(text) => session.load_traces(&text),
        Request::Start => {
            session.start();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackStatus;
    use crossbeam_channel::unbounded;
    use std::time::Duration;
    use waymark_core::FormatError;

    fn fast_config() -> PlaybackConfig {
        PlaybackConfig {
            tick_interval: Duration::from_millis(2),
            color_seed: 7,
        }
    }

    const MAP: &str = "type octile\nheight 2\nwidth 2\nmap\n.@\nT.";
    const TRACE: &str = "0: (0,0)->(0,1)->(1,1)";

    #[test]
    fn driver_emits_one_batch_per_tick_until_finished() {
        let (frame_tx, frame_rx) = unbounded();
        let driver = Driver::spawn(fast_config(), frame_tx);
        driver.load_grid(MAP).unwrap();
        driver.load_traces(TRACE).unwrap();
        driver.start().unwrap();

        // Three waypoints -> exactly three rendered batches.
        for _ in 0..3 {
            let batch = frame_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("tick batch");
            assert!(!batch.is_empty());
        }
        // Finished: the loop goes quiet.
        assert!(frame_rx.recv_timeout(Duration::from_millis(50)).is_err());

        let session = driver.shutdown();
        assert_eq!(session.playback().status(), PlaybackStatus::Finished);
    }

    #[test]
    fn load_errors_are_reported_and_leave_state_active() {
        let (frame_tx, _frame_rx) = unbounded();
        let driver = Driver::spawn(fast_config(), frame_tx);
        driver.load_traces(TRACE).unwrap();

        let err = driver.load_traces("0: (1,oops)->(2,2)").unwrap_err();
        assert!(matches!(
            err,
            DriverError::Format(FormatError::MalformedWaypoint { .. })
        ));

        let session = driver.shutdown();
        assert_eq!(session.agent_count(), 1);
    }

    #[test]
    fn reload_mid_run_cancels_ticking() {
        let (frame_tx, frame_rx) = unbounded();
        let driver = Driver::spawn(fast_config(), frame_tx);
        driver.load_grid(MAP).unwrap();
        // A long trace so the run is still going when we reload.
        let long: String = {
            let waypoints: Vec<String> = (0..200).map(|i| format!("({i},0)")).collect();
            format!("0: {}", waypoints.join("->"))
        };
        driver.load_traces(&long).unwrap();
        driver.start().unwrap();

        // Let a few ticks happen, then reload mid-run.
        let _ = frame_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        driver.load_traces(TRACE).unwrap();

        // The reload reset playback to Idle on the driver thread, so
        // after any in-flight batch drains the channel stays silent.
        while frame_rx.recv_timeout(Duration::from_millis(50)).is_ok() {}
        assert!(frame_rx.recv_timeout(Duration::from_millis(50)).is_err());

        let session = driver.shutdown();
        assert_eq!(session.playback().status(), PlaybackStatus::Idle);
        assert_eq!(session.agent_count(), 1);
        assert_eq!(session.traces().max_path_len(), 6);
    }

    #[test]
    fn submitting_after_shutdown_reports_disconnected() {
        let (frame_tx, _frame_rx) = unbounded();
        let driver = Driver::spawn(fast_config(), frame_tx);
        let control = driver.control_tx.clone();
        let _session = driver.shutdown();

        let (reply_tx, _reply_rx) = bounded(1);
        let send = control.send(ControlMsg {
            request: Request::Start,
            reply: reply_tx,
        });
        assert!(send.is_err());
    }
}
