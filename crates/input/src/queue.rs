//! Command queue between the input listener thread and the tick loop.
//!
//! The listener blocks on terminal events and pushes commands; the tick loop
//! drains them with non-blocking reads at tick boundaries.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event;
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::map::map_event;
use crate::types::{Command, CommandSource};

/// How long the listener waits for an event before checking whether the game
/// side has gone away.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Producer half, cloneable across threads.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<Command>,
}

impl CommandSender {
    /// Queue a command. Returns false once the queue has been dropped.
    pub fn send(&self, command: Command) -> bool {
        self.tx.send(command).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half, owned by the tick loop.
#[derive(Debug)]
pub struct CommandQueue {
    rx: mpsc::UnboundedReceiver<Command>,
}

impl CommandQueue {
    /// Create a connected sender/queue pair.
    pub fn channel() -> (CommandSender, CommandQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CommandSender { tx }, CommandQueue { rx })
    }

    pub fn try_recv(&mut self) -> Option<Command> {
        self.rx.try_recv().ok()
    }
}

impl CommandSource for CommandQueue {
    fn has_pending(&self) -> bool {
        !self.rx.is_empty()
    }

    fn take_next(&mut self) -> Option<Command> {
        self.try_recv()
    }
}

/// Start a thread that reads terminal events and forwards mapped commands.
///
/// The thread exits when the queue is dropped or the terminal read fails.
pub fn spawn_listener(sender: CommandSender) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input-listener".to_string())
        .spawn(move || loop {
            if sender.is_closed() {
                debug!("input listener stopping: queue closed");
                break;
            }
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    warn!("input poll failed: {err}");
                    break;
                }
            }
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(err) => {
                    warn!("input read failed: {err}");
                    break;
                }
            };
            if let Some(command) = map_event(&ev) {
                if !sender.send(command) {
                    break;
                }
            }
        })
}
