// src/watch/watcher.rs

use std::path::PathBuf;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::errors::{FschangeError, Result};
use crate::watch::debounce::Debouncer;

/// A live, debounced filesystem subscription on a single path.
///
/// Keeps the underlying `RecommendedWatcher` alive; dropping the handle
/// unsubscribes immediately and discards any pending debounce window.
pub struct DebouncedWatch {
    _watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for DebouncedWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedWatch").finish()
    }
}

impl Drop for DebouncedWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Subscribe to change notifications on `path`, invoking `on_fire` for the
/// first event of each burst (leading-edge debounce with `window`).
///
/// The subscription is per-path and non-recursive, so the callback needs no
/// event details; backends that omit the changed path on the event are
/// tolerated.
pub fn subscribe<F>(path: PathBuf, window: Duration, on_fire: F) -> Result<DebouncedWatch>
where
    F: FnMut() + Send + 'static,
{
    // Channel from the blocking notify callback into the async world.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<()>();

    let mut watcher = RecommendedWatcher::new(
        {
            let path = path.clone();
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    debug!(path = ?path, kind = ?event.kind, "change event");
                    let _ = event_tx.send(());
                }
                Err(err) => {
                    warn!(path = ?path, error = %err, "file watch error");
                }
            }
        },
        Config::default(),
    )
    .map_err(|source| FschangeError::WatchSubscription {
        path: path.clone(),
        source,
    })?;

    watcher
        .watch(&path, RecursiveMode::NonRecursive)
        .map_err(|source| FschangeError::WatchSubscription {
            path: path.clone(),
            source,
        })?;

    debug!(path = ?path, "watch established");

    let task = tokio::spawn(debounce_loop(event_rx, window, on_fire));

    Ok(DebouncedWatch {
        _watcher: watcher,
        task,
    })
}

/// Consume raw change events, driving the debounce state machine.
///
/// Public so tests can feed synthetic events through the same loop the
/// production watcher uses. Returns when the event channel closes.
pub async fn debounce_loop<F>(
    mut events: mpsc::UnboundedReceiver<()>,
    window: Duration,
    mut on_fire: F,
) where
    F: FnMut(),
{
    let mut debounce = Debouncer::new(window);

    loop {
        tokio::select! {
            maybe_event = events.recv() => match maybe_event {
                Some(()) => {
                    if debounce.on_event(Instant::now()) {
                        on_fire();
                    } else {
                        debug!("change event suppressed by debounce");
                    }
                }
                None => break,
            },
            _ = window_closed(debounce.deadline()) => {
                debounce.on_timer(Instant::now());
            }
        }
    }
}

/// Resolves when the open debounce window closes; pends forever while idle.
async fn window_closed(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
