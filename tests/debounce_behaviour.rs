use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{advance, Instant};

use fschange::watch::{debounce_loop, Debouncer};
use fschange_test_utils::init_tracing;

const WINDOW: Duration = Duration::from_millis(2500);

#[tokio::test(start_paused = true)]
async fn burst_fires_once_on_the_leading_edge() {
    init_tracing();

    let fired = Arc::new(Mutex::new(0usize));
    let (tx, rx) = mpsc::unbounded_channel();

    let counter = Arc::clone(&fired);
    let loop_task = tokio::spawn(debounce_loop(rx, WINDOW, move || {
        *counter.lock().unwrap() += 1;
    }));

    // A burst of events well inside one window: only the first fires.
    for _ in 0..4 {
        tx.send(()).unwrap();
        advance(WINDOW / 8).await;
    }
    assert_eq!(*fired.lock().unwrap(), 1);

    // Once the window has fully elapsed, a fresh event fires again.
    advance(WINDOW).await;
    tx.send(()).unwrap();
    advance(Duration::from_millis(1)).await;
    assert_eq!(*fired.lock().unwrap(), 2);

    drop(tx);
    loop_task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn quiet_watch_never_fires() {
    let fired = Arc::new(Mutex::new(0usize));
    let (tx, rx) = mpsc::unbounded_channel::<()>();

    let counter = Arc::clone(&fired);
    let loop_task = tokio::spawn(debounce_loop(rx, WINDOW, move || {
        *counter.lock().unwrap() += 1;
    }));

    advance(WINDOW * 4).await;
    assert_eq!(*fired.lock().unwrap(), 0);

    drop(tx);
    loop_task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn suppressed_events_do_not_extend_the_window() {
    let mut debounce = Debouncer::new(WINDOW);
    let t0 = Instant::now();

    assert!(debounce.on_event(t0));
    // a suppressed event late in the window
    assert!(!debounce.on_event(t0 + WINDOW * 9 / 10));
    // the window is measured from the firing event, not the suppressed one
    assert!(debounce.on_event(t0 + WINDOW + Duration::from_millis(1)));
}

#[tokio::test(start_paused = true)]
async fn timer_returns_to_idle_only_after_the_window() {
    let mut debounce = Debouncer::new(WINDOW);
    let t0 = Instant::now();

    assert!(debounce.on_event(t0));
    assert_eq!(debounce.deadline(), Some(t0 + WINDOW));

    // an early timer tick must not close the window
    debounce.on_timer(t0 + WINDOW / 2);
    assert!(!debounce.on_event(t0 + WINDOW / 2));

    debounce.on_timer(t0 + WINDOW);
    assert_eq!(debounce.deadline(), None);
    assert!(debounce.on_event(t0 + WINDOW));
}
