//! Timer primitives behind the banner rotation, the entrance reveal and the splash redirect.
//!
//! The loops here are plain futures. Components drive them from `use_future`, which ties
//! each timer to the owning scope: when the page unmounts the task is dropped mid-sleep
//! and the callback never runs again.

use super::rotation::Rotation;

/// One-shot delay before a page swaps its intro treatment for the revealed content.
pub const REVEAL_DELAY_MS: u64 = 800;

/// Interval between banner messages.
pub const BANNER_INTERVAL_MS: u64 = 3000;

/// How long the splash route stays up before moving on to `/home`.
pub const SPLASH_DELAY_MS: u64 = 3000;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Report the next banner index every `interval_ms`, forever.
///
/// Index 0 is shown at mount and is not reported. An empty list returns immediately.
pub async fn run_rotation(interval_ms: u64, len: usize, mut on_tick: impl FnMut(usize)) {
    let Some(mut rotation) = Rotation::new(len) else {
        return;
    };
    loop {
        sleep_ms(interval_ms).await;
        on_tick(rotation.advance());
    }
}

/// Wait once, then fire `on_reveal` exactly once.
pub async fn run_reveal(delay_ms: u64, on_reveal: impl FnOnce()) {
    sleep_ms(delay_ms).await;
    on_reveal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::{sleep_until, Instant};

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[tokio::test(start_paused = true)]
    async fn banner_cycles_and_wraps() {
        let messages = ["A", "B", "C"];
        let shown = Arc::new(Mutex::new(vec![0usize]));
        let log = shown.clone();
        let start = Instant::now();

        let task = tokio::spawn(run_rotation(
            BANNER_INTERVAL_MS,
            messages.len(),
            move |idx| log.lock().unwrap().push(idx),
        ));

        let current = |shown: &Arc<Mutex<Vec<usize>>>| messages[*shown.lock().unwrap().last().unwrap()];

        sleep_until(at(start, 1)).await;
        assert_eq!(current(&shown), "A");

        sleep_until(at(start, 3001)).await;
        assert_eq!(current(&shown), "B");

        sleep_until(at(start, 9001)).await;
        assert_eq!(current(&shown), "A");
        assert_eq!(*shown.lock().unwrap(), vec![0, 1, 2, 0]);

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn empty_rotation_finishes_without_ticking() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        run_rotation(10, 0, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_flips_once_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let start = Instant::now();

        let task = tokio::spawn(run_reveal(REVEAL_DELAY_MS, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        sleep_until(at(start, REVEAL_DELAY_MS - 1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep_until(at(start, REVEAL_DELAY_MS + 1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        sleep_until(at(start, 60_000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_before_timers_fire_leaves_state_untouched() {
        let ticks = Arc::new(Mutex::new(Vec::new()));
        let revealed = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();

        let log = ticks.clone();
        let banner = tokio::spawn(run_rotation(BANNER_INTERVAL_MS, 3, move |idx| {
            log.lock().unwrap().push(idx)
        }));
        let flag = revealed.clone();
        let reveal = tokio::spawn(run_reveal(REVEAL_DELAY_MS, move || {
            flag.fetch_add(1, Ordering::SeqCst);
        }));

        sleep_until(at(start, 500)).await;
        banner.abort();
        reveal.abort();
        assert!(banner.await.unwrap_err().is_cancelled());
        assert!(reveal.await.unwrap_err().is_cancelled());

        sleep_until(at(start, 30_000)).await;
        assert!(ticks.lock().unwrap().is_empty());
        assert_eq!(revealed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_mid_rotation_stops_further_ticks() {
        let ticks = Arc::new(Mutex::new(Vec::new()));
        let log = ticks.clone();
        let start = Instant::now();

        let banner = tokio::spawn(run_rotation(BANNER_INTERVAL_MS, 3, move |idx| {
            log.lock().unwrap().push(idx)
        }));

        sleep_until(at(start, 4000)).await;
        banner.abort();
        sleep_until(at(start, 20_000)).await;

        assert_eq!(*ticks.lock().unwrap(), vec![1]);
    }
}
