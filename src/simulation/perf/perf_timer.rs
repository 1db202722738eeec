/// Milliseconds on the host clock: `Date.now()` in the browser.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the first reading in this process.
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch around one query.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_at: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_at: now_ms() }
    }

    /// Never negative, even if the browser clock steps backwards.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_at).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_non_negative_and_grows() {
        let timer = PerfTimer::start();
        let first = timer.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
        assert!(second >= 1.0);
    }
}
