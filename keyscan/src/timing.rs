use std::time::{Duration, Instant};
use tracing::info;

/// The value returned by a timed invocation plus its wall-clock duration
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed wall-clock time in seconds with two-decimal precision,
    /// the format the reporter prints
    pub fn elapsed_seconds(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }
}

/// Runs `f` and measures its wall-clock duration.
///
/// Used to wrap a driver invocation so the two drivers can be compared on
/// the same inputs. The label is only for logging; callers print the result
/// however they like.
pub fn time<T>(label: &str, f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    info!("{} finished in {:.2}s", label, elapsed.as_secs_f64());
    Timed { value, elapsed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_passes_value_through() {
        let timed = time("identity", || 42);
        assert_eq!(timed.value, 42);
    }

    #[test]
    fn test_elapsed_covers_the_call() {
        let timed = time("sleep", || thread::sleep(Duration::from_millis(20)));
        assert!(timed.elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn test_elapsed_seconds_has_two_decimals() {
        let timed = Timed {
            value: (),
            elapsed: Duration::from_millis(1234),
        };
        assert_eq!(timed.elapsed_seconds(), "1.23");
    }
}
