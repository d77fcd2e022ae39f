//! Count-up animation for dashboard stats.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::{now_ms, sleep};

const FRAME: Duration = Duration::from_millis(16);

/// How a stat value is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatFormat {
    Integer,
    OneDecimal,
}

/// Value shown `elapsed_ms` into a linear count from 0 to `target`.
pub fn counter_frame(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    progress * target
}

pub fn format_stat(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Integer => format!("{}", value.floor() as i64),
        StatFormat::OneDecimal => format!("{value:.1}"),
    }
}

/// A number that counts up from zero to `target` over `duration_ms`.
///
/// Give it a `key` derived from `target` so a new value restarts the count.
#[component]
pub fn StatCounter(
    id: String,
    target: f64,
    format: StatFormat,
    #[props(default = 1000)] duration_ms: u64,
) -> Element {
    let mut shown = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let start = now_ms();
        let duration = duration_ms as f64;
        loop {
            let elapsed = now_ms() - start;
            shown.set(counter_frame(target, elapsed, duration));
            if elapsed >= duration {
                break;
            }
            sleep(FRAME).await;
        }
    });

    let text = format_stat(shown(), format);

    rsx! {
        span {
            id: "{id}",
            class: "stat-value",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_linear_and_clamped() {
        assert_eq!(counter_frame(100.0, 0.0, 1000.0), 0.0);
        assert_eq!(counter_frame(100.0, 250.0, 1000.0), 25.0);
        assert_eq!(counter_frame(100.0, 1000.0, 1000.0), 100.0);
        assert_eq!(counter_frame(100.0, 5000.0, 1000.0), 100.0);
        assert_eq!(counter_frame(4.5, 10.0, 0.0), 4.5);
    }

    #[test]
    fn test_final_frame_formats_exactly() {
        assert_eq!(format_stat(counter_frame(4.5, 1000.0, 1000.0), StatFormat::OneDecimal), "4.5");
        assert_eq!(format_stat(counter_frame(0.0, 1000.0, 1000.0), StatFormat::OneDecimal), "0.0");
        assert_eq!(format_stat(counter_frame(15.0, 1000.0, 1000.0), StatFormat::Integer), "15");
        assert_eq!(format_stat(counter_frame(15.0, 500.0, 1000.0), StatFormat::Integer), "7");
    }
}
