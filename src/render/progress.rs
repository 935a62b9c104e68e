//! Textual progress bar

use crate::config::BarConfig;

/// Render `total_marks` cells for `seconds` out of `duration`.
///
/// The number of full marks is `seconds / (duration / total_marks)`
/// rounded half to even, then mirrored when the bar runs left to right.
/// Out-of-range inputs are clamped to an all-full or all-empty bar.
pub fn progress_bar(duration: i64, seconds: i64, bar: &BarConfig, full_mark: &str) -> String {
    let total = bar.total_marks;
    if total == 0 {
        return String::new();
    }

    let full = full_marks(duration, seconds, total);
    let full = if bar.left_to_right { total - full } else { full };

    let mut output = full_mark.repeat(full);
    output.push_str(&bar.empty_mark.repeat(total - full));
    output
}

fn full_marks(duration: i64, seconds: i64, total: usize) -> usize {
    if duration <= 0 {
        return 0;
    }
    let seconds_per_mark = duration as f64 / total as f64;
    let marks = (seconds as f64 / seconds_per_mark).round_ties_even();
    marks.clamp(0.0, total as f64) as usize
}
