use std::time::Duration;

use tracing::{info, instrument};

pub fn format_elapsed(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms >= 60000 {
        let mins = total_ms / 60000;
        let secs = (total_ms % 60000) / 1000;
        let ms_remaining = total_ms % 1000;

        if ms_remaining > 0 {
            format!("{}m {}s {}ms", mins, secs, ms_remaining)
        } else {
            format!("{}m {}s", mins, secs)
        }
    } else if total_ms >= 1000 {
        let secs = total_ms / 1000;
        let ms_remaining = total_ms % 1000;

        if ms_remaining > 0 {
            format!("{}s {}ms", secs, ms_remaining)
        } else {
            format!("{}s", secs)
        }
    } else {
        format!("{}ms", total_ms)
    }
}

#[instrument]
pub fn display_elapsed_time(duration: Duration) {
    info!("done in {}", format_elapsed(duration));
}
