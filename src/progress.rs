//! Simulated transcription progress.
//!
//! The transport gives no progress callback, so the bar is cosmetic: it
//! climbs fast early, crawls near the top, and only reaches 100 when the
//! response actually lands. The tick task must stop on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tauri::{AppHandle, Emitter};

/// Event the webview listens on; payload is `{ percent, label }`.
pub const PROGRESS_EVENT: &str = "transcription-progress";

const TICK_MS: u64 = 500;
const START_PERCENT: f32 = 5.0;
const FAST_INCREMENT: f32 = 4.0;
const SLOW_INCREMENT: f32 = 0.5;
const FAST_BELOW: f32 = 40.0;
const CAP_PERCENT: f32 = 98.0;
const LABEL_SWITCH_ABOVE: f32 = 50.0;

/// Pause between showing 100 and publishing the completed result.
pub const COMPLETION_DELAY_MS: u64 = 500;

/// Next simulated percentage after one tick: big steps early, small steps
/// late, capped below completion.
pub fn next_percent(current: f32) -> f32 {
    let step = if current < FAST_BELOW {
        FAST_INCREMENT
    } else {
        SLOW_INCREMENT
    };
    (current + step).min(CAP_PERCENT)
}

/// Handle to the running tick task. `finish` jumps the bar to 100,
/// `cancel` just stops it; dropping the handle stops it too, so early
/// returns cannot leak the timer.
pub struct ProgressTicker {
    stopped: Arc<AtomicBool>,
}

impl ProgressTicker {
    /// Spawn the ticker. `uploading_label` shows below the switch
    /// threshold, `working_label` above it.
    pub fn start(app: &AppHandle, uploading_label: String, working_label: String) -> Self {
        let stopped = Arc::new(AtomicBool::new(false));
        let flag = stopped.clone();
        let app = app.clone();
        tauri::async_runtime::spawn(async move {
            let mut percent = START_PERCENT;
            emit_progress(&app, percent, &uploading_label);
            let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
            interval.tick().await; // first tick resolves immediately
            loop {
                interval.tick().await;
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                percent = next_percent(percent);
                let label = if percent > LABEL_SWITCH_ABOVE {
                    &working_label
                } else {
                    &uploading_label
                };
                emit_progress(&app, percent, label);
            }
        });
        Self { stopped }
    }

    /// Stop ticking and jump the bar to 100.
    pub fn finish(self, app: &AppHandle, done_label: &str) {
        self.stopped.store(true, Ordering::SeqCst);
        emit_progress(app, 100.0, done_label);
    }

    /// Stop ticking without completing (error path).
    pub fn cancel(self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

fn emit_progress(app: &AppHandle, percent: f32, label: &str) {
    let _ = app.emit(
        PROGRESS_EVENT,
        serde_json::json!({ "percent": percent, "label": label }),
    );
}
