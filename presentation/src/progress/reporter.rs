//! Loading spinner for meal lookups

use indicatif::{ProgressBar, ProgressStyle};
use meal_application::LookupProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while the meal service request is in flight
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupProgressNotifier for SpinnerProgress {
    fn on_lookup_start(&self, date: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{} 급식 정보를 불러오는 중...", date));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_lookup_finish(&self, _date: &str, _success: bool) {
        let taken = self.bar.lock().ok().and_then(|mut bar| bar.take());
        if let Some(pb) = taken {
            pb.finish_and_clear();
        }
    }
}
