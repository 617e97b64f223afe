//! Build spinner that becomes a no-op when the `progress` feature is disabled

#[cfg(feature = "progress")]
use std::time::Duration;

/// Texts below this size build too quickly for a spinner to be useful
pub const SPINNER_THRESHOLD: usize = 4 * 1024 * 1024;

/// Spinner shown while a long-running step executes
pub struct Spinner {
    #[cfg(feature = "progress")]
    bar: Option<indicatif::ProgressBar>,
}

impl Spinner {
    /// Start a spinner with `message`, or a silent one when `enabled` is false
    pub fn start(message: &str, enabled: bool) -> Self {
        #[cfg(feature = "progress")]
        {
            let bar = enabled.then(|| {
                let bar = indicatif::ProgressBar::new_spinner();
                if let Ok(style) =
                    indicatif::ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
                {
                    bar.set_style(style);
                }
                bar.set_message(message.to_string());
                bar.enable_steady_tick(Duration::from_millis(80));
                bar
            });
            Self { bar }
        }

        #[cfg(not(feature = "progress"))]
        {
            let _ = (message, enabled);
            Self {}
        }
    }

    /// Stop the spinner and clear its line
    pub fn finish(self) {
        #[cfg(feature = "progress")]
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
