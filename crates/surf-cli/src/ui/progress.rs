//! Spinner for the export, drawn with indicatif.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::render::badge;
use super::theme::{spinner_frames, Badge};

pub struct Spinner {
    ctx: UiContext,
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start spinning if the terminal allows animation; otherwise stay silent.
    pub fn start(ctx: &UiContext, message: &str) -> Self {
        let bar = ctx.allows_animation().then(|| {
            let style = ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(spinner_frames(ctx.unicode));
            let bar = ProgressBar::new_spinner();
            bar.set_style(style);
            bar.set_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        });
        Self {
            ctx: ctx.clone(),
            bar,
        }
    }

    fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish(&self, message: &str) {
        self.clear();
        if !self.ctx.mode.is_json() {
            println!("{}", badge(&self.ctx, Badge::Ok, message));
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}
