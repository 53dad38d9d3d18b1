use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(80);

fn spinner(message: Cow<'static, str>) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

    let bar = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message);
    bar.enable_steady_tick(TICK);
    bar
}

/// Await `task` behind a spinner. The spinner is cleared before the output
/// is returned, success or not, so callers can print right away.
pub async fn with_spinner<F>(message: impl Into<Cow<'static, str>>, task: F) -> F::Output
where
    F: Future,
{
    let bar = spinner(message.into());
    let output = task.await;
    bar.finish_and_clear();
    output
}
