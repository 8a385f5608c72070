use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::{Level, LevelFilter, info, log};

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!("[{}] [{hours:0>2}:{min:0>2}:{sec:0>2}]", record.level());

            out.finish(format_args!("{prefix:<16}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "time: {}", jiff::Timestamp::now());
    Ok(())
}

/// Run `f` and log how long it took. The re-usable stand-in for per-step
/// timing instrumentation; wraps any closure without touching its result.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    info!(
        "[{label}] finished in {:.4}s",
        start.elapsed().as_secs_f64()
    );
    result
}
