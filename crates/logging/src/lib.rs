//! Logging setup shared by the strike crates and their tests.
use std::io::Write;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Send log records to stderr, honoring `RUST_LOG` and falling back to [DEFAULT_FILTER].
///
/// Safe to call from every test: only the first call installs the logger.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
        let res = env_logger::Builder::from_env(env)
            .format(|buf, record| {
                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .is_test(cfg!(test))
            .try_init();

        // Someone else got there first; their logger wins.
        if let Err(e) = res {
            log::debug!("stderr logger not installed: {}", e);
        }
    });
}
