#![cfg(feature = "std")]

//! Stderr logger configured from `STRIKE_LOG`.
//!
//! The variable holds comma separated directives: a bare level sets the
//! default, `target=level` overrides it for a module path and its children,
//! e.g. `STRIKE_LOG=warn,strike::grid=debug`.

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::sync::OnceLock;
use std::time::Instant;

#[derive(Debug, PartialEq)]
struct Filter {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl Filter {
    /// Unparseable directives are skipped.
    fn parse(spec: &str) -> Self {
        let mut filter = Filter {
            default: LevelFilter::Info,
            targets: Vec::new(),
        };
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        filter
    }

    /// Level for `target`; the longest matching module prefix wins.
    fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .filter(|(prefix, _)| {
                target == prefix.as_str()
                    || target
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

struct StderrLogger {
    filter: OnceLock<Filter>,
    start: OnceLock<Instant>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.filter.get() {
            Some(filter) => metadata.level() <= filter.level_for(metadata.target()),
            None => metadata.level() <= log::max_level(),
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = self.start.get_or_init(Instant::now).elapsed();
            eprintln!(
                "{:>4}.{:03} {} [{}] {}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger {
    filter: OnceLock::new(),
    start: OnceLock::new(),
};

/// Initialize logging from the `STRIKE_LOG` environment variable.
/// Defaults to `info` if the variable is not set. Output goes to stderr so it
/// does not interleave with the rendered board.
pub fn init_logging() {
    let filter = Filter::parse(&env::var("STRIKE_LOG").unwrap_or_default());
    let max = filter.max_level();
    let _ = LOGGER.filter.set(filter);
    LOGGER.start.get_or_init(Instant::now);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(max));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_defaults_to_info() {
        let filter = Filter::parse("");
        assert_eq!(filter.default, LevelFilter::Info);
        assert!(filter.targets.is_empty());
        assert_eq!(Filter::parse("bogus"), filter);
    }

    #[test]
    fn target_overrides_default_for_module_and_children() {
        let filter = Filter::parse("warn, strike::grid=debug ,strike=error");
        assert_eq!(filter.default, LevelFilter::Warn);
        assert_eq!(filter.level_for("strike::grid"), LevelFilter::Debug);
        assert_eq!(filter.level_for("strike::grid::inner"), LevelFilter::Debug);
        assert_eq!(filter.level_for("strike::storage"), LevelFilter::Error);
        assert_eq!(filter.level_for("strike_other"), LevelFilter::Warn);
        assert_eq!(filter.level_for("sim"), LevelFilter::Warn);
        assert_eq!(filter.max_level(), LevelFilter::Debug);
    }
}
