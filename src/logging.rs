//! ログ初期化（tracing）
//!
//! 操作画面は stdout、ログは stderr に出す。
//! `RUST_LOG` があればそちらを優先する。

use tracing_subscriber::{fmt, EnvFilter};

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "match_assigner=debug,match_assigner_common=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // 二重初期化（テストなど）は無視
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("debug"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
