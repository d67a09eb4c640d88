//! Runtime setup for the command-line binary.

use std::io::IsTerminal;

/// Initialise `env_logger`. `RUST_LOG` wins; otherwise verbosity picks the level.
pub fn init_logging(verbosity: u8) {
    let default_level = if verbosity == 0 { "warn" } else { "debug" };

    // A second init (tests, embedding) is harmless
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Whether coloured output should be produced.
pub fn should_use_color(plain: bool) -> bool {
    if plain || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply the colour decision globally for `colored`.
pub fn configure_color(plain: bool) -> bool {
    let enabled = should_use_color(plain);
    colored::control::set_override(enabled);
    enabled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_disables_color() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(0);
        init_logging(2);
    }
}
