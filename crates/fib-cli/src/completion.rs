//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Name completions are generated for.
pub const BIN_NAME: &str = "fib";

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn command() -> Command {
        Command::new(BIN_NAME)
            .arg(Arg::new("algorithm").short('a').long("algorithm"))
            .arg(Arg::new("format").short('f').long("format"))
    }

    #[test]
    fn generate_bash_completion() {
        let mut buf = Vec::new();
        generate_completion(&mut command(), Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("--algorithm"));
        assert!(script.contains("fib"));
    }

    #[test]
    fn generate_zsh_completion() {
        let mut buf = Vec::new();
        generate_completion(&mut command(), Shell::Zsh, &mut buf);
        assert!(!buf.is_empty());
    }
}
