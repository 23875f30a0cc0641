//! CLI entrypoint for `envcfg-keys`.

mod cli;
mod error;
mod render;

use std::io::{self, Write};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::error::KeysError;
use crate::render::{KeyReport, SplitReport};

fn main() -> Result<(), KeysError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .without_time()
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), KeysError> {
    match &args.command {
        Command::Split { identifiers } => {
            debug!(count = identifiers.len(), "splitting identifiers");
            let reports: Vec<SplitReport> = identifiers
                .iter()
                .map(|identifier| SplitReport::new(identifier))
                .collect();
            render::write_splits(out, &reports, args.format)
        }
        Command::Key { prefix, paths } => {
            let key_prefix = prefix.as_deref().unwrap_or_default();
            debug!(count = paths.len(), prefix = key_prefix, "deriving keys");
            let reports: Vec<KeyReport> = paths
                .iter()
                .map(|path| KeyReport::new(path, key_prefix))
                .collect();
            render::write_keys(out, &reports, args.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    fn run_to_string(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).expect("arguments should parse");
        let mut buffer = Vec::new();
        run(&args, &mut buffer).expect("run should succeed");
        String::from_utf8(buffer).expect("output should be UTF-8")
    }

    #[rstest]
    fn split_prints_words_per_identifier() {
        let output = run_to_string(&["envcfg-keys", "split", "HostIP", "bad_PATH"]);
        assert_eq!(output, "HostIP\tHost IP\nbad_PATH\tbad PATH\n");
    }

    #[rstest]
    fn key_prints_prefixed_and_fallback_keys() {
        let output = run_to_string(&[
            "envcfg-keys",
            "key",
            "--prefix",
            "APP_",
            "HostIP",
            "inner.foo",
        ]);
        assert_eq!(
            output,
            "HostIP\tAPP_HOST_IP\tHOST_IP\ninner.foo\tAPP_INNER__FOO\tINNER__FOO\n"
        );
    }

    #[rstest]
    fn key_without_prefix_omits_fallback() {
        let output = run_to_string(&["envcfg-keys", "key", "VHName"]);
        assert_eq!(output, "VHName\tVH_NAME\n");
    }

    #[rstest]
    fn json_format_emits_an_array() {
        let output = run_to_string(&["envcfg-keys", "--format", "json", "split", "DEBUG"]);
        let value: serde_json::Value =
            serde_json::from_str(&output).expect("output should be JSON");
        assert_eq!(
            value,
            serde_json::json!([{ "identifier": "DEBUG", "words": ["DEBUG"] }])
        );
    }

    #[rstest]
    #[case::split(&["envcfg-keys", "split"])]
    #[case::key(&["envcfg-keys", "key", "--prefix", "APP_"])]
    fn missing_operands_are_rejected(#[case] argv: &[&str]) {
        assert!(Args::try_parse_from(argv).is_err());
    }
}
