//! Command line front end for the Mathesar RPC client and stub generator.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub mod call;
pub mod common;
pub mod generate;
pub mod scrape;

/// Crates whose logs a plain `MATHESAR_LOG` level applies to.
const LOG_TARGETS: &[&str] = &["mathesar_cli", "mathesar_client", "mathesar_codegen"];

#[derive(Parser, Debug)]
#[command(
    name = "mathesar",
    version,
    about = "Mathesar JSON-RPC client and stub generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and call one RPC method
    Call(call::CallArgs),
    /// Generate record declarations and method stubs
    Generate(generate::GenerateArgs),
    /// Scrape the API reference into a JSON document
    Scrape(scrape::ScrapeArgs),
}

/// Parse `args` (program name first), run the command and return its exit code.
pub fn run_cli(args: Vec<String>) -> i32 {
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(run_cli_async(args))
}

async fn run_cli_async(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Call(args)) => call::run(args).await,
            Some(Commands::Generate(args)) => generate::run(args).await,
            Some(Commands::Scrape(args)) => scrape::run(args).await,
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn init_tracing() {
    // MATHESAR_LOG: "trace", "debug", "info", "warn", "error"
    // or a full filter spec like "mathesar_client=debug,reqwest=info"
    let filter = log_filter(std::env::var("MATHESAR_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn log_filter(setting: Option<&str>) -> String {
    match setting {
        Some(level) if is_plain_level(level) => LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(","),
        Some(spec) => spec.to_string(),
        None => log_filter(Some("info")),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mathesar").chain(args.iter().copied()))
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(
            log_filter(None),
            "mathesar_cli=info,mathesar_client=info,mathesar_codegen=info"
        );
        assert_eq!(
            log_filter(Some("DEBUG")),
            "mathesar_cli=DEBUG,mathesar_client=DEBUG,mathesar_codegen=DEBUG"
        );
        assert_eq!(log_filter(Some("reqwest=trace")), "reqwest=trace");
    }

    #[test]
    fn test_generate_takes_exactly_one_source() {
        assert!(parse(&["generate", "--out-dir", "out"]).is_err());
        assert!(
            parse(&["generate", "--scrape", "a.json", "--introspection", "b.json", "--out-dir", "out"])
                .is_err()
        );

        let cli = parse(&["generate", "--introspection", "b.json", "--out-dir", "out", "--target", "rust"])
            .unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.source.introspection.unwrap().to_str(), Some("b.json"));
                assert_eq!(args.target, Some(common::TargetArg::Rust));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_call_collects_trailing_args() {
        let cli = parse(&[
            "call",
            "--url",
            "http://localhost:8000",
            "--username",
            "admin",
            "--password",
            "secret",
            "tables.list",
            "2200",
            "database_id=1",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Call(args)) => {
                assert_eq!(args.method, "tables.list");
                assert_eq!(args.args, vec!["2200", "database_id=1"]);
                assert_eq!(args.timeout, mathesar_client::client::DEFAULT_TIMEOUT_SECS);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
