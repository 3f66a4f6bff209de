//! Common types shared across CLI commands

use std::future::Future;

use clap::ValueEnum;
use mathesar_codegen::Target;

/// Generation target language
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum TargetArg {
    /// TypedDict classes and `@api` stubs
    Python,
    /// serde structs and async `impl Mathesar` stubs
    Rust,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Python => Target::Python,
            TargetArg::Rust => Target::Rust,
        }
    }
}

/// Run a command body and turn its outcome into an exit code.
pub async fn run_command<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
