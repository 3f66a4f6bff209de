//! `mathesar call`: one RPC call from the command line.

use std::time::Duration;

use clap::Args;
use mathesar_client::client::DEFAULT_TIMEOUT_SECS;
use mathesar_client::{ClientConfig, ClientError, ClientResult, Mathesar, Params, signature};
use serde_json::Value;
use tracing::debug;

use crate::common::run_command;

#[derive(Args, Debug, Clone)]
pub struct CallArgs {
    /// Base URL of the Mathesar instance
    #[arg(long, env = "MATHESAR_URL")]
    pub url: String,
    #[arg(long, env = "MATHESAR_USERNAME")]
    pub username: String,
    #[arg(long, env = "MATHESAR_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Dotted RPC method name, e.g. `tables.list`
    pub method: String,
    /// JSON values mapped onto the method's parameters in order, or `name=<json>`
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub async fn run(args: CallArgs) -> i32 {
    run_command(|| async move { call(args).await.map_err(|err| err.to_string()) }).await
}

async fn call(args: CallArgs) -> ClientResult<()> {
    let params = build_params(&args.method, &args.args)?;
    let config = ClientConfig::new(&args.url)?.with_timeout(Duration::from_secs(args.timeout));
    let mathesar = Mathesar::connect(&config, &args.username, &args.password).await?;
    let result = mathesar.call(&args.method, params).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Map command line arguments onto keyword parameters of `method`.
///
/// `name=<json>` arguments are keywords; everything else is positional and
/// takes the next parameter name from the method's signature.
pub fn build_params(method: &str, args: &[String]) -> ClientResult<Params> {
    let names = signature(method);
    let mut params = Params::new();
    let mut positional = 0;

    for arg in args {
        let (name, raw) = match keyword(arg) {
            Some((name, raw)) => (name.to_string(), raw),
            None => {
                let names = names.ok_or_else(|| ClientError::UnknownMethod(method.to_string()))?;
                let name = names.get(positional).ok_or_else(|| ClientError::InvalidArgument {
                    name: arg.clone(),
                    message: format!("`{method}` takes at most {} positional arguments", names.len()),
                })?;
                positional += 1;
                ((*name).to_string(), arg.as_str())
            }
        };
        if params.get(&name).is_some() {
            return Err(ClientError::InvalidArgument {
                name,
                message: "given more than once".to_string(),
            });
        }
        params.insert(name, parse_value(raw));
    }
    debug!(method, params = params.len(), "Built call parameters.");
    Ok(params)
}

/// `name=<json>` with an identifier-shaped name.
fn keyword(arg: &str) -> Option<(&str, &str)> {
    let (name, value) = arg.split_once('=')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    let is_ident = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_ident.then_some((name, value))
}

/// JSON when it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_positional_args_follow_the_signature() {
        let params = build_params("roles.add", &strings(&["alice", "1", "login=true"])).unwrap();
        assert_eq!(
            Value::Object(params.into_map()),
            json!({"rolename": "alice", "database_id": 1, "login": true})
        );
    }

    #[test]
    fn test_json_objects_are_passed_through() {
        let params = build_params(
            "users.add",
            &strings(&[r#"{"username": "bob", "password": "pw=1", "is_superuser": false}"#]),
        )
        .unwrap();
        assert_eq!(
            params.get("user_def"),
            Some(&json!({"username": "bob", "password": "pw=1", "is_superuser": false}))
        );
    }

    #[test]
    fn test_keywords_work_for_unknown_methods() {
        let params = build_params("nothing.here", &strings(&["database_id=1"])).unwrap();
        assert_eq!(params.get("database_id"), Some(&json!(1)));
        assert!(matches!(
            build_params("nothing.here", &strings(&["1"])),
            Err(ClientError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_too_many_and_duplicate_args() {
        assert!(matches!(
            build_params("users.get", &strings(&["1", "2"])),
            Err(ClientError::InvalidArgument { .. })
        ));
        assert!(matches!(
            build_params("users.get", &strings(&["1", "user_id=2"])),
            Err(ClientError::InvalidArgument { .. })
        ));
    }
}
