//! Session-based JSON-RPC client.
//!
//! Mathesar authenticates RPC calls with the Django session cookie plus the
//! CSRF token: the client logs in through the HTML login form once, keeps the
//! cookies, and echoes the `csrftoken` cookie in `X-CSRFToken` on every call.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::REFERER;
use scraper::{Html, Selector};
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::rpc::{Params, Request, Response, decode};

pub const DEFAULT_LOGIN_PATH: &str = "/auth/login/";
pub const DEFAULT_RPC_PATH: &str = "/api/rpc/v0/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";
const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub login_path: String,
    pub rpc_path: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("mathesar-client/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    cookies: Arc<Jar>,
    login_url: Url,
    rpc_url: Url,
}

impl Client {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let cookies = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            cookies,
            login_url: config.base_url.join(&config.login_path)?,
            rpc_url: config.base_url.join(&config.rpc_path)?,
        })
    }

    /// Log in through the HTML form; the session cookie is kept for later calls.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        debug!(url = %self.login_url, "Fetching login page.");
        let page = self.http.get(self.login_url.clone()).send().await?;
        let page = ensure_success(page).await?.text().await?;
        let token = csrf_form_token(&page)?;

        let response = self
            .http
            .post(self.login_url.clone())
            .header(REFERER, self.login_url.as_str())
            .form(&[
                ("username", username),
                ("password", password),
                (CSRF_FORM_FIELD, token.as_str()),
            ])
            .send()
            .await?;
        ensure_success(response).await?;
        info!(username, "Logged in.");
        Ok(())
    }

    /// Perform one RPC call and return the raw `result`.
    pub async fn call(&self, method: &str, params: Params) -> ClientResult<Value> {
        let id = rand::thread_rng().gen_range(1..=99_999_u32);
        let mut request = self
            .http
            .post(self.rpc_url.clone())
            .json(&Request::new(id, method, &params));
        match self.csrf_cookie() {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => warn!(method, "No csrftoken cookie; sending the call without X-CSRFToken."),
        }

        debug!(method, id, params = params.len(), "Sending RPC request.");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<Response>(&body) {
            Ok(envelope) if envelope.is_envelope() => {
                let result = envelope.into_result();
                match &result {
                    Ok(_) => debug!(method, id, "RPC call succeeded."),
                    Err(err) => debug!(method, id, code = err.code, kind = %err.kind, "RPC call failed."),
                }
                Ok(result?)
            }
            Ok(_) | Err(_) if !status.is_success() => Err(ClientError::Http { status, body }),
            Ok(_) => Err(serde_json::Error::custom("response carries neither `result` nor `error`").into()),
            Err(err) => Err(err.into()),
        }
    }

    /// [`Client::call`] with the result decoded into `R`.
    pub async fn call_typed<R: DeserializeOwned>(&self, method: &str, params: Params) -> ClientResult<R> {
        decode(self.call(method, params).await?)
    }

    fn csrf_cookie(&self) -> Option<String> {
        let header = self.cookies.cookies(&self.rpc_url)?;
        let header = header.to_str().ok()?;
        header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == CSRF_COOKIE).then(|| value.to_string())
        })
    }
}

async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Http { status, body })
    }
}

/// Value of the hidden `csrfmiddlewaretoken` input of the login form.
fn csrf_form_token(page: &str) -> ClientResult<String> {
    let selector = Selector::parse("input[name=\"csrfmiddlewaretoken\"]")
        .map_err(|_| ClientError::MissingCsrfToken)?;
    Html::parse_document(page)
        .select(&selector)
        .find_map(|input| input.value().attr("value"))
        .map(str::to_string)
        .ok_or(ClientError::MissingCsrfToken)
}
