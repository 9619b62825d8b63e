//! Command execution context
//!
//! Provides a unified context for command execution: config loading, the
//! session token store, the API client and the route guard.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::InventarioClient;
use crate::config::Config;
use crate::error::{Result, SessionError};
use crate::router::{LOGIN_PATH, Route, SessionNavigator};
use crate::session::guard::{self, GuardDecision};
use crate::session::login::{LOGIN_FAILED_FALLBACK, LoginFlow, login_error_message};
use crate::session::store::FileTokenStore;

/// Sign-in attempts offered before a guarded command gives up
const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Context for command execution containing config, session and client.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Resolved config file path
    pub config_path: PathBuf,
    /// Session token storage, next to the config file
    pub store: Arc<FileTokenStore>,
    /// Records forced redirects raised inside the client pipeline
    pub navigator: Arc<SessionNavigator>,
    /// API client (Arc-wrapped for concurrent requests)
    pub client: Arc<InventarioClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads config from the given path (or the default location), applies
    /// the API address override and builds a client whose pipeline shares
    /// this context's token store and navigator.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_at(opts.config_ref())?.with_api_url(opts.api_url_ref());
        config.validate()?;

        let store = Arc::new(FileTokenStore::new(Config::token_path_for(&config_path)));
        let navigator = Arc::new(SessionNavigator::new());
        let client = Arc::new(InventarioClient::new(
            &config,
            store.clone(),
            navigator.clone(),
        )?);

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_preference)
            })
            .unwrap_or_default();

        log::debug!(
            "Using API {} with token at {}",
            config.api_url,
            store.path().display()
        );

        Ok(Self {
            config,
            config_path,
            store,
            navigator,
            client,
            format,
        })
    }

    /// Run the session guard for `route`.
    ///
    /// When the guard redirects and a terminal is attached, the user is asked
    /// to sign in and the command continues. Otherwise the command fails with
    /// the path to come back to.
    pub async fn enter(&self, route: Route) -> Result<()> {
        if !route.is_protected() {
            return Ok(());
        }

        match guard::enforce(self.store.as_ref(), route.path()) {
            GuardDecision::Allow => Ok(()),
            GuardDecision::Redirect { to, from } => {
                log::debug!("Guard redirect {} -> {}", from, to);
                if !is_interactive() {
                    return Err(SessionError::LoginRequired { return_to: from }.into());
                }
                eprintln!("{}", "Your session is not active. Please sign in.".yellow());
                self.prompt_login(Some(from.as_str())).await.map(|_| ())
            }
        }
    }

    /// Ask for credentials on the terminal until sign-in succeeds or the
    /// attempts run out.
    pub async fn prompt_login(&self, return_to: Option<&str>) -> Result<Route> {
        let theme = ColorfulTheme::default();
        let mut last_error = None;

        for _ in 0..MAX_LOGIN_ATTEMPTS {
            let email: String = Input::with_theme(&theme)
                .with_prompt("Email")
                .interact_text()?;
            let password = Password::with_theme(&theme)
                .with_prompt("Password")
                .interact()?;

            match self.login(&email, &password, return_to).await {
                Ok(route) => return Ok(route),
                Err(err) => {
                    eprintln!(
                        "{} {}",
                        "✗".red(),
                        login_error_message(&err, LOGIN_FAILED_FALLBACK)
                    );
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            SessionError::LoginRequired {
                return_to: return_to.unwrap_or(LOGIN_PATH).to_string(),
            }
            .into()
        }))
    }

    /// Sign in with the given credentials.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        return_to: Option<&str>,
    ) -> Result<Route> {
        LoginFlow::new(self.client.as_ref(), self.store.as_ref())
            .submit(email, password, return_to)
            .await
    }

    /// Finish a guarded command.
    ///
    /// If the client pipeline forced a logout while the command ran, the
    /// error is passed through and the user is told the session has ended.
    pub fn finish<T>(&self, result: Result<T>) -> Result<T> {
        if let Some(path) = self.navigator.take_pending() {
            log::debug!("Pipeline redirected to {}", path);
            eprintln!(
                "{} Session ended. Run {} to sign in again.",
                "⚠".yellow(),
                "inventario login".cyan()
            );
        }
        result
    }
}

/// Whether prompts can be shown.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Ask before a destructive action. `--yes` skips the prompt; without a
/// terminal the action is refused.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !is_interactive() {
        return Err(crate::error::Error::Validation(
            "Confirmation required. Pass --yes to proceed without a prompt.".to_string(),
        ));
    }

    Ok(dialoguer::Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
