//! Login command implementation

use std::sync::Arc;

use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;
use serde_json::Value;

use crate::cli::args::GlobalOptions;
use crate::cli::{LoginArgs, OutputFormat};
use crate::client::models::{Credentials, LoginForm};
use crate::client::{ApiClient, LoginApi, LoginClient};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Formattable, json::format_json, pretty::render_login};

/// Response body of a login, ready for printing
#[derive(Debug)]
pub struct LoginOutcome(pub Value);

impl Formattable for LoginOutcome {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => render_login(&self.0),
            OutputFormat::Json => Ok(format_json(&self.0)?),
        }
    }
}

/// Run the login command
pub async fn run(opts: &GlobalOptions, args: LoginArgs) -> Result<()> {
    let mut config = Config::load_or_default_at(opts.config_ref())?;

    let settings = opts.transport_settings(&config);
    debug!(
        "Logging in against {} (timeout {:?})",
        settings.api_host, settings.timeout
    );
    let transport = Arc::new(ApiClient::new(&settings)?);
    let client = LoginClient::new(transport);

    let remember = args.remember;
    let credentials = resolve_credentials(args, &config)?;

    let outcome = execute(&client, &credentials).await?;
    debug!("Login response received");

    if remember {
        config.gmail = credentials
            .as_value()
            .get("gmail")
            .and_then(Value::as_str)
            .map(str::to_string);
        config.save_at(opts.config_ref())?;
        debug!("Saved email to {:?}", Config::resolve_path(opts.config_ref())?);
    }

    output::print(&outcome, opts.format)
}

/// Send credentials through any [`LoginApi`] implementation
pub async fn execute(api: &dyn LoginApi, credentials: &Credentials) -> Result<LoginOutcome> {
    let body = api.login(credentials).await?;
    Ok(LoginOutcome(body))
}

/// Build credentials from flags, config and, last, interactive prompts
pub fn resolve_credentials(args: LoginArgs, config: &Config) -> Result<Credentials> {
    if let Some(data) = args.data {
        return Credentials::from_json(&data);
    }

    let gmail = match args.gmail.or_else(|| config.gmail.clone()) {
        Some(gmail) => gmail,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    Ok(LoginForm { gmail, password }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockLoginClient;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_resolve_raw_data() {
        let args = LoginArgs {
            data: Some(r#""just-a-string""#.to_string()),
            ..LoginArgs::default()
        };

        let creds = resolve_credentials(args, &Config::default()).unwrap();
        assert_eq!(creds.as_value(), &json!("just-a-string"));
        assert_eq!(creds.to_string(), "just-a-string");
    }

    #[test]
    fn test_resolve_invalid_data() {
        let args = LoginArgs {
            data: Some("{oops".to_string()),
            ..LoginArgs::default()
        };

        let err = resolve_credentials(args, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_resolve_form_from_flags() {
        let args = LoginArgs {
            gmail: Some("wing@example.org".to_string()),
            password: Some("pace".to_string()),
            ..LoginArgs::default()
        };

        let creds = resolve_credentials(args, &Config::default()).unwrap();
        assert_eq!(
            creds.as_value(),
            &json!({"gmail": "wing@example.org", "password": "pace"})
        );
    }

    #[test]
    fn test_resolve_uses_remembered_gmail() {
        let args = LoginArgs {
            password: Some("pace".to_string()),
            ..LoginArgs::default()
        };
        let config = Config {
            gmail: Some("saved@example.org".to_string()),
            ..Config::default()
        };

        let creds = resolve_credentials(args, &config).unwrap();
        assert_eq!(creds.as_value()["gmail"], "saved@example.org");
    }

    #[tokio::test]
    async fn test_execute_returns_body() {
        let mock = MockLoginClient::new().with_response(json!({"token": "abc"}));
        let creds = Credentials::from(json!({"gmail": "a@b.c"}));

        let outcome = execute(&mock, &creds).await.unwrap();

        assert_eq!(outcome.0, json!({"token": "abc"}));
        assert_eq!(mock.captured().await, vec![creds]);
    }

    #[tokio::test]
    async fn test_execute_propagates_error() {
        let mock = MockLoginClient::new().with_error(Error::Other("offline".to_string()));

        let err = execute(&mock, &Credentials::from(json!({})))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn test_outcome_json_format() {
        let outcome = LoginOutcome(json!({"token": "abc"}));
        let out = outcome.format(OutputFormat::Json).unwrap();

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["data"], json!({"token": "abc"}));
    }
}
