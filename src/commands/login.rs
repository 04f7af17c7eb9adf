use std::io::BufRead;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::data_provider::StatHubDataProvider;

/// Environment variable holding the password for `login`
pub const PASSWORD_ENV: &str = "STATHUB_PASSWORD";

/// Password from the environment, else the first line of `input`
pub fn resolve_password<F, R>(lookup: F, input: R) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
{
    if let Some(password) = lookup(PASSWORD_ENV).filter(|p| !p.is_empty()) {
        return Ok(password);
    }

    let mut line = String::new();
    input
        .take(4096)
        .read_line(&mut line)
        .context("Failed to read password")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("No password given (set {} or type it on stdin)", PASSWORD_ENV);
    }
    Ok(password)
}

pub async fn run(client: &dyn StatHubDataProvider, credential: &str, password: &str) -> Result<()> {
    let response = client
        .login(credential, password)
        .await
        .with_context(|| format!("Login failed for '{}'", credential))?;
    info!("Logged in as {}", credential);

    println!("Logged in as {}.", credential);
    println!("Add this line to your config file, or export STATHUB_TOKEN:");
    println!("token = \"{}\"", response.access_token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    #[test]
    fn test_password_from_env() {
        let password = resolve_password(
            |key| (key == PASSWORD_ENV).then(|| "s3cret".to_string()),
            "ignored\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(password, "s3cret");
    }

    #[test]
    fn test_password_from_input_line() {
        let password = resolve_password(|_| None, "hunter 2\r\nnext\n".as_bytes()).unwrap();
        assert_eq!(password, "hunter 2");
    }

    #[test]
    fn test_missing_password() {
        let err = resolve_password(|_| None, "".as_bytes()).unwrap_err();
        assert!(err.to_string().contains(PASSWORD_ENV));
    }

    #[tokio::test]
    async fn test_login_with_mock_client() {
        let client = MockClient::new();
        assert!(run(&client, "asilva", "pw").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_failure_has_context() {
        let client = MockClient::failing("Incorrect credentials");
        let err = run(&client, "asilva", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed for 'asilva'");
    }
}
