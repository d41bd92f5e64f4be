//! Passphrase resolution for CLI commands
//!
//! The passphrase is looked up fresh for each invocation and never stored.

use crate::crypto::Passphrase;
use crate::error::{VaultError, VaultResult};

/// Environment variable consulted when no prompt is requested
pub const PASSPHRASE_ENV: &str = "PASSVAULT_PASSPHRASE";

/// Where the passphrase for this invocation comes from
#[derive(Debug, Clone, Copy, Default)]
pub struct PassphraseSource {
    ask: bool,
}

impl PassphraseSource {
    pub fn new(ask: bool) -> Self {
        Self { ask }
    }

    /// Resolve the passphrase: prompt, then environment, then empty
    pub fn resolve(&self) -> VaultResult<Passphrase> {
        resolve_with(self.ask, std::env::var(PASSPHRASE_ENV).ok(), || {
            prompt_passphrase("Passphrase: ")
        })
    }
}

fn resolve_with<F>(ask: bool, from_env: Option<String>, prompt: F) -> VaultResult<Passphrase>
where
    F: FnOnce() -> VaultResult<String>,
{
    let passphrase = if ask {
        Passphrase::new(prompt()?)
    } else {
        from_env.map(Passphrase::new).unwrap_or_default()
    };

    if passphrase.is_empty() {
        tracing::warn!(
            "no passphrase supplied; entries use the shared fallback key and are not protected"
        );
    }

    Ok(passphrase)
}

/// Prompt for a passphrase without echo
fn prompt_passphrase(prompt: &str) -> VaultResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| VaultError::Io(format!("Failed to read passphrase: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn no_prompt() -> VaultResult<String> {
        panic!("prompt should not be called")
    }

    #[test]
    fn test_env_used_without_ask() {
        let passphrase = resolve_with(false, Some("from-env".into()), no_prompt).unwrap();
        assert_eq!(passphrase.as_str(), "from-env");
    }

    #[test]
    fn test_prompt_wins_over_env() {
        let passphrase =
            resolve_with(true, Some("from-env".into()), || Ok("typed".to_string())).unwrap();
        assert_eq!(passphrase.as_str(), "typed");
    }

    #[traced_test]
    #[test]
    fn test_missing_passphrase_warns() {
        let passphrase = resolve_with(false, None, no_prompt).unwrap();
        assert!(passphrase.is_empty());
        assert!(logs_contain("fallback key"));
    }

    #[test]
    fn test_prompt_error_propagates() {
        let result = resolve_with(true, None, || Err(VaultError::Io("closed".into())));
        assert!(result.is_err());
    }
}
