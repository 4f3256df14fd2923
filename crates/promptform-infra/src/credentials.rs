//! Environment credential resolution.
//!
//! The Hugging Face bearer token is read once at startup: a `.env` file in
//! the working directory is loaded first (if present), then the process
//! environment is consulted. An absent token is fatal before the service
//! handles any request; nothing reads the environment during dispatch.

use secrecy::SecretString;

use promptform_types::config::TOKEN_ENV_VAR;
use promptform_types::error::StartupError;

/// Load `.env` (if present) and resolve the Hugging Face API token.
///
/// A missing `.env` file is not an error; a present-but-empty token is
/// treated as missing so a blank line in `.env` cannot masquerade as a
/// credential.
pub fn resolve_api_token() -> Result<SecretString, StartupError> {
    // Ignore a missing .env file; propagating other IO errors here would
    // only obscure the MissingToken failure that follows.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            tracing::warn!("failed to load .env file: {err}");
        }
    }

    token_from_env()
}

/// Resolve the token from the process environment only.
pub fn token_from_env() -> Result<SecretString, StartupError> {
    match std::env::var(TOKEN_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(StartupError::MissingToken(TOKEN_ENV_VAR)),
    }
}
