//! Environment-driven application configuration.
//!
//! Settings are read through `mockable::Env` so they are validated
//! consistently and can be tested without touching the process environment.

use actix_web::cookie::Key;
use mockable::Env;
use sha2::{Digest, Sha512};
use tracing::warn;
use zeroize::Zeroize;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const SECRET_KEY_ENV: &str = "SECRET_KEY";
const BIND_ADDR_ENV: &str = "BIND_ADDR";
const UPLOAD_DIR_ENV: &str = "UPLOAD_DIR";
const MAX_UPLOAD_MB_ENV: &str = "MAX_UPLOAD_MB";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const ADMIN_USER_ENV: &str = "ADMIN_USER";
const ADMIN_PASS_ENV: &str = "ADMIN_PASS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_UPLOAD_DIR: &str = "static/img/uploads";
const DEFAULT_MAX_UPLOAD_MB: usize = 4;
const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASS: &str = "admin123";

/// Errors raised while validating application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated application settings.
pub struct AppConfig {
    pub database_url: String,
    /// Session cookie signing key derived from `SECRET_KEY`.
    pub session_key: Key,
    pub bind_addr: String,
    pub upload_dir: String,
    pub max_upload_bytes: usize,
    pub cookie_secure: bool,
    pub admin_user: String,
    pub admin_pass: String,
}

impl AppConfig {
    /// Read and validate the configuration from the environment.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let database_url = env.string(DATABASE_URL_ENV).ok_or(ConfigError::MissingEnv {
            name: DATABASE_URL_ENV,
        })?;
        let secret = env.string(SECRET_KEY_ENV).ok_or(ConfigError::MissingEnv {
            name: SECRET_KEY_ENV,
        })?;
        let session_key = derive_session_key(secret);

        let max_upload_mb = match env.string(MAX_UPLOAD_MB_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: MAX_UPLOAD_MB_ENV,
                    value: raw.clone(),
                    expected: "a positive integer of megabytes",
                })?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        let cookie_secure = match env.string(COOKIE_SECURE_ENV) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidEnv {
                name: COOKIE_SECURE_ENV,
                value: raw,
                expected: "1|0|true|false|yes|no",
            })?,
            None => {
                warn!("{COOKIE_SECURE_ENV} not set; session cookies are not marked Secure");
                false
            }
        };

        Ok(Self {
            database_url,
            session_key,
            bind_addr: env
                .string(BIND_ADDR_ENV)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            upload_dir: env
                .string(UPLOAD_DIR_ENV)
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_owned()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            cookie_secure,
            admin_user: env
                .string(ADMIN_USER_ENV)
                .unwrap_or_else(|| DEFAULT_ADMIN_USER.to_owned()),
            admin_pass: env
                .string(ADMIN_PASS_ENV)
                .unwrap_or_else(|| DEFAULT_ADMIN_PASS.to_owned()),
        })
    }
}

/// Stretch the configured secret into signing-key material.
///
/// `Key::derive_from` requires at least 64 bytes, so the secret is digested
/// with SHA-512 first; operators can then use secrets of any length. The
/// intermediate bytes are wiped once the key is derived.
fn derive_session_key(mut secret: String) -> Key {
    let mut digest: [u8; 64] = Sha512::digest(secret.as_bytes()).into();
    secret.zeroize();
    let key = Key::derive_from(&digest);
    digest.zeroize();
    key
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;

    fn env_with(vars: Vec<(&'static str, &'static str)>) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_string().returning(move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        });
        env
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_URL", "postgres://localhost/koperasi"),
            ("SECRET_KEY", "rahasia"),
        ]
    }

    #[rstest]
    fn minimal_environment_falls_back_to_defaults() {
        let config = AppConfig::from_env(&env_with(required())).expect("valid config");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.upload_dir, "static/img/uploads");
        assert_eq!(config.max_upload_bytes, 4 * 1024 * 1024);
        assert!(!config.cookie_secure);
        assert_eq!(config.admin_user, "admin");
        assert_eq!(config.admin_pass, "admin123");
    }

    #[rstest]
    #[case("DATABASE_URL")]
    #[case("SECRET_KEY")]
    fn missing_required_variables_are_errors(#[case] missing: &'static str) {
        let vars: Vec<_> = required()
            .into_iter()
            .filter(|(name, _)| *name != missing)
            .collect();
        // Drop the Ok payload first; `AppConfig` holds a `Key` and has no
        // `Debug` impl for `expect_err` to lean on.
        let err = AppConfig::from_env(&env_with(vars))
            .map(|_| ())
            .expect_err("config must fail");
        assert!(err.to_string().contains(missing));
    }

    #[rstest]
    fn overrides_are_honoured() {
        let mut vars = required();
        vars.extend([
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("UPLOAD_DIR", "/srv/uploads"),
            ("MAX_UPLOAD_MB", "8"),
            ("SESSION_COOKIE_SECURE", "1"),
            ("ADMIN_USER", "pengurus"),
        ]);
        let config = AppConfig::from_env(&env_with(vars)).expect("valid config");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.upload_dir, "/srv/uploads");
        assert_eq!(config.max_upload_bytes, 8 * 1024 * 1024);
        assert!(config.cookie_secure);
        assert_eq!(config.admin_user, "pengurus");
    }

    #[rstest]
    fn malformed_upload_limit_is_an_error() {
        let mut vars = required();
        vars.push(("MAX_UPLOAD_MB", "lots"));
        let err = AppConfig::from_env(&env_with(vars))
            .map(|_| ())
            .expect_err("config must fail");
        assert!(err.to_string().contains("MAX_UPLOAD_MB"));
    }

    #[rstest]
    fn short_secrets_still_derive_a_key() {
        let vars = vec![
            ("DATABASE_URL", "postgres://localhost/koperasi"),
            ("SECRET_KEY", "x"),
        ];
        // Key::derive_from panics below 64 bytes of input; the SHA-512
        // stretch keeps short secrets usable.
        let config = AppConfig::from_env(&env_with(vars)).expect("valid config");
        assert_eq!(config.database_url, "postgres://localhost/koperasi");
    }
}
