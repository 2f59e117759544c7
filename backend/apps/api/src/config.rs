//! Server Configuration
//!
//! Everything the binary reads from the environment (after `.env`).

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::infra::mailer::{Mailer, SmtpConfig, SmtpMailer};
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub production: bool,
    pub auth: AuthConfig,
    pub smtp: Option<SmtpConfig>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let production = env::var("APP_ENV").is_ok_and(|v| v.eq_ignore_ascii_case("production"));

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a socket address")?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let mut auth = if production {
            AuthConfig::default()
        } else {
            AuthConfig::development()
        };
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => auth.token_secret = secret.into_bytes(),
            _ if production => bail!("JWT_SECRET must be set in production"),
            _ => tracing::warn!("JWT_SECRET not set, sessions end with the process"),
        }
        if let Ok(url) = env::var("PUBLIC_BASE_URL") {
            auth.public_base_url = url;
        }
        if let Ok(cost) = env::var("BCRYPT_COST") {
            auth.bcrypt_cost = cost.parse().context("BCRYPT_COST is not a number")?;
        }
        if let Ok(minutes) = env::var("RESET_TOKEN_TTL_MINUTES") {
            let minutes: u64 = minutes
                .parse()
                .context("RESET_TOKEN_TTL_MINUTES is not a number")?;
            auth.reset_token_ttl = Duration::from_secs(minutes * 60);
        }

        let smtp = match env::var("SMTP_HOST") {
            Ok(host) if !host.is_empty() => Some(SmtpConfig {
                host,
                port: env::var("SMTP_PORT")
                    .ok()
                    .map(|p| p.parse())
                    .transpose()
                    .context("SMTP_PORT is not a port")?
                    .unwrap_or(587),
                username: env::var("SMTP_USERNAME").ok(),
                password: env::var("SMTP_PASSWORD").ok(),
                from: env::var("MAIL_FROM").context("MAIL_FROM must be set with SMTP_HOST")?,
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            production,
            auth,
            smtp,
        })
    }

    /// SMTP when configured, otherwise mails only go to the log.
    pub fn mailer(&self) -> anyhow::Result<Mailer> {
        match &self.smtp {
            Some(smtp) => {
                let mailer = SmtpMailer::new(smtp).context("Invalid SMTP configuration")?;
                Ok(Mailer::Smtp(mailer))
            }
            None => {
                tracing::warn!("SMTP_HOST not set, mails are logged instead of sent");
                Ok(Mailer::Log)
            }
        }
    }
}
