use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub static_dir: String,
    pub mail: MailConfig,
}

#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from_name: String,
    pub recipient: String,
    pub subject: String,
    pub send_timeout: Duration,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("from_name", &self.from_name)
            .field("recipient", &self.recipient)
            .field("subject", &self.subject)
            .field("send_timeout", &self.send_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("OROS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid OROS_HOST: {e}"))?;

        let port: u16 = env_or("OROS_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid OROS_PORT: {e}"))?;

        let max_body_size: usize = env_or("OROS_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid OROS_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("OROS_LOG_LEVEL", "info");
        let static_dir = env_or("OROS_STATIC_DIR", "static");

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            static_dir,
            mail: MailConfig::from_env()?,
        })
    }
}

impl MailConfig {
    pub fn from_env() -> Result<Self, String> {
        let user = env_required("MAIL_USER")?;
        let pass = env_required("MAIL_PASS")?;
        let recipient = env_required("MAIL_RECIPIENT")?;

        let port: u16 = env_or("MAIL_PORT", "587")
            .parse()
            .map_err(|e| format!("Invalid MAIL_PORT: {e}"))?;

        let send_timeout = parse_timeout_secs(&env_or("MAIL_TIMEOUT_SECS", "10"))?;

        Ok(MailConfig {
            host: env_or("MAIL_HOST", "smtp.gmail.com"),
            port,
            user,
            pass,
            from_name: env_or("MAIL_FROM_NAME", "House of OROS"),
            recipient,
            subject: env_or("MAIL_SUBJECT", "New Get Scouted Application"),
            send_timeout,
        })
    }
}

/// A zero timeout would fail every send, so it is rejected.
fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("Invalid MAIL_TIMEOUT_SECS: {e}"))?;
    if secs == 0 {
        return Err("Invalid MAIL_TIMEOUT_SECS: must be at least 1".to_string());
    }
    Ok(Duration::from_secs(secs))
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
