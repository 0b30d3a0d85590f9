use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// SMTP account, also used as the sender address. Unset means dry-run mail.
    pub email_user: Option<String>,
    /// SMTP password (an app password for Gmail)
    pub email_pass: Option<String>,
    /// Operator mailbox receiving contact submissions
    pub contact_recipient: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Upper bound on a single transport call
    pub smtp_timeout: Duration,
    /// Directory holding `portfolio.html` and its assets
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let email_user = non_empty_var("EMAIL_USER");

        Self {
            port: parse_var("PORT", 3000),
            contact_recipient: non_empty_var("CONTACT_RECIPIENT").or_else(|| email_user.clone()),
            email_user,
            email_pass: non_empty_var("EMAIL_PASS"),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: parse_var("SMTP_PORT", 587),
            smtp_timeout: Duration::from_secs(parse_var("SMTP_TIMEOUT_SECS", 10)),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        }
    }

    /// Check if SMTP delivery is configured
    pub fn smtp_enabled(&self) -> bool {
        self.email_user.is_some() && self.email_pass.is_some()
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("portfolio.html")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
