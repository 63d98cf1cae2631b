use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Document-store settings. Collections live as JSON files under `data_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

fn default_data_dir() -> String { "data".to_string() }

/// Outbound mail settings. An empty `host` means SMTP is not configured and
/// the server falls back to logging outbound mail instead of sending it.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_smtp_from")]
    pub from: String,
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            secure: false,
            user: String::new(),
            password: String::new(),
            from: default_smtp_from(),
            admin_email: default_admin_email(),
        }
    }
}

fn default_smtp_port() -> u16 { 587 }
fn default_smtp_from() -> String { "noreply@mdinti.org".to_string() }
fn default_admin_email() -> String { "admin@mdinti.org".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.smtp.normalize_from_env();
        self.smtp.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
    }
}

impl SmtpConfig {
    /// Fill unset fields from the SMTP_* environment variables.
    pub fn normalize_from_env(&mut self) {
        if self.host.trim().is_empty() {
            if let Ok(host) = std::env::var("SMTP_HOST") {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var("SMTP_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.port = port;
            }
        }
        if let Ok(secure) = std::env::var("SMTP_SECURE") {
            self.secure = secure == "true";
        }
        if self.user.trim().is_empty() {
            if let Ok(user) = std::env::var("SMTP_USER") {
                self.user = user;
            }
        }
        if self.password.trim().is_empty() {
            if let Ok(password) = std::env::var("SMTP_PASSWORD") {
                self.password = password;
            }
        }
        if let Ok(from) = std::env::var("SMTP_FROM") {
            if !from.trim().is_empty() {
                self.from = from;
            }
        }
        if let Ok(admin) = std::env::var("ADMIN_EMAIL") {
            if !admin.trim().is_empty() {
                self.admin_email = admin;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("smtp.port must be in 1..=65535"));
        }
        if !self.from.contains('@') {
            return Err(anyhow!("smtp.from must be an email address"));
        }
        if !self.admin_email.contains('@') {
            return Err(anyhow!("smtp.admin_email must be an email address"));
        }
        Ok(())
    }

    /// Whether an SMTP relay has been configured at all.
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().expect("defaults validate");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.data_dir, "data");
        assert_eq!(cfg.smtp.port, 587);
        assert!(!cfg.smtp.is_configured());
        assert_eq!(cfg.smtp.from, "noreply@mdinti.org");
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [smtp]
            host = "smtp.example.org"
            secure = true
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.storage.data_dir, "data");
        assert!(cfg.smtp.is_configured());
        assert!(cfg.smtp.secure);
        assert_eq!(cfg.smtp.port, 587);
    }

    #[test]
    fn rejects_bad_from_address() {
        let mut cfg = AppConfig::default();
        cfg.smtp.from = "not-an-address".into();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
