use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Absent means athletes are kept in memory only.
    pub database_url: Option<String>,
    /// Reject genders other than male/female instead of defaulting to female.
    pub strict_gender: bool,
    pub chat_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            strict_gender: parse_flag(std::env::var("STRICT_GENDER").ok().as_deref())
                .context("STRICT_GENDER must be true or false")?,
            chat_capacity: std::env::var("CHAT_CAPACITY")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .context("CHAT_CAPACITY must be a number")?,
        })
    }
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "" | "0" | "false" | "no" => Ok(false),
            "1" | "true" | "yes" => Ok(true),
            other => anyhow::bail!("unexpected flag value '{}'", other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(!parse_flag(None).unwrap());
        assert!(!parse_flag(Some("false")).unwrap());
        assert!(parse_flag(Some("TRUE")).unwrap());
        assert!(parse_flag(Some(" 1 ")).unwrap());
        assert!(parse_flag(Some("maybe")).is_err());
    }
}
