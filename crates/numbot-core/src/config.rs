use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, Result};

/// Typed configuration for the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Empty means everyone may use the bot.
    pub telegram_allowed_users: Vec<i64>,
    /// Optional image sent with the `/start` greeting.
    pub start_photo_path: Option<PathBuf>,
    /// Replies longer than this are split into several messages.
    pub telegram_safe_limit: usize,
}

impl Config {
    pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;
    const MIN_SAFE_LIMIT: usize = 200;

    /// Load from the process environment, after applying `.env` if present.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let telegram_allowed_users = parse_csv_i64(lookup("TELEGRAM_ALLOWED_USERS"))?;

        let start_photo_path = lookup("START_PHOTO_PATH")
            .and_then(non_empty)
            .map(PathBuf::from);

        let telegram_safe_limit = match lookup("TELEGRAM_SAFE_LIMIT").and_then(non_empty) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!("TELEGRAM_SAFE_LIMIT must be a number, got {raw:?}"))
            })?,
            None => 4000,
        }
        .clamp(Self::MIN_SAFE_LIMIT, Self::TELEGRAM_MESSAGE_LIMIT);

        Ok(Self {
            telegram_bot_token: telegram_bot_token.trim().to_string(),
            telegram_allowed_users,
            start_photo_path,
            telegram_safe_limit,
        })
    }
}

/// Returns how many variables were set from the file.
fn load_dotenv_if_present(path: &Path) -> usize {
    let Ok(contents) = fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "no dotenv file");
        return 0;
    };

    let mut applied = 0;
    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            tracing::debug!(key = %key, "dotenv entry shadowed by environment");
            continue; // do not override existing env
        }
        env::set_var(key, val);
        applied += 1;
    }

    tracing::debug!(path = %path.display(), applied, "dotenv applied");
    applied
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = &val[1..val.len() - 1];
        }

        out.push((key.to_string(), val.to_string()));
    }
    out
}

fn parse_csv_i64(v: Option<String>) -> Result<Vec<i64>> {
    v.unwrap_or_default()
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| Error::Config(format!("invalid user id in TELEGRAM_ALLOWED_USERS: {s:?}")))
        })
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_are_public_without_photo() {
        let cfg = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(cfg.telegram_bot_token, "123:abc");
        assert!(cfg.telegram_allowed_users.is_empty());
        assert_eq!(cfg.start_photo_path, None);
        assert_eq!(cfg.telegram_safe_limit, 4000);
    }

    #[test]
    fn reads_optional_settings() {
        let cfg = Config::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("TELEGRAM_ALLOWED_USERS", " 10, 20 ,,"),
            ("START_PHOTO_PATH", "img/Logo.jpg"),
            ("TELEGRAM_SAFE_LIMIT", "99999"),
        ]))
        .unwrap();
        assert_eq!(cfg.telegram_allowed_users, vec![10, 20]);
        assert_eq!(cfg.start_photo_path, Some(PathBuf::from("img/Logo.jpg")));
        assert_eq!(cfg.telegram_safe_limit, Config::TELEGRAM_MESSAGE_LIMIT);
    }

    #[test]
    fn rejects_garbage_numbers() {
        let err = Config::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("TELEGRAM_ALLOWED_USERS", "10,bob"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("bob"));

        let err = Config::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("TELEGRAM_SAFE_LIMIT", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn dotenv_file_fills_only_missing_variables() {
        let pid = std::process::id();
        let fresh = format!("NUMBOT_TEST_FRESH_{pid}");
        let taken = format!("NUMBOT_TEST_TAKEN_{pid}");
        env::set_var(&taken, "from-env");

        let path = env::temp_dir().join(format!("numbot-dotenv-{pid}"));
        fs::write(&path, format!("{fresh}=from-file\n{taken}=from-file\n")).unwrap();

        assert_eq!(load_dotenv_if_present(&path), 1);
        assert_eq!(env::var(&fresh).unwrap(), "from-file");
        assert_eq!(env::var(&taken).unwrap(), "from-env");

        assert_eq!(load_dotenv_if_present(&path.with_extension("missing")), 0);

        env::remove_var(&fresh);
        env::remove_var(&taken);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn dotenv_parsing_skips_comments_and_strips_quotes() {
        let parsed = parse_dotenv("# comment\n\nTELEGRAM_BOT_TOKEN=\"abc\"\nNOEQ\n =x\nA='b c'\n");
        assert_eq!(
            parsed,
            vec![
                ("TELEGRAM_BOT_TOKEN".to_string(), "abc".to_string()),
                ("A".to_string(), "b c".to_string()),
            ]
        );
    }
}
