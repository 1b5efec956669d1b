use std::path::PathBuf;
use std::time::Duration;

use actix_web::cookie::Key;

use crate::session::deck_store::{DEFAULT_IDLE_TTL_SECS, DEFAULT_MAX_DECKS};

/// Runtime settings read from the environment (and `.env` when present).
///
/// | Variable | Default |
/// |---|---|
/// | `DECKHAND_BIND` | `127.0.0.1:8080` |
/// | `DECKHAND_APP_NAME` | `Deckhand` |
/// | `DECKHAND_STATIC_DIR` | `./static` |
/// | `DECKHAND_CATALOG` | built-in catalog |
/// | `DECKHAND_DECK_TTL_MINS` | `120` |
/// | `DECKHAND_MAX_DECKS` | `10000` |
/// | `SESSION_KEY` | random key, sessions lost on restart |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub app_name: String,
    pub static_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub deck_ttl: Duration,
    pub max_decks: usize,
    pub session_key: Option<Vec<u8>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            app_name: "Deckhand".to_string(),
            static_dir: PathBuf::from("./static"),
            catalog_path: None,
            deck_ttl: Duration::from_secs(DEFAULT_IDLE_TTL_SECS),
            max_decks: DEFAULT_MAX_DECKS,
            session_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset or blank values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let deck_ttl = match get("DECKHAND_DECK_TTL_MINS") {
            Some(raw) => match raw.trim().parse::<u64>().ok().and_then(|mins| mins.checked_mul(60)) {
                Some(secs) => Duration::from_secs(secs),
                None => {
                    log::warn!("DECKHAND_DECK_TTL_MINS is not a usable number of minutes ({raw:?}); using default");
                    defaults.deck_ttl
                }
            },
            None => defaults.deck_ttl,
        };

        let max_decks = match get("DECKHAND_MAX_DECKS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!("DECKHAND_MAX_DECKS must be a positive number ({raw:?}); using default");
                    defaults.max_decks
                }
            },
            None => defaults.max_decks,
        };

        let session_key = match get("SESSION_KEY") {
            Some(val) if val.len() >= 64 => Some(val.into_bytes()),
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                None
            }
            None => None,
        };

        Self {
            bind: get("DECKHAND_BIND").unwrap_or(defaults.bind),
            app_name: get("DECKHAND_APP_NAME").unwrap_or(defaults.app_name),
            static_dir: get("DECKHAND_STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            catalog_path: get("DECKHAND_CATALOG").map(PathBuf::from),
            deck_ttl,
            max_decks,
            session_key,
        }
    }

    /// Cookie signing key for the session middleware.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(bytes) => Key::from(bytes.as_slice()),
            None => {
                log::warn!("No usable SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
