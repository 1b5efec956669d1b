use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::models::slide::Deck;

pub const DEFAULT_IDLE_TTL_SECS: u64 = 2 * 60 * 60;
pub const DEFAULT_MAX_DECKS: usize = 10_000;

struct Entry {
    deck: Deck,
    last_used: Instant,
}

/// In-memory decks keyed by the visitor's session deck key.
///
/// A deck is only stored once it is first mutated. Whenever a new deck is
/// stored, decks idle for longer than the TTL are dropped, and if the store
/// is still full the least recently used deck makes room.
#[derive(Clone)]
pub struct DeckStore {
    decks: Arc<Mutex<HashMap<String, Entry>>>,
    idle_ttl: Duration,
    max_decks: usize,
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_IDLE_TTL_SECS), DEFAULT_MAX_DECKS)
    }
}

impl DeckStore {
    pub fn new(idle_ttl: Duration, max_decks: usize) -> Self {
        Self {
            decks: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
            max_decks: max_decks.max(1),
        }
    }

    /// Run `f` against the deck for `key`, storing the default deck first if needed.
    pub fn with_deck<R>(&self, key: &str, f: impl FnOnce(&mut Deck) -> R) -> R {
        let mut map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        if !map.contains_key(key) {
            self.make_room(&mut map, now);
        }
        let entry = map.entry(key.to_string()).or_insert_with(|| Entry { deck: Deck::default(), last_used: now });
        entry.last_used = now;
        f(&mut entry.deck)
    }

    /// Copy of the deck for `key`, or the default deck when none is stored.
    /// Never stores anything.
    pub fn snapshot(&self, key: &str) -> Deck {
        let mut map = self.decks.lock().unwrap_or_else(|e| e.into_inner());
        match map.get_mut(key) {
            Some(entry) => {
                entry.last_used = Instant::now();
                entry.deck.clone()
            }
            None => Deck::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.decks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn make_room(&self, map: &mut HashMap<String, Entry>, now: Instant) {
        let ttl = self.idle_ttl;
        let before = map.len();
        map.retain(|_, e| now.duration_since(e.last_used) < ttl);
        if map.len() < before {
            log::debug!("Evicted {} idle deck(s)", before - map.len());
        }
        while map.len() >= self.max_decks {
            let oldest = map
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    map.remove(&k);
                    log::debug!("Deck store full ({} decks), evicted least recently used", self.max_decks);
                }
                None => break,
            }
        }
    }
}
