pub mod csrf;
pub mod deck_store;

use actix_session::Session;

pub use deck_store::DeckStore;

const DECK_KEY: &str = "deck_key";
const FLASH_KEY: &str = "flash";

/// Key of this visitor's deck in the `DeckStore`, generated on first use.
pub fn get_or_create_deck_key(session: &Session) -> String {
    if let Ok(Some(key)) = session.get::<String>(DECK_KEY) {
        return key;
    }
    let key = csrf::generate_token();
    let _ = session.insert(DECK_KEY, &key);
    key
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
