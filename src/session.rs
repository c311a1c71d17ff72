use actix_session::Session;

const FLASH_KEY: &str = "flash";

/// Read and clear the one-shot flash message.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Failed to store flash message: {e}");
    }
}
