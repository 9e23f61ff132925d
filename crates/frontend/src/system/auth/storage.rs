use contracts::system::auth::{decode_session, encode_session, SessionUser};
use web_sys::window;

const SESSION_KEY: &str = "motionmatrix_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the durable session copy, overwriting any prior value
pub fn save_session(user: &SessionUser) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_KEY, &encode_session(user));
    }
}

/// Read the durable session copy. Absent or malformed data means anonymous.
pub fn load_session() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    decode_session(&raw)
}

/// Clear the durable session copy
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
