use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session snapshot (token + user) to localStorage.
pub fn save_session(token: &str, user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Get the persisted token, if any.
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get the persisted user snapshot.
///
/// A malformed snapshot (old format, truncated write) yields `None` instead
/// of failing session restore.
pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::error!("failed to parse persisted user snapshot: {}", e);
            None
        }
    }
}

/// Clear the persisted session.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
