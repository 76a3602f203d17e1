use contracts::system::auth::UserProfile;
use wasm_bindgen::JsCast;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Cookie mirrored for whatever serves the app: a request-level check
/// can redirect on its presence without touching localStorage. The name
/// must match on both layers.
const AUTH_COOKIE: &str = "auth-token";
const COOKIE_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Persist token and user. Storage failures are ignored; the in-memory
/// session still works for the current page lifetime.
pub fn save_session(token: &str, user: &UserProfile) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
    set_auth_cookie(token);
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Restore the persisted user profile. A payload that fails to parse is
/// dropped silently (with a diagnostic log) rather than failing session
/// restoration.
pub fn get_user() -> Option<UserProfile> {
    let storage = local_storage()?;
    let json = storage.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("dropping malformed persisted user: {}", e);
            let _ = storage.remove_item(USER_KEY);
            None
        }
    }
}

/// Clear every persisted trace of the session. Must never fail: each
/// step swallows its own errors so logout can always proceed.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    clear_auth_cookie();
}

pub fn set_auth_cookie(token: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!(
            "{}={}; max-age={}; path=/; samesite=strict",
            AUTH_COOKIE, token, COOKIE_MAX_AGE_SECS
        ));
    }
}

fn clear_auth_cookie() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{}=; max-age=0; path=/", AUTH_COOKIE));
    }
}
