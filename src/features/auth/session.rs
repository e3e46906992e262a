//! Durable session storage backed by same-origin `localStorage`. Three keys
//! survive page reloads: the raw identity token, the pending login nonce, and
//! the last-connected wallet address. All three are cleared on logout; a
//! wallet disconnect leaves the token in place so a later reconnect can
//! rehydrate without a fresh sign-in.

/// Raw identity token returned by the provider.
pub const ID_TOKEN_KEY: &str = "zk_id_token";
/// Nonce issued by the login initiator, pending until the callback consumes it.
pub const NONCE_KEY: &str = "zk_login_nonce";
/// Address of the last-connected wallet account.
pub const WALLET_ADDRESS_KEY: &str = "walletAddress";

pub fn stored_id_token() -> Option<String> {
    read(ID_TOKEN_KEY)
}

pub fn set_id_token(token: &str) {
    write(ID_TOKEN_KEY, token);
}

pub fn clear_id_token() {
    remove(ID_TOKEN_KEY);
}

/// Reads and removes the pending nonce; it is valid for one callback only.
pub fn take_pending_nonce() -> Option<String> {
    let nonce = read(NONCE_KEY);
    remove(NONCE_KEY);
    nonce
}

pub fn set_pending_nonce(nonce: &str) {
    write(NONCE_KEY, nonce);
}

pub fn wallet_address() -> Option<String> {
    read(WALLET_ADDRESS_KEY)
}

pub fn set_wallet_address(address: &str) {
    write(WALLET_ADDRESS_KEY, address);
}

pub fn clear_wallet_address() {
    remove(WALLET_ADDRESS_KEY);
}

/// Removes every session key. Used on explicit logout.
pub fn clear_all() {
    remove(ID_TOKEN_KEY);
    remove(NONCE_KEY);
    remove(WALLET_ADDRESS_KEY);
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}
