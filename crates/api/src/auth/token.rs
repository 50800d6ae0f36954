//! Session token generation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

/// Generate a session token: 32 bytes from a cryptographically secure
/// RNG, base64url-encoded without padding (43 characters).
///
/// Each call is independent; tokens are never derived from clocks,
/// counters, or any other predictable state.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
