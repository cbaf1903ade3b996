use rand_core::{OsRng, RngCore};

/// Random bytes behind each token; hex encoding doubles the length.
pub const TOKEN_BYTES: usize = 8;

/// Opaque bearer value handed out by `/login`. Nothing about it is stored.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
