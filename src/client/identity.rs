//! Random participant identities for the room page

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an identity like "user-k3f9x0a2b".
/// No collision detection; two pages may in principle draw the same one.
pub fn generate_identity() -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..9)
        .map(|_| {
            let idx = rng.random_range(0..BASE36.len());
            BASE36[idx] as char
        })
        .collect();

    format!("user-{}", suffix)
}
