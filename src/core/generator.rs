//! Collision-free identifier generation.

use std::collections::HashSet;
use uuid::Uuid;

/// Generate a fresh identifier for `field_path`, guaranteed absent from `used`.
///
/// Without a seed this draws random v4 identifiers, regenerating on the
/// (vanishingly unlikely) collision. With a seed the identifier is the v5 hash
/// of `"<field_path>|<seed>"`, so repeated runs over the same manifest assign
/// the same values; a collision retries with input
/// `"<field_path>|<seed>|retry:<attempt>"`, which keeps even the retried
/// result reproducible.
///
/// The returned identifier is inserted into `used` before returning, so one
/// shared set threaded through a whole run prevents intra-run collisions
/// without the caller having to register each result.
///
/// The retry loop has no attempt cap. Against any realistic exclusion set the
/// expected retry count is zero; a cap would change observable seeded output.
pub fn generate(field_path: &str, used: &mut HashSet<String>, seed: Option<&str>) -> String {
    let mut attempt: u32 = 0;
    loop {
        let id = match seed {
            Some(seed) => {
                let input = if attempt == 0 {
                    format!("{field_path}|{seed}")
                } else {
                    format!("{field_path}|{seed}|retry:{attempt}")
                };
                Uuid::new_v5(&Uuid::NAMESPACE_DNS, input.as_bytes()).to_string()
            }
            None => Uuid::new_v4().to_string(),
        };
        if used.insert(id.clone()) {
            return id;
        }
        attempt += 1;
    }
}
