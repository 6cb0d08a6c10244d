/// djb2 seed. Must stay prime; 5381 gives the well known distribution.
const STARTING_SEED: u32 = 5381;
const SHIFT_MULTIPLIER: u32 = 5;

/// Compresses `bytes` into a bucket index in `[0, capacity)` using the djb2
/// recurrence `hash = hash * 33 + byte`, wrapping modulo 2^32.
///
/// Collisions are left to the caller (probing, chaining). Panics if
/// `capacity` is zero.
pub fn generate_key(bytes: &[u8], capacity: u32) -> u32 {
    let mut hash = STARTING_SEED;
    for b in bytes {
        // (hash << 5) + hash == hash * 33
        hash = (hash << SHIFT_MULTIPLIER)
            .wrapping_add(hash)
            .wrapping_add(*b as u32);
    }
    hash % capacity
}

pub fn generate_key_str(str: &str, capacity: u32) -> u32 {
    generate_key(str.as_bytes(), capacity)
}
