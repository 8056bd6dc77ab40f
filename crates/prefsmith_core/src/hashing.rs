//! Define the stable hash-code semantics shared by generated code and the generator's IR evaluator.
//!
//! Generated `hash_code` methods fold every property into a running accumulator:
//! `acc = acc * multiplier + hash(value)` (wrapping), starting from a seed. The per-value hashes below are
//! deterministic across processes, unlike `std::hash::Hash` with a randomized hasher.
//!
//! ## Notes
//! - Floating point zero hashes the same regardless of sign, so `0.0 == -0.0` keeps equal hashes.
//! - Ordered collections fold with 31; unordered collections sum their element hashes so iteration order does not
//!   matter.
//!
//! ## Examples
//! ```rust
//! use prefsmith_core::hashing;
//!
//! let acc = hashing::combine(hashing::DEFAULT_SEED, hashing::DEFAULT_MULTIPLIER, hashing::bool_hash(true));
//! assert_eq!(acc, 17 * 37 + 1231);
//! assert_eq!(hashing::unordered_hash([1, 2, 3]), hashing::unordered_hash([3, 1, 2]));
//! ```

/// Default accumulator seed.
pub const DEFAULT_SEED: i32 = 17;

/// Default accumulator multiplier.
pub const DEFAULT_MULTIPLIER: i32 = 37;

/// Fold one value hash into the accumulator.
pub fn combine(acc: i32, multiplier: i32, value: i32) -> i32 {
    acc.wrapping_mul(multiplier).wrapping_add(value)
}

pub fn bool_hash(value: bool) -> i32 {
    if value { 1231 } else { 1237 }
}

pub fn int_hash(value: i32) -> i32 {
    value
}

pub fn long_hash(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as u32 as i32
}

pub fn float_hash(value: f32) -> i32 {
    if value == 0.0 { 0 } else { value.to_bits() as i32 }
}

pub fn double_hash(value: f64) -> i32 {
    if value == 0.0 {
        0
    } else {
        long_hash(value.to_bits() as i64)
    }
}

pub fn char_hash(value: char) -> i32 {
    value as u32 as i32
}

pub fn str_hash(value: &str) -> i32 {
    value
        .chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(char_hash(c)))
}

/// Hash of an ordered sequence of element hashes.
pub fn ordered_hash(elements: impl IntoIterator<Item = i32>) -> i32 {
    elements
        .into_iter()
        .fold(1i32, |h, e| h.wrapping_mul(31).wrapping_add(e))
}

/// Hash of an unordered collection of element hashes.
pub fn unordered_hash(elements: impl IntoIterator<Item = i32>) -> i32 {
    elements.into_iter().fold(0i32, |h, e| h.wrapping_add(e))
}

/// Hash of one map entry.
pub fn entry_hash(key: i32, value: i32) -> i32 {
    key ^ value
}
