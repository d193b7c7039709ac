// Identifier Allocator
// Short lowercase alphanumeric ids for destinations without a natural name

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Shortest id handed out, regardless of the requested length
pub const MIN_ID_LENGTH: usize = 5;

/// Allocates ids that are unique within one allocator (one compile call).
///
/// Ids the caller already uses (service keys, fixed ids) should be
/// [`reserve`](IdAllocator::reserve)d first so generated ids never shadow them.
pub struct IdAllocator {
    rng: StdRng,
    issued: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            issued: HashSet::new(),
        }
    }

    /// Deterministic allocator, for reproducible descriptors
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            issued: HashSet::new(),
        }
    }

    /// Mark an externally chosen id as taken. Returns false if it was already taken.
    pub fn reserve(&mut self, id: &str) -> bool {
        self.issued.insert(id.to_string())
    }

    pub fn is_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    /// A fresh id of `length` (at least [`MIN_ID_LENGTH`]) lowercase alphanumerics
    pub fn new_id(&mut self, length: usize) -> String {
        let length = length.max(MIN_ID_LENGTH);
        loop {
            let id: String = (0..length)
                .map(|_| ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())] as char)
                .collect();
            if self.issued.insert(id.clone()) {
                return id;
            }
            log::debug!("Generated id '{}' already issued, drawing again", id);
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
