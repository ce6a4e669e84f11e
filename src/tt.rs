//! Transposition table for caching search results.
//!
//! Uses Zobrist hashes to store and retrieve minimax scores, so positions
//! reached through different move orders are searched once.
//!
//! The table belongs to one search at a time (`&mut` access only). Entries
//! keep the full 64-bit key and are checked against it on every probe.

use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// A cached score for one position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound_type: BoundType,
}

impl TTEntry {
    pub fn depth(&self) -> u32 {
        u32::from(self.depth)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    /// Whether this entry settles a node searched to `depth` with window
    /// (`alpha`, `beta`). Shallower entries never do.
    #[must_use]
    pub fn usable(&self, depth: u32, alpha: i32, beta: i32) -> bool {
        if self.depth() < depth {
            return false;
        }
        match self.bound_type {
            BoundType::Exact => true,
            BoundType::LowerBound => self.score >= beta,
            BoundType::UpperBound => self.score <= alpha,
        }
    }
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

/// A bucket containing multiple slots
#[derive(Clone, Copy, Default)]
struct TTBucket {
    slots: [Option<TTEntry>; BUCKET_SIZE],
}

pub struct TranspositionTable {
    buckets: Vec<TTBucket>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bucket_size = mem::size_of::<TTBucket>();
        let mut num_buckets = (size_mb * 1024 * 1024) / bucket_size;

        // Ensure num_buckets is a power of 2 for efficient indexing
        num_buckets = num_buckets.next_power_of_two() / 2;
        if num_buckets == 0 {
            num_buckets = 1024;
        }

        TranspositionTable {
            buckets: vec![TTBucket::default(); num_buckets],
            mask: num_buckets - 1,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Probe the table for an entry matching the given key.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        self.buckets[self.index(key)]
            .slots
            .iter()
            .flatten()
            .find(|entry| entry.key == key)
            .copied()
    }

    /// Store an entry in the table.
    ///
    /// An entry for the same key is overwritten outright, whatever its depth.
    /// Otherwise an empty slot is used, or the shallowest entry is evicted.
    pub fn store(&mut self, key: u64, depth: u32, score: i32, bound_type: BoundType) {
        let entry = TTEntry {
            key,
            depth: depth.min(255) as u8,
            score,
            bound_type,
        };
        let idx = self.index(key);
        let bucket = &mut self.buckets[idx];

        // First pass: look for empty slot or matching key
        if let Some(slot) = bucket
            .slots
            .iter_mut()
            .find(|slot| slot.map_or(true, |old| old.key == key))
        {
            *slot = Some(entry);
            return;
        }

        // Second pass: find shallowest slot to replace
        let replace_idx = bucket
            .slots
            .iter()
            .enumerate()
            .min_by_key(|(_, slot)| slot.map_or(0, |old| old.depth))
            .map_or(0, |(idx, _)| idx);
        bucket.slots[replace_idx] = Some(entry);
    }

    /// Total number of entry slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Returns table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample first 1000 buckets for efficiency
        let sample_size = self.buckets.len().min(1000);
        let occupied = self
            .buckets
            .iter()
            .take(sample_size)
            .flat_map(|bucket| bucket.slots.iter())
            .filter(|slot| slot.is_some())
            .count();

        let total_slots = sample_size * BUCKET_SIZE;
        ((occupied as u64 * 1000) / total_slots as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.buckets.fill(TTBucket::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let key = 0x123456789ABCDEF0;

        tt.store(key, 6, 500, BoundType::Exact);

        let entry = tt.probe(key).expect("should find entry");
        assert_eq!(entry.depth(), 6);
        assert_eq!(entry.score(), 500);
        assert_eq!(entry.bound_type(), BoundType::Exact);
    }

    #[test]
    fn test_no_false_positives() {
        let mut tt = TranspositionTable::new(1);
        let key1 = 0x123456789ABCDEF0;
        let key2 = 0xFEDCBA9876543210;

        tt.store(key1, 6, 500, BoundType::Exact);

        assert!(tt.probe(key2).is_none());
    }

    #[test]
    fn test_same_key_overwrites_deeper_entry() {
        let mut tt = TranspositionTable::new(1);
        tt.store(42, 8, 100, BoundType::Exact);
        tt.store(42, 2, -30, BoundType::UpperBound);

        let entry = tt.probe(42).expect("entry");
        assert_eq!(entry.depth(), 2);
        assert_eq!(entry.score(), -30);
    }

    #[test]
    fn test_shallow_entries_are_not_usable() {
        let entry = TTEntry {
            key: 1,
            depth: 3,
            score: 10,
            bound_type: BoundType::Exact,
        };
        assert!(entry.usable(3, -100, 100));
        assert!(!entry.usable(4, -100, 100));

        let lower = TTEntry {
            bound_type: BoundType::LowerBound,
            ..entry
        };
        assert!(lower.usable(2, -100, 5));
        assert!(!lower.usable(2, -100, 50));
    }

    #[test]
    fn test_clear_empties_table() {
        let mut tt = TranspositionTable::new(1);
        for key in 0..500u64 {
            tt.store(key, 1, 0, BoundType::Exact);
        }
        assert!(tt.hashfull_per_mille() > 0);
        tt.clear();
        assert_eq!(tt.hashfull_per_mille(), 0);
        assert!(tt.probe(7).is_none());
    }

    #[test]
    fn test_full_bucket_evicts_shallowest() {
        let mut tt = TranspositionTable::new(1);
        let stride = (tt.mask as u64) + 1;
        // Five keys sharing one bucket
        for (i, depth) in [5u32, 1, 7, 3].iter().enumerate() {
            tt.store(i as u64 * stride, *depth, 0, BoundType::Exact);
        }
        tt.store(4 * stride, 4, 0, BoundType::Exact);

        assert!(tt.probe(stride).is_none(), "depth-1 entry should be evicted");
        assert!(tt.probe(4 * stride).is_some());
        assert!(tt.probe(2 * stride).is_some());
    }
}
