//! Optimized collection types for sdfont.
//!
//! Font tables are keyed by code point and looked up once per laid out glyph,
//! so every map in the text crates goes through these AHash-backed aliases.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert(65u32, "A");
        assert_eq!(map.get(&65), Some(&"A"));
        assert_eq!(map.get(&66), None);
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(0x1F600u32);
        assert!(set.contains(&0x1F600));
    }
}
