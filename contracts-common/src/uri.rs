//! Resolution of per-token metadata URIs.
//!
//! A token's URI is the concatenation of a base URI and the suffix stored at
//! the token's ID. IDs without a suffix resolve to [`NO_URI`].
//!
//! Token IDs are 256-bit integers. To stay independent of any particular
//! big-integer implementation, they are passed around here as little-endian
//! 64-bit limbs, which is the layout exposed by `U256::as_limbs`.

use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::constants::NO_URI;

/// A source of a base URI and an ordered list of per-ID URI suffixes
pub trait UriSource {
    /// The base URI which all suffixes are appended to
    fn base_uri(&self) -> String;

    /// The number of suffixes, i.e. the number of token IDs with a URI
    fn num_suffixes(&self) -> u64;

    /// The suffix at the given index, if any
    fn suffix(&self, index: u64) -> Option<String>;
}

/// An in-memory URI table, as passed to the LITHplus `initialize` method
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriTable {
    /// The base URI
    pub base_uri: String,
    /// The URI suffixes, indexed by token ID
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl UriTable {
    /// Creates a new URI table from a base URI and a list of suffixes
    pub fn new(base_uri: impl Into<String>, suffixes: Vec<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            suffixes,
        }
    }

    /// Resolves the URI for the token ID given as little-endian limbs
    pub fn uri(&self, id_limbs: &[u64; 4]) -> String {
        resolve_uri(self, id_limbs)
    }
}

impl UriSource for UriTable {
    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }

    fn num_suffixes(&self) -> u64 {
        self.suffixes.len() as u64
    }

    fn suffix(&self, index: u64) -> Option<String> {
        let index = usize::try_from(index).ok()?;
        self.suffixes.get(index).cloned()
    }
}

/// Converts a token ID, given as little-endian limbs, into an index into the
/// suffix list. IDs that don't fit in a `u64` have no index.
pub fn id_to_index(id_limbs: &[u64; 4]) -> Option<u64> {
    id_limbs[1..]
        .iter()
        .all(|limb| *limb == 0)
        .then_some(id_limbs[0])
}

/// Resolves the URI of the given token ID against the given source.
///
/// Returns `base_uri + suffixes[id]` if `id < suffixes.len()`, and [`NO_URI`] otherwise.
pub fn resolve_uri<S: UriSource + ?Sized>(source: &S, id_limbs: &[u64; 4]) -> String {
    let suffix = id_to_index(id_limbs)
        .filter(|index| *index < source.num_suffixes())
        .and_then(|index| source.suffix(index));

    match suffix {
        Some(suffix) => {
            let mut uri = source.base_uri();
            uri.push_str(&suffix);
            uri
        }
        None => String::from(NO_URI),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        string::{String, ToString},
        vec,
        vec::Vec,
    };
    use rand::{thread_rng, Rng};

    use super::{id_to_index, resolve_uri, UriSource, UriTable};
    use crate::constants::NO_URI;

    /// The number of random IDs to sample in the out-of-range tests
    const FUZZ_ROUNDS: usize = 1000;

    /// The base URI used in the LITHplus tests
    const BASE_URI: &str = "https://www.lithtoken.io/";

    /// Limbs for a small token ID
    fn id(value: u64) -> [u64; 4] {
        [value, 0, 0, 0]
    }

    /// The URI table deployed in the LITHplus tests
    fn sample_table() -> UriTable {
        UriTable::new(
            BASE_URI,
            vec!["sample0.pdf".to_string(), "sample1.pdf".to_string()],
        )
    }

    #[test]
    fn test_uri_in_range() {
        let table = sample_table();
        assert_eq!(table.uri(&id(0)), "https://www.lithtoken.io/sample0.pdf");
        assert_eq!(table.uri(&id(1)), "https://www.lithtoken.io/sample1.pdf");
    }

    #[test]
    fn test_uri_first_out_of_range() {
        assert_eq!(sample_table().uri(&id(2)), NO_URI);
    }

    #[test]
    fn test_uri_out_of_range_fuzz() {
        let table = sample_table();
        let mut rng = thread_rng();
        let num_suffixes = table.suffixes.len() as u64;

        for _ in 0..FUZZ_ROUNDS {
            let small_id = rng.gen_range(num_suffixes..=u64::MAX);
            assert_eq!(table.uri(&id(small_id)), NO_URI);

            // IDs above 64 bits are always out of range
            let mut wide_id: [u64; 4] = rng.gen();
            wide_id[rng.gen_range(1..4)] |= 1;
            assert_eq!(table.uri(&wide_id), NO_URI);
        }
    }

    #[test]
    fn test_empty_table() {
        let table = UriTable::new(BASE_URI, Vec::new());
        assert_eq!(table.uri(&id(0)), NO_URI);
    }

    #[test]
    fn test_max_id() {
        assert_eq!(sample_table().uri(&[u64::MAX; 4]), NO_URI);
        assert_eq!(id_to_index(&[u64::MAX; 4]), None);
        assert_eq!(id_to_index(&[u64::MAX, 0, 0, 0]), Some(u64::MAX));
    }

    /// A source whose reported length exceeds its actual contents,
    /// as can happen when reading a partially-written storage array
    struct ShortSource;

    impl UriSource for ShortSource {
        fn base_uri(&self) -> String {
            BASE_URI.to_string()
        }

        fn num_suffixes(&self) -> u64 {
            2
        }

        fn suffix(&self, index: u64) -> Option<String> {
            (index == 0).then(|| "only.pdf".to_string())
        }
    }

    #[test]
    fn test_missing_suffix_in_source() {
        assert_eq!(
            resolve_uri(&ShortSource, &id(0)),
            "https://www.lithtoken.io/only.pdf"
        );
        assert_eq!(resolve_uri(&ShortSource, &id(1)), NO_URI);
    }

    #[test]
    fn test_manifest_deserialization() {
        let manifest = r#"{
            "base_uri": "https://ipfs.io/ipfs/",
            "suffixes": ["QmA", "QmB"]
        }"#;
        let table: UriTable = serde_json::from_str(manifest).unwrap();
        assert_eq!(table.uri(&id(1)), "https://ipfs.io/ipfs/QmB");

        let bare: UriTable = serde_json::from_str(r#"{ "base_uri": "x" }"#).unwrap();
        assert!(bare.suffixes.is_empty());
    }
}
