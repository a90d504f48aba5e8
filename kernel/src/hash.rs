//! Domain-separated content hashing for search reports.
//!
//! Every digest is `sha256(domain_prefix || data)` rendered as
//! `"sha256:<hex>"`. Callers hash the output of
//! [`crate::canon::canonical_json_bytes`], never ad-hoc serializations.

use sha2::{Digest, Sha256};

/// Declares `HashDomain`, its prefix bytes and `ALL` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`canonical_hash`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw null-terminated prefix bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }
    };
}

define_hash_domains! {
    /// A single search result report.
    SearchReport => b"PATHFIND::SEARCH_REPORT::V1\0",
    /// A batch of reports produced by one runner invocation.
    ReportBatch => b"PATHFIND::REPORT_BATCH::V1\0",
}

/// A content hash in `"algorithm:hex_digest"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"`. Returns `None` when either side is empty
    /// or the separator is missing.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    let colon = "sha256".len();
    ContentHash { full, colon }
}
