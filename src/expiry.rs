use serde::{Deserialize, Serialize};
use std::fmt;

/// A named reminder with an absolute expiration minute.
///
/// Records are immutable once created; the session clock only reorders them.
/// Duplicates (same owner and label) are permitted and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    pub owner: String,
    pub label: String,
    pub expires_at: i64,
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s {} (at {}min)", self.owner, self.label, self.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_display() {
        let expiry = Expiry {
            owner: "Thorin".to_string(),
            label: "Haste".to_string(),
            expires_at: 30,
        };

        let display_str = format!("{}", expiry);
        assert!(display_str.contains("Thorin"));
        assert!(display_str.contains("Haste"));
        assert!(display_str.contains("30"));
    }
}
