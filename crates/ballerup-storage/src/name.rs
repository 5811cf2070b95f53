//! Participant name normalization.
//!
//! Every name entering the store passes through [`normalize_name`]:
//! leading/trailing whitespace is trimmed and internal runs of whitespace
//! collapse to a single space, so `"  Bob   Lee  "` stores as `"Bob Lee"`.

use crate::error::StorageError;

/// Normalizes a raw participant name.
///
/// Returns [`StorageError::EmptyName`] if nothing remains after trimming.
pub fn normalize_name(raw: &str) -> Result<String, StorageError> {
    let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(StorageError::EmptyName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize_name("  Bob   Lee  ").unwrap(), "Bob Lee");
        assert_eq!(normalize_name("Alice").unwrap(), "Alice");
        assert_eq!(normalize_name("\tAda \n Lovelace ").unwrap(), "Ada Lovelace");
    }

    #[test]
    fn preserves_case() {
        assert_eq!(normalize_name(" McLovin ").unwrap(), "McLovin");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(normalize_name(""), Err(StorageError::EmptyName)));
        assert!(matches!(normalize_name("   \t\n"), Err(StorageError::EmptyName)));
    }
}
