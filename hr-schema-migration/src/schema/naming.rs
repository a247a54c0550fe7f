use sha2::{Digest, Sha256};

/// Postgres supports maximum 63 symbols.
/// All exceeding symbols are truncated by the database.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// A length of the hex encoded hash of the identifier
/// when the full name exceeds [`MAX_IDENTIFIER_LEN`]
const HASH_SUFFIX_STRING_LEN: usize = 8;

/// Joins `parts` with underscores. Names that do not fit into
/// [`MAX_IDENTIFIER_LEN`] are cut and suffixed with a short hash of the full
/// name, so two long names sharing a prefix still differ.
pub fn identifier(parts: &[&str]) -> String {
    let name = parts.join("_");
    if name.len() <= MAX_IDENTIFIER_LEN {
        return name;
    }

    let hash = hex::encode(Sha256::digest(name.as_bytes()));
    let prefix = &name[..MAX_IDENTIFIER_LEN - HASH_SUFFIX_STRING_LEN - 1];
    format!(
        "{}_{}",
        prefix.trim_end_matches('_'),
        &hash[..HASH_SUFFIX_STRING_LEN]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_names_are_joined() {
        assert_eq!(identifier(&["ix", "employees", "email"]), "ix_employees_email");
    }

    #[test]
    fn long_names_are_shortened_deterministically() {
        let parts = [
            "fk",
            "performance_review_competency_ratings",
            "competency_level_descriptor_id",
        ];
        let first = identifier(&parts);
        let second = identifier(&parts);
        assert_eq!(first, second);
        assert!(first.len() <= MAX_IDENTIFIER_LEN);
        assert!(first.starts_with("fk_performance_review_competency_ratings_"));
    }

    #[test]
    fn shortened_names_with_common_prefix_differ() {
        let long = "a".repeat(70);
        let first = identifier(&["ix", &long, "first"]);
        let second = identifier(&["ix", &long, "second"]);
        assert_ne!(first, second);
        assert!(first.len() <= MAX_IDENTIFIER_LEN);
        assert!(second.len() <= MAX_IDENTIFIER_LEN);
    }
}
