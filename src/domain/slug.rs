//! Slug derivation for catalog entities.

/// Derive the URL token stored alongside an entity name.
///
/// Deterministic: lowercase, hyphen-separated, ASCII-transliterated.
/// Two entities with the same name share the same slug; no uniqueness
/// is enforced.
pub fn slugify(name: &str) -> String {
    slug::slugify(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Acme Corp"), "acme-corp");
    }

    #[test]
    fn slugify_transliterates_accents() {
        assert_eq!(slugify("Électro Ménager"), "electro-menager");
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("L'Oréal & Co."), "l-oreal-co");
    }

    #[test]
    fn slugify_is_deterministic_for_duplicates() {
        assert_eq!(slugify("Twin Brand"), slugify("Twin Brand"));
    }
}
