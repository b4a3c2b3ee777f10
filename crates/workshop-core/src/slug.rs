use regex::Regex;
use std::sync::OnceLock;

static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derive the stable map key for a product from its display name.
///
/// Lowercases, collapses every run of non-alphanumeric characters to a
/// single hyphen, and strips leading/trailing hyphens. The slug is computed
/// once at creation; renaming the display name never changes the key.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = non_alnum_re().replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_slug() {
        assert_eq!(slugify("Acme Tool"), "acme-tool");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(slugify("Acme Tool!!"), "acme-tool");
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn idempotent() {
        let once = slugify("Ore Body Knowledge (v2)");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn matches_already_normalized_input() {
        assert_eq!(slugify("acme tool"), slugify("Acme Tool!!"));
    }

    #[test]
    fn leading_trailing_hyphens_stripped() {
        assert_eq!(slugify("  --Acme--  "), "acme");
    }

    #[test]
    fn empty_and_symbol_only_names_slugify_to_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
