/// Turn arbitrary text into a URL- and anchor-safe slug.
///
/// Delegates to the `slug` crate, which fixes the policy: ASCII is lowercased,
/// non-ASCII characters are transliterated to their closest ASCII equivalent,
/// each run of remaining non-alphanumeric characters collapses to a single
/// `-`, and leading/trailing separators are trimmed. Empty or all-punctuation
/// input yields an empty string. Total over all inputs, never panics.
pub fn slug(input: &str) -> String {
    slug::slugify(input)
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slug("Hello World"), "hello-world");
    }

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(slug("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn strips_punctuation_runs() {
        assert_eq!(slug("C++ & Rust!"), "c-rust");
    }

    #[test]
    fn empty_and_all_punctuation_yield_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("?!...---"), "");
    }

    #[test]
    fn transliterates_non_ascii() {
        assert_eq!(slug("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn idempotent_on_own_output() {
        for input in ["Hello World", "  Multiple   Spaces  ", "C++ & Rust!", "", "Crème Brûlée"] {
            let once = slug(input);
            assert_eq!(slug(&once), once);
        }
    }

    #[test]
    fn output_has_no_whitespace_or_uppercase() {
        for input in ["A B\tC\nD", "SHOUTING TEXT", "mixed Case 123", " padded out "] {
            let out = slug(input);
            assert!(!out.chars().any(char::is_whitespace), "whitespace in {out:?}");
            assert!(!out.chars().any(|c| c.is_ascii_uppercase()), "uppercase in {out:?}");
        }
    }
}
