use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for category slugs: lowercase alphanumeric with single hyphens
    /// - Valid: "food-prep", "tutoring", "senior-support"
    /// - Invalid: "-prep", "prep-", "food--prep", "Food", "food_prep"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Derive a URL-safe slug from a display name. Lowercases, collapses runs of
/// non-alphanumeric characters into single hyphens, and trims hyphens at
/// both ends. The result matches `SLUG_REGEX` whenever the name contains at
/// least one ASCII alphanumeric character; otherwise it is empty and the
/// caller must reject the name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Escape LIKE/ILIKE metacharacters so a search term matches literally.
pub fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("food-prep"));
        assert!(SLUG_REGEX.is_match("tutoring"));
        assert!(SLUG_REGEX.is_match("senior-support"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("cat123"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-prep")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("prep-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("food--prep")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Food")); // uppercase
        assert!(!SLUG_REGEX.is_match("food_prep")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("food prep")); // space
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Food Prep"), "food-prep");
        assert_eq!(slugify("Senior Support"), "senior-support");
        assert_eq!(slugify("Tutoring"), "tutoring");
        assert_eq!(slugify("  Sports & Recreation  "), "sports-recreation");
        assert_eq!(slugify("Other"), "other");
    }

    #[test]
    fn test_slugify_output_is_valid_slug() {
        for name in ["Food Prep!", "A  B  C", "--x--", "Crafts/Art"] {
            assert!(SLUG_REGEX.is_match(&slugify(name)), "name: {:?}", name);
        }
    }

    #[test]
    fn test_slugify_symbol_only_name_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("---"), "");
        assert!(!SLUG_REGEX.is_match(""));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50% off"), "50\\% off");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
