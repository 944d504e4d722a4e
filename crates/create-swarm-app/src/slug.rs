//! Package name slugs

/// Lowercase `name`, collapse every run of characters outside `[a-z0-9]` to
/// one `-`, and strip leading and trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("demo"), "demo");
        assert_eq!(slugify("My Swarm App"), "my-swarm-app");
        assert_eq!(slugify("--Hello__World!!"), "hello-world");
        assert_eq!(slugify("app2024"), "app2024");
        assert_eq!(slugify("über app"), "ber-app");
        assert_eq!(slugify("***"), "");
    }

    proptest! {
        #[test]
        fn prop_slug_charset(name in ".{0,40}") {
            let slug = slugify(&name);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn prop_slug_idempotent(name in "[A-Za-z0-9 _.-]{0,40}") {
            let slug = slugify(&name);
            prop_assert_eq!(slugify(&slug), slug);
        }
    }
}
