//! Naming-convention helpers for resource type and inverse inference.
//!
//! These cover exactly the conversions the resolution pipeline needs; this
//! is not a general inflection library.

use convert_case::{Case, Casing};

/// Convert an identifier to its dasherized (kebab-case) form.
pub(crate) fn dasherize(value: &str) -> String {
    value.to_case(Case::Kebab)
}

/// Pluralize a single English word.
///
/// Rule set: sibilant endings (`ss`, `x`, `z`, `ch`, `sh`) take `es`,
/// consonant-`y` becomes `ies`, a word already ending in a single `s` is
/// left unchanged, everything else takes `s`.
pub(crate) fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if word.ends_with("ss")
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }

    if word.ends_with('s') {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');
        if !stem.is_empty() && !stem.ends_with(vowel) {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}

/// The simple name of a type: generics stripped, last path segment only.
pub(crate) fn simple_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Infer a resource type from a definition type's name.
///
/// Strips a trailing `Schema` suffix, then pluralizes and dasherizes:
/// `PostSchema` becomes `posts`, `BlogPostSchema` becomes `blog-posts`.
pub(crate) fn resource_type_of<T: ?Sized>() -> String {
    let simple = simple_type_name(std::any::type_name::<T>());
    let base = match simple.strip_suffix("Schema") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => simple,
    };

    dasherize(&pluralize(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PostSchema;
    struct BlogPostSchema;
    struct Comment;

    #[test]
    fn dasherize_camel_case() {
        assert_eq!(dasherize("BlogPosts"), "blog-posts");
        assert_eq!(dasherize("createdAt"), "created-at");
        assert_eq!(dasherize("authors"), "authors");
    }

    #[test]
    fn pluralize_common_words() {
        assert_eq!(pluralize("author"), "authors");
        assert_eq!(pluralize("Post"), "Posts");
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("comment"), "comments");
    }

    #[test]
    fn pluralize_sibilant_endings() {
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("match"), "matches");
        assert_eq!(pluralize("dish"), "dishes");
    }

    #[test]
    fn pluralize_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn pluralize_leaves_plural_words_alone() {
        assert_eq!(pluralize("comments"), "comments");
        assert_eq!(pluralize("users"), "users");
    }

    #[test]
    fn simple_type_name_strips_path_and_generics() {
        assert_eq!(simple_type_name("my_app::schemas::PostSchema"), "PostSchema");
        assert_eq!(simple_type_name("PostSchema"), "PostSchema");
        assert_eq!(
            simple_type_name("my_app::Wrapper<my_app::PostSchema>"),
            "Wrapper"
        );
    }

    #[test]
    fn resource_type_strips_schema_suffix() {
        assert_eq!(resource_type_of::<PostSchema>(), "posts");
        assert_eq!(resource_type_of::<BlogPostSchema>(), "blog-posts");
    }

    #[test]
    fn resource_type_without_suffix() {
        assert_eq!(resource_type_of::<Comment>(), "comments");
    }

    #[test]
    fn resource_type_is_deterministic() {
        assert_eq!(resource_type_of::<PostSchema>(), resource_type_of::<PostSchema>());
    }
}
