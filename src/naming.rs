//! Pure string helpers used to derive project names.
//! None of these functions touch the filesystem; the resolver composes them.

/// Characters rejected in a single path segment on at least one supported platform.
const ILLEGAL_SEGMENT_CHARS: [char; 9] = ['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Converts a PascalCase or camelCase name to snake_case.
///
/// The first character is lower-cased unconditionally and a `_` is inserted before
/// every following ASCII uppercase letter. Consecutive capitals each get their own
/// separator, so `HTTPServer` becomes `h_t_t_p_server`.
///
/// # Examples
/// ```
/// use cpp_project::naming::pascal_to_snake_case;
/// assert_eq!(pascal_to_snake_case("FlatMap"), "flat_map");
/// ```
pub fn pascal_to_snake_case(name: &str) -> String {
    let mut chars = name.chars();
    let mut snake = String::with_capacity(name.len() + 4);

    if let Some(first) = chars.next() {
        snake.push(first.to_ascii_lowercase());
    }
    for c in chars {
        if c.is_ascii_uppercase() {
            snake.push('_');
        }
        snake.push(c.to_ascii_lowercase());
    }
    snake
}

/// Extracts a camel/snake acronym: the first character, every later capital letter,
/// and every character that follows an underscore. Case is preserved.
///
/// # Examples
/// ```
/// use cpp_project::naming::acronym;
/// assert_eq!(acronym("flat_map"), "fm");
/// assert_eq!(acronym("FlatMap"), "FM");
/// ```
pub fn acronym(name: &str) -> String {
    let mut chars = name.chars().peekable();
    let mut short = String::new();

    if let Some(first) = chars.next() {
        short.push(first);
    }
    while let Some(c) = chars.next() {
        if c.is_ascii_uppercase() {
            short.push(c);
        }
        if c == '_' {
            // A trailing underscore has no follower.
            if let Some(&next) = chars.peek() {
                short.push(next);
            }
        }
    }
    short
}

/// Upper-cases the first character and keeps the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Checks whether `segment` can be used as a single file or directory name.
pub fn is_valid_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment
            .chars()
            .any(|c| c.is_control() || ILLEGAL_SEGMENT_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_underscore_follower_is_taken_verbatim() {
        // The character after an underscore is kept even when it is already a capital,
        // in which case it is pushed twice.
        assert_eq!(acronym("flat_Map"), "fMM");
        assert_eq!(acronym("a__b"), "a_b");
    }

    #[test]
    fn test_pascal_to_snake_case_keeps_non_letters() {
        assert_eq!(pascal_to_snake_case("Vec3D"), "vec3_d");
        assert_eq!(pascal_to_snake_case("_Private"), "__private");
    }
}
