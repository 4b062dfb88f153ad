use cpp_project::naming::{acronym, capitalize_first, is_valid_path_segment, pascal_to_snake_case};

#[test]
fn test_pascal_to_snake_case() {
    assert_eq!(pascal_to_snake_case("FlatMap"), "flat_map");
    assert_eq!(pascal_to_snake_case("flatMap"), "flat_map");
    assert_eq!(pascal_to_snake_case("flat_map"), "flat_map");
    assert_eq!(pascal_to_snake_case(""), "");
    assert_eq!(pascal_to_snake_case("a"), "a");
    assert_eq!(pascal_to_snake_case("A"), "a");
}

#[test]
fn test_pascal_to_snake_case_splits_every_capital() {
    assert_eq!(pascal_to_snake_case("HTTPServer"), "h_t_t_p_server");
}

#[test]
fn test_acronym() {
    assert_eq!(acronym("flat_map"), "fm");
    assert_eq!(acronym("FlatMap"), "FM");
    assert_eq!(acronym("my_flat_map"), "mfm");
    assert_eq!(acronym("x"), "x");
    assert_eq!(acronym(""), "");
}

#[test]
fn test_acronym_trailing_underscore() {
    assert_eq!(acronym("flat_"), "f");
    assert_eq!(acronym("_"), "_");
}

#[test]
fn test_capitalize_first() {
    assert_eq!(capitalize_first("fm"), "Fm");
    assert_eq!(capitalize_first("Fm"), "Fm");
    assert_eq!(capitalize_first("mBa"), "MBa");
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn test_is_valid_path_segment() {
    assert!(is_valid_path_segment("FlatMap"));
    assert!(is_valid_path_segment("flat-map.v2"));
    assert!(!is_valid_path_segment(""));
    assert!(!is_valid_path_segment("."));
    assert!(!is_valid_path_segment(".."));
    assert!(!is_valid_path_segment("flat/map"));
    assert!(!is_valid_path_segment("flat\\map"));
    assert!(!is_valid_path_segment("flat:map"));
    assert!(!is_valid_path_segment("flat\0map"));
    assert!(!is_valid_path_segment("flat\nmap"));
}
