// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_options_keep_order() {
    let options = options_from_yaml("b: 1\na: two\nc: [1, 2]\n").unwrap();
    let keys: Vec<&str> = options.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[rstest]
fn test_normalize_strips_tags_and_stringifies_nested_keys() {
    let options = options_from_yaml(
        r#"
tagged: !custom value
nested:
  1: one
  true: yes
  inner:
    - !tag 3
"#,
    )
    .unwrap();

    let normalized = normalize(options);
    let expected = options_from_yaml(
        r#"
tagged: value
nested:
  "1": one
  "true": yes
  inner:
    - 3
"#,
    )
    .unwrap();
    assert_eq!(normalized, expected);
}

#[rstest]
fn test_normalize_is_idempotent() {
    let options = options_from_yaml("a: 1\nb: {c: [x, y]}\nd: ~\n").unwrap();
    let once = normalize(options.clone());
    assert_eq!(once, options);
    assert_eq!(normalize(once.clone()), once);
}

#[rstest]
fn test_load_options_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("options.yaml");
    std::fs::write(&path, "nodes: 4\n").unwrap();

    let options = load_options(&path).unwrap();
    let expected: Value = serde_yaml::from_str("4").unwrap();
    assert_eq!(options.get("nodes"), Some(&expected));
}

#[rstest]
fn test_invalid_yaml() {
    let result = options_from_yaml("a: [unclosed\n");
    assert!(matches!(result, Err(crate::Error::InvalidYaml { .. })));
}
