use super::*;

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("My Project"), "my-project");
}

#[test]
fn slugify_collapses_runs_and_strips_punctuation() {
    assert_eq!(slugify("  Foo_Bar--Baz!! "), "foo-bar-baz");
}

#[test]
fn slugify_handles_empty_input() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn slugify_is_idempotent() {
    for raw in ["My Project", "  Foo_Bar--Baz!! ", "", "a__b  c--d", "Ünïcode Name"] {
        let once = slugify(raw);
        assert_eq!(slugify(&once), once, "input: {raw:?}");
    }
}

#[test]
fn slugify_strips_non_ascii() {
    assert_eq!(slugify("café au lait"), "caf-au-lait");
}

#[test]
fn percent_decode_round_trips() {
    assert_eq!(percent_decode("my%20org"), "my org");
    assert_eq!(percent_decode("plain-org"), "plain-org");
}

#[test]
fn percent_encode_escapes_reserved_characters() {
    assert_eq!(percent_encode("a b&c"), "a%20b%26c");
}
