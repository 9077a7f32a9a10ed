use super::*;

#[test]
fn switches_a_to_an_before_vowel() {
    assert_eq!(fix_indefinite_article("I am a IITian"), "I am an IITian");
    assert_eq!(fix_indefinite_article("I am a e"), "I am an e");
}

#[test]
fn switches_an_to_a_before_consonant() {
    assert_eq!(fix_indefinite_article("I am an leader"), "I am a leader");
}

#[test]
fn leaves_correct_article_borrowed() {
    assert!(matches!(fix_indefinite_article("I am a student"), Cow::Borrowed(_)));
    assert!(matches!(fix_indefinite_article("I am an AI automator"), Cow::Borrowed(_)));
}

#[test]
fn waits_for_first_letter_of_next_word() {
    assert_eq!(fix_indefinite_article("I am a"), "I am a");
    assert_eq!(fix_indefinite_article("I am a "), "I am a ");
    assert_eq!(fix_indefinite_article("I am an"), "I am an");
}

#[test]
fn vowel_check_is_case_insensitive() {
    assert_eq!(fix_indefinite_article("I am a Oracle dev"), "I am an Oracle dev");
    assert_eq!(fix_indefinite_article("I am an Rust fan"), "I am a Rust fan");
}

#[test]
fn ignores_text_without_lead() {
    assert_eq!(fix_indefinite_article(""), "");
    assert_eq!(fix_indefinite_article("You are a IITian"), "You are a IITian");
}

#[test]
fn ignores_non_letter_after_article() {
    assert_eq!(fix_indefinite_article("I am a 10x dev"), "I am a 10x dev");
}

#[test]
fn preserves_text_before_lead() {
    assert_eq!(fix_indefinite_article("Hi! I am a engineer"), "Hi! I am an engineer");
}
