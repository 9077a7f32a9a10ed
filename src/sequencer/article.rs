//! Indefinite-article agreement for "I am a/an ..." text.
//!
//! View-only transform: applied to a snapshot's text, never to the phrase
//! list, so the canonical prefix invariant is untouched.

use std::borrow::Cow;

const LEAD: &str = "I am ";

/// Rewrite the article after "I am " so it agrees with the next word.
///
/// Acts only once the first letter of the following word is visible, so a
/// partially typed "I am a" is left as-is. Only the first "I am " is checked.
#[must_use]
pub fn fix_indefinite_article(text: &str) -> Cow<'_, str> {
    let Some(start) = text.find(LEAD) else {
        return Cow::Borrowed(text);
    };
    let head = &text[..start + LEAD.len()];
    let rest = &text[start + LEAD.len()..];

    let (article, word) = if let Some(word) = rest.strip_prefix("an ") {
        ("an", word)
    } else if let Some(word) = rest.strip_prefix("a ") {
        ("a", word)
    } else {
        return Cow::Borrowed(text);
    };

    let Some(first) = word.chars().next().filter(|c| c.is_alphabetic()) else {
        return Cow::Borrowed(text);
    };

    let wanted = if is_vowel(first) { "an" } else { "a" };
    if wanted == article {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{head}{wanted} {word}"))
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
#[path = "article_test.rs"]
mod tests;
