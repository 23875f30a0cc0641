//! Word segmentation for compound identifiers.
//!
//! Identifiers are split on underscores first; each chunk is then scanned
//! from right to left so that acronym runs and trailing digits attach to the
//! correct word. `JSON42_File42An42dSO42ME_More` splits into
//! `JSON42`, `File42`, `An42d`, `SO42ME` and `More`.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Unknown,
    Lower,
    Digit,
    Upper,
}

/// Splits `identifier` into its case and digit delimited words.
///
/// Underscores always separate words and never appear in the output.
/// Casing is preserved and words are returned in their original order.
/// Only ASCII letters count as upper case; other characters join the
/// surrounding lower-case word.
///
/// # Examples
///
/// ```
/// assert_eq!(envcfg::split_words("someCamelCase"), ["some", "Camel", "Case"]);
/// assert_eq!(envcfg::split_words("ASCIIString"), ["ASCII", "String"]);
/// assert_eq!(envcfg::split_words("host_ip"), ["host", "ip"]);
/// ```
#[must_use]
pub fn split_words(identifier: &str) -> Vec<String> {
    identifier.split('_').flat_map(split_chunk).collect()
}

fn split_chunk(chunk: &str) -> Vec<String> {
    let mut words = Vec::new();
    // Characters of the word being built, in reverse order.
    let mut word: Vec<char> = Vec::new();
    let mut prev = Class::Unknown;

    for c in chunk.chars().rev() {
        if c.is_ascii_uppercase() {
            word.push(c);
            if prev == Class::Lower {
                words.push(take_word(&mut word));
                prev = Class::Unknown;
            } else {
                prev = Class::Upper;
            }
        } else if c.is_ascii_digit() {
            word.push(c);
            prev = Class::Digit;
        } else {
            // A pending uppercase run is a complete acronym.
            if prev == Class::Upper {
                words.push(take_word(&mut word));
            }
            word.push(c);
            prev = Class::Lower;
        }
    }

    if !word.is_empty() {
        words.push(take_word(&mut word));
    }
    words.reverse();
    words
}

fn take_word(word: &mut Vec<char>) -> String {
    word.drain(..).rev().collect()
}
