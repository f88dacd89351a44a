use std::collections::HashMap;

/// Whether the whitespace-separated words of `text` follow `self` under a
/// bijection between pattern characters and words.
pub trait WordPattern {
    fn word_pattern(&self, text: &str) -> bool;
}

impl WordPattern for str {
    fn word_pattern(&self, text: &str) -> bool {
        let words: Vec<_> = text.split_whitespace().collect();
        if words.len() != self.chars().count() {
            return false;
        }

        let mut to_word = HashMap::new();
        let mut to_char = HashMap::new();
        for (ch, word) in self.chars().zip(words) {
            match (to_word.get(&ch).copied(), to_char.get(word).copied()) {
                (None, None) => {
                    to_word.insert(ch, word);
                    to_char.insert(word, ch);
                }
                (Some(w), Some(c)) if w == word && c == ch => {}
                _ => return false,
            }
        }
        true
    }
}

#[test]
fn sanity_check() {
    assert!("abba".word_pattern("dog cat cat dog"));
    assert!(!"abba".word_pattern("dog cat cat fish"));
    assert!(!"aaaa".word_pattern("dog cat cat dog"));

    // injective both ways
    assert!(!"abba".word_pattern("dog dog dog dog"));
    assert!(!"aaaa".word_pattern("dog cat dog dog"));
}

#[test]
fn check_lengths() {
    assert!(!"ab".word_pattern("dog"));
    assert!(!"a".word_pattern("dog cat"));
    assert!(!"a".word_pattern(""));
    assert!(!"".word_pattern("dog"));
    assert!("".word_pattern(""));
}

#[test]
fn check_non_ascii() {
    assert!("ねこ".word_pattern("neko inu"));
    assert!("ねこね".word_pattern("neko inu neko"));
    assert!(!"ねこね".word_pattern("neko inu inu"));
}
