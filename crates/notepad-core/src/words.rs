//! Whitespace word tokenization.
//!
//! Words are maximal runs of non-whitespace characters. Punctuation is part of the word
//! (`"cat."` is one token). Offsets are in characters.

/// A word and its character offset inside the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// Character offset of the first character.
    pub offset: usize,
    /// The word itself.
    pub text: &'a str,
}

impl WordToken<'_> {
    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Iterator over the whitespace-delimited words of a string.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = WordToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.byte_pos..];
        let mut chars = rest.char_indices();

        // Skip leading whitespace.
        let (start_byte, start_char) = loop {
            let (byte, ch) = chars.next()?;
            if !ch.is_whitespace() {
                break (byte, self.char_pos);
            }
            self.char_pos += 1;
        };

        let mut end_byte = rest.len();
        let mut word_chars = 1;
        for (byte, ch) in chars {
            if ch.is_whitespace() {
                end_byte = byte;
                break;
            }
            word_chars += 1;
        }

        let token = WordToken {
            offset: start_char,
            text: &rest[start_byte..end_byte],
        };
        self.byte_pos += end_byte;
        self.char_pos += word_chars;
        Some(token)
    }
}

/// Split `text` into whitespace-delimited words.
pub fn words(text: &str) -> Words<'_> {
    Words {
        text,
        byte_pos: 0,
        char_pos: 0,
    }
}

/// Number of whitespace-delimited words in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
