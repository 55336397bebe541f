/// Bounded text blob handed to an answer backend. The constructor enforces
/// the character budget with a hard cut at a char boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    text: String,
}

impl Context {
    pub fn new(mut text: String, max_chars: usize) -> Self {
        if let Some((idx, _)) = text.char_indices().nth(max_chars) {
            text.truncate(idx);
        }
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
