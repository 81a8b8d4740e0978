//! Lexer for angle-bracket markup.
//!
//! A tag is `<`, then any run of characters other than `<` and `>`, then
//! `>`. Tags are found left to right without overlap. Everything between
//! them, including stray brackets that do not form a tag, is text.

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content. Never empty.
    Text(&'a str),
    /// Opening tag content (without brackets): `gradient:red:blue`
    OpenTag(&'a str),
    /// Closing tag content with the leading `/` stripped. Its name is
    /// never checked against the open tag.
    CloseTag(&'a str),
}

/// Lexer for markup text.
///
/// # Examples
///
/// ```
/// use miniformat::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("<bold>Hi</bold>").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::OpenTag("bold"), Token::Text("Hi"), Token::CloseTag("bold")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// If a tag starts at byte `start` (which holds `<`), the byte offset of
    /// its closing `>`.
    fn tag_end(&self, start: usize) -> Option<usize> {
        let body = &self.input[start + 1..];
        let stop = body.find(['<', '>'])?;
        (body.as_bytes()[stop] == b'>').then_some(start + 1 + stop)
    }

    /// Consume text up to the next real tag or end of input.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;
        let mut cursor = start;

        loop {
            match self.input[cursor..].find('<') {
                Some(offset) => {
                    let at = cursor + offset;
                    if at > start && self.tag_end(at).is_some() {
                        cursor = at;
                        break;
                    }
                    cursor = at + 1;
                }
                None => {
                    cursor = self.input.len();
                    break;
                }
            }
        }

        self.pos = cursor;
        &self.input[start..cursor]
    }

    /// Consume a tag whose closing `>` is at `end`.
    fn consume_tag(&mut self, end: usize) -> Token<'a> {
        let content = &self.input[self.pos + 1..end];
        self.pos = end + 1;

        match content.strip_prefix('/') {
            Some(name) => Token::CloseTag(name),
            None => Token::OpenTag(content),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.input[self.pos..].starts_with('<') {
            if let Some(end) = self.tag_end(self.pos) {
                return Some(self.consume_tag(end));
            }
        }
        Some(Token::Text(self.consume_text()))
    }
}

/// Tokenize a whole input.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_plain_text() {
        assert_eq!(tokenize("Hello World"), vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn lex_open_and_close() {
        assert_eq!(
            tokenize("<bold>Hello</bold>"),
            vec![
                Token::OpenTag("bold"),
                Token::Text("Hello"),
                Token::CloseTag("bold"),
            ]
        );
    }

    #[test]
    fn lex_arguments_kept_raw() {
        assert_eq!(
            tokenize("<gradient:red:#00FF00>x</>"),
            vec![
                Token::OpenTag("gradient:red:#00FF00"),
                Token::Text("x"),
                Token::CloseTag(""),
            ]
        );
    }

    #[test]
    fn lex_empty_tag() {
        assert_eq!(tokenize("<>"), vec![Token::OpenTag("")]);
    }

    #[test]
    fn lex_double_brackets() {
        assert_eq!(
            tokenize("<<tag>>"),
            vec![Token::Text("<"), Token::OpenTag("tag"), Token::Text(">")]
        );
    }

    #[test]
    fn lex_stray_brackets_are_text() {
        assert_eq!(
            tokenize("a < b <red>c> d"),
            vec![
                Token::Text("a < b "),
                Token::OpenTag("red"),
                Token::Text("c> d"),
            ]
        );
    }

    #[test]
    fn lex_unterminated_tag_is_text() {
        assert_eq!(tokenize("x <bold"), vec![Token::Text("x <bold")]);
        assert_eq!(tokenize("<<"), vec![Token::Text("<<")]);
    }

    #[test]
    fn lex_adjacent_tags() {
        assert_eq!(
            tokenize("<b><i></i></b>"),
            vec![
                Token::OpenTag("b"),
                Token::OpenTag("i"),
                Token::CloseTag("i"),
                Token::CloseTag("b"),
            ]
        );
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            tokenize("日本<b>語</b>é"),
            vec![
                Token::Text("日本"),
                Token::OpenTag("b"),
                Token::Text("語"),
                Token::CloseTag("b"),
                Token::Text("é"),
            ]
        );
    }
}
