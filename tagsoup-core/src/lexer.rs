//! Tag lexer: start-tag interiors and text-run normalization.
//!
//! Input to [`lex_start_tag`] is everything between `<` and `>` of a start
//! tag. The lexer is forgiving by construction: every input yields a name and
//! an attribute list, never an error.
//!
//! ## Attribute grammar (informal)
//!
//! ```text
//! interior   = name [ ws attributes ]
//! attribute  = attr-name [ ws? "=" ws? value ]
//! value      = '"' any* '"' | "'" any* "'" | non-ws*
//! ```
//!
//! A self-closing `/` gets no special treatment: `br/` is a tag name and the
//! trailing `/` of `<img src="a" />` becomes a bare attribute named `/`.

use crate::event::Attribute;

/// Split a start-tag interior into a lower-cased name and its attributes.
///
/// ```
/// use tagsoup_core::{lex_start_tag, Attribute};
///
/// let (name, attrs) = lex_start_tag(r#"A HREF="x" id='y' disabled"#);
/// assert_eq!(name, "a");
/// assert_eq!(attrs, vec![
///     Attribute::new("href", "x"),
///     Attribute::new("id", "y"),
///     Attribute::new("disabled", ""),
/// ]);
/// ```
pub fn lex_start_tag(interior: &str) -> (String, Vec<Attribute>) {
    let Some(split) = interior.find(char::is_whitespace) else {
        return (interior.to_lowercase(), Vec::new());
    };

    let name = interior[..split].to_lowercase();
    let mut cursor = TagCursor::new(&interior[split..]);
    let mut attrs = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.eof() {
            break;
        }
        attrs.push(cursor.attribute());
    }
    (name, attrs)
}

/// Replace every whitespace run with one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

struct TagCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TagCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    #[inline]
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Consume up to (not including) the first char matching `stop`.
    fn take_until(&mut self, stop: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if stop(c) {
                break;
            }
            self.advance();
        }
        &self.text[start..self.pos]
    }

    fn attribute(&mut self) -> Attribute {
        let name = self.take_until(|c| c == '=' || c.is_whitespace());

        let has_value = match self.peek() {
            Some('=') => {
                self.advance();
                true
            }
            Some(_) => {
                // `name = value`, or a bare attribute followed by another one
                let mark = self.pos;
                self.skip_whitespace();
                if self.peek() == Some('=') {
                    self.advance();
                    true
                } else {
                    self.pos = mark;
                    false
                }
            }
            None => false,
        };

        let value = if has_value {
            self.skip_whitespace();
            self.value()
        } else {
            ""
        };

        Attribute::new(name.to_lowercase(), value)
    }

    fn value(&mut self) -> &'a str {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.advance();
                let value = self.take_until(|c| c == quote);
                // closing quote, if the tag has one
                self.advance();
                value
            }
            _ => self.take_until(char::is_whitespace),
        }
    }
}
