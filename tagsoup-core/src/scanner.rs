//! Boundary scanner: the incremental tokenizer state machine.
//!
//! Each scan pass repeatedly finds the next `<` in the unconsumed buffer and
//! dispatches on the literal prefix found there (longest match first):
//!
//! ```text
//!   <!--  comment       interior up to "-->"
//!   <!    declaration   interior up to ">"
//!   </    end tag       interior up to ">", lower-cased
//!   <     start tag     interior up to ">", handed to the tag lexer
//! ```
//!
//! Text before a `<` is whitespace-collapsed and emitted as data. While an
//! opaque element (`script`, `style`, ...) is open, everything up to the
//! literal `</name>` is emitted verbatim instead.
//!
//! A construct whose terminator has not arrived yet suspends the pass. The
//! unconsumed text stays buffered and scanning resumes on the next `feed`.
//! Only `close()` forces the remaining text out (see
//! [`TokenizerConfig::flush_unterminated`]).

use crate::buffer::StreamBuffer;
use crate::config::TokenizerConfig;
use crate::event::Event;
use crate::handler::Handler;
use crate::lexer::{collapse_whitespace, lex_start_tag};
use crate::position::Position;
use std::convert::Infallible;
use std::ops::Range;

const LOG_TARGET: &str = "tagsoup::scanner";

const OPEN_BRACKET: u8 = b'<';
const CLOSE_BRACKET: &str = ">";
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const DECLARATION_OPEN: &str = "<!";
const END_TAG_OPEN: &str = "</";
const START_TAG_OPEN: &str = "<";

/// Construct starting at a `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Comment,
    Declaration,
    EndTag,
    StartTag,
}

impl Markup {
    fn classify(buffer: &StreamBuffer, at: usize) -> Self {
        if buffer.starts_with_at(at, COMMENT_OPEN) {
            Markup::Comment
        } else if buffer.starts_with_at(at, DECLARATION_OPEN) {
            Markup::Declaration
        } else if buffer.starts_with_at(at, END_TAG_OPEN) {
            Markup::EndTag
        } else {
            Markup::StartTag
        }
    }

    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Markup::Comment => (COMMENT_OPEN, COMMENT_CLOSE),
            Markup::Declaration => (DECLARATION_OPEN, CLOSE_BRACKET),
            Markup::EndTag => (END_TAG_OPEN, CLOSE_BRACKET),
            Markup::StartTag => (START_TAG_OPEN, CLOSE_BRACKET),
        }
    }

    /// Start tags are never flushed at end of stream.
    fn flushable(self) -> bool {
        !matches!(self, Markup::StartTag)
    }
}

/// An open element whose body is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpaqueElement {
    name: String,
    close_tag: String,
}

impl OpaqueElement {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            close_tag: format!("</{}>", name),
        }
    }
}

/// Result of one scan step.
enum Step {
    Progress,
    NeedMoreInput,
}

/// Streaming, fault-tolerant markup tokenizer.
///
/// Owns its buffer, position and handler; instances share nothing.
///
/// ```
/// use tagsoup_core::{Event, Tokenizer};
///
/// let mut tok = Tokenizer::new(Vec::new());
/// tok.feed("<p class=intro>Hello,\n  wor").unwrap();
/// tok.feed("ld</p>").unwrap().close().unwrap();
///
/// let events: Vec<String> = tok.handler().iter().map(Event::to_string).collect();
/// assert_eq!(events, [
///     r#"StartTag "p" [class="intro"]"#,
///     r#"Data "Hello, world""#,
///     r#"EndTag "p""#,
/// ]);
/// assert_eq!(tok.position().line, 2);
/// ```
#[derive(Debug)]
pub struct Tokenizer<H> {
    handler: H,
    config: TokenizerConfig,
    buffer: StreamBuffer,
    position: Position,
    pending_opaque: Option<OpaqueElement>,
}

impl<H> Tokenizer<H> {
    /// Create a tokenizer with the default configuration.
    pub fn new(handler: H) -> Self {
        Self::with_config(handler, TokenizerConfig::default())
    }

    /// Create a tokenizer with an explicit configuration.
    pub fn with_config(handler: H, config: TokenizerConfig) -> Self {
        Self {
            handler,
            config,
            buffer: StreamBuffer::with_capacity(4096),
            position: Position::START,
            pending_opaque: None,
        }
    }

    /// Discard all buffered text and positional state.
    ///
    /// The handler and configuration are kept.
    pub fn reset(&mut self) -> &mut Self {
        log::debug!(
            target: LOG_TARGET,
            "reset: dropping {} buffered bytes at {}",
            self.buffer.remaining().len(),
            self.position
        );
        self.buffer.clear();
        self.position = Position::START;
        self.pending_opaque = None;
        self
    }

    /// Line and column as of the last consumed token boundary.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Text fed but not yet consumed.
    #[inline]
    pub fn buffered(&self) -> &str {
        self.buffer.remaining()
    }

    /// Name of the open opaque element, if any.
    #[inline]
    pub fn pending_opaque(&self) -> Option<&str> {
        self.pending_opaque.as_ref().map(|open| open.name.as_str())
    }

    #[inline]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[inline]
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the tokenizer, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Move the cursor to `end` and advance the position over the span.
    fn consume(&mut self, end: usize) -> Range<usize> {
        let span = self.buffer.consume_to(end);
        self.position.advance(self.buffer.slice(span.clone()));
        span
    }
}

impl<H: Handler> Tokenizer<H> {
    /// Append `text` and emit every token that is now complete.
    pub fn feed(&mut self, text: &str) -> Result<&mut Self, H::Error> {
        self.buffer.push(text);
        self.scan(false)?;
        Ok(self)
    }

    /// Treat the stream as ended and flush what can be flushed.
    ///
    /// Trailing text is emitted as data. Unterminated comments, declarations,
    /// end tags and opaque bodies are emitted or kept according to
    /// [`TokenizerConfig::flush_unterminated`]. An unterminated start tag is
    /// always kept.
    pub fn close(&mut self) -> Result<&mut Self, H::Error> {
        log::debug!(
            target: LOG_TARGET,
            "close: {} bytes buffered at {}",
            self.buffer.remaining().len(),
            self.position
        );
        self.scan(true)?;
        Ok(self)
    }

    fn scan(&mut self, at_eof: bool) -> Result<(), H::Error> {
        while !self.buffer.is_exhausted() {
            match self.step(at_eof)? {
                Step::Progress => {}
                Step::NeedMoreInput => break,
            }
        }
        if self.buffer.offset() > 0 {
            log::trace!(
                target: LOG_TARGET,
                "compacting: {} consumed, {} kept",
                self.buffer.offset(),
                self.buffer.remaining().len()
            );
        }
        self.buffer.compact();
        Ok(())
    }

    fn step(&mut self, at_eof: bool) -> Result<Step, H::Error> {
        let cursor = self.buffer.offset();

        if let Some(found) = self
            .pending_opaque
            .as_ref()
            .map(|open| self.buffer.find_str(&open.close_tag, cursor))
        {
            match found {
                Some(end) if end > cursor => {
                    let span = self.consume(end);
                    self.handler.on_data(self.buffer.slice(span))?;
                    return Ok(Step::Progress);
                }
                // the closing tag itself is handled as an ordinary end tag
                Some(_) => {}
                None if at_eof && self.config.flushes_unterminated() => {
                    log::debug!(
                        target: LOG_TARGET,
                        "flushing unterminated opaque body of {:?} at {}",
                        self.pending_opaque(),
                        self.position
                    );
                    let span = self.consume(self.buffer.len());
                    self.handler.on_data(self.buffer.slice(span))?;
                    return Ok(Step::Progress);
                }
                None => {
                    log::trace!(
                        target: LOG_TARGET,
                        "waiting for end of opaque {:?} at {}",
                        self.pending_opaque(),
                        self.position
                    );
                    return Ok(Step::NeedMoreInput);
                }
            }
        }

        let Some(lt) = self.buffer.find_byte(OPEN_BRACKET, cursor) else {
            if at_eof {
                let span = self.consume(self.buffer.len());
                self.emit_text(span)?;
            }
            return Ok(Step::NeedMoreInput);
        };

        if lt > cursor {
            let span = self.consume(lt);
            self.emit_text(span)?;
            return Ok(Step::Progress);
        }

        let markup = Markup::classify(&self.buffer, lt);
        let Some(body) = self.take_construct(markup, lt, at_eof) else {
            return Ok(Step::NeedMoreInput);
        };

        match markup {
            Markup::Comment => self.handler.on_comment(self.buffer.slice(body))?,
            Markup::Declaration => self.handler.on_declaration(self.buffer.slice(body))?,
            Markup::EndTag => {
                let name = self.buffer.slice(body).to_lowercase();
                self.pending_opaque = None;
                self.handler.on_end_tag(&name)?;
            }
            Markup::StartTag => {
                let (name, attrs) = lex_start_tag(self.buffer.slice(body));
                self.pending_opaque = self
                    .config
                    .is_opaque(&name)
                    .then(|| OpaqueElement::new(&name));
                self.handler.on_start_tag(&name, &attrs)?;
            }
        }
        Ok(Step::Progress)
    }

    /// Consume a construct opened at `lt` through its terminator and return
    /// the range of its interior. `None` means wait for more input.
    fn take_construct(&mut self, markup: Markup, lt: usize, at_eof: bool) -> Option<Range<usize>> {
        let (open, close) = markup.delimiters();
        let body_start = lt + open.len();

        let (body_end, end) = match self.buffer.find_str(close, body_start) {
            Some(found) => (found, found + close.len()),
            None if at_eof && markup.flushable() && self.config.flushes_unterminated() => {
                log::debug!(
                    target: LOG_TARGET,
                    "flushing unterminated {:?} at {}",
                    markup,
                    self.position
                );
                (self.buffer.len(), self.buffer.len())
            }
            None => {
                log::trace!(
                    target: LOG_TARGET,
                    "incomplete {:?} at {}, waiting for {:?}",
                    markup,
                    self.position,
                    close
                );
                return None;
            }
        };

        self.consume(end);
        Some(body_start..body_end)
    }

    /// Emit a plain text run, collapsed, unless it is all whitespace.
    fn emit_text(&mut self, span: Range<usize>) -> Result<(), H::Error> {
        let text = collapse_whitespace(self.buffer.slice(span));
        if text.is_empty() {
            return Ok(());
        }
        self.handler.on_data(&text)
    }
}

/// Tokenize a complete document into owned events.
///
/// ```
/// use tagsoup_core::{tokenize, Event};
///
/// let events = tokenize("<!DOCTYPE html><!-- hi -->text");
/// assert_eq!(events, vec![
///     Event::Declaration { text: "DOCTYPE html".into() },
///     Event::Comment { text: " hi ".into() },
///     Event::Data { text: "text".into() },
/// ]);
/// ```
pub fn tokenize(input: &str) -> Vec<Event> {
    let mut tokenizer = Tokenizer::new(Vec::new());
    let result: Result<_, Infallible> = tokenizer.feed(input).and_then(Tokenizer::close);
    if let Err(never) = result {
        match never {}
    }
    tokenizer.into_handler()
}
