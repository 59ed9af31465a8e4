//! Tag Soup Core
//!
//! Streaming, fault-tolerant tokenizer for HTML-like markup.
//! Emits structural events without building a tree and never rejects input.
//!
//! # Architecture
//!
//! - **buffer.rs** - Stream buffer: fed-but-unconsumed text and the scan cursor
//! - **position.rs** - Line/column tracking over consumed spans
//! - **scanner.rs** - Boundary scanner and the public `Tokenizer`
//! - **lexer.rs** - Start-tag name/attribute lexer, whitespace collapsing
//! - **event.rs** - Owned `Event` and `Attribute` types
//! - **handler.rs** - `Handler` trait, collectors and closure adapter
//! - **config.rs** - Opaque element set and end-of-stream policy
//!
//! # Example
//!
//! ```
//! use tagsoup_core::{Event, Tokenizer};
//!
//! let mut tok = Tokenizer::new(Vec::new());
//! tok.feed("<script>if (1<2) {}</scr").unwrap();
//! tok.feed("ipt>").unwrap().close().unwrap();
//!
//! assert_eq!(tok.into_handler(), vec![
//!     Event::StartTag { name: "script".into(), attrs: vec![] },
//!     Event::Data { text: "if (1<2) {}".into() },
//!     Event::EndTag { name: "script".into() },
//! ]);
//! ```

pub mod buffer;
pub mod config;
pub mod event;
pub mod handler;
pub mod lexer;
pub mod position;
pub mod scanner;

pub use config::{TokenizerConfig, DEFAULT_OPAQUE_ELEMENTS};
pub use event::{Attribute, Event};
pub use handler::{handler_fn, EventFn, Handler};
pub use lexer::{collapse_whitespace, lex_start_tag};
pub use position::Position;
pub use scanner::{tokenize, Tokenizer};
