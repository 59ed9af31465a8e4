//! Event delivery.
//!
//! The tokenizer calls into a [`Handler`] once per recognized token, in
//! document order. Every method has a no-op default, so a handler only
//! overrides the events it cares about.
//!
//! A handler may fail. The error type is chosen by the handler and is
//! returned unchanged from [`Tokenizer::feed`](crate::Tokenizer::feed) and
//! [`Tokenizer::close`](crate::Tokenizer::close). By the time a callback runs
//! the tokenizer has already moved past the token, so an error never causes
//! the same token to be delivered twice.

use crate::event::{Attribute, Event};
use std::convert::Infallible;

/// Receiver for tokenizer events.
pub trait Handler {
    /// Error a callback may return to stop the current scan pass.
    type Error;

    /// `name` is lower-cased; `attrs` are in source order.
    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]) -> Result<(), Self::Error> {
        let _ = (name, attrs);
        Ok(())
    }

    /// `name` is the lower-cased interior of `</...>`.
    fn on_end_tag(&mut self, name: &str) -> Result<(), Self::Error> {
        let _ = name;
        Ok(())
    }

    /// Collapsed text runs, and the verbatim body of opaque elements.
    fn on_data(&mut self, text: &str) -> Result<(), Self::Error> {
        let _ = text;
        Ok(())
    }

    fn on_comment(&mut self, text: &str) -> Result<(), Self::Error> {
        let _ = text;
        Ok(())
    }

    fn on_declaration(&mut self, text: &str) -> Result<(), Self::Error> {
        let _ = text;
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    type Error = H::Error;

    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]) -> Result<(), Self::Error> {
        (**self).on_start_tag(name, attrs)
    }

    fn on_end_tag(&mut self, name: &str) -> Result<(), Self::Error> {
        (**self).on_end_tag(name)
    }

    fn on_data(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).on_data(text)
    }

    fn on_comment(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).on_comment(text)
    }

    fn on_declaration(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).on_declaration(text)
    }
}

/// Ignores every event.
impl Handler for () {
    type Error = Infallible;
}

/// Collects owned events.
impl Handler for Vec<Event> {
    type Error = Infallible;

    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]) -> Result<(), Infallible> {
        self.push(Event::StartTag {
            name: name.to_owned(),
            attrs: attrs.to_vec(),
        });
        Ok(())
    }

    fn on_end_tag(&mut self, name: &str) -> Result<(), Infallible> {
        self.push(Event::EndTag { name: name.to_owned() });
        Ok(())
    }

    fn on_data(&mut self, text: &str) -> Result<(), Infallible> {
        self.push(Event::Data { text: text.to_owned() });
        Ok(())
    }

    fn on_comment(&mut self, text: &str) -> Result<(), Infallible> {
        self.push(Event::Comment { text: text.to_owned() });
        Ok(())
    }

    fn on_declaration(&mut self, text: &str) -> Result<(), Infallible> {
        self.push(Event::Declaration { text: text.to_owned() });
        Ok(())
    }
}

/// Handler backed by a single function receiving owned [`Event`]s.
///
/// Created with [`handler_fn`].
#[derive(Debug, Clone)]
pub struct EventFn<F> {
    f: F,
}

/// Wrap a closure as a [`Handler`].
///
/// ```
/// use std::convert::Infallible;
/// use tagsoup_core::{handler_fn, Tokenizer};
///
/// let mut names = Vec::new();
/// let mut tok = Tokenizer::new(handler_fn(|event| {
///     if let Some(name) = event.tag_name() {
///         names.push(name.to_owned());
///     }
///     Ok::<_, Infallible>(())
/// }));
/// tok.feed("<p>hi</p>").unwrap();
/// drop(tok);
/// assert_eq!(names, ["p", "p"]);
/// ```
pub fn handler_fn<F, E>(f: F) -> EventFn<F>
where
    F: FnMut(Event) -> Result<(), E>,
{
    EventFn { f }
}

impl<F> EventFn<F> {
    /// Unwrap the closure.
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F, E> Handler for EventFn<F>
where
    F: FnMut(Event) -> Result<(), E>,
{
    type Error = E;

    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]) -> Result<(), E> {
        (self.f)(Event::StartTag {
            name: name.to_owned(),
            attrs: attrs.to_vec(),
        })
    }

    fn on_end_tag(&mut self, name: &str) -> Result<(), E> {
        (self.f)(Event::EndTag { name: name.to_owned() })
    }

    fn on_data(&mut self, text: &str) -> Result<(), E> {
        (self.f)(Event::Data { text: text.to_owned() })
    }

    fn on_comment(&mut self, text: &str) -> Result<(), E> {
        (self.f)(Event::Comment { text: text.to_owned() })
    }

    fn on_declaration(&mut self, text: &str) -> Result<(), E> {
        (self.f)(Event::Declaration { text: text.to_owned() })
    }
}
