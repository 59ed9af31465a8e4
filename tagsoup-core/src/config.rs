//! Tokenizer configuration.
//!
//! The only knobs are which elements have opaque (CDATA-content) bodies and
//! what `close()` does with constructs that never saw their terminator.

use phf::phf_set;
use std::collections::HashSet;

/// Elements whose body is passed through verbatim unless configured otherwise.
pub static DEFAULT_OPAQUE_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "script",
    "style",
};

/// Construction-time settings for a [`Tokenizer`](crate::Tokenizer).
///
/// ```
/// use tagsoup_core::TokenizerConfig;
///
/// let config = TokenizerConfig::default()
///     .opaque_element("textarea")
///     .without_opaque_element("style");
/// assert!(config.is_opaque("script"));
/// assert!(config.is_opaque("textarea"));
/// assert!(!config.is_opaque("style"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    opaque_elements: HashSet<String>,
    flush_unterminated: bool,
}

impl TokenizerConfig {
    /// Add an element whose body must not be tokenized.
    ///
    /// Names are lower-cased, matching the case folding applied to tag names.
    pub fn opaque_element(mut self, name: &str) -> Self {
        self.opaque_elements.insert(name.to_lowercase());
        self
    }

    /// Stop treating an element's body as opaque.
    pub fn without_opaque_element(mut self, name: &str) -> Self {
        self.opaque_elements.remove(&name.to_lowercase());
        self
    }

    /// Tokenize the body of every element, `script` and `style` included.
    pub fn no_opaque_elements(mut self) -> Self {
        self.opaque_elements.clear();
        self
    }

    /// Choose what `close()` does with an unterminated comment, declaration,
    /// end tag or opaque body.
    ///
    /// `true` (the default) emits it as a best-effort event carrying all
    /// remaining text. `false` leaves it buffered. Unterminated start tags
    /// are always left buffered.
    pub fn flush_unterminated(mut self, flush: bool) -> Self {
        self.flush_unterminated = flush;
        self
    }

    /// Check whether `name` (already lower-cased) has an opaque body.
    #[inline]
    pub fn is_opaque(&self, name: &str) -> bool {
        self.opaque_elements.contains(name)
    }

    #[inline]
    pub fn flushes_unterminated(&self) -> bool {
        self.flush_unterminated
    }

    /// The configured opaque elements, in no particular order.
    pub fn opaque_elements(&self) -> impl Iterator<Item = &str> {
        self.opaque_elements.iter().map(String::as_str)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            opaque_elements: DEFAULT_OPAQUE_ELEMENTS
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            flush_unterminated: true,
        }
    }
}
