//! Re-serialize markup from stdin with every `<script>` body removed.
//!
//! Usage: cargo run --example strip_scripts < page.html

use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::io::{self, Read};
use tagsoup_core::{Attribute, Handler, Tokenizer};

/// Writes events back out as markup, skipping data inside `script`.
struct Stripper<W> {
    out: W,
    in_script: bool,
    dropped: usize,
}

impl<W: fmt::Write> Handler for Stripper<W> {
    type Error = fmt::Error;

    fn on_start_tag(&mut self, name: &str, attrs: &[Attribute]) -> fmt::Result {
        self.in_script = name == "script";
        write!(self.out, "<{}", name)?;
        for attr in attrs {
            write!(self.out, " {}=\"{}\"", attr.name, attr.value)?;
        }
        self.out.write_char('>')
    }

    fn on_end_tag(&mut self, name: &str) -> fmt::Result {
        self.in_script = false;
        write!(self.out, "</{}>", name)
    }

    fn on_data(&mut self, text: &str) -> fmt::Result {
        if self.in_script {
            self.dropped += text.len();
            return Ok(());
        }
        self.out.write_str(text)
    }

    fn on_comment(&mut self, text: &str) -> fmt::Result {
        write!(self.out, "<!--{}-->", text)
    }

    fn on_declaration(&mut self, text: &str) -> fmt::Result {
        write!(self.out, "<!{}>", text)
    }
}

fn main() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let stripper = Stripper {
        out: String::new(),
        in_script: false,
        dropped: 0,
    };
    let mut tok = Tokenizer::new(stripper);
    tok.feed(&input)
        .and_then(Tokenizer::close)
        .context("writing markup")?;

    let stripper = tok.into_handler();
    println!("{}", stripper.out);
    eprintln!("dropped {} bytes of script", stripper.dropped);
    Ok(())
}
