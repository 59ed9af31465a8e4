//! Print the events of stdin, fed in fixed-size chunks.
//!
//! Usage: cargo run --example dump_events [CHUNK_SIZE] < page.html

use anyhow::{bail, Context, Result};
use std::io::{self, Read, Write};
use tagsoup_core::{Event, Tokenizer};

fn main() -> Result<()> {
    let chunk_size = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid chunk size {:?}", arg))?,
        None => 64,
    };
    if chunk_size == 0 {
        bail!("chunk size must be positive");
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tok = Tokenizer::new(Vec::<Event>::new());

    let mut rest = input.as_str();
    while !rest.is_empty() {
        let mut at = chunk_size.min(rest.len());
        while !rest.is_char_boundary(at) {
            at += 1;
        }
        let (chunk, tail) = rest.split_at(at);
        rest = tail;

        tok.feed(chunk)?;
        print_events(&mut out, &mut tok)?;
    }

    tok.close()?;
    print_events(&mut out, &mut tok)?;

    if !tok.buffered().is_empty() {
        writeln!(out, "{}\tunterminated: {:?}", tok.position(), tok.buffered())?;
    }
    Ok(())
}

/// Drain the events collected during one pass.
///
/// The handler does not see positions, so each line carries the position
/// the tokenizer reached at the end of the pass, not that of the event.
fn print_events(out: &mut impl Write, tok: &mut Tokenizer<Vec<Event>>) -> Result<()> {
    let position = tok.position();
    for event in std::mem::take(tok.handler_mut()) {
        writeln!(out, "after pass {}\t{}", position, event)?;
    }
    Ok(())
}
