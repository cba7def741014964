//! Two-pass assembler for the LC-3 assembly dialect.
//!
//! The main entry points are [`assemble`](fn.assemble.html), which turns
//! source text into the symbol table and the binary object image, and
//! [`assemble_image`](fn.assemble_image.html), which returns the parsed
//! [`Image`](../lc3obj/struct.Image.html) instead of raw bytes.
//!
//! Parsing is implemented with [pest], and the crate's [`Error`] type is an
//! alias of `pest::error::Error`, so every failure — syntactic or semantic
//! (undefined labels, operand fields that don't fit) — carries a source
//! span and pretty-prints with the offending line.
//!
//! # Dialect
//!
//! A program starts with `.ORIG n` (the image origin), ends at `.END`, and
//! contains instructions, data directives and labels. Comments run from
//! `;` to the end of the line. Mnemonics are uppercase; directives are
//! case-insensitive; labels are case-sensitive identifiers and may stand
//! alone or share a line with the statement they mark.
//!
//! Operands are registers `R0`-`R7`, constants, or label references.
//! Constants are written `#n` (signed decimal), `xNN` (hex) or `bNN`
//! (binary); directive arguments also accept a bare signed decimal.
//!
//! Instructions:
//!
//! Mnemonic | Syntax | Notes
//! ---------|--------|------
//! `ADD`/`AND` | `ADD DR, SR1, SR2` or `ADD DR, SR1, #imm5` |
//! `NOT` | `NOT DR, SR` |
//! `BR`* | `BRnzp TARGET` | all eight `n`/`z`/`p` combinations; bare `BR` means `BRnzp`; the target is a label or a raw 9-bit field
//! `JMP`/`RET` | `JMP BaseR` / `RET` | `RET` is `JMP R7`
//! `JSR`/`JSRR` | `JSR LABEL` / `JSRR BaseR` |
//! `LD`/`LDI`/`LEA`/`ST`/`STI` | `LD DR, LABEL` | PC-relative, 9-bit offset
//! `LDR`/`STR` | `LDR DR, BaseR, #off6` |
//! `TRAP` | `TRAP x25` | plus the aliases `GETC`, `OUT`, `PUTS`, `IN`, `PUTSP`, `HALT`
//! `RTI` | `RTI` | assembles, but faults in user mode
//!
//! Directives: `.ORIG n`, `.FILL value-or-label`, `.BLKW n`,
//! `.STRINGZ "text"` (with `\n`, `\t`, `\e` escapes; single quotes work
//! too), `.END`.
//!
//! PC-relative offsets are computed against the location counter *after*
//! the referring instruction, matching the incremented PC at runtime.
//!
//! [pest]: https://docs.rs/pest/

mod encode;
mod literals;
mod parser;
mod statements;
mod symbols;


use lc3obj::Image;
use log::debug;
use pest::iterators::Pair;
use pest::{Parser, Position, Span};

pub use parser::{Lc3Parser, Rule};
pub use symbols::SymbolTable;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Source lines at least this long are rejected before parsing.
pub const MAX_LINE_LENGTH: usize = 4096;

/// Assembles source text into the symbol table and the object bytes
/// (big-endian origin word, then the payload words).
pub fn assemble(input: &str) -> Result<(SymbolTable, Vec<u8>)> {
    let (symbols, image) = assemble_image(input)?;
    Ok((symbols, image.to_bytes()))
}

/// Assembles source text into the symbol table and the parsed image.
pub fn assemble_image(input: &str) -> Result<(SymbolTable, Image)> {
    check_line_lengths(input)?;

    debug!("starting assembly pass 1");
    let (symbols, origin, lines) = statements::process_program(parse(input)?)?;

    debug!("starting assembly pass 2");
    let words = encode::emit_words(&symbols, &lines)?;

    let image = Image::new(origin, words)
        .map_err(|err| new_error_at(Position::from_start(input), format!("{}", err)))?;
    Ok((symbols, image))
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(Lc3Parser::parse(Rule::program, input)?.next().unwrap())
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn new_error_at(pos: Position, message: String) -> Error {
    Error::new_from_pos(pest::error::ErrorVariant::CustomError { message }, pos)
}

fn check_line_lengths(input: &str) -> Result<()> {
    let mut offset = 0;
    for line in input.split('\n') {
        if line.chars().count() >= MAX_LINE_LENGTH {
            let span = Span::new(input, offset, offset + line.len()).unwrap();
            return Err(new_parser_error(span, "line is too long".to_owned()));
        }
        offset += line.len() + 1;
    }
    Ok(())
}
