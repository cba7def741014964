use crate::statements::{Line, ParsedInstruction, Statement};
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result};
use lc3vm::Word;
use pest::Span;

fn resolve(symbols: &SymbolTable, label: &Span) -> Result<Word> {
    symbols.get(label.as_str()).ok_or_else(|| {
        new_parser_error(
            label.clone(),
            format!("label {} is not defined", label.as_str()),
        )
    })
}

/// Resolves any pending label reference and produces the final word.
/// Label-relative offsets are masked two's complement, so a distance that
/// exceeds the field silently wraps, as the runtime sign extension defines.
fn finalize(symbols: &SymbolTable, instr: &ParsedInstruction, lc: Word) -> Result<Word> {
    Ok(match instr {
        ParsedInstruction::Complete(word) => *word,
        ParsedInstruction::PcRelative { base, width, label } => {
            let target = resolve(symbols, label)?;
            let mask = ((1u32 << width) - 1) as Word;
            base | (target.wrapping_sub(lc) & mask)
        }
        ParsedInstruction::Absolute { label } => resolve(symbols, label)?,
    })
}

/// Pass two: emits the payload words in statement order.
pub fn emit_words(symbols: &SymbolTable, lines: &[Line]) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    for line in lines {
        match &line.statement {
            Statement::Emit(instr) => words.push(finalize(symbols, instr, line.lc)?),
            Statement::Block(count) => words.extend(std::iter::repeat(0).take(*count)),
            Statement::Stringz(text) => {
                words.extend(text.bytes().map(Word::from));
                words.push(0);
            }
        }
    }
    Ok(words)
}
