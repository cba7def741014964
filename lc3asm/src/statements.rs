use crate::literals::{decode_string, process_field, process_number, process_reg, process_uint};
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result, Rule};
use lc3vm::{
    constants, enum_to_word, make_base_off, make_br, make_jmp, make_jsr, make_jsrr, make_not,
    make_pc_rel, make_ret, make_rri, make_rrr, make_trap, Opcode, TrapVector, Word,
};
use log::debug;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;

/// A single emitted word, complete or awaiting label resolution in pass
/// two.
#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Complete(Word),

    /// PC-relative field: `(target - lc) & mask(width)`, with `lc` taken
    /// after the instruction, matching the runtime PC increment.
    PcRelative {
        base: Word,
        width: u32,
        label: Span<'i>,
    },

    /// Absolute address of a label (`.FILL LABEL`).
    Absolute { label: Span<'i> },
}

#[derive(Debug, PartialEq)]
pub enum Statement<'i> {
    Emit(ParsedInstruction<'i>),
    Block(usize),
    Stringz(String),
}

/// A pass-one record: the statement plus the location counter in effect
/// *after* it, which is what PC-relative encoding in pass two needs.
#[derive(Debug, PartialEq)]
pub struct Line<'i> {
    pub statement: Statement<'i>,
    pub lc: Word,
}

/// Pass one: walks the parse tree, recording labels at the current
/// location counter and advancing it per statement. Returns the symbol
/// table, the image origin and the retained statements for pass two.
pub fn process_program<'i>(pair: Pair<'i, Rule>) -> Result<(SymbolTable, Word, Vec<Line<'i>>)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut symbols = SymbolTable::new();
    let mut lines = Vec::new();
    let mut items = pair.into_inner();

    let origin = expect_orig(items.next())?;
    let mut lc = origin;

    for item in items {
        match item.as_rule() {
            Rule::label => {
                let name = item.into_inner().next().unwrap();
                debug!("{:#06x}: label {}", lc, name.as_str());
                symbols.insert(name.as_str(), lc);
            }

            Rule::instruction => {
                let span = item.as_span();
                let inner = item.into_inner().next().unwrap();
                debug!("{:#06x}: {}", lc, span.as_str());
                let parsed = process_instruction(inner)?;
                lc = advance(lc, 1, &span)?;
                lines.push(Line {
                    statement: Statement::Emit(parsed),
                    lc,
                });
            }

            Rule::directive => {
                let span = item.as_span();
                let inner = item.into_inner().next().unwrap();
                debug!("{:#06x}: {}", lc, span.as_str());
                match inner.as_rule() {
                    Rule::dir_orig => {
                        // A later .ORIG only moves the location counter.
                        lc = orig_value(inner)?;
                    }
                    Rule::dir_fill => {
                        let arg = skip_keyword(inner);
                        let parsed = if arg.as_rule() == Rule::identifier {
                            ParsedInstruction::Absolute {
                                label: arg.as_span(),
                            }
                        } else {
                            ParsedInstruction::Complete(process_number(arg)? as Word)
                        };
                        lc = advance(lc, 1, &span)?;
                        lines.push(Line {
                            statement: Statement::Emit(parsed),
                            lc,
                        });
                    }
                    Rule::dir_blkw => {
                        let count = process_uint(skip_keyword(inner))? as usize;
                        lc = advance(lc, count, &span)?;
                        lines.push(Line {
                            statement: Statement::Block(count),
                            lc,
                        });
                    }
                    Rule::dir_stringz => {
                        let text = decode_string(skip_keyword(inner));
                        lc = advance(lc, text.len() + 1, &span)?;
                        lines.push(Line {
                            statement: Statement::Stringz(text),
                            lc,
                        });
                    }
                    _ => unreachable!(),
                }
            }

            Rule::end_marker => break,
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }

    Ok((symbols, origin, lines))
}

/// The program must open with `.ORIG`; everything else, label included,
/// has no address to attach to before it. The `program` rule always
/// produces at least the end-of-input pair, so there is something to
/// hang the error on.
fn expect_orig(item: Option<Pair<Rule>>) -> Result<Word> {
    let item = item.expect("program rule always contains EOI");
    if item.as_rule() == Rule::directive {
        let inner = item.into_inner().next().unwrap();
        if inner.as_rule() == Rule::dir_orig {
            return orig_value(inner);
        }
        return Err(new_parser_error(
            inner.as_span(),
            "program must begin with .ORIG".to_owned(),
        ));
    }
    Err(new_parser_error(
        item.as_span(),
        "program must begin with .ORIG".to_owned(),
    ))
}

fn orig_value(dir_orig: Pair<Rule>) -> Result<Word> {
    process_uint(skip_keyword(dir_orig))
}

/// Drops the leading kw_* pair of a directive or instruction and returns
/// its first operand.
fn skip_keyword(pair: Pair<Rule>) -> Pair<Rule> {
    let mut pairs = pair.into_inner();
    pairs.next();
    pairs.next().unwrap()
}

fn advance(lc: Word, count: usize, span: &Span) -> Result<Word> {
    let new = lc as usize + count;
    if new > constants::MEMORY_SIZE {
        Err(new_parser_error(
            span.clone(),
            "program runs past the end of memory".to_owned(),
        ))
    } else {
        Ok(new as Word)
    }
}

fn process_instruction<'i>(pair: Pair<'i, Rule>) -> Result<ParsedInstruction<'i>> {
    let rule = pair.as_rule();
    let mut pairs = pair.into_inner();

    let parsed = match rule {
        Rule::op_add | Rule::op_and => {
            let opcode = if rule == Rule::op_add {
                Opcode::ADD
            } else {
                Opcode::AND
            };
            pairs.next(); // keyword
            let dr = process_reg(&pairs.next().unwrap())?;
            let sr1 = process_reg(&pairs.next().unwrap())?;
            let operand = pairs.next().unwrap();
            let word = if operand.as_rule() == Rule::reg {
                make_rrr(opcode, dr, sr1, process_reg(&operand)?)
            } else {
                make_rri(opcode, dr, sr1, process_field(operand, constants::IMM5_WIDTH)?)
            };
            ParsedInstruction::Complete(word)
        }

        Rule::op_not => {
            pairs.next(); // keyword
            let dr = process_reg(&pairs.next().unwrap())?;
            let sr = process_reg(&pairs.next().unwrap())?;
            ParsedInstruction::Complete(make_not(dr, sr))
        }

        Rule::op_br => {
            let spec = pairs.next().unwrap();
            let suffix = &spec.as_str()[2..];
            let (n, z, p) = if suffix.is_empty() {
                (true, true, true)
            } else {
                (
                    suffix.contains('n'),
                    suffix.contains('z'),
                    suffix.contains('p'),
                )
            };
            let target = pairs.next().unwrap();
            if target.as_rule() == Rule::identifier {
                ParsedInstruction::PcRelative {
                    base: make_br(n, z, p, 0),
                    width: constants::PCOFFSET9_WIDTH,
                    label: target.as_span(),
                }
            } else {
                // A constant target is an absolute 9-bit field, not a
                // label-relative distance.
                let offset = process_field(target, constants::PCOFFSET9_WIDTH)?;
                ParsedInstruction::Complete(make_br(n, z, p, offset))
            }
        }

        Rule::op_jmp => {
            pairs.next(); // keyword
            ParsedInstruction::Complete(make_jmp(process_reg(&pairs.next().unwrap())?))
        }

        Rule::op_ret => ParsedInstruction::Complete(make_ret()),

        Rule::op_jsrr => {
            pairs.next(); // keyword
            ParsedInstruction::Complete(make_jsrr(process_reg(&pairs.next().unwrap())?))
        }

        Rule::op_jsr => {
            pairs.next(); // keyword
            ParsedInstruction::PcRelative {
                base: make_jsr(0),
                width: constants::PCOFFSET11_WIDTH,
                label: pairs.next().unwrap().as_span(),
            }
        }

        Rule::op_ld | Rule::op_ldi | Rule::op_lea | Rule::op_st | Rule::op_sti => {
            let opcode = match rule {
                Rule::op_ld => Opcode::LD,
                Rule::op_ldi => Opcode::LDI,
                Rule::op_lea => Opcode::LEA,
                Rule::op_st => Opcode::ST,
                _ => Opcode::STI,
            };
            pairs.next(); // keyword
            let dr = process_reg(&pairs.next().unwrap())?;
            ParsedInstruction::PcRelative {
                base: make_pc_rel(opcode, dr, 0),
                width: constants::PCOFFSET9_WIDTH,
                label: pairs.next().unwrap().as_span(),
            }
        }

        Rule::op_ldr | Rule::op_str => {
            let opcode = if rule == Rule::op_ldr {
                Opcode::LDR
            } else {
                Opcode::STR
            };
            pairs.next(); // keyword
            let dr = process_reg(&pairs.next().unwrap())?;
            let base = process_reg(&pairs.next().unwrap())?;
            let offset = process_field(pairs.next().unwrap(), constants::OFFSET6_WIDTH)?;
            ParsedInstruction::Complete(make_base_off(opcode, dr, base, offset))
        }

        Rule::op_trap => {
            pairs.next(); // keyword
            let vector = process_number(pairs.next().unwrap())? as Word;
            ParsedInstruction::Complete(make_trap(vector))
        }

        Rule::op_rti => {
            ParsedInstruction::Complete(enum_to_word(Opcode::RTI) << constants::OPCODE_OFFSET)
        }

        Rule::op_getc => ParsedInstruction::Complete(make_trap(enum_to_word(TrapVector::GETC))),
        Rule::op_out => ParsedInstruction::Complete(make_trap(enum_to_word(TrapVector::OUT))),
        Rule::op_puts => ParsedInstruction::Complete(make_trap(enum_to_word(TrapVector::PUTS))),
        Rule::op_in => ParsedInstruction::Complete(make_trap(enum_to_word(TrapVector::IN))),
        Rule::op_putsp => ParsedInstruction::Complete(make_trap(enum_to_word(TrapVector::PUTSP))),
        Rule::op_halt => ParsedInstruction::Complete(make_trap(enum_to_word(TrapVector::HALT))),

        _ => unreachable!(),
    };

    Ok(parsed)
}
