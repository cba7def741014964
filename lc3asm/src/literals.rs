use crate::{new_parser_error, Result, Rule};
use lc3vm::Reg;
use pest::iterators::Pair;
use util::ParseEnumError;

/// Parses any constant form into a plain integer: `#dec`, `xHEX`, `bBIN`,
/// or a bare (possibly negative) decimal in directive arguments. Values
/// must be representable in 16 bits, signed or unsigned.
pub fn process_number(pair: Pair<Rule>) -> Result<i64> {
    let span = pair.as_span();
    let parsed = match pair.as_rule() {
        Rule::dec_int => pair.as_str().parse::<i64>().ok(),
        Rule::dec_const => {
            let digits = pair.into_inner().next().unwrap();
            digits.as_str().parse::<i64>().ok()
        }
        Rule::hex_const => {
            let digits = pair.into_inner().next().unwrap();
            i64::from_str_radix(digits.as_str(), 16).ok()
        }
        Rule::bin_const => {
            let digits = pair.into_inner().next().unwrap();
            i64::from_str_radix(digits.as_str(), 2).ok()
        }
        _ => unreachable!(),
    };
    match parsed {
        Some(value) if value >= -(1 << 15) && value < (1 << 16) => Ok(value),
        _ => Err(new_parser_error(
            span,
            "constant does not fit in 16 bits".to_owned(),
        )),
    }
}

/// Like [`process_number`] but rejects negative values; for sizes and
/// origins.
pub fn process_uint(pair: Pair<Rule>) -> Result<u16> {
    let span = pair.as_span();
    let value = process_number(pair)?;
    if value < 0 {
        Err(new_parser_error(span, "value must not be negative".to_owned()))
    } else {
        Ok(value as u16)
    }
}

/// Bounds-checks a constant operand against its instruction field:
/// negatives as `width`-bit two's complement, positives up to the unsigned
/// field range.
pub fn process_field(pair: Pair<Rule>, width: u32) -> Result<i16> {
    let span = pair.as_span();
    let value = process_number(pair)?;
    let min = -(1i64 << (width - 1));
    let max = (1i64 << width) - 1;
    if value < min || value > max {
        Err(new_parser_error(
            span,
            format!("value {} does not fit in a {}-bit field", value, width),
        ))
    } else {
        Ok(value as i16)
    }
}

pub fn process_reg(pair: &Pair<Rule>) -> Result<Reg> {
    pair.as_str()
        .parse()
        .map_err(|err: ParseEnumError| new_parser_error(pair.as_span(), format!("{}", err)))
}

/// Decodes a string literal body; `\n`, `\t` and `\e` become their
/// characters, any other backslash sequence is kept verbatim.
pub fn decode_string(pair: Pair<Rule>) -> String {
    let body = pair.into_inner().next().unwrap();
    let text = body.as_str();
    let mut decoded = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('e') => decoded.push('\x1b'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }
    decoded
}
