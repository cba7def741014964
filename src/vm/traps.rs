use super::{Error, Vm};
use crate::constants;
use crate::instructions::{Reg, TrapVector};
use crate::Word;
use num::FromPrimitive;

/// Dispatches a TRAP instruction on its 8-bit vector. The six defined
/// vectors are handled natively and never return through R7, so R7 is left
/// untouched; an undefined vector is a bad opcode.
pub(crate) fn dispatch(vm: &mut Vm, instruction: Word) -> Result<(), Error> {
    let vector = instruction & constants::TRAPVECT8_MASK;
    let trap = match TrapVector::from_u16(vector) {
        Some(trap) => trap,
        None => return Err(Error::BadOpcode(instruction)),
    };

    match trap {
        TrapVector::GETC => getc(vm),
        TrapVector::OUT => out(vm),
        TrapVector::PUTS => puts(vm),
        TrapVector::IN => in_(vm),
        TrapVector::PUTSP => putsp(vm),
        TrapVector::HALT => halt(vm),
    }
}

fn getc(vm: &mut Vm) -> Result<(), Error> {
    let key = vm.input.getchar()?;
    vm.set_register(Reg::R0, Word::from(key));
    Ok(())
}

fn out(vm: &mut Vm) -> Result<(), Error> {
    let c = char::from((vm.register(Reg::R0) & 0xFF) as u8);
    vm.output.write_str(&c.to_string())?;
    Ok(())
}

fn puts(vm: &mut Vm) -> Result<(), Error> {
    let mut text = String::new();
    for address in vm.register(Reg::R0)..=Word::max_value() {
        let word = vm.memory.read(address);
        if word == 0 {
            break;
        }
        text.push(word_to_char(word));
    }
    vm.output.write_str(&text)?;
    Ok(())
}

fn in_(vm: &mut Vm) -> Result<(), Error> {
    vm.output.write_str("Enter a character: ")?;
    let key = vm.input.getchar()?;
    vm.output.write_str(&char::from(key).to_string())?;
    vm.set_register(Reg::R0, Word::from(key));
    Ok(())
}

fn putsp(vm: &mut Vm) -> Result<(), Error> {
    let mut text = String::new();
    for address in vm.register(Reg::R0)..=Word::max_value() {
        let word = vm.memory.read(address);
        if word == 0 {
            break;
        }
        text.push(char::from((word & 0xFF) as u8));
        let high = (word >> 8) as u8;
        if high != 0 {
            text.push(char::from(high));
        }
    }
    vm.output.write_str(&text)?;
    Ok(())
}

fn halt(vm: &mut Vm) -> Result<(), Error> {
    vm.diagnostic.write_str("-- HALT --\n")?;
    vm.halt();
    Ok(())
}

/// A word string stores one character per word; values outside the scalar
/// range fall back to their low byte.
fn word_to_char(word: Word) -> char {
    char::from_u32(u32::from(word)).unwrap_or_else(|| char::from(word as u8))
}
