use super::{traps, Error, Vm};
use crate::constants;
use crate::instructions::{reg_at, sign_extend, Opcode, Reg};
use crate::Word;
use num::FromPrimitive;

/// Executes one decoded instruction against the machine. The PC has
/// already been incremented, so PC-relative arithmetic uses it directly.
pub(crate) fn execute(vm: &mut Vm, instruction: Word) -> Result<(), Error> {
    let opcode = match Opcode::from_u16(instruction >> constants::OPCODE_OFFSET) {
        Some(opcode) => opcode,
        None => return Err(Error::BadOpcode(instruction)),
    };

    match opcode {
        Opcode::ADD => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let sr1 = vm.register(reg_at(instruction, constants::SR1_OFFSET));
            let operand = second_operand(vm, instruction);
            vm.set_register(dr, sr1.wrapping_add(operand));
            vm.update_flags(dr);
        }

        Opcode::AND => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let sr1 = vm.register(reg_at(instruction, constants::SR1_OFFSET));
            let operand = second_operand(vm, instruction);
            vm.set_register(dr, sr1 & operand);
            vm.update_flags(dr);
        }

        Opcode::NOT => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let sr = vm.register(reg_at(instruction, constants::SR1_OFFSET));
            vm.set_register(dr, !sr);
            vm.update_flags(dr);
        }

        Opcode::BR => {
            let mask = (instruction >> constants::DR_OFFSET) & 0x7;
            if mask & vm.register(Reg::COND) != 0 {
                let pc = vm.register(Reg::PC);
                vm.set_register(Reg::PC, pc.wrapping_add(pc_offset9(instruction)));
            }
        }

        Opcode::JMP => {
            let base = vm.register(reg_at(instruction, constants::BASER_OFFSET));
            vm.set_register(Reg::PC, base);
        }

        Opcode::JSR => {
            // R7 is saved before the jump, from the already-incremented PC.
            let pc = vm.register(Reg::PC);
            vm.set_register(Reg::R7, pc);
            let target = if instruction & constants::LONG_FLAG != 0 {
                let offset = sign_extend(
                    instruction & constants::PCOFFSET11_MASK,
                    constants::PCOFFSET11_WIDTH,
                );
                pc.wrapping_add(offset)
            } else {
                vm.register(reg_at(instruction, constants::BASER_OFFSET))
            };
            vm.set_register(Reg::PC, target);
        }

        Opcode::LD => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let address = vm.register(Reg::PC).wrapping_add(pc_offset9(instruction));
            let value = vm.mem_read(address)?;
            vm.set_register(dr, value);
            vm.update_flags(dr);
        }

        Opcode::LDI => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let address = vm.register(Reg::PC).wrapping_add(pc_offset9(instruction));
            let indirect = vm.mem_read(address)?;
            let value = vm.mem_read(indirect)?;
            vm.set_register(dr, value);
            vm.update_flags(dr);
        }

        Opcode::LDR => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let base = vm.register(reg_at(instruction, constants::BASER_OFFSET));
            let value = vm.mem_read(base.wrapping_add(offset6(instruction)))?;
            vm.set_register(dr, value);
            vm.update_flags(dr);
        }

        Opcode::LEA => {
            let dr = reg_at(instruction, constants::DR_OFFSET);
            let address = vm.register(Reg::PC).wrapping_add(pc_offset9(instruction));
            vm.set_register(dr, address);
            vm.update_flags(dr);
        }

        Opcode::ST => {
            let sr = vm.register(reg_at(instruction, constants::DR_OFFSET));
            let address = vm.register(Reg::PC).wrapping_add(pc_offset9(instruction));
            vm.mem_write(address, sr);
        }

        Opcode::STI => {
            let sr = vm.register(reg_at(instruction, constants::DR_OFFSET));
            let address = vm.register(Reg::PC).wrapping_add(pc_offset9(instruction));
            let indirect = vm.mem_read(address)?;
            vm.mem_write(indirect, sr);
        }

        Opcode::STR => {
            let sr = vm.register(reg_at(instruction, constants::DR_OFFSET));
            let base = vm.register(reg_at(instruction, constants::BASER_OFFSET));
            vm.mem_write(base.wrapping_add(offset6(instruction)), sr);
        }

        Opcode::TRAP => {
            traps::dispatch(vm, instruction)?;
        }

        Opcode::RTI | Opcode::RES => {
            return Err(Error::BadOpcode(instruction));
        }
    }

    Ok(())
}

/// SR2 or the sign-extended imm5, by the mode bit.
fn second_operand(vm: &Vm, instruction: Word) -> Word {
    if instruction & constants::IMM_FLAG != 0 {
        sign_extend(instruction & constants::IMM5_MASK, constants::IMM5_WIDTH)
    } else {
        vm.register(reg_at(instruction, constants::SR2_OFFSET))
    }
}

fn pc_offset9(instruction: Word) -> Word {
    sign_extend(
        instruction & constants::PCOFFSET9_MASK,
        constants::PCOFFSET9_WIDTH,
    )
}

fn offset6(instruction: Word) -> Word {
    sign_extend(
        instruction & constants::OFFSET6_MASK,
        constants::OFFSET6_WIDTH,
    )
}
