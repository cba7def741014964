use super::*;

#[test]
fn register_mode() {
    run_program!(
        [instr_rrr!(AND, R2, R0, R1)],
        [R0 = 0b1100, R1 = 0b1010] => [R2 = 0b1000, COND = 1],
        1,
        true,
        constants::PC_START + 1
    );
}

#[test]
fn immediate_mode_masks_low_bits() {
    instruction_executes!(
        instr_rri!(AND, R0, R1, 0xF),
        [R1 = 0x1234] => [R0 = 0x4, COND = 1]
    );
}

#[test]
fn clearing_a_register_sets_zero() {
    instruction_executes!(
        instr_rri!(AND, R0, R0, 0),
        [R0 = 0xFFFF] => [R0 = 0, COND = 2]
    );
}

#[test]
fn negative_immediate_keeps_the_value() {
    // AND with #-1 is the identity; flags still follow the result.
    instruction_executes!(
        instr_rri!(AND, R0, R1, -1),
        [R1 = 0x8001] => [R0 = 0x8001, COND = 4]
    );
}
