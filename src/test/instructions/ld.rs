use super::*;

#[test]
fn loads_pc_relative() {
    run_program!(
        [instr_pc_rel!(LD, R0, 1), 0, 0x0042],
        [] => [R0 = 0x42, COND = 1],
        1,
        true,
        constants::PC_START + 1
    );
}

#[test]
fn negative_value_sets_the_negative_flag() {
    run_program!(
        [instr_pc_rel!(LD, R0, 0), 0xBEEF],
        [] => [R0 = 0xBEEF, COND = 4],
        1,
        true,
        constants::PC_START + 1
    );
}

#[test]
fn zero_value_sets_the_zero_flag() {
    run_program!(
        [instr_pc_rel!(LD, R0, 0), 0x0000],
        [R0 = 7] => [R0 = 0, COND = 2],
        1,
        true,
        constants::PC_START + 1
    );
}
