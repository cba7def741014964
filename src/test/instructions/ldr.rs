use super::*;

#[test]
fn loads_base_plus_offset() {
    run_program!(
        [instr_base_off!(LDR, R0, R1, 2), 0, 0, 0x0055],
        [R1 = 0x3001] => [R0 = 0x55, COND = 1],
        1,
        true,
        constants::PC_START + 1
    );
}

#[test]
fn negative_offset_reaches_below_the_base() {
    run_program!(
        [instr_base_off!(LDR, R0, R1, -1), 0xFFFF],
        [R1 = 0x3002] => [R0 = 0xFFFF, COND = 4],
        1,
        true,
        constants::PC_START + 1
    );
}

#[test]
fn zero_value_sets_the_zero_flag() {
    run_program!(
        [instr_base_off!(LDR, R0, R1, 0)],
        [R0 = 3, R1 = 0x4000] => [R0 = 0, COND = 2],
        1,
        true,
        constants::PC_START + 1
    );
}
