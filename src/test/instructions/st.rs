use super::*;

#[test]
fn stores_pc_relative() {
    let vm = run_program!(
        [instr_pc_rel!(ST, R0, 5)],
        [R0 = 0xABCD] => [],
        1,
        true,
        constants::PC_START + 1
    );

    assert_eq!(0xABCD, vm.memory().read(constants::PC_START + 6));
}

#[test]
fn negative_offset_stores_before_the_program() {
    let vm = run_program!(
        [instr_pc_rel!(ST, R3, -4)],
        [R3 = 7] => [],
        1,
        true,
        constants::PC_START + 1
    );

    assert_eq!(7, vm.memory().read(constants::PC_START - 3));
}

#[test]
fn does_not_touch_the_flags() {
    let vm = run_program!(
        [instr_pc_rel!(ST, R0, 1)],
        [R0 = 0x8000, COND = 2] => [],
        1,
        true,
        constants::PC_START + 1
    );

    assert_eq!(0x8000, vm.memory().read(constants::PC_START + 2));
}
