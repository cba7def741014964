use super::*;

#[test]
fn stores_base_plus_offset() {
    let vm = run_program!(
        [instr_base_off!(STR, R0, R1, 3)],
        [R0 = 0x00FF, R1 = 0x5000] => [],
        1,
        true,
        constants::PC_START + 1
    );

    assert_eq!(0x00FF, vm.memory().read(0x5003));
}

#[test]
fn negative_offset() {
    let vm = run_program!(
        [instr_base_off!(STR, R0, R1, -4)],
        [R0 = 1, R1 = 0x5000] => [],
        1,
        true,
        constants::PC_START + 1
    );

    assert_eq!(1, vm.memory().read(0x4FFC));
}
