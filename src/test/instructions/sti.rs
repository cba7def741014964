use super::*;

#[test]
fn stores_through_a_pointer() {
    let vm = run_program!(
        [instr_pc_rel!(STI, R0, 0), 0x4000],
        [R0 = 0x1234] => [],
        1,
        true,
        constants::PC_START + 1
    );

    assert_eq!(0x1234, vm.memory().read(0x4000));
    assert_eq!(0x4000, vm.memory().read(constants::PC_START + 1));
}
