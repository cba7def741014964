use super::*;

#[test]
fn loads_through_a_pointer() {
    // The pointer at 0x3002 names 0x3003, which holds the value.
    run_program!(
        [instr_pc_rel!(LDI, R0, 1), 0, 0x3003, 0x0077],
        [] => [R0 = 0x77, COND = 1],
        1,
        true,
        constants::PC_START + 1
    );
}

#[test]
fn pointer_may_name_any_address() {
    let (mut vm, _output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(
        constants::PC_START,
        &[instr_pc_rel!(LDI, R0, 0), 0x8000],
    ));
    vm.memory_mut().write(0x8000, 0xABCD);

    vm.step().unwrap();

    assert_eq!(0xABCD, vm.register(Reg::R0));
    assert_eq!(4, vm.register(Reg::COND));
}

#[test]
fn zero_value_sets_the_zero_flag() {
    run_program!(
        [instr_pc_rel!(LDI, R0, 0), 0x3002, 0x0000],
        [R0 = 9] => [R0 = 0, COND = 2],
        1,
        true,
        constants::PC_START + 1
    );
}
