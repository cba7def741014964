use super::*;

#[test]
fn loads_the_effective_address() {
    instruction_executes!(
        instr_pc_rel!(LEA, R0, 5),
        [] => [R0 = constants::PC_START + 6, COND = 1]
    );
}

#[test]
fn negative_offset() {
    instruction_executes!(
        instr_pc_rel!(LEA, R0, -1),
        [] => [R0 = constants::PC_START, COND = 1]
    );
}

#[test]
fn address_with_the_top_bit_set_reads_as_negative() {
    let (mut vm, _output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(0x8000, &[instr_pc_rel!(LEA, R0, 0)]));
    vm.set_register(Reg::PC, 0x8000);

    vm.step().unwrap();

    assert_eq!(0x8001, vm.register(Reg::R0));
    assert_eq!(4, vm.register(Reg::COND));
}
