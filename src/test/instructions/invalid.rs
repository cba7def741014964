use super::*;

#[test]
fn rti_is_a_bad_opcode() {
    instruction_faults!(0x8000);
}

#[test]
fn the_reserved_opcode_is_a_bad_opcode() {
    instruction_faults!(0xD000);
}

#[test]
fn an_undefined_trap_vector_is_a_bad_opcode() {
    instruction_faults!(make_trap(0xFF));
}

#[test]
fn the_faulting_word_is_reported() {
    let (mut vm, _output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[0xD123]));

    match vm.step() {
        Err(Error::BadOpcode(word)) => assert_eq!(0xD123, word),
        other => panic!("expected a bad opcode error, got {:?}", other),
    }
}
