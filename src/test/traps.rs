use super::*;

#[test]
fn getc_stores_the_key_in_r0_without_touching_flags() {
    let (mut vm, _output, _diagnostic) = buffer_vm_with_input(ScriptedInput::new(b"q"));
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[instr_trap!(GETC)]));

    vm.step().unwrap();

    assert_eq!(Word::from(b'q'), vm.register(Reg::R0));
    assert_eq!(1, vm.register(Reg::COND));
    assert_eq!(constants::PC_START + 1, vm.register(Reg::PC));
}

#[test]
fn getc_blocks_on_a_dead_keyboard() {
    let (mut vm, _output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[instr_trap!(GETC)]));

    assert_matches!(vm.step(), Err(Error::Io(_)));
}

#[test]
fn out_writes_the_low_byte_of_r0() {
    let (mut vm, output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[instr_trap!(OUT)]));
    vm.set_register(Reg::R0, 0x1248); // 'H' with a high byte to discard

    vm.step().unwrap();

    assert_eq!("H", output.take());
}

#[test]
fn puts_writes_one_character_per_word_up_to_the_terminator() {
    let (mut vm, output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    let mut words = vec![instr_trap!(PUTS)];
    words.extend("ok!\n".bytes().map(Word::from));
    words.push(0);
    words.push(Word::from(b'x')); // past the terminator, must not print
    vm.load_image(&image(constants::PC_START, &words));
    vm.set_register(Reg::R0, constants::PC_START + 1);

    vm.step().unwrap();

    assert_eq!("ok!\n", output.take());
}

#[test]
fn puts_of_an_empty_string_writes_nothing() {
    let (mut vm, output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[instr_trap!(PUTS), 0]));
    vm.set_register(Reg::R0, constants::PC_START + 1);

    vm.step().unwrap();

    assert_eq!("", output.take());
}

#[test]
fn in_prompts_echoes_and_stores() {
    let (mut vm, output, _diagnostic) = buffer_vm_with_input(ScriptedInput::new(b"z"));
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[instr_trap!(IN)]));

    vm.step().unwrap();

    assert_eq!("Enter a character: z", output.take());
    assert_eq!(Word::from(b'z'), vm.register(Reg::R0));
}

#[test]
fn putsp_unpacks_two_characters_per_word() {
    let (mut vm, output, _diagnostic) = buffer_vm();
    vm.reset().unwrap();
    // "ab" packed into one word (low byte first), then "c" with a zero
    // high byte, then the terminator.
    vm.load_image(&image(
        constants::PC_START,
        &[instr_trap!(PUTSP), 0x6261, 0x0063, 0],
    ));
    vm.set_register(Reg::R0, constants::PC_START + 1);

    vm.step().unwrap();

    assert_eq!("abc", output.take());
}

#[test]
fn halt_writes_the_diagnostic_and_stops() {
    let (mut vm, output, diagnostic) = buffer_vm();
    vm.reset().unwrap();
    vm.load_image(&image(constants::PC_START, &[instr_trap!(HALT)]));
    diagnostic.take();

    vm.step().unwrap();

    assert!(!vm.is_running());
    assert_eq!("-- HALT --\n", diagnostic.take());
    assert_eq!("", output.contents());
}
