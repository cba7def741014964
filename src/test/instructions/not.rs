use super::*;

#[test]
fn complements_all_bits() {
    instruction_executes!(
        make_not(Reg::R0, Reg::R1),
        [R1 = 0b0101_0101_0101_0101] => [R0 = 0b1010_1010_1010_1010, COND = 4]
    );
}

#[test]
fn complement_of_all_ones_is_zero() {
    instruction_executes!(
        make_not(Reg::R0, Reg::R1),
        [R1 = 0xFFFF] => [R0 = 0, COND = 2]
    );
}

#[test]
fn complement_of_a_negative_is_positive() {
    instruction_executes!(
        make_not(Reg::R0, Reg::R1),
        [R1 = 0xFFFE] => [R0 = 1, COND = 1]
    );
}
