pub const fn is_identical(first: &[u8], second: &[u8]) -> bool {
    if first.len() != second.len() {return false;}
    let mut index = 0;
    while index != first.len() {
        if first[index] != second[index] {return false;}
        index += 1;
    }
    true
}

// panics if input_index + N > input.len()
pub const fn array_from_input<const N: usize>(input: &[u8], mut input_index: usize) -> [u8; N] {
    let mut output = [0; N];
    let mut output_index = 0;
    while output_index != N {
        output[output_index] = input[input_index];
        output_index += 1;
        input_index += 1;
    }
    output
}

// copies input into output starting at output_index, panics if it does not fit
pub const fn copy_into<const N: usize>(mut output: [u8; N], input: &[u8], mut output_index: usize) -> [u8; N] {
    let mut input_index = 0;
    while input_index != input.len() {
        output[output_index] = input[input_index];
        output_index += 1;
        input_index += 1;
    }
    output
}
