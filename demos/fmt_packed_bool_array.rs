//! Example to demonstrate the usage of `fmt::Debug` for `PackedBoolArray`.

use boolpack::PackedBoolArray;

fn main() {
    let pa = PackedBoolArray::<u8>::from_bits([
        false, true, false, false, true, false, true, false, false, true, // 10
        true, false, true, false, false, true, false, true, false, true, // 20
        false, true, false, true, false, false, true, true, false, true, // 30
        true, false, true, false, false, true, false, true, false, false, // 40
    ]);

    // Print the PackedBoolArray using the default debug format.
    // The output will be "PackedBoolArray { bits: [40 bits, 18 ones], len: 40, word_width: 8 }".
    println!("{:?}", pa);

    // For a more detailed view, use the pretty debug format.
    // The output will be:
    //
    // PackedBoolArray {
    //     bits: [
    //         0: 0100101001101001,
    //         16: 0101010100110110,
    //         32: 10010100,
    //     ],
    //     len: 40,
    //     word_width: 8,
    // }
    println!("{:#?}", pa);

    // The first word holds bits 0..8, least significant bit first.
    println!("{:#010b}", pa.words()[0]);
}
