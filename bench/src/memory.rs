use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use boolpack::{PackedBoolArray, Serializable, Word};

const SEED_BITS: u64 = 113;
const NUM_BITS: &[usize] = &[1 << 10, 1 << 20, (1 << 20) + 1];

fn main() {
    for &nbits in NUM_BITS {
        show_memories(nbits);
    }
}

fn gen_random_bits(len: usize, p: f64, seed: u64) -> Vec<bool> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_bool(p)).collect()
}

fn show_memories(nbits: usize) {
    let bits = gen_random_bits(nbits, 0.5, SEED_BITS);
    println!("[n = {nbits}]");

    print_memory("Vec<bool>", bits.len(), nbits);
    print_packed::<u8>(&bits);
    print_packed::<u16>(&bits);
    print_packed::<u32>(&bits);
    print_packed::<u64>(&bits);
    print_packed::<u128>(&bits);
}

fn print_packed<W: Word>(bits: &[bool]) {
    let pa = PackedBoolArray::<W>::from_bits(bits.iter().cloned());
    let name = format!("PackedBoolArray<{}>", std::any::type_name::<W>());
    print_memory(&name, pa.size_in_bytes(), bits.len());
}

fn print_memory(name: &str, bytes: usize, nbits: usize) {
    println!(
        "{}: {:.3} bits per bit",
        name,
        (bytes * 8) as f64 / nbits as f64
    );
}
