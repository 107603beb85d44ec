//! Integer hash engine: PCG-style mixing of `u32` tuples.
//!
//! Every lane is seeded with one LCG step (`x * 1664525 + 1013904223`), then
//! mixed with cross-term multiply-adds and a `>> 16` xor-shift. Arithmetic
//! wraps modulo 2^32. These are the only source of pseudo-randomness in the
//! crate: outputs depend on the inputs alone.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

#[inline]
const fn lcg(v: u32) -> u32 {
    v.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
}

/// PCG4D hash.
#[inline]
#[must_use]
pub const fn hash4(x: u32, y: u32, z: u32, w: u32) -> (u32, u32, u32, u32) {
    let (mut x, mut y, mut z, mut w) = (lcg(x), lcg(y), lcg(z), lcg(w));

    x = x.wrapping_add(y.wrapping_mul(w));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));
    w = w.wrapping_add(y.wrapping_mul(z));

    x ^= x >> 16;
    y ^= y >> 16;
    z ^= z >> 16;
    w ^= w >> 16;

    x = x.wrapping_add(y.wrapping_mul(w));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));
    w = w.wrapping_add(y.wrapping_mul(z));

    (x, y, z, w)
}

/// PCG3D hash.
#[inline]
#[must_use]
pub const fn hash3(x: u32, y: u32, z: u32) -> (u32, u32, u32) {
    let (mut x, mut y, mut z) = (lcg(x), lcg(y), lcg(z));

    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));

    x ^= x >> 16;
    y ^= y >> 16;
    z ^= z >> 16;

    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));

    (x, y, z)
}

/// `hash3(x, y, 0)`, keeping the first two lanes.
#[inline]
#[must_use]
pub const fn hash2(x: u32, y: u32) -> (u32, u32) {
    let (x, y, _) = hash3(x, y, 0);
    (x, y)
}

/// `hash2(x, 0)`, keeping the first lane.
#[inline]
#[must_use]
pub const fn hash1(x: u32) -> u32 {
    hash2(x, 0).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn lower_arities_are_prefixes_of_hash3() {
        for v in [0u32, 1, 7, 88, 0xDEAD_BEEF, u32::MAX] {
            let (a, b, _) = hash3(v, v ^ 0x55, 0);
            assert_eq!(hash2(v, v ^ 0x55), (a, b));
            assert_eq!(hash1(v), hash3(v, 0, 0).0);
        }
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash3(88, 12, -3i32 as u32), hash3(88, 12, -3i32 as u32));
        assert_eq!(hash4(1, 2, 3, 4), hash4(1, 2, 3, 4));
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        // Overflow must wrap, even in debug builds.
        let _ = hash4(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        let _ = hash3(u32::MAX, 0, u32::MAX);
    }

    /// Mean Hamming distance over all output lanes when one random input bit
    /// is flipped. An ideal hash flips 16 of 32 bits on average.
    fn mean_flipped_bits(trials: usize, mut f: impl FnMut(&mut StdRng) -> (Vec<u32>, Vec<u32>)) -> f64 {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut total = 0u64;
        let mut lanes = 0u64;
        for _ in 0..trials {
            let (a, b) = f(&mut rng);
            for (p, q) in a.iter().zip(&b) {
                total += (p ^ q).count_ones() as u64;
                lanes += 1;
            }
        }
        total as f64 / lanes as f64
    }

    fn hash3_flip(rng: &mut StdRng, bits: std::ops::Range<u32>) -> (Vec<u32>, Vec<u32>) {
        let mut input = [rng.gen::<u32>(), rng.gen::<u32>(), rng.gen::<u32>()];
        let (a, b, c) = hash3(input[0], input[1], input[2]);
        input[rng.gen_range(0..3)] ^= 1 << rng.gen_range(bits);
        let (d, e, f) = hash3(input[0], input[1], input[2]);
        (vec![a, b, c], vec![d, e, f])
    }

    #[test]
    fn hash3_avalanche() {
        // High input bits only reach the upper output bits through the
        // multiplies, so the full-range mean sits a little under 16.
        let mean = mean_flipped_bits(20_000, |rng| hash3_flip(rng, 0..32));
        assert!((mean - 16.0).abs() < 3.0, "mean flipped bits {mean:.2}, expected ~16");

        let mean = mean_flipped_bits(20_000, |rng| hash3_flip(rng, 0..16));
        assert!((mean - 16.0).abs() < 1.0, "low-bit flips: mean {mean:.2}, expected ~16");
    }

    #[test]
    fn hash4_avalanche() {
        let mean = mean_flipped_bits(20_000, |rng| {
            let mut input = [rng.gen::<u32>(), rng.gen::<u32>(), rng.gen::<u32>(), rng.gen::<u32>()];
            let (a, b, c, d) = hash4(input[0], input[1], input[2], input[3]);
            input[rng.gen_range(0..4)] ^= 1 << rng.gen_range(0..32);
            let (e, f, g, h) = hash4(input[0], input[1], input[2], input[3]);
            (vec![a, b, c, d], vec![e, f, g, h])
        });
        assert!((mean - 16.0).abs() < 3.0, "mean flipped bits {mean:.2}, expected ~16");
    }

    #[test]
    fn gradient_selector_bits_are_roughly_uniform() {
        let mut counts = [0usize; 8];
        for cy in 0..64u32 {
            for cx in 0..64u32 {
                counts[(hash3(88, cx, cy).0 & 7) as usize] += 1;
            }
        }
        // 4096 cells / 8 buckets = 512 expected per bucket.
        for (i, &n) in counts.iter().enumerate() {
            assert!((400..=624).contains(&n), "bucket {i} has {n} hits");
        }
    }
}
