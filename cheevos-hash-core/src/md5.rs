//! Streaming MD5 (RFC 1321).
//!
//! The engine mirrors the layout of the reference hasher used by the
//! achievement database: a 29-bit low byte counter with a separate high
//! word, a 64-byte pending block, and four round registers. Feeding the same
//! bytes in any chunking always produces the same digest.

use crate::Digest;

/// Size of one compression block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// The low counter keeps byte counts modulo 2^29 so that `lo << 3` still
/// fits in 32 bits when the bit length is written out.
const LO_MASK: u64 = 0x1fff_ffff;

const INIT_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Per-round rotation amounts; step `i` of round `r` rotates by `S[r][i % 4]`.
const S: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

/// Additive constants, `floor(2^32 * |sin(i + 1)|)`.
const K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee, 0xf57c_0faf, 0x4787_c62a, 0xa830_4613,
    0xfd46_9501, 0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be, 0x6b90_1122, 0xfd98_7193,
    0xa679_438e, 0x49b4_0821, 0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa, 0xd62f_105d,
    0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8, 0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a, 0xfffa_3942, 0x8771_f681, 0x6d9d_6122,
    0xfde5_380c, 0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70, 0x289b_7ec6, 0xeaa1_27fa,
    0xd4ef_3085, 0x0488_1d05, 0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665, 0xf429_2244,
    0x432a_ff97, 0xab94_23a7, 0xfc93_a039, 0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1, 0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb,
    0xeb86_d391,
];

/// In-progress MD5 computation.
///
/// Create one per hash, feed it with [`update`](Md5::update), and consume it
/// with [`finalize`](Md5::finalize).
#[derive(Clone)]
pub struct Md5 {
    lo: u32,
    hi: u32,
    state: [u32; 4],
    buffer: [u8; BLOCK_SIZE],
}

impl Md5 {
    pub const fn new() -> Self {
        Self {
            lo: 0,
            hi: 0,
            state: INIT_STATE,
            buffer: [0; BLOCK_SIZE],
        }
    }

    /// One-shot digest of a byte slice.
    pub fn digest(data: &[u8]) -> Digest {
        let mut ctx = Self::new();
        ctx.update(data);
        ctx.finalize()
    }

    /// Total number of bytes absorbed so far.
    pub fn bytes_absorbed(&self) -> u64 {
        (u64::from(self.hi) << 29) | u64::from(self.lo)
    }

    /// Number of bytes waiting in the pending block. Always below 64.
    pub fn buffered(&self) -> usize {
        (self.lo & 0x3f) as usize
    }

    /// Absorb `data` into the digest.
    pub fn update(&mut self, data: &[u8]) {
        let saved_lo = self.lo;
        let total = u64::from(saved_lo) + data.len() as u64;
        self.lo = (total & LO_MASK) as u32;
        self.hi = self.hi.wrapping_add((total >> 29) as u32);

        let used = (saved_lo & 0x3f) as usize;
        let mut input = data;

        if used != 0 {
            let available = BLOCK_SIZE - used;
            if input.len() < available {
                self.buffer[used..used + input.len()].copy_from_slice(input);
                return;
            }

            let (head, rest) = input.split_at(available);
            self.buffer[used..].copy_from_slice(head);
            compress(&mut self.state, &self.buffer);
            input = rest;
        }

        let mut blocks = input.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    /// Pad, append the bit length, and emit the digest. The context is
    /// wiped before it is dropped.
    pub fn finalize(mut self) -> Digest {
        let mut used = self.buffered();
        self.buffer[used] = 0x80;
        used += 1;

        if BLOCK_SIZE - used < 8 {
            self.buffer[used..].fill(0);
            compress(&mut self.state, &self.buffer);
            used = 0;
        }
        self.buffer[used..BLOCK_SIZE - 8].fill(0);

        let bits_lo = self.lo << 3;
        self.buffer[56..60].copy_from_slice(&bits_lo.to_le_bytes());
        self.buffer[60..64].copy_from_slice(&self.hi.to_le_bytes());
        compress(&mut self.state, &self.buffer);

        let mut out = [0u8; 16];
        for (bytes, word) in out.chunks_exact_mut(4).zip(self.state) {
            bytes.copy_from_slice(&word.to_le_bytes());
        }

        self.wipe();
        Digest::new(out)
    }

    fn wipe(&mut self) {
        self.lo = 0;
        self.hi = 0;
        self.state = [0; 4];
        self.buffer = [0; BLOCK_SIZE];
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Md5 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Md5")
            .field("bytes_absorbed", &self.bytes_absorbed())
            .field("buffered", &self.buffered())
            .finish_non_exhaustive()
    }
}

/// Run the 64-step compression function over one 64-byte block.
fn compress(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    let mut x = [0u32; 16];
    for (word, bytes) in x.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let round = step / 16;
        let (f, index) = match round {
            0 => (d ^ (b & (c ^ d)), step),
            1 => (c ^ (d & (b ^ c)), (5 * step + 1) % 16),
            2 => (b ^ c ^ d, (3 * step + 5) % 16),
            _ => (c ^ (b | !d), (7 * step) % 16),
        };

        let mixed = a
            .wrapping_add(f)
            .wrapping_add(K[step])
            .wrapping_add(x[index])
            .rotate_left(S[round][step % 4]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(mixed);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
#[path = "tests/md5_tests.rs"]
mod tests;
