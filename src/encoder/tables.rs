use crate::models::{ECLevel, Version};

/// How the data codewords of one (version, level) pair are split into blocks
///
/// Group 2 blocks are one codeword longer than group 1 blocks; a layout with
/// a single block size has `group2.0 == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// EC codewords appended to every block
    pub ec_codewords_per_block: usize,
    /// (block count, data codewords per block)
    pub group1: (usize, usize),
    /// (block count, data codewords per block)
    pub group2: (usize, usize),
}

impl BlockLayout {
    /// Blocks across both groups
    pub fn num_blocks(&self) -> usize {
        self.group1.0 + self.group2.0
    }

    /// Data codeword length of every block, group 1 first
    pub fn block_lengths(&self) -> Vec<usize> {
        let (g1_count, g1_len) = self.group1;
        let (g2_count, g2_len) = self.group2;
        std::iter::repeat_n(g1_len, g1_count)
            .chain(std::iter::repeat_n(g2_len, g2_count))
            .collect()
    }

    /// Data codewords across all blocks
    pub fn data_codewords(&self) -> usize {
        self.group1.0 * self.group1.1 + self.group2.0 * self.group2.1
    }

    /// EC codewords across all blocks
    pub fn ec_codewords(&self) -> usize {
        self.num_blocks() * self.ec_codewords_per_block
    }
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

fn table_entry(table: &[[i8; 41]; 4], version: Version, ec_level: ECLevel) -> usize {
    // Row 0 is the -1 placeholder; Version guarantees 1..=40
    table[ec_level.ordinal()][version.number() as usize] as usize
}

/// Modules left for data and EC codewords once every function pattern is drawn
/// (includes the remainder bits)
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Zero bits appended after the last codeword
pub fn remainder_bits(version: Version) -> usize {
    raw_data_modules(version) % 8
}

/// Total codewords (data + EC) in a symbol
pub fn total_codewords(version: Version) -> usize {
    raw_data_modules(version) / 8
}

/// Block split for `version` at `ec_level`
pub fn block_layout(version: Version, ec_level: ECLevel) -> BlockLayout {
    let ecc = table_entry(&ECC_CODEWORDS_PER_BLOCK, version, ec_level);
    let num_blocks = table_entry(&NUM_ERROR_CORRECTION_BLOCKS, version, ec_level);
    let raw = total_codewords(version);
    let num_short = num_blocks - raw % num_blocks;
    let short_len = raw / num_blocks - ecc;
    BlockLayout {
        ec_codewords_per_block: ecc,
        group1: (num_short, short_len),
        group2: (num_blocks - num_short, short_len + 1),
    }
}

/// Data codewords available for `version` at `ec_level`
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let ecc = table_entry(&ECC_CODEWORDS_PER_BLOCK, version, ec_level);
    let num_blocks = table_entry(&NUM_ERROR_CORRECTION_BLOCKS, version, ec_level);
    total_codewords(version) - ecc * num_blocks
}

/// Exact length in bits of the padded data stream
pub fn bit_size_for(version: Version, ec_level: ECLevel) -> usize {
    data_codewords(version, ec_level) * 8
}
