//! Block grouping and codeword interleaving
use super::reed_solomon::ReedSolomonEncoder;
use super::tables::BlockLayout;
use crate::error::EncodeError;

/// Split padded data codewords into group 1 then group 2 blocks
pub fn group_blocks(codewords: &[u8], layout: &BlockLayout) -> Result<Vec<Vec<u8>>, EncodeError> {
    let expected = layout.data_codewords();
    if codewords.len() != expected {
        return Err(EncodeError::LayoutMismatch {
            expected,
            actual: codewords.len(),
        });
    }

    let mut blocks = Vec::with_capacity(layout.num_blocks());
    let mut rest = codewords;
    for len in layout.block_lengths() {
        let (block, tail) = rest.split_at(len);
        blocks.push(block.to_vec());
        rest = tail;
    }
    Ok(blocks)
}

/// EC codewords for each data block
pub fn ec_blocks(blocks: &[Vec<u8>], layout: &BlockLayout) -> Result<Vec<Vec<u8>>, EncodeError> {
    let rs = ReedSolomonEncoder::new(layout.ec_codewords_per_block);
    blocks.iter().map(|block| rs.encode(block)).collect()
}

/// Column-wise read across blocks, skipping exhausted ones
pub fn interleave(blocks: &[Vec<u8>]) -> Vec<u8> {
    let longest = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(blocks.iter().map(Vec::len).sum());
    for i in 0..longest {
        out.extend(blocks.iter().filter_map(|block| block.get(i)));
    }
    out
}

/// Inverse of [`interleave`] for blocks of the given lengths
pub fn deinterleave(data: &[u8], lengths: &[usize]) -> Result<Vec<Vec<u8>>, EncodeError> {
    let expected: usize = lengths.iter().sum();
    if data.len() != expected {
        return Err(EncodeError::LayoutMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mut blocks: Vec<Vec<u8>> = lengths.iter().map(|&n| Vec::with_capacity(n)).collect();
    let longest = lengths.iter().copied().max().unwrap_or(0);
    let mut source = data.iter();
    for i in 0..longest {
        for (block, &len) in blocks.iter_mut().zip(lengths) {
            if i < len {
                if let Some(&b) = source.next() {
                    block.push(b);
                }
            }
        }
    }
    Ok(blocks)
}

/// Final codeword sequence: interleaved data blocks, then interleaved EC blocks
pub fn build_codewords(data: &[u8], layout: &BlockLayout) -> Result<Vec<u8>, EncodeError> {
    let blocks = group_blocks(data, layout)?;
    let ec = ec_blocks(&blocks, layout)?;
    let mut out = interleave(&blocks);
    out.extend(interleave(&ec));
    Ok(out)
}
