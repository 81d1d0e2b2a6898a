//! Reed-Solomon error correction codewords for QR blocks
use super::galois::Gf256;
use crate::error::EncodeError;

/// Reed-Solomon encoder for a fixed number of EC codewords per block
pub struct ReedSolomonEncoder {
    num_ecc_codewords: usize,
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Encoder producing `num_ecc_codewords` EC codewords per block
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            num_ecc_codewords,
            generator: Gf256::generator_poly(num_ecc_codewords),
        }
    }

    /// EC codewords per block
    pub fn num_ecc_codewords(&self) -> usize {
        self.num_ecc_codewords
    }

    /// EC codewords for one block of data codewords
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let n = self.num_ecc_codewords;
        // Message polynomial shifted up by x^n
        let mut message = Vec::with_capacity(data.len() + n);
        message.extend_from_slice(data);
        message.resize(data.len() + n, 0);

        let (_, remainder) = Gf256::poly_div(&message, &self.generator)?;

        // Leading zero terms of the remainder still count as codewords
        let mut ecc = vec![0u8; n.saturating_sub(remainder.len())];
        ecc.extend_from_slice(&remainder[remainder.len().saturating_sub(n)..]);
        Ok(ecc)
    }
}
