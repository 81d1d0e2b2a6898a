//! GF(256) arithmetic for Reed-Solomon encoding
//! QR codes use the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
use crate::error::EncodeError;

const PRIMITIVE: u16 = 0x11D;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 256 {
        exp[i] = x as u8;
        // alpha^255 wraps back to 1; keep log[1] = 0
        if i < 255 {
            log[x as usize] = i as u8;
        }
        x <<= 1;
        if x > 0xFF {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    Tables { exp, log }
}

static TABLES: Tables = build_tables();

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> u8 {
        TABLES.log[a as usize]
    }

    /// Addition (XOR)
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtraction, identical to addition
    pub fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiplication via log/exp tables
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        TABLES.exp[(log_a + log_b) % 255]
    }

    /// Division; zero divisor is an error
    pub fn div(a: u8, b: u8) -> Result<u8, EncodeError> {
        if b == 0 {
            return Err(EncodeError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        Ok(TABLES.exp[(log_a + 255 - log_b) % 255])
    }

    /// `a` raised to `n`
    pub fn pow(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = TABLES.log[a as usize] as usize;
        TABLES.exp[(log_a * (n % 255)) % 255]
    }

    /// Product of two polynomials, coefficients highest degree first
    pub fn poly_mul(p: &[u8], q: &[u8]) -> Vec<u8> {
        if p.is_empty() || q.is_empty() {
            return Vec::new();
        }
        let mut out = vec![0u8; p.len() + q.len() - 1];
        for (i, &a) in p.iter().enumerate() {
            for (j, &b) in q.iter().enumerate() {
                out[i + j] ^= Self::mul(a, b);
            }
        }
        out
    }

    /// Synthetic division, returns (quotient, remainder)
    ///
    /// The remainder always has `divisor.len() - 1` terms unless the
    /// dividend is shorter than that, in which case it is the dividend.
    pub fn poly_div(dividend: &[u8], divisor: &[u8]) -> Result<(Vec<u8>, Vec<u8>), EncodeError> {
        let lead = *divisor.first().ok_or(EncodeError::DivisionByZero)?;
        if lead == 0 {
            return Err(EncodeError::DivisionByZero);
        }
        let degree = divisor.len() - 1;
        let split = dividend.len().saturating_sub(degree);
        let mut out = dividend.to_vec();
        for i in 0..split {
            let coef = Self::div(out[i], lead)?;
            out[i] = coef;
            if coef == 0 {
                continue;
            }
            for (j, &d) in divisor.iter().enumerate().skip(1) {
                out[i + j] ^= Self::mul(d, coef);
            }
        }
        let remainder = out.split_off(split);
        Ok((out, remainder))
    }

    /// Reed-Solomon generator of degree `n`: (x - a^0)(x - a^1)...(x - a^(n-1))
    pub fn generator_poly(n: usize) -> Vec<u8> {
        let mut g = vec![1u8];
        for i in 0..n {
            g = Self::poly_mul(&g, &[1, Self::exp(i)]);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_reference() {
        // First entries of the published QR exp table
        let head = [1u8, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38];
        for (i, &v) in head.iter().enumerate() {
            assert_eq!(Gf256::exp(i), v);
        }
        assert_eq!(TABLES.exp[255], 1);
        assert_eq!(Gf256::log(1), 0);
        assert_eq!(Gf256::log(2), 1);
        assert_eq!(Gf256::log(29), 8);
        assert_eq!(Gf256::log(142), 254);
        assert_eq!(Gf256::log(255), 175);
    }

    #[test]
    fn test_gf256_basic() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::div(0, 5), Ok(0));
        assert_eq!(Gf256::div(7, 7), Ok(1));
        assert_eq!(Gf256::div(123, 123), Ok(1));
        assert_eq!(Gf256::div(9, 0), Err(EncodeError::DivisionByZero));
        assert_eq!(Gf256::add(0x53, 0xCA), 0x99);
        assert_eq!(Gf256::sub(0x53, 0xCA), 0x99);
    }

    #[test]
    fn test_mul_div_inverse() {
        for a in 1..=255u8 {
            for b in [1u8, 2, 3, 29, 142, 255] {
                assert_eq!(Gf256::div(Gf256::mul(a, b), b), Ok(a));
            }
        }
    }

    #[test]
    fn test_pow() {
        assert_eq!(Gf256::pow(2, 255), 1);
        assert_eq!(Gf256::pow(2, 256), 2);
        assert_eq!(Gf256::pow(2, 260), Gf256::pow(2, 5));
        assert_eq!(Gf256::pow(0, 10), 0);
        assert_eq!(Gf256::pow(0, 0), 1);
        assert_eq!(Gf256::pow(3, 2), Gf256::mul(3, 3));
    }

    #[test]
    fn test_generator_poly_exponents() {
        let as_logs = |g: Vec<u8>| g.into_iter().map(Gf256::log).collect::<Vec<_>>();
        assert_eq!(
            as_logs(Gf256::generator_poly(7)),
            vec![0, 87, 229, 146, 149, 238, 102, 21]
        );
        assert_eq!(
            as_logs(Gf256::generator_poly(10)),
            vec![0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45]
        );
    }

    #[test]
    fn test_poly_div_reconstructs_dividend() {
        let divisor = Gf256::generator_poly(4);
        let dividend = [12u8, 200, 7, 0, 99, 31, 1, 250];
        let (q, r) = Gf256::poly_div(&dividend, &divisor).unwrap();
        assert_eq!(r.len(), 4);
        // dividend = q * divisor + r
        let mut rebuilt = Gf256::poly_mul(&q, &divisor);
        let offset = rebuilt.len() - r.len();
        for (i, &c) in r.iter().enumerate() {
            rebuilt[offset + i] ^= c;
        }
        assert_eq!(rebuilt, dividend.to_vec());
    }

    #[test]
    fn test_poly_div_rejects_zero_divisor() {
        assert_eq!(Gf256::poly_div(&[1, 2], &[]), Err(EncodeError::DivisionByZero));
        assert_eq!(Gf256::poly_div(&[1, 2], &[0, 1]), Err(EncodeError::DivisionByZero));
    }
}
