//! Arithmetic in GF(2^8) with reduction polynomial x^8 + x^4 + x^3 + x + 1.

/// Multiplies two field elements.
///
/// Walks the bits of `b`, accumulating shifted copies of `a` and reducing by
/// 0x1b (the polynomial with its implicit leading bit dropped) whenever a
/// shift carries out of bit 7. Total over all byte pairs.
pub(crate) fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}
