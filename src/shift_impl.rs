//! Implementation of multiprecision integer shift primitives.
//!
//! Shifts by whole limbs correspond to multiplication and division by powers of the radix
//! `b = 2^LIMB_BITS`, sub-limb bit shifts are used for normalizing divisors.

use super::limb::{LimbType, LIMB_BITS};
use super::limbs_buffer::{check_result_len_mp, clear_mp, MpBufferLenError};

/// Multiply a multiprecision integer by a power of the radix.
///
/// Computes `op0 * b^distance_nlimbs`, truncated to the width of `result`: the limbs of `op0` get
/// placed at `result[distance_nlimbs..]`, all other limbs of `result` are cleared. Limbs of `op0`
/// which would land beyond `result.len()` are dropped.
///
/// # Arguments
///
/// * `result` - The destination buffer.
/// * `op0` - The multiprecision integer to shift.
/// * `distance_nlimbs` - The exponent of the radix power to multiply by.
///
pub fn lshift_radix_mp(result: &mut [LimbType], op0: &[LimbType], distance_nlimbs: usize) {
    clear_mp(result);
    if distance_nlimbs >= result.len() {
        return;
    }
    let dst = &mut result[distance_nlimbs..];
    let ncopy = dst.len().min(op0.len());
    dst[..ncopy].copy_from_slice(&op0[..ncopy]);
}

#[test]
fn test_lshift_radix_mp() {
    let op0: [LimbType; 2] = [1, 2];

    let mut result: [LimbType; 4] = [!0; 4];
    lshift_radix_mp(&mut result, &op0, 0);
    assert_eq!(result, [1, 2, 0, 0]);

    lshift_radix_mp(&mut result, &op0, 1);
    assert_eq!(result, [0, 1, 2, 0]);

    lshift_radix_mp(&mut result, &op0, 2);
    assert_eq!(result, [0, 0, 1, 2]);

    // Truncation of the high part.
    lshift_radix_mp(&mut result, &op0, 3);
    assert_eq!(result, [0, 0, 0, 1]);

    lshift_radix_mp(&mut result, &op0, 4);
    assert_eq!(result, [0; 4]);

    lshift_radix_mp(&mut result, &op0, 100);
    assert_eq!(result, [0; 4]);
}

/// Divide a multiprecision integer by a power of the radix.
///
/// Computes `floor(op0 / b^distance_nlimbs)`: the limbs `op0[distance_nlimbs..]` get placed at
/// the bottom of `result`, the remaining high limbs of `result` are cleared.
///
/// If `result` is too short to receive the quotient, it is left cleared and an error is
/// returned.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be
///              `>= op0.len().saturating_sub(distance_nlimbs)`.
/// * `op0` - The multiprecision integer to shift.
/// * `distance_nlimbs` - The exponent of the radix power to divide by.
///
pub fn rshift_radix_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    distance_nlimbs: usize,
) -> Result<(), MpBufferLenError> {
    clear_mp(result);
    let src = op0.get(distance_nlimbs..).unwrap_or(&[]);
    check_result_len_mp(result, src.len())?;
    result[..src.len()].copy_from_slice(src);
    Ok(())
}

#[test]
fn test_rshift_radix_mp() {
    let op0: [LimbType; 3] = [1, 2, 3];

    let mut result: [LimbType; 3] = [!0; 3];
    rshift_radix_mp(&mut result, &op0, 0).unwrap();
    assert_eq!(result, [1, 2, 3]);

    rshift_radix_mp(&mut result, &op0, 1).unwrap();
    assert_eq!(result, [2, 3, 0]);

    rshift_radix_mp(&mut result, &op0, 3).unwrap();
    assert_eq!(result, [0; 3]);

    rshift_radix_mp(&mut result, &op0, 7).unwrap();
    assert_eq!(result, [0; 3]);

    let mut result: [LimbType; 2] = [!0; 2];
    rshift_radix_mp(&mut result, &op0, 1).unwrap();
    assert_eq!(result, [2, 3]);

    let mut result: [LimbType; 1] = [!0; 1];
    assert_eq!(
        rshift_radix_mp(&mut result, &op0, 1),
        Err(MpBufferLenError::InsufficientResultSpace)
    );
    assert_eq!(result, [0]);
}

/// Reduce a multiprecision integer modulo a power of the radix.
///
/// Computes `op0 mod b^nlimbs`: the `nlimbs` least significant limbs of `op0` get copied to
/// `result`, truncated to `result.len()`, and all other limbs of `result` are cleared.
pub fn trunc_radix_mp(result: &mut [LimbType], op0: &[LimbType], nlimbs: usize) {
    clear_mp(result);
    let ncopy = nlimbs.min(op0.len()).min(result.len());
    result[..ncopy].copy_from_slice(&op0[..ncopy]);
}

#[test]
fn test_trunc_radix_mp() {
    let op0: [LimbType; 3] = [1, 2, 3];

    let mut result: [LimbType; 3] = [!0; 3];
    trunc_radix_mp(&mut result, &op0, 2);
    assert_eq!(result, [1, 2, 0]);

    trunc_radix_mp(&mut result, &op0, 0);
    assert_eq!(result, [0; 3]);

    trunc_radix_mp(&mut result, &op0, 5);
    assert_eq!(result, [1, 2, 3]);

    let mut result: [LimbType; 4] = [!0; 4];
    trunc_radix_mp(&mut result, &op0, 5);
    assert_eq!(result, [1, 2, 3, 0]);
}

/// Shift a multiprecision integer left by less than a limb's width.
///
/// The shifted `op0` gets written to the `op0.len()` least significant limbs of `result`, the
/// bits shifted out at the top are returned from the function. Excess high limbs in `result` get
/// cleared.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= op0.len()`.
/// * `op0` - The multiprecision integer to shift.
/// * `distance` - The shift distance in bits, must be `< LIMB_BITS`.
///
pub fn lshift_bits_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    distance: u32,
) -> Result<LimbType, MpBufferLenError> {
    debug_assert!(distance < LIMB_BITS);
    check_result_len_mp(result, op0.len())?;
    clear_mp(&mut result[op0.len()..]);
    if distance == 0 {
        result[..op0.len()].copy_from_slice(op0);
        return Ok(0);
    }

    let mut shifted_out = 0;
    for (dst, src) in result.iter_mut().zip(op0.iter()) {
        *dst = src << distance | shifted_out;
        shifted_out = src >> (LIMB_BITS - distance);
    }
    Ok(shifted_out)
}

#[test]
fn test_lshift_bits_mp() {
    let op0: [LimbType; 2] = [0x8001, 0x4002];
    let mut result: [LimbType; 3] = [!0; 3];

    let shifted_out = lshift_bits_mp(&mut result, &op0, 0).unwrap();
    assert_eq!(shifted_out, 0);
    assert_eq!(result, [0x8001, 0x4002, 0]);

    let shifted_out = lshift_bits_mp(&mut result, &op0, 1).unwrap();
    assert_eq!(shifted_out, 0);
    assert_eq!(result, [0x0002, 0x8005, 0]);

    let shifted_out = lshift_bits_mp(&mut result, &op0, 2).unwrap();
    assert_eq!(shifted_out, 1);
    assert_eq!(result, [0x0004, 0x000a, 0]);

    let shifted_out = lshift_bits_mp(&mut result, &op0, LIMB_BITS - 1).unwrap();
    assert_eq!(shifted_out, 0x2001);
    assert_eq!(result, [0x8000, 0x4000, 0]);

    let mut result: [LimbType; 1] = [0; 1];
    assert_eq!(
        lshift_bits_mp(&mut result, &op0, 1),
        Err(MpBufferLenError::InsufficientResultSpace)
    );
}

/// Shift a multiprecision integer right by less than a limb's width.
///
/// The shifted `op0` gets written to the `op0.len()` least significant limbs of `result`, bits
/// shifted out at the bottom are lost. Excess high limbs in `result` get cleared.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= op0.len()`.
/// * `op0` - The multiprecision integer to shift.
/// * `distance` - The shift distance in bits, must be `< LIMB_BITS`.
///
pub fn rshift_bits_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    distance: u32,
) -> Result<(), MpBufferLenError> {
    debug_assert!(distance < LIMB_BITS);
    check_result_len_mp(result, op0.len())?;
    clear_mp(&mut result[op0.len()..]);
    if distance == 0 {
        result[..op0.len()].copy_from_slice(op0);
        return Ok(());
    }

    let mut shifted_in = 0;
    for (dst, src) in result[..op0.len()].iter_mut().zip(op0.iter()).rev() {
        *dst = src >> distance | shifted_in;
        shifted_in = src << (LIMB_BITS - distance);
    }
    Ok(())
}

#[test]
fn test_rshift_bits_mp() {
    let op0: [LimbType; 2] = [0x0004, 0x000b];
    let mut result: [LimbType; 3] = [!0; 3];

    rshift_bits_mp(&mut result, &op0, 0).unwrap();
    assert_eq!(result, [0x0004, 0x000b, 0]);

    rshift_bits_mp(&mut result, &op0, 2).unwrap();
    assert_eq!(result, [0xc001, 0x0002, 0]);

    rshift_bits_mp(&mut result, &op0, LIMB_BITS - 1).unwrap();
    assert_eq!(result, [0x0016, 0, 0]);
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_shift_bits_mp_roundtrip(
        op0 in super::test_helpers::tst_mp(1, 16),
        distance in 0..LIMB_BITS,
    ) {
        let mut shifted = vec![0 as LimbType; op0.len() + 1];
        let n = op0.len();
        let shifted_out = lshift_bits_mp(&mut shifted[..n], &op0, distance).unwrap();
        shifted[n] = shifted_out;
        let mut unshifted = vec![0 as LimbType; op0.len() + 1];
        rshift_bits_mp(&mut unshifted, &shifted, distance).unwrap();
        assert_eq!(&unshifted[..n], &op0[..]);
        assert_eq!(unshifted[n], 0);
    }
}
