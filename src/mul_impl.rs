//! Implementation of multiprecision integer multiplication primitives.

use super::limb::{mul_add_l_l_l_c, LimbType};
use super::limbs_buffer::{check_result_len_mp, check_same_len_mp, clear_mp, MpBufferLenError};

/// Multiply a multiprecision integer by a single limb.
///
/// The product of the limb `op0` and the `n` limb multiprecision integer `op1` is at most `n + 1`
/// limbs wide and gets written to the `n + 1` least significant limbs of `result`, with the most
/// significant one receiving the final carry. Excess high limbs in `result` get cleared.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= op1.len() + 1`.
/// * `op0` - The single limb factor.
/// * `op1` - The multiprecision integer factor.
///
pub fn mul_l_mp(
    result: &mut [LimbType],
    op0: LimbType,
    op1: &[LimbType],
) -> Result<(), MpBufferLenError> {
    check_result_len_mp(result, op1.len() + 1)?;
    clear_mp(&mut result[op1.len()..]);

    let mut carry = 0;
    for (result_val, op1_val) in result.iter_mut().zip(op1.iter()) {
        (carry, *result_val) = mul_add_l_l_l_c(0, op0, *op1_val, carry);
    }
    result[op1.len()] = carry;
    Ok(())
}

#[test]
fn test_mul_l_mp() {
    let op1: [LimbType; 2] = [!0, !0];
    let mut result: [LimbType; 3] = [!0; 3];
    mul_l_mp(&mut result, !0, &op1).unwrap();
    // (b^2 - 1) * (b - 1) = b^3 - b^2 - b + 1
    assert_eq!(result, [1, !0, !1]);

    mul_l_mp(&mut result, 0, &op1).unwrap();
    assert_eq!(result, [0; 3]);

    let op1: [LimbType; 2] = [2, 3];
    let mut result: [LimbType; 4] = [!0; 4];
    mul_l_mp(&mut result, 5, &op1).unwrap();
    assert_eq!(result, [10, 15, 0, 0]);

    let mut result: [LimbType; 2] = [0; 2];
    assert_eq!(
        mul_l_mp(&mut result, 5, &op1),
        Err(MpBufferLenError::InsufficientResultSpace)
    );
}

/// Multiply two multiprecision integers of possibly different widths.
///
/// Schoolbook multiplication: for each limb of `op0`, the row `op0[i] * op1` is accumulated onto
/// the partial result at offset `i`, propagating the carry from column to column. The
/// `op0.len() + op1.len()` limb product gets written to the least significant limbs of `result`,
/// excess high limbs in `result` get cleared.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= op0.len() + op1.len()`.
/// * `op0` - The first factor.
/// * `op1` - The second factor.
///
pub fn mul_rect_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
) -> Result<(), MpBufferLenError> {
    check_result_len_mp(result, op0.len() + op1.len())?;
    clear_mp(result);

    for (i, op0_val) in op0.iter().enumerate() {
        let mut carry = 0;
        for (j, op1_val) in op1.iter().enumerate() {
            let result_val = result[i + j];
            (carry, result[i + j]) = mul_add_l_l_l_c(result_val, *op0_val, *op1_val, carry);
        }
        result[i + op1.len()] = carry;
    }
    Ok(())
}

/// Multiply two multiprecision integers of equal width.
///
/// The `2 * n` limb product of the two `n` limb factors gets written to the least significant
/// limbs of `result`. See [`mul_rect_mp_mp()`] for factors of differing widths.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= 2 * op0.len()`.
/// * `op0` - The first factor.
/// * `op1` - The second factor. Its length must equal the length of `op0`.
///
pub fn mul_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
) -> Result<(), MpBufferLenError> {
    check_same_len_mp(op0, op1)?;
    mul_rect_mp_mp(result, op0, op1)
}

/// Square a multiprecision integer.
pub fn square_mp(result: &mut [LimbType], op0: &[LimbType]) -> Result<(), MpBufferLenError> {
    mul_rect_mp_mp(result, op0, op0)
}

#[test]
fn test_mul_mp_mp() {
    let op0: [LimbType; 2] = [!0, !0];
    let op1: [LimbType; 2] = [!0, !0];
    let mut result: [LimbType; 5] = [!0; 5];
    mul_mp_mp(&mut result, &op0, &op1).unwrap();
    // (b^2 - 1)^2 = b^4 - 2 * b^2 + 1
    assert_eq!(result, [1, 0, !1, !0, 0]);

    let op0: [LimbType; 2] = [3, 0];
    let op1: [LimbType; 2] = [0, 7];
    let mut result: [LimbType; 4] = [!0; 4];
    mul_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(result, [0, 21, 0, 0]);

    let mut result: [LimbType; 3] = [0; 3];
    assert_eq!(
        mul_mp_mp(&mut result, &op0, &op1),
        Err(MpBufferLenError::InsufficientResultSpace)
    );

    let op1: [LimbType; 1] = [7];
    let mut result: [LimbType; 4] = [0; 4];
    assert_eq!(
        mul_mp_mp(&mut result, &op0, &op1),
        Err(MpBufferLenError::OperandLenMismatch)
    );
}

#[test]
fn test_square_mp() {
    let op0: [LimbType; 2] = [!0, !0];
    let mut result: [LimbType; 5] = [!0; 5];
    square_mp(&mut result, &op0).unwrap();
    assert_eq!(result, [1, 0, !1, !0, 0]);

    let op0: [LimbType; 2] = [0, 3];
    let mut result: [LimbType; 4] = [!0; 4];
    square_mp(&mut result, &op0).unwrap();
    assert_eq!(result, [0, 0, 9, 0]);

    let mut result: [LimbType; 3] = [0; 3];
    assert_eq!(
        square_mp(&mut result, &op0),
        Err(MpBufferLenError::InsufficientResultSpace)
    );
}

#[test]
fn test_mul_rect_mp_mp() {
    let op0: [LimbType; 3] = [!0, !0, !0];
    let op1: [LimbType; 1] = [2];
    let mut result: [LimbType; 4] = [0; 4];
    mul_rect_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(result, [!1, !0, !0, 1]);

    // Operand order doesn't matter.
    let mut result_swapped: [LimbType; 4] = [0; 4];
    mul_rect_mp_mp(&mut result_swapped, &op1, &op0).unwrap();
    assert_eq!(result_swapped, result);

    let mut result: [LimbType; 2] = [!0; 2];
    mul_rect_mp_mp(&mut result, &[], &[5, 6]).unwrap();
    assert_eq!(result, [0, 0]);
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_mul_mp_mp_matches_reference((op0, op1) in super::test_helpers::tst_mp_pair(1, 32)) {
        use super::test_helpers::tst_mp_to_biguint;

        let mut result = vec![0 as LimbType; 2 * op0.len()];
        mul_mp_mp(&mut result, &op0, &op1).unwrap();
        assert_eq!(
            tst_mp_to_biguint(&result),
            tst_mp_to_biguint(&op0) * tst_mp_to_biguint(&op1)
        );
    }

    #[test]
    fn test_mul_rect_mp_mp_matches_reference(
        op0 in super::test_helpers::tst_mp(1, 32),
        op1 in super::test_helpers::tst_mp(1, 32),
    ) {
        use super::test_helpers::tst_mp_to_biguint;

        let mut result = vec![0 as LimbType; op0.len() + op1.len()];
        mul_rect_mp_mp(&mut result, &op0, &op1).unwrap();
        assert_eq!(
            tst_mp_to_biguint(&result),
            tst_mp_to_biguint(&op0) * tst_mp_to_biguint(&op1)
        );
    }

    #[test]
    fn test_square_mp_matches_reference(op0 in super::test_helpers::tst_mp(1, 32)) {
        use super::test_helpers::tst_mp_to_biguint;

        let mut result = vec![0 as LimbType; 2 * op0.len()];
        square_mp(&mut result, &op0).unwrap();
        let op0_val = tst_mp_to_biguint(&op0);
        assert_eq!(tst_mp_to_biguint(&result), &op0_val * &op0_val);
    }

    #[test]
    fn test_mul_l_mp_matches_reference(
        op0 in proptest::num::u16::ANY,
        op1 in super::test_helpers::tst_mp(1, 32),
    ) {
        use super::test_helpers::tst_mp_to_biguint;

        let mut result = vec![0 as LimbType; op1.len() + 1];
        mul_l_mp(&mut result, op0, &op1).unwrap();
        assert_eq!(
            tst_mp_to_biguint(&result),
            tst_mp_to_biguint(&op1) * num_bigint::BigUint::from(op0)
        );
    }
}
