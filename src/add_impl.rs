//! Implementation of multiprecision integer addition related primitives.

use super::limb::{add_l_l, add_l_l_c, sub_l_l_b, LimbType};
use super::limbs_buffer::{check_result_len_mp, check_same_len_mp, MpBufferLenError};

/// Add two multiprecision integers of equal width in place.
///
/// The first operand's contents will be replaced by the resulting sum, truncated to its width.
/// The carry out of the most significant limb, if any, is returned from the function.
///
/// # Arguments:
///
/// * `op0` - The first input addend. It will be overwritten by the resulting sum.
/// * `op1` - The second input addend. Its length must equal the length of `op0`.
pub fn add_assign_mp_mp(
    op0: &mut [LimbType],
    op1: &[LimbType],
) -> Result<LimbType, MpBufferLenError> {
    check_same_len_mp(op0, op1)?;

    let mut carry = 0;
    for (op0_val, op1_val) in op0.iter_mut().zip(op1.iter()) {
        (carry, *op0_val) = add_l_l_c(*op0_val, *op1_val, carry);
    }
    Ok(carry)
}

/// Add two multiprecision integers of equal width.
///
/// The sum, truncated to the operands' width `n`, gets written to the `n` least significant limbs
/// of `result`, any excess high limbs in `result` get cleared. The carry is not stored, but
/// returned from the function.
///
/// # Arguments:
///
/// * `result` - The destination. Its length must be `>= op0.len()`.
/// * `op0` - The first input addend.
/// * `op1` - The second input addend. Its length must equal the length of `op0`.
pub fn add_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
) -> Result<LimbType, MpBufferLenError> {
    check_same_len_mp(op0, op1)?;
    check_result_len_mp(result, op0.len())?;
    let (result, result_high) = result.split_at_mut(op0.len());
    result.copy_from_slice(op0);
    result_high.fill(0);
    add_assign_mp_mp(result, op1)
}

#[test]
fn test_add_mp_mp() {
    let op0: [LimbType; 2] = [!0, 0];
    let op1: [LimbType; 2] = [!0, 0];
    let mut result: [LimbType; 2] = [0; 2];
    let carry = add_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(carry, 0);
    assert_eq!(result, [!1, 1]);

    let op0: [LimbType; 2] = [!0, !0];
    let op1: [LimbType; 2] = [!0, !0];
    let carry = add_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(carry, 1);
    assert_eq!(result, [!1, !0]);

    // Carry ripples all the way up and out.
    let op0: [LimbType; 3] = [!0, !0, !0];
    let op1: [LimbType; 3] = [1, 0, 0];
    let mut result: [LimbType; 4] = [!0; 4];
    let carry = add_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(carry, 1);
    assert_eq!(result, [0, 0, 0, 0]);

    let carry = add_mp_mp(&mut [], &[], &[]).unwrap();
    assert_eq!(carry, 0);
}

#[test]
fn test_add_mp_mp_len_errors() {
    let op0: [LimbType; 2] = [1, 2];
    let op1: [LimbType; 3] = [1, 2, 3];
    let mut result: [LimbType; 3] = [0; 3];
    assert_eq!(
        add_mp_mp(&mut result, &op0, &op1),
        Err(MpBufferLenError::OperandLenMismatch)
    );

    let mut result: [LimbType; 1] = [0; 1];
    assert_eq!(
        add_mp_mp(&mut result, &op0, &op0),
        Err(MpBufferLenError::InsufficientResultSpace)
    );

    let mut op0: [LimbType; 2] = [1, 2];
    assert_eq!(
        add_assign_mp_mp(&mut op0, &op1),
        Err(MpBufferLenError::OperandLenMismatch)
    );
    assert_eq!(op0, [1, 2]);
}

#[test]
fn test_add_assign_mp_mp() {
    let mut op0: [LimbType; 3] = [!0, 1, 0];
    let op1: [LimbType; 3] = [1, !0, 0];
    let carry = add_assign_mp_mp(&mut op0, &op1).unwrap();
    assert_eq!(carry, 0);
    assert_eq!(op0, [0, 1, 1]);
}

/// Add a limb to a multiprecision integer in place.
///
/// Returns the carry out of the most significant limb.
pub fn add_assign_mp_l(op0: &mut [LimbType], op1: LimbType) -> LimbType {
    // Set carry to op1 and propagate the carry upwards.
    let mut carry = op1;
    for op0_val in op0.iter_mut() {
        if carry == 0 {
            break;
        }
        (carry, *op0_val) = add_l_l(*op0_val, carry);
    }
    carry
}

#[test]
fn test_add_assign_mp_l() {
    let mut op0: [LimbType; 3] = [!0, !0, 0];
    assert_eq!(add_assign_mp_l(&mut op0, 1), 0);
    assert_eq!(op0, [0, 0, 1]);

    let mut op0: [LimbType; 2] = [!0, !0];
    assert_eq!(add_assign_mp_l(&mut op0, 2), 1);
    assert_eq!(op0, [1, 0]);

    assert_eq!(add_assign_mp_l(&mut [], 5), 5);
}

/// Subtract two multiprecision integers of equal width in place.
///
/// The first operand's contents will be replaced by the difference modulo `b^n`, where `n` is the
/// operands' width. The borrow out of the most significant limb, if any, is returned from the
/// function.
///
/// # Arguments:
///
/// * `op0` - The minuend. It will be overwritten by the resulting difference.
/// * `op1` - The subtrahend. Its length must equal the length of `op0`.
pub fn sub_assign_mp_mp(
    op0: &mut [LimbType],
    op1: &[LimbType],
) -> Result<LimbType, MpBufferLenError> {
    check_same_len_mp(op0, op1)?;

    let mut borrow = 0;
    for (op0_val, op1_val) in op0.iter_mut().zip(op1.iter()) {
        (borrow, *op0_val) = sub_l_l_b(*op0_val, *op1_val, borrow);
    }
    Ok(borrow)
}

/// Subtract two multiprecision integers of equal width.
///
/// The difference modulo `b^n`, with `n` being the operands' width, gets written to the `n` least
/// significant limbs of `result`, any excess high limbs in `result` get cleared. The borrow is
/// returned from the function.
///
/// # Arguments:
///
/// * `result` - The destination. Its length must be `>= op0.len()`.
/// * `op0` - The minuend.
/// * `op1` - The subtrahend. Its length must equal the length of `op0`.
pub fn sub_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
) -> Result<LimbType, MpBufferLenError> {
    check_same_len_mp(op0, op1)?;
    check_result_len_mp(result, op0.len())?;
    let (result, result_high) = result.split_at_mut(op0.len());
    result.copy_from_slice(op0);
    result_high.fill(0);
    sub_assign_mp_mp(result, op1)
}

#[test]
fn test_sub_mp_mp() {
    let op0: [LimbType; 2] = [!0, 0];
    let op1: [LimbType; 2] = [!0, 0];
    let mut result: [LimbType; 2] = [!0; 2];
    let borrow = sub_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(borrow, 0);
    assert_eq!(result, [0, 0]);

    let op0: [LimbType; 2] = [!1, 1];
    let op1: [LimbType; 2] = [!0, 0];
    let borrow = sub_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(borrow, 0);
    assert_eq!(result, [!0, 0]);

    let op0: [LimbType; 2] = [!1, 0];
    let op1: [LimbType; 2] = [!0, 1];
    let borrow = sub_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(borrow, 1);
    assert_eq!(result, [!0, !1]);

    // Borrow ripples all the way up and out.
    let op0: [LimbType; 3] = [0, 0, 0];
    let op1: [LimbType; 3] = [1, 0, 0];
    let mut result: [LimbType; 3] = [0; 3];
    let borrow = sub_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(borrow, 1);
    assert_eq!(result, [!0, !0, !0]);

    // A maximal subtrahend limb must not force a borrow by itself.
    let op0: [LimbType; 2] = [!0, 1];
    let op1: [LimbType; 2] = [!0, 0];
    let mut result: [LimbType; 2] = [0; 2];
    let borrow = sub_mp_mp(&mut result, &op0, &op1).unwrap();
    assert_eq!(borrow, 0);
    assert_eq!(result, [0, 1]);
}

#[test]
fn test_sub_assign_mp_mp() {
    let mut op0: [LimbType; 3] = [0, 1, 1];
    let op1: [LimbType; 3] = [1, !0, 0];
    let borrow = sub_assign_mp_mp(&mut op0, &op1).unwrap();
    assert_eq!(borrow, 0);
    assert_eq!(op0, [!0, 1, 0]);

    let mut op0: [LimbType; 1] = [0];
    assert_eq!(
        sub_assign_mp_mp(&mut op0, &[1, 0]),
        Err(MpBufferLenError::OperandLenMismatch)
    );
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_add_sub_mp_mp_roundtrip((op0, op1) in super::test_helpers::tst_mp_pair(1, 32)) {
        use super::test_helpers::tst_mp_to_biguint;

        let n = op0.len();
        let mut sum = vec![0 as LimbType; n];
        let carry = add_mp_mp(&mut sum, &op0, &op1).unwrap();
        let expected = tst_mp_to_biguint(&op0) + tst_mp_to_biguint(&op1);
        let mut sum_with_carry = sum.clone();
        sum_with_carry.push(carry);
        assert_eq!(tst_mp_to_biguint(&sum_with_carry), expected);

        let mut diff = vec![0 as LimbType; n];
        let borrow = sub_mp_mp(&mut diff, &sum, &op1).unwrap();
        // The subtraction borrows exactly when the addition carried.
        assert_eq!(borrow, carry);
        assert_eq!(diff, op0);
    }
}
