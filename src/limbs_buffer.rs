//! Helpers for multiprecision integers stored in [`LimbType`] slices.
//!
//! Multiprecision integers are stored as slices of [`LimbType`] words in little-endian order,
//! i.e. the least significant limb comes first. An integer's width in limbs is the length of the
//! slice it is stored in, there is no separate length tag. Leading, more significant limbs may
//! well be zero.
//!
//! Operations producing a result write it to a distinct, exclusively borrowed destination
//! slice. This module provides the checks every such operation runs on its buffers before it
//! writes anything.

use super::limb::LimbType;

/// Error returned whenever the widths of the supplied multiprecision integer buffers don't match
/// an operation's requirements.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MpBufferLenError {
    /// Two operands required to have equal widths have not.
    OperandLenMismatch,
    /// The destination buffer is too short to receive the result.
    InsufficientResultSpace,
}

pub fn check_same_len_mp(op0: &[LimbType], op1: &[LimbType]) -> Result<(), MpBufferLenError> {
    if op0.len() != op1.len() {
        return Err(MpBufferLenError::OperandLenMismatch);
    }
    Ok(())
}

pub fn check_result_len_mp(result: &[LimbType], nlimbs: usize) -> Result<(), MpBufferLenError> {
    if result.len() < nlimbs {
        return Err(MpBufferLenError::InsufficientResultSpace);
    }
    Ok(())
}

/// Set all limbs of a multiprecision integer to zero.
pub fn clear_mp(op0: &mut [LimbType]) {
    op0.fill(0);
}

/// Copy a multiprecision integer.
///
/// The `src` is placed into the least significant limbs of `dst`, any excess high limbs in
/// `dst` get cleared.
///
/// # Arguments
///
/// * `dst` - The destination buffer. Its length must be `>= src.len()`.
/// * `src` - The multiprecision integer to copy.
///
pub fn copy_mp(dst: &mut [LimbType], src: &[LimbType]) -> Result<(), MpBufferLenError> {
    check_result_len_mp(dst, src.len())?;
    let (dst_low, dst_high) = dst.split_at_mut(src.len());
    dst_low.copy_from_slice(src);
    clear_mp(dst_high);
    Ok(())
}

#[test]
fn test_copy_mp() {
    let src: [LimbType; 2] = [1, 2];
    let mut dst: [LimbType; 4] = [!0; 4];
    copy_mp(&mut dst, &src).unwrap();
    assert_eq!(dst, [1, 2, 0, 0]);

    let mut dst: [LimbType; 2] = [0; 2];
    copy_mp(&mut dst, &src).unwrap();
    assert_eq!(dst, [1, 2]);

    let mut dst: [LimbType; 1] = [0; 1];
    assert_eq!(copy_mp(&mut dst, &src), Err(MpBufferLenError::InsufficientResultSpace));
    assert_eq!(dst, [0]);
}

#[test]
fn test_clear_mp() {
    let mut op0: [LimbType; 3] = [1, !0, 3];
    clear_mp(&mut op0);
    assert_eq!(op0, [0; 3]);
    clear_mp(&mut []);
}

/// Determine the number of limbs up to and including the most significant non-zero one.
///
/// Returns zero for an all-zero (or empty) multiprecision integer.
pub fn find_last_set_limb_mp(op0: &[LimbType]) -> usize {
    let mut nlimbs = op0.len();
    while nlimbs > 0 {
        if op0[nlimbs - 1] != 0 {
            break;
        }
        nlimbs -= 1;
    }
    nlimbs
}

#[test]
fn test_find_last_set_limb_mp() {
    assert_eq!(find_last_set_limb_mp(&[]), 0);

    let mut op0: [LimbType; 3] = [0; 3];
    assert_eq!(find_last_set_limb_mp(&op0), 0);

    op0[0] = 1;
    assert_eq!(find_last_set_limb_mp(&op0), 1);

    op0[1] = 1;
    assert_eq!(find_last_set_limb_mp(&op0), 2);

    op0[2] = 1;
    assert_eq!(find_last_set_limb_mp(&op0), 3);

    op0[1] = 0;
    assert_eq!(find_last_set_limb_mp(&op0), 3);
}
