//! Implementation of arithmetic modulo a multiprecision integer.
//!
//! All operations take a modulus `p` whose width `n = p.len()` is at least two limbs and whose
//! high limb is non-zero. Operands are expected in reduced form, i.e. `n` limbs wide and `< p`.

#[cfg(feature = "zeroize")]
use zeroize::Zeroize as _;

use super::add_impl::{add_assign_mp_mp, add_mp_mp, sub_assign_mp_mp, sub_mp_mp};
use super::cmp_impl::{geq_mp_mp, lt_mp_mp};
use super::div_impl::{div_mp_mp, div_mp_mp_scratch_nlimbs, DivMpError};
use super::limb::LimbType;
use super::limbs_buffer::{check_result_len_mp, check_same_len_mp, copy_mp, MpBufferLenError};
use super::mul_impl::mul_mp_mp;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModMpError {
    /// The modulus is less than two limbs wide or its high limb is zero.
    InvalidModulus,
    /// An operand is not less than the modulus.
    OperandNotReduced,
    BufferLen(MpBufferLenError),
    Division(DivMpError),
}

impl From<MpBufferLenError> for ModMpError {
    fn from(value: MpBufferLenError) -> Self {
        Self::BufferLen(value)
    }
}

impl From<DivMpError> for ModMpError {
    fn from(value: DivMpError) -> Self {
        Self::Division(value)
    }
}

pub(crate) fn check_modulus_mp(p: &[LimbType]) -> Result<(), ModMpError> {
    if p.len() < 2 || p[p.len() - 1] == 0 {
        return Err(ModMpError::InvalidModulus);
    }
    Ok(())
}

fn check_reduced_mp(op0: &[LimbType], p: &[LimbType]) -> Result<(), ModMpError> {
    check_same_len_mp(op0, p)?;
    if !lt_mp_mp(op0, p)? {
        return Err(ModMpError::OperandNotReduced);
    }
    Ok(())
}

/// Add two multiprecision integers modulo `p`.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= p.len()`, excess high limbs get
///              cleared.
/// * `op0` - The first addend, reduced modulo `p`.
/// * `op1` - The second addend, reduced modulo `p`.
/// * `p` - The modulus.
///
pub fn add_mod_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
    p: &[LimbType],
) -> Result<(), ModMpError> {
    check_modulus_mp(p)?;
    check_reduced_mp(op0, p)?;
    check_reduced_mp(op1, p)?;
    check_result_len_mp(result, p.len())?;

    let carry = add_mp_mp(result, op0, op1)?;
    // op0 + op1 < 2 * p, so subtracting p once suffices. If the addition carried, the
    // subtraction's borrow cancels it.
    let sum = &mut result[..p.len()];
    if carry != 0 || geq_mp_mp(sum, p)? {
        sub_assign_mp_mp(sum, p)?;
    }
    Ok(())
}

#[test]
fn test_add_mod_mp_mp() {
    let p: [LimbType; 2] = [5, 1];
    let mut result: [LimbType; 3] = [!0; 3];

    add_mod_mp_mp(&mut result, &[1, 0], &[2, 0], &p).unwrap();
    assert_eq!(result, [3, 0, 0]);

    // Sum equal to the modulus.
    add_mod_mp_mp(&mut result, &[3, 1], &[2, 0], &p).unwrap();
    assert_eq!(result, [0, 0, 0]);

    add_mod_mp_mp(&mut result, &[4, 1], &[4, 1], &p).unwrap();
    assert_eq!(result, [3, 1, 0]);

    // Carry out of the most significant limb.
    let p: [LimbType; 2] = [1, !0];
    add_mod_mp_mp(&mut result, &[0, !0], &[0, !0], &p).unwrap();
    assert_eq!(result, [!0, !1, 0]);
}

#[test]
fn test_mod_mp_mp_precondition_errors() {
    let mut result: [LimbType; 2] = [0; 2];
    assert_eq!(
        add_mod_mp_mp(&mut result[..1], &[1], &[1], &[5]),
        Err(ModMpError::InvalidModulus)
    );
    assert_eq!(
        add_mod_mp_mp(&mut result, &[1, 0], &[1, 0], &[5, 0]),
        Err(ModMpError::InvalidModulus)
    );
    assert_eq!(
        sub_mod_mp_mp(&mut result, &[5, 1], &[1, 0], &[5, 1]),
        Err(ModMpError::OperandNotReduced)
    );
    assert_eq!(
        sub_mod_mp_mp(&mut result, &[1, 0], &[6, 1], &[5, 1]),
        Err(ModMpError::OperandNotReduced)
    );
    assert_eq!(
        add_mod_mp_mp(&mut result, &[1, 0, 0], &[1, 0], &[5, 1]),
        Err(ModMpError::BufferLen(MpBufferLenError::OperandLenMismatch))
    );
    assert_eq!(
        add_mod_mp_mp(&mut result[..1], &[1, 0], &[1, 0], &[5, 1]),
        Err(ModMpError::BufferLen(MpBufferLenError::InsufficientResultSpace))
    );
    assert_eq!(result, [0; 2]);
}

/// Subtract two multiprecision integers modulo `p`.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= p.len()`, excess high limbs get
///              cleared.
/// * `op0` - The minuend, reduced modulo `p`.
/// * `op1` - The subtrahend, reduced modulo `p`.
/// * `p` - The modulus.
///
pub fn sub_mod_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
    p: &[LimbType],
) -> Result<(), ModMpError> {
    check_modulus_mp(p)?;
    check_reduced_mp(op0, p)?;
    check_reduced_mp(op1, p)?;
    check_result_len_mp(result, p.len())?;

    let borrow = sub_mp_mp(result, op0, op1)?;
    if borrow != 0 {
        add_assign_mp_mp(&mut result[..p.len()], p)?;
    }
    Ok(())
}

#[test]
fn test_sub_mod_mp_mp() {
    let p: [LimbType; 2] = [5, 1];
    let mut result: [LimbType; 2] = [!0; 2];

    sub_mod_mp_mp(&mut result, &[3, 0], &[2, 0], &p).unwrap();
    assert_eq!(result, [1, 0]);

    sub_mod_mp_mp(&mut result, &[3, 0], &[3, 0], &p).unwrap();
    assert_eq!(result, [0, 0]);

    // 2 - 3 = p - 1
    sub_mod_mp_mp(&mut result, &[2, 0], &[3, 0], &p).unwrap();
    assert_eq!(result, [4, 1]);

    sub_mod_mp_mp(&mut result, &[0, 0], &[4, 1], &p).unwrap();
    assert_eq!(result, [1, 0]);
}

/// Number of scratch limbs needed by [`mul_mod_mp_mp()`] for a modulus of `p_nlimbs` limbs.
pub fn mul_mod_mp_mp_scratch_nlimbs(p_nlimbs: usize) -> usize {
    2 * p_nlimbs + div_mp_mp_scratch_nlimbs(2 * p_nlimbs, p_nlimbs)
}

/// Multiply two multiprecision integers modulo `p`.
///
/// The full double-width product gets reduced by a long division by `p`.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= p.len()`, excess high limbs get
///              cleared.
/// * `op0` - The first factor, reduced modulo `p`.
/// * `op1` - The second factor, reduced modulo `p`.
/// * `p` - The modulus.
/// * `scratch` - Scratch space of at least [`mul_mod_mp_mp_scratch_nlimbs()`] limbs.
///
pub fn mul_mod_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    op1: &[LimbType],
    p: &[LimbType],
    scratch: &mut [LimbType],
) -> Result<(), ModMpError> {
    check_modulus_mp(p)?;
    check_reduced_mp(op0, p)?;
    check_reduced_mp(op1, p)?;
    check_result_len_mp(result, p.len())?;
    let p_nlimbs = p.len();
    if scratch.len() < mul_mod_mp_mp_scratch_nlimbs(p_nlimbs) {
        return Err(ModMpError::Division(DivMpError::InsufficientScratchSpace));
    }

    let (product, div_scratch) = scratch.split_at_mut(2 * p_nlimbs);
    mul_mp_mp(product, op0, op1)?;
    let r = div_mp_mp(None, result, product, p, div_scratch);

    #[cfg(feature = "zeroize")]
    product.zeroize();

    Ok(r?)
}

/// Number of scratch limbs needed by [`mod_mp_mp()`].
pub fn mod_mp_mp_scratch_nlimbs(op0_nlimbs: usize, p_nlimbs: usize) -> usize {
    let x_nlimbs = op0_nlimbs.max(p_nlimbs);
    x_nlimbs + div_mp_mp_scratch_nlimbs(x_nlimbs, p_nlimbs)
}

/// Reduce a multiprecision integer of arbitrary width modulo `p`.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= p.len()`, excess high limbs get
///              cleared.
/// * `op0` - The value to reduce.
/// * `p` - The modulus.
/// * `scratch` - Scratch space of at least [`mod_mp_mp_scratch_nlimbs()`] limbs.
///
pub fn mod_mp_mp(
    result: &mut [LimbType],
    op0: &[LimbType],
    p: &[LimbType],
    scratch: &mut [LimbType],
) -> Result<(), ModMpError> {
    check_modulus_mp(p)?;
    check_result_len_mp(result, p.len())?;
    if scratch.len() < mod_mp_mp_scratch_nlimbs(op0.len(), p.len()) {
        return Err(ModMpError::Division(DivMpError::InsufficientScratchSpace));
    }

    // Zero-extend op0 to at least the width of the modulus.
    let (x, div_scratch) = scratch.split_at_mut(op0.len().max(p.len()));
    copy_mp(x, op0)?;
    let r = div_mp_mp(None, result, x, p, div_scratch);

    #[cfg(feature = "zeroize")]
    x.zeroize();

    Ok(r?)
}

#[test]
fn test_mul_mod_mp_mp() {
    // p = b + 5, (b - 1) * (b - 1) = b^2 - 2 * b + 1 = (b + 5) * (b - 7) + 36
    let p: [LimbType; 2] = [5, 1];
    let op0: [LimbType; 2] = [!0, 0];
    let mut result: [LimbType; 3] = [!0; 3];
    let mut scratch = vec![0; mul_mod_mp_mp_scratch_nlimbs(2)];
    mul_mod_mp_mp(&mut result, &op0, &op0, &p, &mut scratch).unwrap();
    assert_eq!(result, [36, 0, 0]);

    mul_mod_mp_mp(&mut result, &op0, &[0, 0], &p, &mut scratch).unwrap();
    assert_eq!(result, [0, 0, 0]);

    mul_mod_mp_mp(&mut result, &op0, &[1, 0], &p, &mut scratch).unwrap();
    assert_eq!(result, [!0, 0, 0]);

    assert_eq!(
        mul_mod_mp_mp(&mut result, &op0, &op0, &p, &mut scratch[..3]),
        Err(ModMpError::Division(DivMpError::InsufficientScratchSpace))
    );
}

#[test]
fn test_mod_mp_mp() {
    let p: [LimbType; 2] = [5, 1];
    let mut result: [LimbType; 2] = [!0; 2];

    // Narrower than the modulus.
    let mut scratch = vec![0; mod_mp_mp_scratch_nlimbs(1, 2)];
    mod_mp_mp(&mut result, &[7], &p, &mut scratch).unwrap();
    assert_eq!(result, [7, 0]);

    let mut scratch = vec![0; mod_mp_mp_scratch_nlimbs(2, 2)];
    mod_mp_mp(&mut result, &[5, 1], &p, &mut scratch).unwrap();
    assert_eq!(result, [0, 0]);

    // b^2 = (b + 5) * (b - 5) + 25
    let mut scratch = vec![0; mod_mp_mp_scratch_nlimbs(3, 2)];
    mod_mp_mp(&mut result, &[0, 0, 1], &p, &mut scratch).unwrap();
    assert_eq!(result, [25, 0]);

    let mut scratch = vec![0; mod_mp_mp_scratch_nlimbs(0, 2)];
    mod_mp_mp(&mut result, &[], &p, &mut scratch).unwrap();
    assert_eq!(result, [0, 0]);
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_add_sub_mod_mp_mp_closure(
        (p, op0, op1) in super::test_helpers::tst_mod_operands(2, 16),
    ) {
        use super::test_helpers::tst_mp_to_biguint;

        let p_val = tst_mp_to_biguint(&p);
        let op0_val = tst_mp_to_biguint(&op0);
        let op1_val = tst_mp_to_biguint(&op1);

        let mut sum = vec![0; p.len()];
        add_mod_mp_mp(&mut sum, &op0, &op1, &p).unwrap();
        assert!(lt_mp_mp(&sum, &p).unwrap());
        assert_eq!(tst_mp_to_biguint(&sum), (&op0_val + &op1_val) % &p_val);

        let mut diff = vec![0; p.len()];
        sub_mod_mp_mp(&mut diff, &op0, &op1, &p).unwrap();
        assert!(lt_mp_mp(&diff, &p).unwrap());
        assert_eq!(tst_mp_to_biguint(&diff), (&op0_val + &p_val - &op1_val) % &p_val);

        // (op0 - op1) + op1 == op0
        let mut op0_again = vec![0; p.len()];
        add_mod_mp_mp(&mut op0_again, &diff, &op1, &p).unwrap();
        assert_eq!(op0_again, op0);
    }

    #[test]
    fn test_mul_mod_mp_mp_matches_reference(
        (p, op0, op1) in super::test_helpers::tst_mod_operands(2, 16),
    ) {
        use super::test_helpers::tst_mp_to_biguint;

        let mut result = vec![0; p.len()];
        let mut scratch = vec![0; mul_mod_mp_mp_scratch_nlimbs(p.len())];
        mul_mod_mp_mp(&mut result, &op0, &op1, &p, &mut scratch).unwrap();
        assert_eq!(
            tst_mp_to_biguint(&result),
            tst_mp_to_biguint(&op0) * tst_mp_to_biguint(&op1) % tst_mp_to_biguint(&p)
        );
    }

    #[test]
    fn test_mod_mp_mp_matches_reference(
        op0 in super::test_helpers::tst_mp(0, 24),
        p in super::test_helpers::tst_mp_modulus(2, 12),
    ) {
        use super::test_helpers::tst_mp_to_biguint;

        let mut result = vec![0; p.len()];
        let mut scratch = vec![0; mod_mp_mp_scratch_nlimbs(op0.len(), p.len())];
        mod_mp_mp(&mut result, &op0, &p, &mut scratch).unwrap();
        assert_eq!(
            tst_mp_to_biguint(&result),
            tst_mp_to_biguint(&op0) % tst_mp_to_biguint(&p)
        );
    }
}
