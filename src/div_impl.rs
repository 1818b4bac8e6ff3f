//! Implementation of multiprecision integer division.

use log::trace;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize as _;

use super::add_impl::{add_assign_mp_mp, sub_assign_mp_mp};
use super::cmp_impl::{geq_mp_mp, gt_mp_mp, lt_mp_mp};
use super::limb::{div_dl_l, DivDlLError, DoubleLimb, LimbType};
use super::limbs_buffer::{clear_mp, MpBufferLenError};
use super::mul_impl::mul_l_mp;
use super::shift_impl::{lshift_bits_mp, lshift_radix_mp, rshift_bits_mp};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DivMpError {
    /// The divisor is less than two limbs wide.
    InvalidDivisorLen,
    /// The divisor's most significant limb is zero.
    DivisorHighLimbZero,
    /// The dividend is narrower than the divisor.
    DividendTooShort,
    InsufficientQuotientSpace,
    InsufficientRemainderSpace,
    InsufficientScratchSpace,
    DivisionByZero,
    /// A trial quotient limb could not be corrected within the bound guaranteed for normalized
    /// divisors.
    CorrectionNotConverged,
    BufferLen(MpBufferLenError),
}

impl From<DivDlLError> for DivMpError {
    fn from(value: DivDlLError) -> Self {
        match value {
            DivDlLError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

impl From<MpBufferLenError> for DivMpError {
    fn from(value: MpBufferLenError) -> Self {
        Self::BufferLen(value)
    }
}

/// Maximum number of decrements applied to a trial quotient limb.
///
/// For a divisor with the most significant bit of its high limb set, the trial quotient
/// computed from the dividend's two leading limbs exceeds the true quotient limb by at most two.
const MAX_QUOTIENT_CORRECTIONS: usize = 2;

/// Number of scratch limbs needed by [`div_mp_mp()`].
///
/// # Arguments
///
/// * `x_nlimbs` - Width of the dividend in limbs.
/// * `y_nlimbs` - Width of the divisor in limbs.
///
pub fn div_mp_mp_scratch_nlimbs(x_nlimbs: usize, y_nlimbs: usize) -> usize {
    // Normalized dividend and divisor, the divisor shifted into position and its multiple.
    (x_nlimbs + 1) + y_nlimbs + (x_nlimbs + 1) + (x_nlimbs + 2)
}

/// Divide two multiprecision integers.
///
/// Long division according to Algorithm 14.20 from the "Handbook of Applied Cryptography" by
/// A. Menezes, P. van Oorschot and S. Vanstone. Computes the quotient `q` and remainder `r` such
/// that `x = q * y + r` and `0 <= r < y`.
///
/// The divisor gets normalized first by shifting it left until the most significant bit of its
/// high limb is set, and the dividend by the same amount. This bounds the number of corrections
/// needed per trial quotient limb. The remainder gets shifted back accordingly at the end.
///
/// Neither `x` nor `y` are modified, all intermediate values live in `scratch`. The contents of
/// `scratch` are unspecified on return.
///
/// # Arguments
///
/// * `q_out` - Optional destination for the quotient. If specified, its length must be `>=
///             x.len() - y.len() + 1`, excess high limbs get cleared.
/// * `r_out` - Destination for the remainder. Its length must be `>= y.len()`, excess high limbs
///             get cleared.
/// * `x` - The dividend. Its length must be `>= y.len()`.
/// * `y` - The divisor. It must be at least two limbs wide and its high limb must be non-zero.
/// * `scratch` - Scratch space of at least [`div_mp_mp_scratch_nlimbs()`] limbs.
///
pub fn div_mp_mp(
    mut q_out: Option<&mut [LimbType]>,
    r_out: &mut [LimbType],
    x: &[LimbType],
    y: &[LimbType],
    scratch: &mut [LimbType],
) -> Result<(), DivMpError> {
    let x_nlimbs = x.len();
    let y_nlimbs = y.len();
    if y_nlimbs <= 1 {
        return Err(DivMpError::InvalidDivisorLen);
    }
    if y[y_nlimbs - 1] == 0 {
        return Err(DivMpError::DivisorHighLimbZero);
    }
    if x_nlimbs < y_nlimbs {
        return Err(DivMpError::DividendTooShort);
    }
    if let Some(q_out) = &q_out {
        if q_out.len() < x_nlimbs - y_nlimbs + 1 {
            return Err(DivMpError::InsufficientQuotientSpace);
        }
    }
    if r_out.len() < y_nlimbs {
        return Err(DivMpError::InsufficientRemainderSpace);
    }
    if scratch.len() < div_mp_mp_scratch_nlimbs(x_nlimbs, y_nlimbs) {
        return Err(DivMpError::InsufficientScratchSpace);
    }

    let result = _div_mp_mp(q_out.as_deref_mut(), r_out, x, y, scratch);

    #[cfg(feature = "zeroize")]
    scratch.zeroize();

    result
}

fn _div_mp_mp(
    mut q_out: Option<&mut [LimbType]>,
    r_out: &mut [LimbType],
    x: &[LimbType],
    y: &[LimbType],
    scratch: &mut [LimbType],
) -> Result<(), DivMpError> {
    let n = x.len();
    let t = y.len();

    let (u, scratch) = scratch.split_at_mut(n + 1);
    let (v, scratch) = scratch.split_at_mut(t);
    let (v_shifted, scratch) = scratch.split_at_mut(n + 1);
    let qv_shifted = &mut scratch[..n + 2];

    // Normalize. The dividend gets one extra high limb to receive the bits shifted out.
    let shift = y[t - 1].leading_zeros();
    let v_shifted_out = lshift_bits_mp(v, y, shift)?;
    debug_assert_eq!(v_shifted_out, 0);
    let (u_low, u_high) = u.split_at_mut(n);
    u_high[0] = lshift_bits_mp(u_low, x, shift)?;

    if let Some(q_out) = q_out.as_deref_mut() {
        clear_mp(q_out);
    }

    // The extra limb holds at most shift bits, so u < v * b^(n + 1 - t) and the quotient
    // limb at position n + 1 - t is zero.
    lshift_radix_mp(v_shifted, v, n + 1 - t);
    if geq_mp_mp(u, v_shifted)? {
        return Err(DivMpError::CorrectionNotConverged);
    }

    let v_high = v[t - 1];
    let v_top = [v[t - 2], v_high];
    let mut qv_top: [LimbType; 3] = [0; 3];
    for i in (t..n + 1).rev() {
        // Estimate the quotient limb from the two leading limbs of u and the high limb of v.
        let mut q = if u[i] == v_high {
            !0
        } else {
            let (q, _) = div_dl_l(&DoubleLimb::new(u[i], u[i - 1]), v_high)?;
            if q.high() != 0 {
                return Err(DivMpError::CorrectionNotConverged);
            }
            q.low()
        };

        // Decrement q while q * v[t-1:t-2] > u[i:i-2].
        let u_top = [u[i - 2], u[i - 1], u[i]];
        mul_l_mp(&mut qv_top, q, &v_top)?;
        let mut ncorrections = 0;
        while gt_mp_mp(&qv_top, &u_top)? {
            if ncorrections == MAX_QUOTIENT_CORRECTIONS {
                return Err(DivMpError::CorrectionNotConverged);
            }
            ncorrections += 1;
            q -= 1;
            mul_l_mp(&mut qv_top, q, &v_top)?;
        }

        // Subtract q * v * b^(i - t) from u. If that would turn u negative, q is still one too
        // large: add v * b^(i - t) back and decrement q.
        lshift_radix_mp(v_shifted, v, i - t);
        mul_l_mp(qv_shifted, q, v_shifted)?;
        debug_assert_eq!(qv_shifted[n + 1], 0);
        let qv_shifted = &qv_shifted[..n + 1];
        let add_back = lt_mp_mp(u, qv_shifted)?;
        if add_back {
            // Wraps around, but the final u after the subtraction below is non-negative.
            add_assign_mp_mp(u, v_shifted)?;
            q -= 1;
        }
        sub_assign_mp_mp(u, qv_shifted)?;

        trace!(
            "div_mp_mp: quotient limb {} = {:#06x}, {} corrections, add back: {}",
            i - t,
            q,
            ncorrections,
            add_back
        );
        if let Some(q_out) = q_out.as_deref_mut() {
            q_out[i - t] = q;
        }
    }

    // u < v now, undo the normalization to obtain the remainder.
    debug_assert!(u[t..].iter().all(|l| *l == 0));
    rshift_bits_mp(r_out, &u[..t], shift)?;
    Ok(())
}

#[cfg(test)]
fn tst_div_and_check(x: &[LimbType], y: &[LimbType]) {
    use super::add_impl::add_mp_mp;
    use super::mul_impl::mul_rect_mp_mp;

    let q_nlimbs = x.len() - y.len() + 1;
    let mut q = vec![!0; q_nlimbs];
    let mut r = vec![!0; y.len()];
    let mut scratch = vec![0; div_mp_mp_scratch_nlimbs(x.len(), y.len())];
    div_mp_mp(Some(&mut q), &mut r, x, y, &mut scratch).unwrap();

    // The remainder must be less than the divisor.
    assert!(lt_mp_mp(&r, y).unwrap());

    // Multiply q by y again and add the remainder back, the result should match the initial x.
    let mut qy = vec![0; q_nlimbs + y.len()];
    mul_rect_mp_mp(&mut qy, &q, y).unwrap();
    let mut r_ext = vec![0; qy.len()];
    r_ext[..r.len()].copy_from_slice(&r);
    let mut result = vec![0; qy.len()];
    let carry = add_mp_mp(&mut result, &qy, &r_ext).unwrap();
    assert_eq!(carry, 0);
    assert!(result[x.len()..].iter().all(|l| *l == 0));
    assert_eq!(&result[..x.len()], x);
}

#[test]
fn test_div_mp_mp() {
    // b^2 / (b + 1) = b - 1, remainder 1.
    let x: [LimbType; 3] = [0, 0, 1];
    let y: [LimbType; 2] = [1, 1];
    let mut q: [LimbType; 2] = [!0; 2];
    let mut r: [LimbType; 2] = [!0; 2];
    let mut scratch = vec![0; div_mp_mp_scratch_nlimbs(3, 2)];
    div_mp_mp(Some(&mut q), &mut r, &x, &y, &mut scratch).unwrap();
    assert_eq!(q, [!0, 0]);
    assert_eq!(r, [1, 0]);
    tst_div_and_check(&x, &y);

    // Dividend smaller than the divisor.
    let x: [LimbType; 2] = [5, 0];
    let y: [LimbType; 2] = [0, 1];
    let mut q: [LimbType; 1] = [!0];
    let mut r: [LimbType; 3] = [!0; 3];
    let mut scratch = vec![0; div_mp_mp_scratch_nlimbs(2, 2)];
    div_mp_mp(Some(&mut q), &mut r, &x, &y, &mut scratch).unwrap();
    assert_eq!(q, [0]);
    assert_eq!(r, [5, 0, 0]);

    // Exact division.
    let x: [LimbType; 4] = [0, 0, 6, 0];
    let y: [LimbType; 2] = [0, 3];
    tst_div_and_check(&x, &y);

    // Without a quotient destination.
    let x: [LimbType; 3] = [7, 0, 1];
    let y: [LimbType; 2] = [0, 1];
    let mut r: [LimbType; 2] = [!0; 2];
    let mut scratch = vec![0; div_mp_mp_scratch_nlimbs(3, 2)];
    div_mp_mp(None, &mut r, &x, &y, &mut scratch).unwrap();
    assert_eq!(r, [7, 0]);

    tst_div_and_check(&[!0, !0, !0, !1, !0, !0], &[!0, !0, !0]);
    tst_div_and_check(&[!1, !0, !0, !1, !0, !0], &[!0, !0, !0]);
    tst_div_and_check(&[0, 0, 0, 0, 0, 0], &[!0, !0, !0]);
    tst_div_and_check(&[!1, 0, 0, 0, 0, 0], &[!0, !0, !0]);
    tst_div_and_check(&[0, !0, !0, !0, !0, !0], &[0, 1, 0, 1]);
    tst_div_and_check(&[0, !1, !0, !0, !0, !0], &[0, 2, 1]);
    // Leading dividend limb equal to the divisor's high limb.
    tst_div_and_check(&[0, 0x1234, 0x8000, 0x8000], &[!0, 0x8000]);
    tst_div_and_check(&[0, 0, 1, 1], &[!0, 1]);
}

#[test]
fn test_div_mp_mp_bit_patterns() {
    use super::limb::LIMB_BITS;

    const N_MAX_LIMBS: u32 = 4;
    for i in 0..N_MAX_LIMBS * LIMB_BITS + 1 {
        let mut x = [0 as LimbType; N_MAX_LIMBS as usize];
        for k in 0..i {
            x[(k / LIMB_BITS) as usize] |= 1 << (k % LIMB_BITS);
        }

        for j1 in LIMB_BITS..N_MAX_LIMBS * LIMB_BITS {
            for j2 in (0..j1 + 1).step_by(3) {
                let y_nlimbs = (j1 / LIMB_BITS + 1) as usize;
                let mut y = vec![0 as LimbType; y_nlimbs];
                y[(j1 / LIMB_BITS) as usize] |= 1 << (j1 % LIMB_BITS);
                y[(j2 / LIMB_BITS) as usize] |= 1 << (j2 % LIMB_BITS);
                tst_div_and_check(&x, &y);
            }
        }
    }
}

#[cfg(feature = "zeroize")]
#[test]
fn test_div_mp_mp_clears_scratch() {
    let x: [LimbType; 4] = [0x1234, 0x5678, 0x9abc, 0xdef0];
    let y: [LimbType; 2] = [0x4321, 0x8765];
    let mut q: [LimbType; 3] = [0; 3];
    let mut r: [LimbType; 2] = [0; 2];
    let mut scratch = vec![!0; div_mp_mp_scratch_nlimbs(4, 2)];
    div_mp_mp(Some(&mut q), &mut r, &x, &y, &mut scratch).unwrap();
    assert!(scratch.iter().all(|l| *l == 0));
    tst_div_and_check(&x, &y);
}

#[test]
fn test_div_mp_mp_precondition_errors() {
    let x: [LimbType; 3] = [1, 2, 3];
    let mut q: [LimbType; 3] = [0; 3];
    let mut r: [LimbType; 3] = [0; 3];
    let mut scratch = vec![0; div_mp_mp_scratch_nlimbs(3, 3)];

    assert_eq!(
        div_mp_mp(Some(&mut q), &mut r, &x, &[5], &mut scratch),
        Err(DivMpError::InvalidDivisorLen)
    );
    assert_eq!(
        div_mp_mp(Some(&mut q), &mut r, &x, &[], &mut scratch),
        Err(DivMpError::InvalidDivisorLen)
    );
    assert_eq!(
        div_mp_mp(Some(&mut q), &mut r, &x, &[5, 0], &mut scratch),
        Err(DivMpError::DivisorHighLimbZero)
    );
    assert_eq!(
        div_mp_mp(Some(&mut q), &mut r, &x[..1], &[5, 1], &mut scratch),
        Err(DivMpError::DividendTooShort)
    );
    assert_eq!(
        div_mp_mp(Some(&mut q[..1]), &mut r, &x, &[5, 1], &mut scratch),
        Err(DivMpError::InsufficientQuotientSpace)
    );
    assert_eq!(
        div_mp_mp(Some(&mut q), &mut r[..1], &x, &[5, 1], &mut scratch),
        Err(DivMpError::InsufficientRemainderSpace)
    );
    assert_eq!(
        div_mp_mp(Some(&mut q), &mut r, &x, &[5, 1], &mut scratch[..4]),
        Err(DivMpError::InsufficientScratchSpace)
    );

    // Nothing got written.
    assert_eq!(q, [0; 3]);
    assert_eq!(r, [0; 3]);
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_div_mp_mp_identity((x, y) in super::test_helpers::tst_div_operands(12)) {
        use super::test_helpers::tst_mp_to_biguint;

        tst_div_and_check(&x, &y);

        let mut q = vec![0; x.len() - y.len() + 1];
        let mut r = vec![0; y.len()];
        let mut scratch = vec![0; div_mp_mp_scratch_nlimbs(x.len(), y.len())];
        div_mp_mp(Some(&mut q), &mut r, &x, &y, &mut scratch).unwrap();
        let x_val = tst_mp_to_biguint(&x);
        let y_val = tst_mp_to_biguint(&y);
        assert_eq!(tst_mp_to_biguint(&q), &x_val / &y_val);
        assert_eq!(tst_mp_to_biguint(&r), &x_val % &y_val);
    }

    #[test]
    fn test_div_mp_mp_small_divisor_high_limb(
        (mut x, mut y) in super::test_helpers::tst_div_operands(8),
        y_high in 1..=4u16,
    ) {
        // Divisors with few bits in their high limb need the most normalization.
        let y_nlimbs = y.len();
        y[y_nlimbs - 1] = y_high;
        let x_nlimbs = x.len();
        x[x_nlimbs - 1] = !0;
        tst_div_and_check(&x, &y);
    }
}
