//! Definitions and arithmetic primitives related to [LimbType], the basic unit of multiprecision
//! integer arithmetic.

/// The basic unit used by the multiprecision integer arithmetic implementation.
///
/// # Notes
///
/// A [`LimbType`] is a 16 bit word, the radix of the multiprecision representation is
/// `b = 2^16`. All products of two limbs are computed in [`DoubleLimbType`], which is wide enough
/// to hold them exactly, so no architecture specific multiplication support is needed.
///
pub type LimbType = u16;

/// Integer type wide enough for the exact product of two [`LimbType`] words.
pub type DoubleLimbType = u32;

/// The bit width of a [`LimbType`].
pub const LIMB_BITS: u32 = LimbType::BITS;

/// The bit width of half a [`LimbType`], i.e. a "halfword".
const HALF_LIMB_BITS: u32 = LIMB_BITS / 2;
/// Mask for extracting the lower half of a [`LimbType`].
const HALF_LIMB_MASK: LimbType = lsb_mask_l(HALF_LIMB_BITS);

pub const fn lsb_mask_l(nbits: u32) -> LimbType {
    debug_assert!(nbits <= LIMB_BITS);
    if nbits == LIMB_BITS {
        !0
    } else {
        (1 << nbits) - 1
    }
}

#[test]
fn test_lsb_mask_l() {
    for i in 0..LIMB_BITS {
        let mask = lsb_mask_l(i);
        assert_eq!(mask, (1 << i) - 1);
    }
    assert_eq!(lsb_mask_l(LIMB_BITS), !0);
}

/// Split a limb into upper and lower half limbs.
///
/// Returns a pair of upper and lower half limb, in this order.
fn l_to_hls(v: LimbType) -> (LimbType, LimbType) {
    (v >> HALF_LIMB_BITS, v & HALF_LIMB_MASK)
}

/// Add two limbs.
///
/// Returns a pair of carry and the [`LimbType::BITS`] lower bits of the sum.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
///
pub fn add_l_l(v0: LimbType, v1: LimbType) -> (LimbType, LimbType) {
    let (r, carry) = v0.overflowing_add(v1);
    (carry as LimbType, r)
}

#[test]
fn test_add_l_l() {
    assert_eq!(add_l_l(0, 0), (0, 0));
    assert_eq!(add_l_l(1, 0), (0, 1));
    assert_eq!(add_l_l(!0 - 1, 1), (0, !0));
    assert_eq!(add_l_l(!0, 1), (1, 0));
    assert_eq!(add_l_l(1 << (LIMB_BITS - 1), 1 << (LIMB_BITS - 1)), (1, 0));
    assert_eq!(add_l_l(!0, 1 << (LIMB_BITS - 1)), (1, lsb_mask_l(LIMB_BITS - 1)));
    assert_eq!(add_l_l(!0, !0), (1, !0 - 1));
}

/// Add two limbs and an incoming carry.
///
/// Returns a pair of the outgoing carry and the [`LimbType::BITS`] lower bits of the sum. The
/// outgoing carry is set iff `v0 + v1 + carry >= 2^LIMB_BITS`.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
/// * `carry` - incoming carry, must be either zero or one
///
pub fn add_l_l_c(v0: LimbType, v1: LimbType, carry: LimbType) -> (LimbType, LimbType) {
    debug_assert!(carry <= 1);
    let (carry0, r) = add_l_l(v0, carry);
    let (carry1, r) = add_l_l(r, v1);
    let carry = carry0 + carry1;
    debug_assert!(carry <= 1);
    (carry, r)
}

#[test]
fn test_add_l_l_c() {
    assert_eq!(add_l_l_c(0, 0, 0), (0, 0));
    assert_eq!(add_l_l_c(0, 0, 1), (0, 1));
    assert_eq!(add_l_l_c(!0, 0, 1), (1, 0));
    assert_eq!(add_l_l_c(0, !0, 1), (1, 0));
    assert_eq!(add_l_l_c(!0, !0, 1), (1, !0));
    assert_eq!(add_l_l_c(!0 - 1, 1, 0), (0, !0));
    assert_eq!(add_l_l_c(0x8000, 0x7fff, 1), (1, 0));
}

/// Subtract two limbs.
///
/// Returns a pair of borrow and the [`LimbType::BITS`] lower bits of the difference.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
///
pub fn sub_l_l(v0: LimbType, v1: LimbType) -> (LimbType, LimbType) {
    let (r, borrow) = v0.overflowing_sub(v1);
    (borrow as LimbType, r)
}

#[test]
fn test_sub_l_l() {
    assert_eq!(sub_l_l(0, 0), (0, 0));
    assert_eq!(sub_l_l(1, 0), (0, 1));
    assert_eq!(sub_l_l(0, 1), (1, !0));
    assert_eq!(sub_l_l(1 << (LIMB_BITS - 1), 1 << (LIMB_BITS - 1)), (0, 0));
    assert_eq!(sub_l_l(0, 1 << (LIMB_BITS - 1)), (1, 1 << (LIMB_BITS - 1)));
    assert_eq!(sub_l_l(1 << (LIMB_BITS - 1), (1 << (LIMB_BITS - 1)) + 1), (1, !0));
}

/// Subtract a limb and an incoming borrow from another limb.
///
/// Returns a pair of the outgoing borrow and the [`LimbType::BITS`] lower bits of the
/// difference. The outgoing borrow is set iff `v0 - v1 - borrow` is negative.
///
/// # Arguments:
///
/// * `v0` - the minuend
/// * `v1` - the subtrahend
/// * `borrow` - incoming borrow, must be either zero or one
///
pub fn sub_l_l_b(v0: LimbType, v1: LimbType, borrow: LimbType) -> (LimbType, LimbType) {
    debug_assert!(borrow <= 1);
    let (borrow0, r) = sub_l_l(v0, borrow);
    let (borrow1, r) = sub_l_l(r, v1);
    let borrow = borrow0 + borrow1;
    debug_assert!(borrow <= 1);
    (borrow, r)
}

#[test]
fn test_sub_l_l_b() {
    assert_eq!(sub_l_l_b(0, 0, 0), (0, 0));
    assert_eq!(sub_l_l_b(0, 0, 1), (1, !0));
    assert_eq!(sub_l_l_b(1, 0, 1), (0, 0));
    assert_eq!(sub_l_l_b(5, 3, 1), (0, 1));
    // A maximal subtrahend only borrows if the minuend can't cover it.
    assert_eq!(sub_l_l_b(!0, !0, 0), (0, 0));
    assert_eq!(sub_l_l_b(!0, !0, 1), (1, !0));
    assert_eq!(sub_l_l_b(!0, !0 - 1, 1), (0, 0));
    assert_eq!(sub_l_l_b(0, !0, 0), (1, 1));
}

/// A pair of [`LimbType`]s interpreted as a double precision integer.
///
/// Used internally for the result of [`LimbType`] multiplications and also for the implementation
/// of multiprecision integer division.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DoubleLimb {
    v: [LimbType; 2],
}

impl DoubleLimb {
    pub fn new(h: LimbType, l: LimbType) -> Self {
        Self { v: [l, h] }
    }

    pub fn high(&self) -> LimbType {
        self.v[1]
    }

    pub fn low(&self) -> LimbType {
        self.v[0]
    }

    fn from_dl(v: DoubleLimbType) -> Self {
        Self::new((v >> LIMB_BITS) as LimbType, v as LimbType)
    }

    fn to_dl(self) -> DoubleLimbType {
        (self.high() as DoubleLimbType) << LIMB_BITS | self.low() as DoubleLimbType
    }
}

/// Multiply two limbs.
///
/// Returns the exact product as a double precision [`DoubleLimb`].
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
///
pub fn mul_l_l(v0: LimbType, v1: LimbType) -> DoubleLimb {
    DoubleLimb::from_dl(v0 as DoubleLimbType * v1 as DoubleLimbType)
}

/// Multiply two limbs by means of half limb multiplications only.
///
/// Computes the same result as [`mul_l_l()`], but never multiplies anything wider than half a
/// limb, so that every partial product fits a single [`LimbType`]. The four partial products
/// are summed up as two shifted rows.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
///
pub fn generic_mul_l_l(v0: LimbType, v1: LimbType) -> DoubleLimb {
    let (v0h, v0l) = l_to_hls(v0);
    let (v1h, v1l) = l_to_hls(v1);

    let prod_v0l_v1l = v0l * v1l;
    let prod_v0l_v1h = v0l * v1h;
    let prod_v0h_v1l = v0h * v1l;
    let prod_v0h_v1h = v0h * v1h;

    let mut result_low: LimbType = prod_v0l_v1l;
    let mut result_high: LimbType = prod_v0h_v1h;

    let (prod_v0l_v1h_h, prod_v0l_v1h_l) = l_to_hls(prod_v0l_v1h);
    let (prod_v0h_v1l_h, prod_v0h_v1l_l) = l_to_hls(prod_v0h_v1l);

    let (result_low_carry, result_low_sum) = add_l_l(result_low, prod_v0l_v1h_l << HALF_LIMB_BITS);
    result_low = result_low_sum;
    result_high += result_low_carry;
    result_high += prod_v0l_v1h_h;

    let (result_low_carry, result_low_sum) = add_l_l(result_low, prod_v0h_v1l_l << HALF_LIMB_BITS);
    result_low = result_low_sum;
    result_high += result_low_carry;
    result_high += prod_v0h_v1l_h;

    DoubleLimb::new(result_high, result_low)
}

#[test]
fn test_mul_l_l() {
    let p = mul_l_l(0, 0);
    assert_eq!(p.low(), 0);
    assert_eq!(p.high(), 0);

    let p = mul_l_l(2, 2);
    assert_eq!(p.low(), 4);
    assert_eq!(p.high(), 0);

    let p = mul_l_l(1 << (LIMB_BITS - 1), 2);
    assert_eq!(p.low(), 0);
    assert_eq!(p.high(), 1);

    let p = mul_l_l(1 << (LIMB_BITS - 1), 1 << (LIMB_BITS - 1));
    assert_eq!(p.low(), 0);
    assert_eq!(p.high(), 1 << (LIMB_BITS - 2));

    let p = mul_l_l(!0, !0);
    assert_eq!(p.low(), 1);
    assert_eq!(p.high(), !1);
}

#[test]
fn test_generic_mul_l_l() {
    let samples: [LimbType; 10] = [0, 1, 2, 0xff, 0x100, 0x7fff, 0x8000, 0xabcd, !1, !0];
    for v0 in samples {
        for v1 in samples {
            assert_eq!(generic_mul_l_l(v0, v1), mul_l_l(v0, v1));
        }
    }
}

/// Compute `op0 + op10 * op11 + carry` as a double limb.
///
/// Returns a pair of the upper limb, to be carried on, and the lower limb of the result. The
/// upper limb cannot overflow: `(b - 1) + (b - 1)^2 + (b - 1) = b^2 - 1`.
///
pub fn mul_add_l_l_l_c(
    op0: LimbType,
    op10: LimbType,
    op11: LimbType,
    carry: LimbType,
) -> (LimbType, LimbType) {
    let prod = mul_l_l(op10, op11);
    // Basic property of the multiplication.
    debug_assert!(prod.high() < !1 || prod.high() == !1 && prod.low() == 1);
    let (carry0, result) = add_l_l(op0, carry);
    let (carry1, result) = add_l_l(result, prod.low());
    debug_assert!(prod.high() < !1 || carry0 + carry1 <= 1);
    let carry = prod.high() + carry0 + carry1;
    (carry, result)
}

#[test]
fn test_mul_add_l_l_l_c() {
    assert_eq!(mul_add_l_l_l_c(0, 0, 0, 0), (0, 0));
    assert_eq!(mul_add_l_l_l_c(1, 2, 3, 4), (0, 11));
    assert_eq!(mul_add_l_l_l_c(!0, !0, !0, !0), (!0, !0));
    assert_eq!(mul_add_l_l_l_c(!0, 1, 1, 0), (1, 0));
}

/// Error returned by [`div_dl_l()`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DivDlLError {
    DivisionByZero,
}

/// Divide a double limb by a limb.
///
/// This routine is intended as a supporting primitive for the multiprecision integer division
/// implementation, where it provides the trial quotient digit estimates. The result will be
/// returned as a pair of quotient and remainder. The quotient is returned as a [`DoubleLimb`],
/// because it exceeds a single limb whenever `u.high() >= v`.
///
/// # Arguments
///
/// * `u` - The [`DoubleLimb`] dividend.
/// * `v` - The divisor, must be non-zero.
///
pub fn div_dl_l(u: &DoubleLimb, v: LimbType) -> Result<(DoubleLimb, LimbType), DivDlLError> {
    if v == 0 {
        return Err(DivDlLError::DivisionByZero);
    }
    let u = u.to_dl();
    let v = v as DoubleLimbType;
    Ok((DoubleLimb::from_dl(u / v), (u % v) as LimbType))
}

#[test]
fn test_div_dl_l() {
    fn div_and_check(u: DoubleLimb, v: LimbType) {
        let (q, r) = div_dl_l(&u, v).unwrap();
        assert!(r < v);

        // Multiply q by v again and add the remainder back, the result should match the initial u.
        let prod_l = mul_l_l(q.low(), v);
        let prod_h = mul_l_l(q.high(), v);
        assert_eq!(prod_h.high(), 0);

        let (carry, result_l) = add_l_l(prod_l.low(), r);
        let (carry, result_h) = add_l_l_c(prod_l.high(), prod_h.low(), carry);
        assert_eq!(carry, 0);
        assert_eq!(result_l, u.low());
        assert_eq!(result_h, u.high());
    }

    div_and_check(DoubleLimb::new(!1, !0), !0);
    div_and_check(DoubleLimb::new(!1, !1), !0);
    div_and_check(DoubleLimb::new(0, 0), !0);
    div_and_check(DoubleLimb::new(0, !1), !0);
    div_and_check(DoubleLimb::new(!0, !0), 1);
    div_and_check(DoubleLimb::new(!0, !1), 2);

    for i in 0..LIMB_BITS {
        for j1 in 0..LIMB_BITS {
            for j2 in 0..j1 + 1 {
                let u_h = if i != 0 { !0 >> (LIMB_BITS - i) } else { 0 };
                let u = DoubleLimb::new(u_h, !0);
                let v = 1 << j1 | 1 << j2;
                div_and_check(u, v);
            }
        }
    }
}

#[test]
fn test_div_dl_l_by_zero() {
    assert_eq!(div_dl_l(&DoubleLimb::new(1, 2), 0), Err(DivDlLError::DivisionByZero));
    assert_eq!(div_dl_l(&DoubleLimb::new(0, 0), 0), Err(DivDlLError::DivisionByZero));
}

/// Test a single bit of a limb.
///
/// # Arguments
///
/// * `v` - the limb to inspect.
/// * `i` - the bit position, zero being the least significant one. Must be `< LIMB_BITS`.
///
pub fn test_bit_l(v: LimbType, i: u32) -> bool {
    debug_assert!(i < LIMB_BITS);
    v >> i & 1 != 0
}

#[test]
fn test_test_bit_l() {
    for i in 0..LIMB_BITS {
        assert!(test_bit_l(1 << i, i));
        assert!(!test_bit_l(!(1 << i), i));
    }
    assert!(!test_bit_l(0, 0));
}

/// Position of the most significant set bit of a limb, if any.
///
/// Returns `None` for a zero limb, which has no set bit.
pub fn msb_index_l(v: LimbType) -> Option<u32> {
    if v == 0 {
        None
    } else {
        Some(LIMB_BITS - 1 - v.leading_zeros())
    }
}

#[test]
fn test_msb_index_l() {
    assert_eq!(msb_index_l(0), None);

    for i in 0..LIMB_BITS {
        let v: LimbType = 1 << i;
        assert_eq!(msb_index_l(v), Some(i));
        assert_eq!(msb_index_l(v | (v - 1)), Some(i));
    }
    assert_eq!(msb_index_l(!0), Some(LIMB_BITS - 1));
}
