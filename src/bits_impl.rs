//! Bit level inspection of multiprecision integers.

use super::limb::{msb_index_l, test_bit_l, LimbType, LIMB_BITS};
use super::limbs_buffer::find_last_set_limb_mp;

/// Position of the most significant set bit of a multiprecision integer.
///
/// Returns `None` if `op0` equals zero, including the case of an empty slice.
pub fn msb_index_mp(op0: &[LimbType]) -> Option<usize> {
    let nlimbs = find_last_set_limb_mp(op0);
    if nlimbs == 0 {
        return None;
    }
    let high_msb = msb_index_l(op0[nlimbs - 1])?;
    Some((nlimbs - 1) * LIMB_BITS as usize + high_msb as usize)
}

#[test]
fn test_msb_index_mp() {
    assert_eq!(msb_index_mp(&[]), None);
    assert_eq!(msb_index_mp(&[0, 0, 0]), None);
    assert_eq!(msb_index_mp(&[1]), Some(0));
    assert_eq!(msb_index_mp(&[1, 1, 0]), Some(16));
    assert_eq!(msb_index_mp(&[!0, !0, 0x8000]), Some(47));
    // 65537
    assert_eq!(msb_index_mp(&[0x0001, 0x0001]), Some(16));
}

/// Test a single bit of a multiprecision integer.
///
/// Bits beyond the width of `op0` read as zero.
///
/// # Arguments
///
/// * `op0` - The multiprecision integer to inspect.
/// * `i` - The bit position, zero being the least significant one.
///
pub fn test_bit_mp(op0: &[LimbType], i: usize) -> bool {
    let limb_index = i / LIMB_BITS as usize;
    match op0.get(limb_index) {
        Some(v) => test_bit_l(*v, (i % LIMB_BITS as usize) as u32),
        None => false,
    }
}

#[test]
fn test_test_bit_mp() {
    let op0: [LimbType; 2] = [0x0001, 0x8001];
    assert!(test_bit_mp(&op0, 0));
    assert!(!test_bit_mp(&op0, 1));
    assert!(!test_bit_mp(&op0, 15));
    assert!(test_bit_mp(&op0, 16));
    assert!(test_bit_mp(&op0, 31));
    assert!(!test_bit_mp(&op0, 32));
    assert!(!test_bit_mp(&op0, 1000));
    assert!(!test_bit_mp(&[], 0));
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_bits_mp_match_reference(op0 in super::test_helpers::tst_mp(0, 8)) {
        use super::test_helpers::tst_mp_to_biguint;

        let op0_val = tst_mp_to_biguint(&op0);
        let expected_msb = match op0_val.bits() {
            0 => None,
            nbits => Some(nbits as usize - 1),
        };
        assert_eq!(msb_index_mp(&op0), expected_msb);

        for i in 0..op0.len() * LIMB_BITS as usize + 4 {
            assert_eq!(test_bit_mp(&op0, i), op0_val.bit(i as u64));
        }
    }
}
