//! Implementation of modular exponentiation.

use log::{debug, trace};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize as _;

use super::bits_impl::{msb_index_mp, test_bit_mp};
use super::cmp_impl::lt_mp_mp;
use super::limb::LimbType;
use super::limbs_buffer::{
    check_result_len_mp, check_same_len_mp, clear_mp, copy_mp, MpBufferLenError,
};
use super::mod_impl::{check_modulus_mp, mul_mod_mp_mp, mul_mod_mp_mp_scratch_nlimbs, ModMpError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExpModMpError {
    /// The base is not less than the modulus.
    BaseNotReduced,
    InsufficientScratchSpace,
    Mod(ModMpError),
    BufferLen(MpBufferLenError),
}

impl From<ModMpError> for ExpModMpError {
    fn from(value: ModMpError) -> Self {
        Self::Mod(value)
    }
}

impl From<MpBufferLenError> for ExpModMpError {
    fn from(value: MpBufferLenError) -> Self {
        Self::BufferLen(value)
    }
}

/// Number of scratch limbs needed by [`exp_mod_mp_mp()`] for a modulus of `p_nlimbs` limbs.
pub fn exp_mod_mp_mp_scratch_nlimbs(p_nlimbs: usize) -> usize {
    p_nlimbs + mul_mod_mp_mp_scratch_nlimbs(p_nlimbs)
}

/// Modular exponentiation.
///
/// Computes `base^exponent mod p` by left-to-right binary exponentiation: starting out from one,
/// the accumulator gets squared for every bit of the exponent, from the most significant set bit
/// downwards, and multiplied by `base` whenever that bit is set.
///
/// The sequence of operations depends on the exponent's bits, so the execution time leaks
/// the exponent. Don't use this with secret exponents.
///
/// # Arguments
///
/// * `result` - The destination buffer. Its length must be `>= p.len()`, excess high limbs get
///              cleared.
/// * `base` - The base, reduced modulo `p`.
/// * `exponent` - The exponent, of arbitrary width. An all-zero or empty `exponent` yields one.
/// * `p` - The modulus. It must be at least two limbs wide and its high limb must be non-zero.
/// * `scratch` - Scratch space of at least [`exp_mod_mp_mp_scratch_nlimbs()`] limbs.
///
pub fn exp_mod_mp_mp(
    result: &mut [LimbType],
    base: &[LimbType],
    exponent: &[LimbType],
    p: &[LimbType],
    scratch: &mut [LimbType],
) -> Result<(), ExpModMpError> {
    check_modulus_mp(p)?;
    check_same_len_mp(base, p)?;
    if !lt_mp_mp(base, p)? {
        return Err(ExpModMpError::BaseNotReduced);
    }
    let p_nlimbs = p.len();
    check_result_len_mp(result, p_nlimbs)?;
    if scratch.len() < exp_mod_mp_mp_scratch_nlimbs(p_nlimbs) {
        return Err(ExpModMpError::InsufficientScratchSpace);
    }

    let r = _exp_mod_mp_mp(result, base, exponent, p, scratch);

    #[cfg(feature = "zeroize")]
    scratch.zeroize();

    r
}

fn _exp_mod_mp_mp(
    result: &mut [LimbType],
    base: &[LimbType],
    exponent: &[LimbType],
    p: &[LimbType],
    scratch: &mut [LimbType],
) -> Result<(), ExpModMpError> {
    let p_nlimbs = p.len();
    clear_mp(result);
    let acc = &mut result[..p_nlimbs];
    // p is at least two limbs wide, so one is reduced.
    acc[0] = 1;

    let exponent_msb = match msb_index_mp(exponent) {
        Some(exponent_msb) => exponent_msb,
        None => {
            debug!("exp_mod_mp_mp: zero exponent");
            return Ok(());
        }
    };
    debug!(
        "exp_mod_mp_mp: {} limb modulus, {} exponent bits",
        p_nlimbs,
        exponent_msb + 1
    );

    let (tmp, mul_mod_scratch) = scratch.split_at_mut(p_nlimbs);
    for i in (0..exponent_msb + 1).rev() {
        mul_mod_mp_mp(tmp, acc, acc, p, mul_mod_scratch)?;
        copy_mp(acc, tmp)?;

        let bit = test_bit_mp(exponent, i);
        trace!("exp_mod_mp_mp: exponent bit {} = {}", i, bit as u8);
        if bit {
            mul_mod_mp_mp(tmp, acc, base, p, mul_mod_scratch)?;
            copy_mp(acc, tmp)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::hexstr::{limbs_from_hexstr_cnst, limbs_to_hexstr};
    use super::super::test_helpers::{tst_mp_from_biguint, tst_mp_to_biguint};
    use super::*;

    const RSA_N: [LimbType; 32] = limbs_from_hexstr_cnst::<32>(concat!(
        "c3185456b1195ddca9c79c5e089e828dd69ecb0df000ff1d2b9d2bede9ca6788",
        "4c41804eb2ce283671e63befbba79be18c8ad9c4982ef678c781303b494ccb75"
    ));

    const RSA_PLAINTEXT: [LimbType; 32] = limbs_from_hexstr_cnst::<32>(concat!(
        "074e9c0197b16814a7c7b55293a5c651e251053011ce3da537f062b549c532c8",
        "267851316840b8196fb32728a2736b0d93385518af9b9c6deeeceadbb32474ee"
    ));

    const RSA_E: [LimbType; 2] = limbs_from_hexstr_cnst::<2>("10001");

    const RSA_CIPHERTEXT: [LimbType; 32] = limbs_from_hexstr_cnst::<32>(concat!(
        "a4607f83c42378f0c7ec4b0cbc8d9cf8ce38efba16a1d77177ccb4b51ec0b239",
        "fa8144fc469af9938d1d8ae0be90728928fd45b095b8b60b88950c0bd9cfca8d"
    ));

    fn tst_exp_mod(base: &[LimbType], exponent: &[LimbType], p: &[LimbType]) -> Vec<LimbType> {
        let mut result = vec![!0; p.len()];
        let mut scratch = vec![0; exp_mod_mp_mp_scratch_nlimbs(p.len())];
        exp_mod_mp_mp(&mut result, base, exponent, p, &mut scratch).unwrap();
        result
    }

    #[test]
    fn test_exp_mod_mp_mp_rsa() {
        let result = tst_exp_mod(&RSA_PLAINTEXT, &RSA_E, &RSA_N);
        assert_eq!(
            limbs_to_hexstr(&result).unwrap(),
            limbs_to_hexstr(&RSA_CIPHERTEXT).unwrap()
        );
    }

    #[test]
    fn test_exp_mod_mp_mp_single_limb_exponent() {
        // Only the low limb of 65537, i.e. an exponent of one.
        let result = tst_exp_mod(&RSA_PLAINTEXT, &RSA_E[..1], &RSA_N);
        assert_eq!(result, RSA_PLAINTEXT);
    }

    #[test]
    fn test_exp_mod_mp_mp_zero_exponent() {
        let mut one = [0 as LimbType; 32];
        one[0] = 1;
        assert_eq!(tst_exp_mod(&RSA_PLAINTEXT, &[0, 0], &RSA_N), one);
        assert_eq!(tst_exp_mod(&RSA_PLAINTEXT, &[], &RSA_N), one);
        // 0^0
        assert_eq!(tst_exp_mod(&[0; 32], &[], &RSA_N), one);
    }

    #[test]
    fn test_exp_mod_mp_mp_small() {
        // 3^5 mod (b + 5) = 243
        let p: [LimbType; 2] = [5, 1];
        assert_eq!(tst_exp_mod(&[3, 0], &[5], &p), [243, 0]);
        // 2^16 = b = p - 5
        assert_eq!(tst_exp_mod(&[2, 0], &[16], &p), [0, 1]);
        // 2^17 = 2 * b = 2 * (p - 5) = p - 10
        assert_eq!(tst_exp_mod(&[2, 0], &[17, 0, 0], &p), [!0 - 4, 0]);
        assert_eq!(tst_exp_mod(&[0, 0], &[3], &p), [0, 0]);
    }

    #[test]
    fn test_exp_mod_mp_mp_precondition_errors() {
        let mut result = [0 as LimbType; 32];
        let mut scratch = vec![0; exp_mod_mp_mp_scratch_nlimbs(32)];

        assert_eq!(
            exp_mod_mp_mp(&mut result, &RSA_N, &RSA_E, &RSA_N, &mut scratch),
            Err(ExpModMpError::BaseNotReduced)
        );
        assert_eq!(
            exp_mod_mp_mp(&mut result, &RSA_PLAINTEXT[..2], &RSA_E, &[5, 0], &mut scratch),
            Err(ExpModMpError::Mod(ModMpError::InvalidModulus))
        );
        assert_eq!(
            exp_mod_mp_mp(&mut result, &RSA_PLAINTEXT[..31], &RSA_E, &RSA_N, &mut scratch),
            Err(ExpModMpError::BufferLen(MpBufferLenError::OperandLenMismatch))
        );
        assert_eq!(
            exp_mod_mp_mp(&mut result[..31], &RSA_PLAINTEXT, &RSA_E, &RSA_N, &mut scratch),
            Err(ExpModMpError::BufferLen(MpBufferLenError::InsufficientResultSpace))
        );
        assert_eq!(
            exp_mod_mp_mp(&mut result, &RSA_PLAINTEXT, &RSA_E, &RSA_N, &mut scratch[..32]),
            Err(ExpModMpError::InsufficientScratchSpace)
        );
        assert_eq!(result, [0; 32]);
    }

    proptest::proptest! {
        #[test]
        fn test_exp_mod_mp_mp_matches_reference(
            (p, base, _) in super::super::test_helpers::tst_mod_operands(2, 6),
            exponent in super::super::test_helpers::tst_mp(0, 3),
        ) {
            let p_val = tst_mp_to_biguint(&p);
            let expected = tst_mp_to_biguint(&base).modpow(&tst_mp_to_biguint(&exponent), &p_val);
            let result = tst_exp_mod(&base, &exponent, &p);
            assert_eq!(result, tst_mp_from_biguint(&expected, p.len()));
        }
    }
}
