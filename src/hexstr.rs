//! Conversion between hexadecimal strings and multiprecision integers.
//!
//! Hex strings are written the usual way, most significant digit first, while the resulting limb
//! arrays are little-endian.

extern crate alloc;

use alloc::collections::TryReserveError;
use alloc::string::String;

use super::limb::{LimbType, LIMB_BITS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LimbsFromHexStrError {
    InvalidHexStrLen,
    InvalidHexChar,
}

const NIBBLES_PER_LIMB: usize = (LIMB_BITS / 4) as usize;

/// Parse a big-endian hex string into an `N` limb multiprecision integer.
///
/// Strings shorter than `N` limbs' worth of digits get zero-extended at the top.
pub const fn limbs_from_hexstr<const N: usize>(
    hexstr: &str,
) -> Result<[LimbType; N], LimbsFromHexStrError> {
    const fn nibble_from_hexchar(hex_char: u8) -> Result<LimbType, LimbsFromHexStrError> {
        let nibble = hex_char
            - match hex_char {
                b'0'..=b'9' => b'0',
                b'a'..=b'f' => b'a' - 0xa,
                b'A'..=b'F' => b'A' - 0xa,
                _ => return Err(LimbsFromHexStrError::InvalidHexChar),
            };
        Ok(nibble as LimbType)
    }

    let hexstr = hexstr.as_bytes();
    if hexstr.len() > NIBBLES_PER_LIMB * N {
        return Err(LimbsFromHexStrError::InvalidHexStrLen);
    }

    let mut result: [LimbType; N] = [0; N];
    let mut i = 0;
    while i < hexstr.len() {
        let nibble = match nibble_from_hexchar(hexstr[hexstr.len() - 1 - i]) {
            Ok(nibble) => nibble,
            Err(e) => return Err(e),
        };
        result[i / NIBBLES_PER_LIMB] |= nibble << (4 * (i % NIBBLES_PER_LIMB) as u32);
        i += 1;
    }
    Ok(result)
}

pub const fn limbs_from_hexstr_cnst<const N: usize>(hexstr: &str) -> [LimbType; N] {
    // Result::unwrap() is not a const fn.
    match limbs_from_hexstr::<N>(hexstr) {
        Ok(result) => result,
        Err(_) => panic!("invalid hex string"),
    }
}

#[test]
fn test_limbs_from_hexstr() {
    assert_eq!(
        limbs_from_hexstr::<3>("0123456789abCDEF").unwrap_err(),
        LimbsFromHexStrError::InvalidHexStrLen
    );
    assert_eq!(
        limbs_from_hexstr::<4>("0123456789abCDEF").unwrap(),
        [0xcdef, 0x89ab, 0x4567, 0x0123]
    );
    assert_eq!(
        limbs_from_hexstr::<4>("123456789abCDEF").unwrap(),
        [0xcdef, 0x89ab, 0x4567, 0x0123]
    );
    assert_eq!(limbs_from_hexstr::<3>("10001").unwrap(), [0x0001, 0x0001, 0]);
    assert_eq!(limbs_from_hexstr::<2>("").unwrap(), [0, 0]);
    assert_eq!(
        limbs_from_hexstr::<2>("12g4").unwrap_err(),
        LimbsFromHexStrError::InvalidHexChar
    );
}

/// Format a multiprecision integer as a big-endian hex string of `4 * limbs.len()` digits.
pub fn limbs_to_hexstr(limbs: &[LimbType]) -> Result<String, TryReserveError> {
    fn nibble_to_hexchar(nibble: u8) -> char {
        let c = match nibble {
            0x0..=0x9 => b'0' + nibble,
            0xa..=0xf => b'a' + (nibble - 0xa),
            _ => unreachable!(),
        };
        c as char
    }

    let mut result = String::new();
    result.try_reserve_exact(NIBBLES_PER_LIMB * limbs.len())?;
    for l in limbs.iter().rev() {
        for k in (0..NIBBLES_PER_LIMB as u32).rev() {
            result.push(nibble_to_hexchar((l >> (4 * k) & 0xf) as u8));
        }
    }
    Ok(result)
}

#[test]
fn test_limbs_to_hexstr() {
    assert_eq!(
        limbs_to_hexstr(&[0xcdef, 0x89ab, 0x4567, 0x0123]).unwrap(),
        "0123456789abcdef"
    );
    assert_eq!(limbs_to_hexstr(&[0x1, 0]).unwrap(), "00000001");
    assert_eq!(limbs_to_hexstr(&[]).unwrap(), "");
}
