//! Multiprecision integer arithmetic primitives on 16 bit limbs.
//!
//! Multiprecision integers are little-endian slices of [`LimbType`] words, their width being
//! the slice length. All operations work on caller-provided buffers and never allocate. The
//! ones needing working storage take a `scratch` slice, whose minimum size is reported by an
//! accompanying `*_scratch_nlimbs()` function.
//!
//! None of the operations are constant-time.

mod add_impl;
mod bits_impl;
mod cmp_impl;
mod div_impl;
mod exp_impl;
pub mod hexstr;
mod limb;
mod limbs_buffer;
mod mod_impl;
mod mul_impl;
mod shift_impl;

#[cfg(test)]
mod test_helpers;

pub use limb::{
    add_l_l, add_l_l_c, div_dl_l, generic_mul_l_l, msb_index_l, mul_add_l_l_l_c, mul_l_l, sub_l_l,
    sub_l_l_b, test_bit_l, DivDlLError, DoubleLimb, DoubleLimbType, LimbType, LIMB_BITS,
};

pub use limbs_buffer::{clear_mp, copy_mp, find_last_set_limb_mp, MpBufferLenError};

pub use add_impl::{add_assign_mp_l, add_assign_mp_mp, add_mp_mp, sub_assign_mp_mp, sub_mp_mp};

pub use cmp_impl::{eq_mp_mp, geq_mp_mp, gt_mp_mp, is_zero_mp, lt_mp_mp};

pub use shift_impl::{
    lshift_bits_mp, lshift_radix_mp, rshift_bits_mp, rshift_radix_mp, trunc_radix_mp,
};

pub use mul_impl::{mul_l_mp, mul_mp_mp, mul_rect_mp_mp, square_mp};

pub use div_impl::{div_mp_mp, div_mp_mp_scratch_nlimbs, DivMpError};

pub use mod_impl::{
    add_mod_mp_mp, mod_mp_mp, mod_mp_mp_scratch_nlimbs, mul_mod_mp_mp,
    mul_mod_mp_mp_scratch_nlimbs, sub_mod_mp_mp, ModMpError,
};

pub use bits_impl::{msb_index_mp, test_bit_mp};

pub use exp_impl::{exp_mod_mp_mp, exp_mod_mp_mp_scratch_nlimbs, ExpModMpError};
