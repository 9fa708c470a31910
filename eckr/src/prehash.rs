//! Conversion of message digests into integers modulo the group order.

use elliptic_curve::{CurveArithmetic, FieldBytes, PrimeField, Scalar, ops::Reduce};

/// Interpret `prehash` as a big endian integer truncated to the leading
/// `bitlen(n)` bits, where `n` is the order of the curve.
///
/// This is the `bits2int` function of [RFC6979 § 2.3.2]. Digests shorter
/// than the order are treated as having zero high bits. The result is *not*
/// reduced modulo `n`: it may still be greater than or equal to the order.
///
/// Any input is accepted, including the empty digest, which yields zero.
///
/// [RFC6979 § 2.3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-2.3.2
pub fn bits2int<C>(prehash: &[u8]) -> FieldBytes<C>
where
    C: CurveArithmetic,
{
    let order_bits = Scalar::<C>::NUM_BITS as usize;
    let order_len = order_bits.div_ceil(8);
    let mut out = FieldBytes::<C>::default();
    let out_len = out.len();

    if prehash.len() * 8 <= order_bits {
        out[out_len - prehash.len()..].copy_from_slice(prehash);
        return out;
    }

    // Keep the leading `order_len` bytes, then drop the excess low bits.
    let leading = &prehash[..order_len];
    let shift = order_len * 8 - order_bits;
    let dst = &mut out[out_len - order_len..];

    if shift == 0 {
        dst.copy_from_slice(leading);
    } else {
        let mut carry = 0u8;
        for (d, &b) in dst.iter_mut().zip(leading) {
            *d = (b >> shift) | carry;
            carry = b << (8 - shift);
        }
    }

    out
}

/// Compute `bits2int(prehash) mod n` as a scalar.
pub fn scalar_from_prehash<C>(prehash: &[u8]) -> Scalar<C>
where
    C: CurveArithmetic,
{
    <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&bits2int::<C>(prehash))
}
