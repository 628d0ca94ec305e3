//! Bit reflection.

/// Reverses the bit order of an unsigned value: bit 0 swaps with bit
/// `BITS - 1`, bit 1 with bit `BITS - 2`, and so on.
///
/// Implemented for `u8` (input bytes) and `u16` (the CRC register).
///
/// ```
/// use linkguard_crc::Reflect;
///
/// assert_eq!(0b0000_0001u8.reflect(), 0b1000_0000);
/// assert_eq!(0x0001u16.reflect(), 0x8000);
/// ```
pub trait Reflect: Copy {
    /// Width of the value in bits.
    const BITS: u32;

    /// Returns the value with its bit order reversed.
    #[must_use]
    fn reflect(self) -> Self;
}

macro_rules! impl_reflect {
    ($($ty:ty),*) => {
        $(
            impl Reflect for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn reflect(self) -> Self {
                    self.reverse_bits()
                }
            }
        )*
    };
}

impl_reflect!(u8, u16);
