//! Codec implementations for Rust primitive types.
//!
//! All fixed-size integers are written little-endian, matching the peer wire format. Every
//! primitive has a compile-time constant [FixedSize::SIZE] and is read without configuration.

use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            type Cfg = ();

            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16_le, put_u16_le);
impl_numeric!(u32, get_u32_le, put_u32_le);
impl_numeric!(u64, get_u64_le, put_u64_le);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16_le, put_i16_le);
impl_numeric!(i32, get_i32_le, put_i32_le);
impl_numeric!(i64, get_i64_le, put_i64_le);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(if *self { 1 } else { 0 });
    }
}

impl Read for bool {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

// Constant-size array implementation
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
    }
}

impl<const N: usize> Read for [u8; N] {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode, EncodeSize};
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty, $size:expr) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = value.encode();
                        assert_eq!(encoded.len(), expected_len);
                        assert_eq!(&encoded[..], &value.to_le_bytes()[..]);
                        let decoded = <$type>::decode(encoded).unwrap();
                        assert_eq!(*value, decoded);
                        assert_eq!(value.encode_size(), expected_len);
                        assert_eq!(<$type as FixedSize>::SIZE, $size);

                        // Reading leaves anything after the value in place
                        let trailing = [&value.to_le_bytes()[..], &[0xAA]].concat();
                        let mut buf = &trailing[..];
                        assert_eq!(<$type>::read(&mut buf).unwrap(), *value);
                        assert_eq!(buf, &[0xAA]);
                    }
                }
            }
        };
    }
    impl_num_test!(u8, 1);
    impl_num_test!(u16, 2);
    impl_num_test!(u32, 4);
    impl_num_test!(u64, 8);
    impl_num_test!(i8, 1);
    impl_num_test!(i16, 2);
    impl_num_test!(i32, 4);
    impl_num_test!(i64, 8);

    #[test]
    fn test_endianness() {
        assert_eq!(0x0102u16.encode(), &[0x02, 0x01][..]);
        assert_eq!(0x01020304u32.encode(), &[0x04, 0x03, 0x02, 0x01][..]);
        assert_eq!(
            0x0001_1172_u32.encode(),
            &[0x72, 0x11, 0x01, 0x00][..] // 70002
        );
        assert_eq!((-1i32).encode(), &[0xFF, 0xFF, 0xFF, 0xFF][..]);
    }

    #[test]
    fn test_bool() {
        assert_eq!(true.encode(), &[0x01][..]);
        assert_eq!(false.encode(), &[0x00][..]);
        assert!(bool::decode(&[0x01][..]).unwrap());
        assert!(!bool::decode(&[0x00][..]).unwrap());
        assert!(matches!(bool::decode(&[0x02][..]), Err(Error::InvalidBool)));
    }

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        let encoded = values.encode();
        assert_eq!(encoded, &[0x01, 0x02, 0x03][..]);
        let decoded = <[u8; 3]>::decode(encoded).unwrap();
        assert_eq!(values, decoded);

        assert!(matches!(
            <[u8; 32]>::decode(&[0u8; 31][..]),
            Err(Error::EndOfBuffer)
        ));
    }
}
