//! Little-endian primitive readers and writers over event payload bytes.
//!
//! All readers bounds-check before touching the buffer and report
//! [`Error::TruncatedBuffer`] instead of panicking.

use crate::error::Error;
use crate::types::{Address, HashBytes};

fn take<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], Error> {
    offset
        .checked_add(N)
        .and_then(|end| buf.get(offset..end))
        .and_then(|slice| <[u8; N]>::try_from(slice).ok())
        .ok_or(Error::TruncatedBuffer {
            offset,
            needed: N,
            available: buf.len().saturating_sub(offset),
        })
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, Error> {
    let [byte] = take::<1>(buf, offset)?;
    Ok(byte)
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, Error> {
    take::<4>(buf, offset).map(u32::from_le_bytes)
}

pub fn read_u64(buf: &[u8], offset: usize) -> Result<u64, Error> {
    take::<8>(buf, offset).map(u64::from_le_bytes)
}

pub fn read_u128(buf: &[u8], offset: usize) -> Result<u128, Error> {
    take::<16>(buf, offset).map(u128::from_le_bytes)
}

pub fn read_bytes32(buf: &[u8], offset: usize) -> Result<[u8; 32], Error> {
    take::<32>(buf, offset)
}

pub fn read_address(buf: &[u8], offset: usize) -> Result<Address, Error> {
    read_bytes32(buf, offset).map(Address::new)
}

/// Encodes `value` as exactly 16 little-endian bytes.
pub fn write_u128<T: AsU128 + ?Sized>(value: &T) -> Result<[u8; 16], Error> {
    Ok(value.as_u128()?.to_le_bytes())
}

/// Values that can be narrowed to an unsigned 128-bit integer.
///
/// Decimal strings are accepted because qk configurations usually arrive
/// from JSON, where scaled coefficients do not fit a JS number.
pub trait AsU128 {
    fn as_u128(&self) -> Result<u128, Error>;
}

impl AsU128 for u128 {
    fn as_u128(&self) -> Result<u128, Error> {
        Ok(*self)
    }
}

impl AsU128 for u64 {
    fn as_u128(&self) -> Result<u128, Error> {
        Ok(u128::from(*self))
    }
}

impl AsU128 for i128 {
    fn as_u128(&self) -> Result<u128, Error> {
        u128::try_from(*self).map_err(|_| Error::ValueOutOfRange {
            value: self.to_string(),
        })
    }
}

impl AsU128 for str {
    fn as_u128(&self) -> Result<u128, Error> {
        let trimmed = self.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::ValueOutOfRange {
                value: self.to_string(),
            });
        }
        trimmed.parse::<u128>().map_err(|_| Error::ValueOutOfRange {
            value: self.to_string(),
        })
    }
}

impl AsU128 for String {
    fn as_u128(&self) -> Result<u128, Error> {
        self.as_str().as_u128()
    }
}

impl<T: AsU128 + ?Sized> AsU128 for &T {
    fn as_u128(&self) -> Result<u128, Error> {
        (**self).as_u128()
    }
}

/// Forward-only cursor over a payload.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn u8(&mut self) -> Result<u8, Error> {
        let value = read_u8(self.data, self.offset)?;
        self.offset += 1;
        Ok(value)
    }

    pub fn u32(&mut self) -> Result<u32, Error> {
        let value = read_u32(self.data, self.offset)?;
        self.offset += 4;
        Ok(value)
    }

    pub fn u64(&mut self) -> Result<u64, Error> {
        let value = read_u64(self.data, self.offset)?;
        self.offset += 8;
        Ok(value)
    }

    pub fn u128(&mut self) -> Result<u128, Error> {
        let value = read_u128(self.data, self.offset)?;
        self.offset += 16;
        Ok(value)
    }

    pub fn address(&mut self) -> Result<Address, Error> {
        let value = read_address(self.data, self.offset)?;
        self.offset += 32;
        Ok(value)
    }

    pub fn hash(&mut self) -> Result<HashBytes, Error> {
        let value = read_bytes32(self.data, self.offset)?;
        self.offset += 32;
        Ok(HashBytes::new(value))
    }

    /// Borsh `Option` tag: `0` is `None`, `1` is `Some`.
    pub fn option_tag(&mut self, field: &'static str) -> Result<bool, Error> {
        match self.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::InvalidField {
                field,
                reason: format!("invalid option tag {other}"),
            }),
        }
    }

    /// Borsh `Vec<u128>`: a `u32` length followed by that many elements.
    pub fn u128_vec(&mut self) -> Result<Vec<u128>, Error> {
        let len = self.u32()? as usize;
        let needed = len.saturating_mul(16);
        if needed > self.remaining() {
            return Err(Error::TruncatedBuffer {
                offset: self.offset,
                needed,
                available: self.remaining(),
            });
        }
        (0..len).map(|_| self.u128()).collect()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers_at_offset() {
        let mut buf = vec![0xff];
        buf.extend_from_slice(&0x0102_0304_0506_0708_u64.to_le_bytes());
        assert_eq!(read_u64(&buf, 1).unwrap(), 0x0102_0304_0506_0708);

        let big = u128::from(u64::MAX) * 3;
        let mut buf = vec![0, 0];
        buf.extend_from_slice(&big.to_le_bytes());
        assert_eq!(read_u128(&buf, 2).unwrap(), big);
    }

    #[test]
    fn short_buffer_reports_truncation() {
        let buf = [1u8; 12];
        let err = read_u64(&buf, 8).unwrap_err();
        let Error::TruncatedBuffer {
            offset,
            needed,
            available,
        } = err
        else {
            panic!("expected truncation, got {err:?}");
        };
        assert_eq!((offset, needed, available), (8, 8, 4));
        assert!(read_u128(&buf, 0).is_err());
        assert!(read_u64(&buf, usize::MAX).is_err());
    }

    #[test]
    fn write_u128_is_inverse_of_read() {
        let value = 340_282_366_920_938_463_463_374_607_431_768_211_455_u128;
        let bytes = write_u128(&value).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(read_u128(&bytes, 0).unwrap(), value);
        assert_eq!(write_u128(&1_u64).unwrap()[0], 1);
    }

    #[test]
    fn write_u128_rejects_out_of_range_values() {
        assert!(matches!(
            write_u128(&-1_i128),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            write_u128("340282366920938463463374607431768211456"),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(write_u128("-5"), Err(Error::ValueOutOfRange { .. })));
        assert!(matches!(write_u128("1.5"), Err(Error::ValueOutOfRange { .. })));
        assert_eq!(
            write_u128("340282366920938463463374607431768211455").unwrap(),
            [0xff; 16]
        );
    }

    #[test]
    fn reader_walks_fields_in_order() {
        let mut buf = Vec::new();
        buf.push(1);
        buf.extend_from_slice(&[9u8; 32]);
        buf.extend_from_slice(&2_u32.to_le_bytes());
        buf.extend_from_slice(&5_u128.to_le_bytes());
        buf.extend_from_slice(&6_u128.to_le_bytes());

        let mut reader = ByteReader::new(&buf);
        assert!(reader.option_tag("trial").unwrap());
        assert_eq!(reader.address().unwrap(), Address::new([9u8; 32]));
        assert_eq!(reader.u128_vec().unwrap(), vec![5, 6]);
        assert!(reader.is_empty());
    }

    #[test]
    fn vec_length_is_checked_before_allocating() {
        let buf = u32::MAX.to_le_bytes();
        let mut reader = ByteReader::new(&buf);
        assert!(matches!(
            reader.u128_vec(),
            Err(Error::TruncatedBuffer { offset: 4, .. })
        ));
    }

    #[test]
    fn option_tag_rejects_unknown_values() {
        let mut reader = ByteReader::new(&[2]);
        assert!(matches!(
            reader.option_tag("trial"),
            Err(Error::InvalidField { field: "trial", .. })
        ));
    }
}
