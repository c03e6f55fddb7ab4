#[inline]
const fn calculate_bit_position(bit_index: usize) -> (usize, u8) {
    (bit_index >> 3, 1 << (bit_index & 0x07))
}

/// Fixed-size set of bit flags, one per index in `0..len`.
///
/// The k-mer search uses one bit per packed k-mer code to remember which
/// patterns have already been scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    bytes: Vec<u8>,
    len: usize,
}

impl Bitmap {
    /// Creates a bitmap of `len` cleared bits
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            bytes: vec![0; len.div_ceil(8)],
            len,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Test if a bit is set at the given index
    #[must_use]
    pub fn test(&self, bit_index: usize) -> bool {
        debug_assert!(bit_index < self.len);
        let (byte_index, bit_mask) = calculate_bit_position(bit_index);
        (self.bytes[byte_index] & bit_mask) != 0
    }

    /// Set a bit, returning whether it was previously clear
    pub fn set(&mut self, bit_index: usize) -> bool {
        debug_assert!(bit_index < self.len);
        let (byte_index, bit_mask) = calculate_bit_position(bit_index);
        let was_clear = (self.bytes[byte_index] & bit_mask) == 0;
        self.bytes[byte_index] |= bit_mask;
        was_clear
    }

    /// Number of set bits
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bit_position() {
        assert_eq!(calculate_bit_position(0), (0, 1));
        assert_eq!(calculate_bit_position(1), (0, 2));
        assert_eq!(calculate_bit_position(7), (0, 128));
        assert_eq!(calculate_bit_position(8), (1, 1));
        assert_eq!(calculate_bit_position(15), (1, 128));
        assert_eq!(calculate_bit_position(16), (2, 1));
    }

    #[test]
    fn test_set_reports_first_insertion() {
        let mut bitmap = Bitmap::with_len(16);

        assert!(bitmap.set(3));
        assert!(!bitmap.set(3));
        assert!(bitmap.test(3));
        assert!(!bitmap.test(2));
        assert!(!bitmap.test(4));
    }

    #[test]
    fn test_partial_last_byte() {
        let mut bitmap = Bitmap::with_len(10);
        assert_eq!(bitmap.len(), 10);

        for i in 0..10 {
            assert!(!bitmap.test(i));
            bitmap.set(i);
        }
        assert_eq!(bitmap.count_ones(), 10);
    }

    #[test]
    fn test_empty() {
        let bitmap = Bitmap::with_len(0);
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.count_ones(), 0);
    }
}
