//! Sentinel-terminated text buffer

use super::error::ValidationError;
use super::types::{MAX_TEXT_LEN, SENTINEL_BYTE, TextPosition};
use std::ops::Index;

/// Immutable symbol sequence with exactly one sentinel, at the final position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    symbols: Vec<u8>,
}

impl TextBuffer {
    /// Copy `text` and append the sentinel.
    ///
    /// Fails if `text` already contains the sentinel or is longer than
    /// `max_size` bytes (or than the node-id space allows).
    pub fn new(text: &[u8], max_size: u64) -> Result<Self, ValidationError> {
        if text.len() as u64 > max_size || text.len() > MAX_TEXT_LEN {
            return Err(ValidationError::TextTooLarge {
                len: text.len(),
                max: max_size.min(MAX_TEXT_LEN as u64),
            });
        }

        if let Some(position) = memchr::memchr(SENTINEL_BYTE, text) {
            return Err(ValidationError::ContainsSentinel { position });
        }

        let mut symbols = Vec::with_capacity(text.len() + 1);
        symbols.extend_from_slice(text);
        symbols.push(SENTINEL_BYTE);

        Ok(Self { symbols })
    }

    /// Number of symbols, sentinel included
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: the sentinel is always present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of the sentinel (`len() - 1`)
    #[inline]
    pub fn sentinel_index(&self) -> TextPosition {
        self.symbols.len() - 1
    }

    /// Full symbol sequence, sentinel included
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.symbols
    }

    /// The caller's text, without the sentinel
    #[inline]
    pub fn original(&self) -> &[u8] {
        &self.symbols[..self.sentinel_index()]
    }
}

impl Index<TextPosition> for TextBuffer {
    type Output = u8;

    #[inline]
    fn index(&self, pos: TextPosition) -> &u8 {
        &self.symbols[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_appended() {
        let text = TextBuffer::new(b"banana", u64::MAX).unwrap();
        assert_eq!(text.len(), 7);
        assert_eq!(text.sentinel_index(), 6);
        assert_eq!(text[6], SENTINEL_BYTE);
        assert_eq!(text.original(), b"banana");
        assert_eq!(text.as_slice(), b"banana\x00");
    }

    #[test]
    fn test_empty_text() {
        let text = TextBuffer::new(b"", u64::MAX).unwrap();
        assert_eq!(text.len(), 1);
        assert_eq!(text.sentinel_index(), 0);
        assert!(text.original().is_empty());
        assert!(!text.is_empty());
    }

    #[test]
    fn test_rejects_sentinel() {
        let err = TextBuffer::new(b"ab\x00cd\x00", u64::MAX).unwrap_err();
        assert_eq!(err, ValidationError::ContainsSentinel { position: 2 });
    }

    #[test]
    fn test_rejects_oversized() {
        let err = TextBuffer::new(b"abcdef", 4).unwrap_err();
        assert_eq!(err, ValidationError::TextTooLarge { len: 6, max: 4 });

        assert!(TextBuffer::new(b"abcd", 4).is_ok());
    }
}
