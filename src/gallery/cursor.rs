use std::fmt;

use super::images::{ImageCollection, ImageDescriptor};

/// Selected position in an [`ImageCollection`]. Navigation wraps in both
/// directions and is a no-op on an empty collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Pulls the index back in range after the collection shrank.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn current<'a>(&self, images: &'a ImageCollection) -> Option<&'a ImageDescriptor> {
        images.get(self.index)
    }

    pub fn position(&self, len: usize) -> Position {
        Position {
            index: self.index,
            len,
        }
    }
}

/// Indicator text shown under the carousel and in the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            write!(f, "0 / 0")
        } else {
            write!(f, "{} / {}", self.index + 1, self.len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> Cursor {
        Cursor { index }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut c = at(start);
                for _ in 0..len {
                    c.advance(len);
                }
                assert_eq!(c.index(), start, "advance cycle len={len} start={start}");

                let mut c = at(start);
                for _ in 0..len {
                    c.retreat(len);
                }
                assert_eq!(c.index(), start, "retreat cycle len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_wraparound() {
        let mut c = at(0);
        c.retreat(4);
        assert_eq!(c.index(), 3);

        let mut c = at(3);
        c.advance(4);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut c = Cursor::default();
        c.advance(0);
        assert_eq!(c, Cursor::default());
        c.retreat(0);
        assert_eq!(c, Cursor::default());
        assert_eq!(c.position(0).to_string(), "0 / 0");
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut c = at(4);
        c.clamp(2);
        assert_eq!(c.index(), 1);
        c.clamp(0);
        assert_eq!(c.index(), 0);
        c.clamp(3);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(at(0).position(3).to_string(), "1 / 3");
        assert_eq!(at(2).position(3).to_string(), "3 / 3");
    }
}
