// src/scrambler.rs
//! Circular scrambler — the permutation engine behind the knot hash
//!
//! A fixed-size buffer holding a permutation of `0..N` plus a cursor.
//! Each length reverses a circular window starting at the cursor, then
//! moves the cursor forward by `length + skip` and bumps `skip`.

#[cfg(feature = "logging")]
use tracing::{debug, trace};

use crate::consts::DEFAULT_SIZE;
use crate::error::{KnotError, Result};

/// Where the next length starts and how far it will additionally advance.
///
/// `position` always wraps modulo the buffer size; `skip` never does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub position: usize,
    pub skip: u64,
}

/// One scrambling session: owns its buffer and cursor exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrambler {
    buffer: Vec<usize>,
    cursor: Cursor,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self {
            buffer: (0..DEFAULT_SIZE).collect(),
            cursor: Cursor::default(),
        }
    }
}

impl Scrambler {
    /// Fresh session over the identity permutation `[0, 1, …, size - 1]`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(KnotError::EmptyBuffer);
        }

        #[cfg(feature = "logging")]
        debug!(size, "new scrambler session");

        Ok(Self {
            buffer: (0..size).collect(),
            cursor: Cursor::default(),
        })
    }

    /// Rebuild a session from a previously captured buffer and cursor.
    ///
    /// The buffer must still be a permutation of `0..len` and the cursor
    /// position must lie inside it.
    pub fn resume(buffer: Vec<usize>, cursor: Cursor) -> Result<Self> {
        let size = buffer.len();
        if size == 0 {
            return Err(KnotError::EmptyBuffer);
        }
        if cursor.position >= size {
            return Err(KnotError::InvalidCursor {
                position: cursor.position,
                size,
            });
        }

        let mut seen = vec![false; size];
        for &value in &buffer {
            match seen.get_mut(value) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(KnotError::NotAPermutation { size }),
            }
        }

        Ok(Self { buffer, cursor })
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer(&self) -> &[usize] {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn into_parts(self) -> (Vec<usize>, Cursor) {
        (self.buffer, self.cursor)
    }

    /// `buffer[0] * buffer[1]`, or `None` for a single-element buffer.
    pub fn first_two_product(&self) -> Option<u64> {
        match self.buffer.as_slice() {
            [a, b, ..] => Some(*a as u64 * *b as u64),
            _ => None,
        }
    }

    /// Reverse the `length`-element circular window at the cursor, then advance.
    ///
    /// A length above the buffer size fails with [`KnotError::InvalidLength`]
    /// and leaves both buffer and cursor untouched.
    pub fn apply_length(&mut self, length: usize) -> Result<Cursor> {
        self.check_length(length)?;
        self.step(length);
        Ok(self.cursor)
    }

    /// Apply the whole `lengths` sequence `rounds` times, carrying state across.
    ///
    /// Every length is validated before anything is applied, so a bad
    /// sequence rejects the session without partial mutation.
    pub fn run_rounds(&mut self, lengths: &[usize], rounds: usize) -> Result<Cursor> {
        for &length in lengths {
            self.check_length(length)?;
        }

        for _round in 0..rounds {
            #[cfg(feature = "logging")]
            trace!(round = _round, cursor = ?self.cursor, "starting round");

            for &length in lengths {
                self.step(length);
            }
        }

        Ok(self.cursor)
    }

    fn check_length(&self, length: usize) -> Result<()> {
        let size = self.buffer.len();
        if length > size {
            return Err(KnotError::InvalidLength { length, size });
        }
        Ok(())
    }

    // Caller guarantees `length <= size`.
    fn step(&mut self, length: usize) {
        let size = self.buffer.len();
        let start = self.cursor.position;

        for i in 0..length / 2 {
            let front = (start + i) % size;
            let back = (start + length - 1 - i) % size;
            self.buffer.swap(front, back);
        }

        let skip = (self.cursor.skip % size as u64) as usize;
        self.cursor.position = (start + length + skip) % size;
        self.cursor.skip += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_on_five_elements() {
        let mut s = Scrambler::new(5).unwrap();

        s.apply_length(3).unwrap();
        assert_eq!(s.buffer(), &[2, 1, 0, 3, 4]);
        assert_eq!(s.cursor(), Cursor { position: 3, skip: 1 });

        s.apply_length(4).unwrap();
        assert_eq!(s.buffer(), &[4, 3, 0, 1, 2]);
        assert_eq!(s.cursor(), Cursor { position: 3, skip: 2 });

        s.apply_length(1).unwrap();
        assert_eq!(s.buffer(), &[4, 3, 0, 1, 2]);
        assert_eq!(s.cursor(), Cursor { position: 1, skip: 3 });

        s.apply_length(5).unwrap();
        assert_eq!(s.buffer(), &[3, 4, 2, 1, 0]);
        assert_eq!(s.cursor(), Cursor { position: 4, skip: 4 });

        assert_eq!(s.first_two_product(), Some(12));
    }

    #[test]
    fn zero_length_only_moves_cursor() {
        let mut s = Scrambler::new(8).unwrap();
        let cursor = s.apply_length(0).unwrap();
        assert_eq!(s.buffer(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(cursor, Cursor { position: 0, skip: 1 });

        let cursor = s.apply_length(0).unwrap();
        assert_eq!(cursor, Cursor { position: 1, skip: 2 });
    }

    #[test]
    fn overflow_length_is_rejected_atomically() {
        let mut s = Scrambler::new(5).unwrap();
        s.apply_length(3).unwrap();
        let before = s.clone();

        let err = s.apply_length(6).unwrap_err();
        assert_eq!(err, KnotError::InvalidLength { length: 6, size: 5 });
        assert_eq!(s, before);
    }

    #[test]
    fn run_rounds_rejects_whole_sequence_up_front() {
        let mut s = Scrambler::new(5).unwrap();
        let err = s.run_rounds(&[3, 4, 9], 2).unwrap_err();
        assert!(matches!(err, KnotError::InvalidLength { length: 9, .. }));
        assert_eq!(s, Scrambler::new(5).unwrap());
    }

    #[test]
    fn zero_rounds_is_identity() {
        let mut s = Scrambler::default();
        let cursor = s.run_rounds(&[3, 4, 1, 5], 0).unwrap();
        assert_eq!(cursor, Cursor::default());
        assert_eq!(s, Scrambler::default());
    }

    #[test]
    fn resume_matches_uninterrupted_run() {
        let lengths = [3, 4, 1, 5];

        let mut straight = Scrambler::new(5).unwrap();
        straight.run_rounds(&lengths, 2).unwrap();

        let mut first = Scrambler::new(5).unwrap();
        first.run_rounds(&lengths, 1).unwrap();
        let (buffer, cursor) = first.into_parts();
        let mut resumed = Scrambler::resume(buffer, cursor).unwrap();
        resumed.run_rounds(&lengths, 1).unwrap();

        assert_eq!(straight, resumed);
    }

    #[test]
    fn resume_validates_inputs() {
        assert_eq!(
            Scrambler::resume(vec![], Cursor::default()),
            Err(KnotError::EmptyBuffer)
        );
        assert_eq!(
            Scrambler::resume(vec![0, 0, 2], Cursor::default()),
            Err(KnotError::NotAPermutation { size: 3 })
        );
        assert_eq!(
            Scrambler::resume(vec![0, 1, 5], Cursor::default()),
            Err(KnotError::NotAPermutation { size: 3 })
        );
        assert_eq!(
            Scrambler::resume(vec![2, 0, 1], Cursor { position: 3, skip: 0 }),
            Err(KnotError::InvalidCursor { position: 3, size: 3 })
        );
    }

    #[test]
    fn empty_buffer_is_rejected() {
        assert_eq!(Scrambler::new(0), Err(KnotError::EmptyBuffer));
    }

    #[test]
    fn single_element_has_no_product() {
        let s = Scrambler::new(1).unwrap();
        assert_eq!(s.first_two_product(), None);
    }
}
