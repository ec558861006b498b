//! Frame-scoped scratch storage.
//!
//! [`FrameArena`] is a bump buffer for strings that only need to live until
//! the end of the current frame (formatted captions, pasted text, ...). It is
//! reset wholesale once per frame. Allocations hand out [`ScratchStr`]
//! handles stamped with the arena's epoch; a handle from an earlier frame no
//! longer resolves.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScratchStr {
    start: u32,
    len: u32,
    epoch: u64,
}

impl ScratchStr {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug)]
pub struct FrameArena {
    buf: String,
    epoch: u64,
    high_water: usize,
}

impl FrameArena {
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: String::with_capacity(bytes),
            epoch: 0,
            high_water: 0,
        }
    }

    /// Drops everything allocated since the last reset and invalidates old handles.
    pub fn reset(&mut self) {
        self.high_water = self.high_water.max(self.buf.len());
        self.buf.clear();
        self.epoch += 1;
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Bytes in use this frame.
    pub fn used(&self) -> usize {
        self.buf.len()
    }

    /// Largest per-frame usage seen so far.
    pub fn high_water(&self) -> usize {
        self.high_water.max(self.buf.len())
    }

    pub fn alloc_str(&mut self, s: &str) -> ScratchStr {
        let start = self.buf.len();
        self.buf.push_str(s);
        self.handle(start)
    }

    pub fn alloc_fmt(&mut self, args: std::fmt::Arguments<'_>) -> ScratchStr {
        let start = self.buf.len();
        // Writing into a String cannot fail.
        let _ = self.buf.write_fmt(args);
        self.handle(start)
    }

    /// Resolves a handle allocated during the current epoch.
    pub fn get(&self, s: ScratchStr) -> Option<&str> {
        if s.epoch != self.epoch {
            return None;
        }
        let start = s.start as usize;
        self.buf.get(start..start + s.len as usize)
    }

    fn handle(&self, start: usize) -> ScratchStr {
        ScratchStr {
            start: start as u32,
            len: (self.buf.len() - start) as u32,
            epoch: self.epoch,
        }
    }
}
