//! Reading input texts from disk

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Contents of an input file, memory-mapped when non-empty
pub enum InputText {
    Mapped(Mmap),
    /// Zero-length files cannot be mapped on every platform
    Empty,
}

impl InputText {
    /// Open and map `path`
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();

        if len == 0 {
            return Ok(Self::Empty);
        }

        // SAFETY: the map is read-only and only lives for one command; a
        // concurrent truncation by another process is outside our control,
        // as for any mmap-based reader.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map {}", path.display()))?;
        Ok(Self::Mapped(mmap))
    }
}

impl Deref for InputText {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => mmap,
            Self::Empty => &[],
        }
    }
}
