//! Patch insertion with offset drift tracking
//!
//! Patches carry offsets into the original buffer. Once a patch has been
//! spliced in, every later original offset at or after its position has
//! shifted by the patch length. `PatchIndex` records those shifts so each
//! subsequent patch lands where it was meant to.

use serde::{Deserialize, Serialize};

use super::errors::GuardError;

/// Bytes to insert at an offset of the original source
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub byte_pos: usize,
    pub bytes: Vec<u8>,
}

impl Patch {
    pub fn new(byte_pos: usize, bytes: Vec<u8>) -> Self {
        Self { byte_pos, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Insertion {
    pos: usize,
    size: usize,
}

/// Record of insertions already applied to a buffer
#[derive(Clone, Debug, Default)]
pub struct PatchIndex {
    insertions: Vec<Insertion>,
}

impl PatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `size` bytes were inserted at original offset `pos`.
    pub fn register(&mut self, pos: usize, size: usize) {
        self.insertions.push(Insertion { pos, size });
    }

    /// Where original offset `original` now sits in the patched buffer.
    ///
    /// Insertions at the same offset count, so a second patch at a shared
    /// anchor follows the first.
    pub fn drifted(&self, original: usize) -> usize {
        original
            + self
                .insertions
                .iter()
                .filter(|ins| original >= ins.pos)
                .map(|ins| ins.size)
                .sum::<usize>()
    }

    /// Total bytes inserted so far.
    pub fn total_inserted(&self) -> usize {
        self.insertions.iter().map(|ins| ins.size).sum()
    }
}

/// Splice `patches` into a copy of `source`, in order.
///
/// Offsets are checked against the original length before anything is
/// inserted, so an error leaves no partial output. Empty patches are
/// skipped and never recorded in the drift index.
pub fn apply_patches(source: &[u8], patches: &[Patch]) -> Result<Vec<u8>, GuardError> {
    if let Some(bad) = patches.iter().find(|p| p.byte_pos > source.len()) {
        return Err(GuardError::OffsetOutOfBounds {
            offset: bad.byte_pos,
            len: source.len(),
        });
    }

    let extra: usize = patches.iter().map(Patch::len).sum();
    let mut buffer = Vec::with_capacity(source.len() + extra);
    buffer.extend_from_slice(source);

    let mut index = PatchIndex::new();
    for patch in patches.iter().filter(|p| !p.is_empty()) {
        let pos = index.drifted(patch.byte_pos);
        buffer.splice(pos..pos, patch.bytes.iter().copied());
        index.register(patch.byte_pos, patch.len());
    }

    Ok(buffer)
}
