//! Signature page ordering
//!
//! Folded work is imposed "outside-in": the outermost leaf of a signature
//! carries its first and last pages, the next leaf in carries the second and
//! second-to-last, and so on. The order alternates which end is emitted first
//! so that the pages of each printed pair sit on the correct side of the fold.
//!
//! **16-page signature:**
//! ```text
//! 16  1 |  2 15 | 14  3 |  4 13 | 12  5 |  6 11 | 10  7 |  8  9
//! ```
//! Every pair sums to 17: a folded sheet's faces are symmetric around the
//! spine.

use crate::types::{ImposeError, Result};

/// Smallest signature that can be folded (one sheet, one fold)
pub const MIN_SIGNATURE_SIZE: usize = 4;

/// Production default for book-length perfect binding
pub const DEFAULT_SIGNATURE_SIZE: usize = 16;

/// Fail fast unless `signature_size` is even and at least 4.
pub fn validate_signature_size(signature_size: usize) -> Result<()> {
    if signature_size < MIN_SIGNATURE_SIZE || signature_size % 2 != 0 {
        return Err(ImposeError::InvalidSignatureSize(signature_size));
    }
    Ok(())
}

/// Generate the canonical outside-in page order for one signature.
///
/// Returns a permutation of `1..=signature_size`. Entries `2i` and `2i + 1`
/// are emitted together and always sum to `signature_size + 1`.
pub fn generate_signature_sequence(signature_size: usize) -> Result<Vec<usize>> {
    validate_signature_size(signature_size)?;

    let mut sequence = Vec::with_capacity(signature_size);
    let mut front = 1;
    let mut back = signature_size;

    for i in 0..signature_size / 2 {
        if i % 2 == 0 {
            sequence.push(back);
            sequence.push(front);
        } else {
            sequence.push(front);
            sequence.push(back);
        }
        front += 1;
        back -= 1;
    }

    Ok(sequence)
}

/// An outside-in order computed once and shared by every signature of a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureSequence {
    order: Vec<usize>,
}

impl SignatureSequence {
    pub fn new(signature_size: usize) -> Result<Self> {
        Ok(Self {
            order: generate_signature_sequence(signature_size)?,
        })
    }

    /// First half (front side) and second half (back side)
    pub fn halves(&self) -> (&[usize], &[usize]) {
        self.order.split_at(self.order.len() / 2)
    }

    /// Consecutive groups of `size` entries, one per physical sheet
    pub fn sheets(&self, size: usize) -> std::slice::Chunks<'_, usize> {
        self.order.chunks(size)
    }
}

/// Map a 1-based position within a signature to an absolute page number.
///
/// Returns `None` when the page falls past `last_page` (padding).
pub fn absolute_page(sig_start: usize, relative: usize, last_page: usize) -> Option<usize> {
    let page = sig_start + relative - 1;
    (page <= last_page).then_some(page)
}
