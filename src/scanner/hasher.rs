//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing BLAKE3 digests
//! of file contents. Files are read in fixed-size chunks, so memory use is
//! constant regardless of file size.
//!
//! The [`FileDigest`] trait is the seam the duplicate grouper hashes through,
//! which lets callers substitute an instrumented or precomputed source.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::scanner::{FileDigest, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let digest = hasher.digest(Path::new("photo.jpg")).unwrap();
//! println!("{}", digest); // 64 lowercase hex characters
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::HashError;

/// Size of each read when streaming a file through the hasher (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Source of content digests for files.
///
/// Implementations must be deterministic: the same bytes always produce
/// the same digest string, across runs.
pub trait FileDigest {
    /// Compute the digest of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or a read fails
    /// mid-stream.
    fn digest(&self, path: &Path) -> Result<String, HashError>;
}

/// Streaming BLAKE3 file hasher.
#[derive(Debug, Clone)]
pub struct Hasher {
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher using the default [`CHUNK_SIZE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Create a hasher with a custom read chunk size (minimum 1 byte).
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Stream `reader` through BLAKE3.
    fn hash_reader<R: Read>(&self, path: &Path, mut reader: R) -> Result<blake3::Hash, HashError> {
        let mut hasher = blake3::Hasher::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(HashError::from_io(path, e)),
            };
            hasher.update(&buffer[..read]);
        }

        Ok(hasher.finalize())
    }
}

impl FileDigest for Hasher {
    fn digest(&self, path: &Path) -> Result<String, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let hash = self.hash_reader(path, file)?;
        log::trace!("Hashed {}", path.display());
        Ok(hash.to_hex().to_string())
    }
}
