// toolcase - platform/hash.rs
//
// Streaming file hashing. Files are read in fixed-size chunks so hashing a
// multi-gigabyte file never loads it into memory.

use crate::util::constants;
use crate::util::error::FsError;
use sha2::{Digest, Sha256, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Digest algorithm selector for [`hash_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

/// Hash the content of `path` and return the digest as lowercase hex.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> Result<String, FsError> {
    let file = File::open(path).map_err(|e| FsError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    match algorithm {
        HashAlgorithm::Sha256 => digest_stream::<Sha256>(file, path),
        HashAlgorithm::Sha512 => digest_stream::<Sha512>(file, path),
    }
}

fn digest_stream<D: Digest>(mut file: File, path: &Path) -> Result<String, FsError> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; constants::HASH_CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf).map_err(|e| FsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
