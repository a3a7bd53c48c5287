//! Content digest of the compiled image.
//!
//! The catalog identifies images by the uppercase hex MD5 of the wasm bytes.
//! MD5 is used for compatibility with that scheme only; it is not a security
//! boundary.

use md5::{Digest, Md5};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::report::{keys, CheckOutcome, CheckReport};
use super::ReadinessCheck;

/// Uppercase hex MD5 of `bytes`.
pub fn md5_hex(bytes: &[u8]) -> String {
    hex::encode_upper(Md5::digest(bytes))
}

/// Read `path` and return its digest together with the byte length.
pub fn digest_file(path: &Path) -> std::io::Result<(String, u64)> {
    let bytes = fs::read(path)?;
    Ok((md5_hex(&bytes), bytes.len() as u64))
}

/// Computes the image digest used for the catalog lookup.
#[derive(Debug, Clone)]
pub struct DigestCheck {
    wasm_path: PathBuf,
}

impl DigestCheck {
    /// Create a check hashing the image at `wasm_path`.
    pub fn new(wasm_path: PathBuf) -> Self {
        Self { wasm_path }
    }
}

impl ReadinessCheck for DigestCheck {
    fn name(&self) -> &'static str {
        "integrity"
    }

    fn run(&self, _report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();

        match digest_file(&self.wasm_path) {
            Ok((md5, len)) => {
                tracing::debug!("MD5 of {} is {}", self.wasm_path.display(), md5);
                if len == 0 {
                    outcome.warn(format!("Image {} is empty", self.wasm_path.display()));
                }
                outcome.record(keys::MD5_HASH, md5);
                outcome.record(keys::WASM_BYTES, len.to_string());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => outcome.error(format!(
                "Cannot compute digest: {} does not exist",
                self.wasm_path.display()
            )),
            Err(e) => outcome.error(format!(
                "Failed to compute digest of {}: {}",
                self.wasm_path.display(),
                e
            )),
        }

        outcome
    }
}
