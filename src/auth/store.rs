//! Local key file: `~/.cfbd/cfbd.json` (or a caller-chosen directory).
//!
//! The file holds a single JSON object with the obfuscated token wrapped in
//! ten random alphanumeric characters on each side. Saving overwrites any
//! previous value; there is no expiry and no multi-account support.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::obfuscate::{deobfuscate, obfuscate, TOKEN_SHIFT};
use crate::error::{CfbdError, Result};

const KEY_DIR: &str = ".cfbd";
const KEY_FILE: &str = "cfbd.json";
const PAD_LEN: usize = 10;

#[derive(Serialize, Deserialize)]
struct StoredCredential {
    cfbd_api_token: String,
}

/// Handle to the on-disk credential record.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store rooted in the user's home directory (`~/.cfbd/cfbd.json`).
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or(CfbdError::MissingHomeDir)?;
        Ok(Self::in_dir(home))
    }

    /// Store rooted in a custom directory (`<dir>/.cfbd/cfbd.json`).
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(KEY_DIR).join(KEY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Obfuscate `raw_token` and write it out, replacing any previous value.
    pub fn save(&self, raw_token: &str) -> Result<()> {
        let mut rng = rand::rng();
        let front = Alphanumeric.sample_string(&mut rng, PAD_LEN);
        let back = Alphanumeric.sample_string(&mut rng, PAD_LEN);
        let body = StoredCredential {
            cfbd_api_token: format!("{front}{}{back}", obfuscate(raw_token, TOKEN_SHIFT)),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&body)?)?;
        debug!(path = %self.path.display(), "stored obfuscated CFBD API key");
        Ok(())
    }

    /// Read back the stored token, undoing the padding and obfuscation.
    ///
    /// Returns `Ok(None)` when no key file exists. A file that exists but
    /// cannot be decoded is [`CfbdError::MalformedStoredCredential`].
    pub fn load(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredCredential = serde_json::from_str(&content).map_err(|e| {
            CfbdError::MalformedStoredCredential {
                reason: format!("{KEY_FILE} is not valid credential JSON: {e}"),
            }
        })?;
        let chars: Vec<char> = stored.cfbd_api_token.chars().collect();
        if chars.len() < 2 * PAD_LEN {
            return Err(CfbdError::MalformedStoredCredential {
                reason: "stored value is shorter than its padding".to_string(),
            });
        }
        let inner: String = chars[PAD_LEN..chars.len() - PAD_LEN].iter().collect();
        Ok(Some(deobfuscate(&inner, TOKEN_SHIFT)))
    }
}
