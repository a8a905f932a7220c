//! User key redefinitions: a host → host lookup applied after the remap
//! policy and before translation. Identity unless the user moves keys around.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::HostKeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapError {
    /// A redefinition named a host code outside `0..HostKeyCode::COUNT`.
    CodeOutOfRange(HostKeyCode),
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeOutOfRange(code) => write!(
                f,
                "host key code {} out of range (expected 0..{})",
                code.0,
                HostKeyCode::COUNT,
            ),
        }
    }
}

impl std::error::Error for KeymapError {}

/// One redefined key, as stored in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redefinition {
    /// Key the user presses.
    pub from: HostKeyCode,
    /// Key the emulator sees instead.
    pub to: HostKeyCode,
}

#[derive(Clone)]
pub struct KeyRedefinitions {
    lookup: [HostKeyCode; HostKeyCode::COUNT],
}

impl KeyRedefinitions {
    /// Every key maps to itself.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            lookup: std::array::from_fn(|i| HostKeyCode(i as u16)),
        }
    }

    pub fn from_redefinitions(entries: &[Redefinition]) -> Result<Self, KeymapError> {
        let mut table = Self::identity();
        for entry in entries {
            table.redefine(entry.from, entry.to)?;
        }
        Ok(table)
    }

    /// Make `from` behave as `to`.
    pub fn redefine(&mut self, from: HostKeyCode, to: HostKeyCode) -> Result<(), KeymapError> {
        let index = from.index().ok_or(KeymapError::CodeOutOfRange(from))?;
        to.index().ok_or(KeymapError::CodeOutOfRange(to))?;
        self.lookup[index] = to;
        Ok(())
    }

    /// Restore the default meaning of one key.
    pub fn restore(&mut self, code: HostKeyCode) {
        if let Some(index) = code.index() {
            self.lookup[index] = code;
        }
    }

    /// Look a key up. Codes outside the host range pass through unchanged.
    #[must_use]
    pub fn lookup(&self, code: HostKeyCode) -> HostKeyCode {
        code.index().map_or(code, |index| self.lookup[index])
    }

    /// The non-identity entries, in host code order.
    #[must_use]
    pub fn redefinitions(&self) -> Vec<Redefinition> {
        self.lookup
            .iter()
            .enumerate()
            .filter(|&(i, to)| usize::from(to.0) != i)
            .map(|(i, &to)| Redefinition {
                from: HostKeyCode(i as u16),
                to,
            })
            .collect()
    }
}

impl Default for KeyRedefinitions {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for KeyRedefinitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRedefinitions")
            .field("redefinitions", &self.redefinitions())
            .finish()
    }
}
