//! Keyboard configuration: machine width, mode flags, DIP switches and key
//! redefinitions.
//!
//! Serialisable so the front end can keep it with the rest of its settings.
//! Missing fields take their defaults, which describe a stock Model B.

use serde::{Deserialize, Serialize};

use crate::redefine::Redefinition;
use crate::remap::ModeFlags;
use crate::scan::MatrixSize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub size: MatrixSize,
    pub mode_flags: ModeFlags,
    /// Start-up option links, bit 0 at column 9 through bit 7 at column 2.
    pub dip_switches: u16,
    pub redefinitions: Vec<Redefinition>,
}

impl KeyboardConfig {
    #[must_use]
    pub fn model_b() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn master() -> Self {
        Self {
            size: MatrixSize::Master,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostKeyCode;

    #[test]
    fn empty_document_is_a_model_b() {
        let config: KeyboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, KeyboardConfig::model_b());
        assert_eq!(config.size.columns(), 10);
    }

    #[test]
    fn parses_partial_settings() {
        let json = r#"{
            "size": "Master",
            "mode_flags": { "keypad_as_cursor": true },
            "dip_switches": 7,
            "redefinitions": [ { "from": 58, "to": 59 } ]
        }"#;
        let config: KeyboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.size, MatrixSize::Master);
        assert!(config.mode_flags.keypad_as_cursor);
        assert!(!config.mode_flags.caps_lock_on_a);
        assert_eq!(config.dip_switches, 7);
        assert_eq!(
            config.redefinitions,
            vec![Redefinition {
                from: HostKeyCode::F12,
                to: HostKeyCode::ESCAPE,
            }]
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config = KeyboardConfig {
            mode_flags: ModeFlags {
                caps_lock_on_a: true,
                keypad_as_cursor: false,
            },
            ..KeyboardConfig::master()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: KeyboardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
