use std::fmt;

const ENABLED: &str = "enabled";
const DISABLED: &str = "disabled";

/// Persisted dark mode preference
///
/// Only `enabled` and `disabled` are ever written; a missing or unknown stored
/// value reads as `Unset`, which behaves like `Enabled`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preference {
    Enabled,
    Disabled,
    #[default]
    Unset,
}

impl Preference {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(ENABLED) => Preference::Enabled,
            Some(DISABLED) => Preference::Disabled,
            _ => Preference::Unset,
        }
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Preference::Enabled => Some(ENABLED),
            Preference::Disabled => Some(DISABLED),
            Preference::Unset => None,
        }
    }

    pub fn is_disabled(self) -> bool {
        self == Preference::Disabled
    }

    /// the preference written after a toggle, never `Unset`
    pub fn toggled(self) -> Self {
        if self.is_disabled() {
            Preference::Enabled
        } else {
            Preference::Disabled
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_stored().unwrap_or("unset"))
    }
}
