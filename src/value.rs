//! Typed usage values
//!
//! A live query reinterprets raw report data per usage: button bits become
//! flags, string indices become text, and a few Power Device controls are
//! decoded into their enumerations.

use std::fmt;

use serde::Serialize;

use crate::chemistry::DeviceChemistry;

/// Power Device `AudibleAlarmControl` (0x84:0x5A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AudibleAlarmControl {
    Disabled = 1,
    Enabled = 2,
    Muted = 3,
}

impl AudibleAlarmControl {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(Self::Disabled),
            2 => Some(Self::Enabled),
            3 => Some(Self::Muted),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for AudibleAlarmControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
            Self::Muted => "Muted",
        };
        f.write_str(s)
    }
}

/// Power Device `Test` (0x84:0x58) read-back state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PowerTestState {
    DonePassed = 1,
    DoneWarning = 2,
    DoneError = 3,
    Aborted = 4,
    InProgress = 5,
    NoTestInitiated = 6,
}

impl PowerTestState {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(Self::DonePassed),
            2 => Some(Self::DoneWarning),
            3 => Some(Self::DoneError),
            4 => Some(Self::Aborted),
            5 => Some(Self::InProgress),
            6 => Some(Self::NoTestInitiated),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for PowerTestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::DonePassed => "Done and passed",
            Self::DoneWarning => "Done with warning",
            Self::DoneError => "Done with error",
            Self::Aborted => "Aborted",
            Self::InProgress => "In progress",
            Self::NoTestInitiated => "No test initiated",
        };
        f.write_str(s)
    }
}

/// Current value of a usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UsageValue {
    Integer(i64),
    Flag(bool),
    Text(String),
    Chemistry(DeviceChemistry),
    AlarmControl(AudibleAlarmControl),
    Test(PowerTestState),
}

impl UsageValue {
    /// Numeric view, where one exists
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Flag(b) => Some(i64::from(*b)),
            Self::AlarmControl(a) => Some(i64::from(a.raw())),
            Self::Test(t) => Some(i64::from(t.raw())),
            Self::Text(_) | Self::Chemistry(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for UsageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Flag(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Chemistry(c) => write!(f, "{c}"),
            Self::AlarmControl(a) => write!(f, "{a}"),
            Self::Test(t) => write!(f, "{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_control_raw() {
        assert_eq!(AudibleAlarmControl::from_raw(2), Some(AudibleAlarmControl::Enabled));
        assert_eq!(AudibleAlarmControl::from_raw(0), None);
        assert_eq!(AudibleAlarmControl::Muted.raw(), 3);
    }

    #[test]
    fn test_state_raw() {
        assert_eq!(PowerTestState::from_raw(6), Some(PowerTestState::NoTestInitiated));
        assert_eq!(PowerTestState::from_raw(7), None);
        assert_eq!(PowerTestState::InProgress.raw(), 5);
    }

    #[test]
    fn numeric_view() {
        assert_eq!(UsageValue::Flag(true).as_i64(), Some(1));
        assert_eq!(UsageValue::AlarmControl(AudibleAlarmControl::Enabled).as_i64(), Some(2));
        assert_eq!(UsageValue::Text("x".into()).as_i64(), None);
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_string(&UsageValue::Integer(230)).unwrap();
        assert_eq!(json, r#"{"kind":"integer","value":230}"#);
        let json = serde_json::to_string(&UsageValue::Test(PowerTestState::Aborted)).unwrap();
        assert_eq!(json, r#"{"kind":"test","value":"Aborted"}"#);
    }
}
