//! Keyboard/Keypad usage page (0x07)
//!
//! USB HID Usage Tables, section 10. Key usages are selectors reported in
//! the input array; modifiers are dynamic values in the modifier byte.

use super::Directive;

pub(super) const NAME: &str = "Keyboard/Keypad";

const fn key(id: u16, name: &'static str) -> Directive {
    Directive::usage(id, name).types("Sel").reports("I").section("10")
}

const fn modifier(id: u16, name: &'static str) -> Directive {
    Directive::usage(id, name).types("DV").reports("I").section("10")
}

const fn indicator(id: u16, name: &'static str) -> Directive {
    Directive::usage(id, name).types("Sel").reports("I").section("10")
}

#[rustfmt::skip]
pub(super) const DIRECTIVES: &[Directive] = &[
    Directive::usage(0x00, "None"),
    indicator(0x01, "ErrorRollOver"),
    indicator(0x02, "POSTFail"),
    indicator(0x03, "ErrorUndefined"),
    key(0x04, "A"), key(0x05, "B"), key(0x06, "C"), key(0x07, "D"),
    key(0x08, "E"), key(0x09, "F"), key(0x0A, "G"), key(0x0B, "H"),
    key(0x0C, "I"), key(0x0D, "J"), key(0x0E, "K"), key(0x0F, "L"),
    key(0x10, "M"), key(0x11, "N"), key(0x12, "O"), key(0x13, "P"),
    key(0x14, "Q"), key(0x15, "R"), key(0x16, "S"), key(0x17, "T"),
    key(0x18, "U"), key(0x19, "V"), key(0x1A, "W"), key(0x1B, "X"),
    key(0x1C, "Y"), key(0x1D, "Z"),
    key(0x1E, "1"), key(0x1F, "2"), key(0x20, "3"), key(0x21, "4"),
    key(0x22, "5"), key(0x23, "6"), key(0x24, "7"), key(0x25, "8"),
    key(0x26, "9"), key(0x27, "0"),
    key(0x28, "Enter"), key(0x29, "Escape"), key(0x2A, "Backspace"),
    key(0x2B, "Tab"), key(0x2C, "Space"), key(0x2D, "-"), key(0x2E, "="),
    key(0x2F, "["), key(0x30, "]"), key(0x31, "\\"), key(0x32, "NonUS#"),
    key(0x33, ";"), key(0x34, "'"), key(0x35, "`"), key(0x36, ","),
    key(0x37, "."), key(0x38, "/"), key(0x39, "CapsLock"),
    key(0x3A, "F1"), key(0x3B, "F2"), key(0x3C, "F3"), key(0x3D, "F4"),
    key(0x3E, "F5"), key(0x3F, "F6"), key(0x40, "F7"), key(0x41, "F8"),
    key(0x42, "F9"), key(0x43, "F10"), key(0x44, "F11"), key(0x45, "F12"),
    key(0x46, "PrintScr"), key(0x47, "ScrollLock"), key(0x48, "Pause"),
    key(0x49, "Insert"), key(0x4A, "Home"), key(0x4B, "PageUp"),
    key(0x4C, "Delete"), key(0x4D, "End"), key(0x4E, "PageDown"),
    key(0x4F, "Right"), key(0x50, "Left"), key(0x51, "Down"), key(0x52, "Up"),
    key(0x53, "NumLock"), key(0x54, "KP/"), key(0x55, "KP*"), key(0x56, "KP-"),
    key(0x57, "KP+"), key(0x58, "KPEnter"),
    key(0x59, "KP1"), key(0x5A, "KP2"), key(0x5B, "KP3"), key(0x5C, "KP4"),
    key(0x5D, "KP5"), key(0x5E, "KP6"), key(0x5F, "KP7"), key(0x60, "KP8"),
    key(0x61, "KP9"), key(0x62, "KP0"), key(0x63, "KP."),
    key(0x64, "NonUS\\"), key(0x65, "App"), key(0x66, "Power"), key(0x67, "KP="),
    key(0x68, "F13"), key(0x69, "F14"), key(0x6A, "F15"), key(0x6B, "F16"),
    key(0x6C, "F17"), key(0x6D, "F18"), key(0x6E, "F19"), key(0x6F, "F20"),
    key(0x70, "F21"), key(0x71, "F22"), key(0x72, "F23"), key(0x73, "F24"),
    key(0x74, "Execute"), key(0x75, "Help"), key(0x76, "Menu"), key(0x77, "Select"),
    key(0x78, "Stop"), key(0x79, "Again"), key(0x7A, "Undo"), key(0x7B, "Cut"),
    key(0x7C, "Copy"), key(0x7D, "Paste"), key(0x7E, "Find"), key(0x7F, "Mute"),
    key(0x80, "VolumeUp"), key(0x81, "VolumeDown"),
    key(0x82, "LockingCapsLock"), key(0x83, "LockingNumLock"), key(0x84, "LockingScrollLock"),
    key(0x85, "KP,"), key(0x86, "KPEqualSign"),
    key(0x87, "International1"), key(0x88, "International2"), key(0x89, "International3"),
    key(0x8A, "International4"), key(0x8B, "International5"), key(0x8C, "International6"),
    key(0x8D, "International7"), key(0x8E, "International8"), key(0x8F, "International9"),
    key(0x90, "LANG1"), key(0x91, "LANG2"), key(0x92, "LANG3"), key(0x93, "LANG4"),
    key(0x94, "LANG5"), key(0x95, "LANG6"), key(0x96, "LANG7"), key(0x97, "LANG8"),
    key(0x98, "LANG9"),
    Directive::range("99-DF", "Reserved"),
    modifier(0xE0, "LCtrl"), modifier(0xE1, "LShift"), modifier(0xE2, "LAlt"), modifier(0xE3, "LGUI"),
    modifier(0xE4, "RCtrl"), modifier(0xE5, "RShift"), modifier(0xE6, "RAlt"), modifier(0xE7, "RGUI"),
    Directive::range("E8-FF", "Reserved"),
];
