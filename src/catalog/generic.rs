//! Built-in tables for generic usage pages
//!
//! Pages without a specialized catalog get a plain single-page catalog.
//! A handful of common pages are seeded here; any other page yields an empty
//! catalog, so every usage on it is unclassifiable.

use super::{page, Directive};

#[rustfmt::skip]
const GENERIC_DESKTOP: &[Directive] = &[
    Directive::usage(0x00, "Undefined"),
    Directive::usage(0x01, "Pointer").types("CP").section("4"),
    Directive::usage(0x02, "Mouse").types("CA").section("4"),
    Directive::range("03-03", "Reserved"),
    Directive::usage(0x04, "Joystick").types("CA").section("4"),
    Directive::usage(0x05, "Gamepad").types("CA").section("4"),
    Directive::usage(0x06, "Keyboard").types("CA").section("4"),
    Directive::usage(0x07, "Keypad").types("CA").section("4"),
    Directive::usage(0x08, "MultiAxisController").types("CA").section("4"),
    Directive::range("09-2F", "Reserved"),
    Directive::usage(0x30, "X").types("DV").reports("I").section("4.2"),
    Directive::usage(0x31, "Y").types("DV").reports("I").section("4.2"),
    Directive::usage(0x32, "Z").types("DV").reports("I").section("4.2"),
    Directive::usage(0x33, "Rx").types("DV").reports("I").section("4.2"),
    Directive::usage(0x34, "Ry").types("DV").reports("I").section("4.2"),
    Directive::usage(0x35, "Rz").types("DV").reports("I").section("4.2"),
    Directive::usage(0x36, "Slider").types("DV").reports("I").section("4.3"),
    Directive::usage(0x37, "Dial").types("DV").reports("I").section("4.3"),
    Directive::usage(0x38, "Wheel").types("DV").reports("I").section("4.3"),
    Directive::usage(0x39, "HatSwitch").types("DV").reports("I").section("4.3"),
    Directive::range("3A-7F", "Reserved"),
    Directive::usage(0x80, "SystemControl").types("CA").section("4.5"),
    Directive::usage(0x81, "SystemPowerDown").types("OSC").reports("I").section("4.5"),
    Directive::usage(0x82, "SystemSleep").types("OSC").reports("I").section("4.5"),
    Directive::usage(0x83, "SystemWakeUp").types("OSC").reports("I").section("4.5"),
];

#[rustfmt::skip]
const LED: &[Directive] = &[
    Directive::usage(0x00, "Undefined"),
    Directive::usage(0x01, "NumLock").types("OOC").reports("O").section("11"),
    Directive::usage(0x02, "CapsLock").types("OOC").reports("O").section("11"),
    Directive::usage(0x03, "ScrollLock").types("OOC").reports("O").section("11"),
    Directive::usage(0x04, "Compose").types("OOC").reports("O").section("11"),
    Directive::usage(0x05, "Kana").types("OOC").reports("O").section("11"),
    Directive::usage(0x06, "Power").types("OOC").reports("O").section("11"),
    Directive::usage(0x07, "Shift").types("OOC").reports("O").section("11"),
    Directive::range("08-FF", "Reserved"),
];

#[rustfmt::skip]
const BUTTON: &[Directive] = &[
    Directive::usage(0x00, "NoButtonPressed"),
    Directive::range("01-FF", "Button").types("Sel/OOC/MC").reports("I").section("12"),
];

#[rustfmt::skip]
const CONSUMER: &[Directive] = &[
    Directive::usage(0x00, "Undefined"),
    Directive::usage(0x01, "ConsumerControl").types("CA").section("15.1"),
    Directive::range("02-2F", "Reserved"),
    Directive::usage(0x30, "Power").types("OOC").reports("I").section("15.3"),
    Directive::usage(0x31, "Reset").types("OSC").reports("I").section("15.3"),
    Directive::usage(0x32, "Sleep").types("OSC").reports("I").section("15.3"),
    Directive::range("33-AF", "Reserved"),
    Directive::usage(0xB0, "Play").types("OOC").reports("I").section("15.7"),
    Directive::usage(0xB1, "Pause").types("OOC").reports("I").section("15.7"),
    Directive::usage(0xB5, "ScanNextTrack").types("OSC").reports("I").section("15.7"),
    Directive::usage(0xB6, "ScanPreviousTrack").types("OSC").reports("I").section("15.7"),
    Directive::usage(0xB7, "Stop").types("OSC").reports("I").section("15.7"),
    Directive::usage(0xCD, "PlayPause").types("OSC").reports("I").section("15.7"),
    Directive::usage(0xE2, "Mute").types("OOC").reports("I").section("15.9.1"),
    Directive::usage(0xE9, "VolumeIncrement").types("OSC").reports("I").section("15.9.1"),
    Directive::usage(0xEA, "VolumeDecrement").types("OSC").reports("I").section("15.9.1"),
];

/// Seed table and display name for a generic page, if one is built in
pub(super) fn directives_for(usage_page: u16) -> Option<(&'static str, &'static [Directive])> {
    match usage_page {
        page::GENERIC_DESKTOP => Some(("Generic Desktop", GENERIC_DESKTOP)),
        page::LED => Some(("LED", LED)),
        page::BUTTON => Some(("Button", BUTTON)),
        page::CONSUMER => Some(("Consumer", CONSUMER)),
        _ => None,
    }
}

/// Every built-in generic page
pub(super) const PAGES: &[u16] = &[page::GENERIC_DESKTOP, page::LED, page::BUTTON, page::CONSUMER];
