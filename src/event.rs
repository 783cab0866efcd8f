// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! This module provides the unified input Event.
//! Input events read by the render adapter (sdl or a test adapter) are converted
//! here, so the frame loop never sees backend event types.
//! Only quit and keyboard events are kept, everything else is dropped by the adapter.

use bitflags::bitflags;
use std::fmt;

/// sdl event type codes, kept for the diagnostic line
pub const KEYDOWN_TYPE: u32 = 0x300;
pub const KEYUP_TYPE: u32 = 0x301;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Event {
    /// window closed or the os asked the app to quit
    Quit,
    /// a key went down or up
    Key(KeyEvent),
}

bitflags! {
    /// Represents key modifiers (shift, control, alt, etc.).
    #[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyModifiers: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LGUI = 0x0400;
        const RGUI = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyEventKind {
    Press,
    Release,
}

impl KeyEventKind {
    pub fn event_type(self) -> u32 {
        match self {
            KeyEventKind::Press => KEYDOWN_TYPE,
            KeyEventKind::Release => KEYUP_TYPE,
        }
    }

    /// 1 pressed, 0 released
    pub fn state(self) -> u8 {
        match self {
            KeyEventKind::Press => 1,
            KeyEventKind::Release => 0,
        }
    }
}

impl fmt::Display for KeyEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEventKind::Press => write!(f, "pressed"),
            KeyEventKind::Release => write!(f, "released"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct KeyEvent {
    /// milliseconds since the library started
    pub timestamp: u32,
    pub kind: KeyEventKind,
    /// key symbol, an ascii code for printable keys
    pub sym: i32,
    /// human readable key name, e.g. "A" or "Left Shift"
    pub name: String,
    pub modifiers: KeyModifiers,
    pub repeat: u8,
}

impl KeyEvent {
    pub fn new(kind: KeyEventKind, sym: i32, name: &str) -> Self {
        Self {
            timestamp: 0,
            kind,
            sym,
            name: name.to_string(),
            modifiers: KeyModifiers::empty(),
            repeat: 0,
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn sym_char(&self) -> char {
        u32::try_from(self.sym)
            .ok()
            .and_then(char::from_u32)
            .filter(|c| !c.is_control())
            .unwrap_or('?')
    }

    /// line mirrored to stderr for every key event
    pub fn diagnostic_line(&self, screen_width: u32) -> String {
        format!(
            "[{} ms] Keyboard\twidth:{}\ttype:{}\tsym:{}\tmodifiers:{}\tstate:{}\trepeat:{}",
            self.timestamp,
            screen_width,
            self.kind.event_type(),
            self.sym_char(),
            self.modifiers.bits(),
            self.kind.state(),
            self.repeat
        )
    }

    /// text shown by the debug caption
    pub fn debug_text(&self) -> String {
        if self.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::CTRL | KeyModifiers::ALT) {
            format!("{} {} (mod {:#06x})", self.name, self.kind, self.modifiers.bits())
        } else {
            format!("{} {}", self.name, self.kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_line() {
        let ke = KeyEvent::new(KeyEventKind::Press, 'a' as i32, "A")
            .with_timestamp(1234)
            .with_modifiers(KeyModifiers::LSHIFT);
        assert_eq!(
            ke.diagnostic_line(640),
            "[1234 ms] Keyboard\twidth:640\ttype:768\tsym:a\tmodifiers:1\tstate:1\trepeat:0"
        );
    }

    #[test]
    fn test_release_line_and_unprintable_sym() {
        let ke = KeyEvent::new(KeyEventKind::Release, 0x4000_00e1, "Left Shift");
        let line = ke.diagnostic_line(640);
        assert!(line.contains("type:769"));
        assert!(line.contains("state:0"));
        assert!(line.contains("sym:?"));
    }

    #[test]
    fn test_debug_text() {
        let ke = KeyEvent::new(KeyEventKind::Press, 'q' as i32, "Q");
        assert_eq!(ke.debug_text(), "Q pressed");
        let ke = ke.with_modifiers(KeyModifiers::LCTRL);
        assert_eq!(ke.debug_text(), "Q pressed (mod 0x0040)");
        let ke = KeyEvent::new(KeyEventKind::Press, 'q' as i32, "Q").with_modifiers(KeyModifiers::NUM);
        assert_eq!(ke.debug_text(), "Q pressed");
    }
}
