use log::warn;

use crate::constants::KEY_COUNT;

/// # Keypad
/// The pressed state of the 16 keys 0..F.
///
/// Besides the level of every key it latches the first press since the latch
/// was last taken, so an instruction waiting for input sees presses that
/// happen between cycles. Later presses before the next take are dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
    last_press: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key_down(&mut self, key: u8) {
        match self.keys.get_mut(usize::from(key)) {
            Some(pressed) => {
                if !*pressed && self.last_press.is_none() {
                    self.last_press = Some(key);
                }
                *pressed = true;
            }
            None => warn!("ignoring press of unknown key {:#X}", key),
        }
    }

    pub fn set_key_up(&mut self, key: u8) {
        match self.keys.get_mut(usize::from(key)) {
            Some(pressed) => *pressed = false,
            None => warn!("ignoring release of unknown key {:#X}", key),
        }
    }

    /// Keys outside 0..F are never pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(usize::from(key)).copied().unwrap_or(false)
    }

    /// Takes the latched press, if any key went down since the last call.
    /// When several went down, only the first is returned.
    pub fn take_press(&mut self) -> Option<u8> {
        self.last_press.take()
    }

    /// Forgets the latched press without touching key levels.
    pub fn clear_press(&mut self) {
        self.last_press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0xA);
        assert!(keypad.is_pressed(0xA));
        assert!(!keypad.is_pressed(0xB));
        keypad.set_key_up(0xA);
        assert!(!keypad.is_pressed(0xA));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x10);
        assert!(!keypad.is_pressed(0x10));
        assert_eq!(keypad.take_press(), None);
    }

    #[test]
    fn test_latches_the_first_press() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x1);
        keypad.set_key_down(0x2);
        assert_eq!(keypad.take_press(), Some(0x1));
        assert_eq!(keypad.take_press(), None);
        keypad.set_key_down(0x3);
        assert_eq!(keypad.take_press(), Some(0x3));
    }

    #[test]
    fn test_held_key_doesnt_press_again() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x5);
        keypad.clear_press();
        keypad.set_key_down(0x5);
        assert_eq!(keypad.take_press(), None);
        keypad.set_key_up(0x5);
        keypad.set_key_down(0x5);
        assert_eq!(keypad.take_press(), Some(0x5));
    }
}
