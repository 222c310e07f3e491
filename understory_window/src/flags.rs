// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window capability flags and keyboard modifier flags.

understory_flags::flag_type! {
    /// Capabilities of a window.
    ///
    /// `ONTOP` and `MODAL` only take effect on windows without a parent, and
    /// a window is never both: setting `MODAL` clears `ONTOP`.
    pub struct WindowFlag: u16 {
        /// No capabilities.
        const NO_WND_FLAGS = 0;
        /// Receives input events instead of forwarding them to its parent.
        const INTERACTIVE = 1 << 0;
        /// Button-down events repeat while a mouse button is held.
        const REPEAT_BUTTON_DOWN = 1 << 1;
        /// Can be moved by dragging.
        const DRAGABLE = 1 << 2;
        /// Can be resized by dragging its edges.
        const RESIZABLE = 1 << 3;
        /// Stays above non-on-top windows.
        const ONTOP = 1 << 4;
        /// Runs modally, blocking input to other windows.
        const MODAL = 1 << 5;
        /// Key-press events repeat while a key is held.
        const REPEAT_KEY_PRESS = 1 << 6;
    }
}

understory_flags::flag_type! {
    /// Keyboard modifier keys held during an input event.
    pub struct ModKey: u16 {
        /// Left shift.
        const LSHIFT = 1 << 0;
        /// Right shift.
        const RSHIFT = 1 << 1;
        /// Left control.
        const LCTRL = 1 << 2;
        /// Right control.
        const RCTRL = 1 << 3;
        /// Left alt.
        const LALT = 1 << 4;
        /// Right alt.
        const RALT = 1 << 5;
        /// Left meta.
        const LMETA = 1 << 6;
        /// Right meta.
        const RMETA = 1 << 7;
        /// Num lock.
        const NUM = 1 << 8;
        /// Caps lock.
        const CAPS = 1 << 9;
        /// Mode switch.
        const MODE = 1 << 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_flags::{FlagSet, FlagType};

    #[test]
    fn window_flags_registered_in_order() {
        let names: Vec<_> = WindowFlag::spec()
            .flags()
            .into_iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(
            names,
            [
                "NO_WND_FLAGS",
                "INTERACTIVE",
                "REPEAT_BUTTON_DOWN",
                "DRAGABLE",
                "RESIZABLE",
                "ONTOP",
                "MODAL",
                "REPEAT_KEY_PRESS"
            ]
        );
    }

    #[test]
    fn mod_key_round_trip() {
        let mods = ModKey::LCTRL | ModKey::RSHIFT;
        let text = mods.to_string();
        assert_eq!(text, "RSHIFT | LCTRL");
        assert_eq!(text.parse::<FlagSet<ModKey>>().unwrap(), mods);
        assert_eq!(!FlagSet::<ModKey>::empty(), {
            let mut all = FlagSet::empty();
            for k in ModKey::spec().flags() {
                all |= k;
            }
            all
        });
    }
}
