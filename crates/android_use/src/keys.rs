//! Android keycode table
//!
//! Full list: <https://developer.android.com/reference/android/view/KeyEvent>

use phf::phf_map;

/// Keycodes commands reference directly.
pub const KEYCODE_MENU: u16 = 82;
pub const KEYCODE_WAKEUP: u16 = 224;

/// Named keycodes accepted by the `key` command.
pub static KEYCODES: phf::Map<&'static str, u16> = phf_map! {
    // Navigation
    "HOME" => 3,
    "BACK" => 4,
    "MENU" => KEYCODE_MENU,
    "APP_SWITCH" => 187,

    // Power & volume
    "POWER" => 26,
    "VOLUME_UP" => 24,
    "VOLUME_DOWN" => 25,
    "VOLUME_MUTE" => 164,

    // D-pad
    "DPAD_UP" => 19,
    "DPAD_DOWN" => 20,
    "DPAD_LEFT" => 21,
    "DPAD_RIGHT" => 22,
    "DPAD_CENTER" => 23,

    // Actions
    "ENTER" => 66,
    "TAB" => 61,
    "SPACE" => 62,
    "DEL" => 67,
    "FORWARD_DEL" => 112,
    "ESCAPE" => 111,

    // Media
    "MEDIA_PLAY" => 126,
    "MEDIA_PAUSE" => 127,
    "MEDIA_PLAY_PAUSE" => 85,
    "MEDIA_STOP" => 86,
    "MEDIA_NEXT" => 87,
    "MEDIA_PREVIOUS" => 88,

    // Camera
    "CAMERA" => 27,
    "FOCUS" => 80,

    // Misc
    "SEARCH" => 84,
    "SETTINGS" => 176,
    "NOTIFICATION" => 83,
    "WAKEUP" => KEYCODE_WAKEUP,
    "SLEEP" => 223,
};

/// Resolve a key name to its keycode, case-insensitively.
pub fn resolve_keycode(name: &str) -> Option<u16> {
    KEYCODES.get(name.to_uppercase().as_str()).copied()
}

/// Reverse lookup of a keycode's name.
pub fn keycode_name(code: u16) -> Option<&'static str> {
    KEYCODES
        .entries()
        .find(|(_, &c)| c == code)
        .map(|(name, _)| *name)
}

/// Sorted list of all known key names, for help/error messages.
pub fn key_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = KEYCODES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keycode() {
        assert_eq!(resolve_keycode("HOME"), Some(3));
        assert_eq!(resolve_keycode("back"), Some(4));
        assert_eq!(resolve_keycode("Wakeup"), Some(224));
        assert_eq!(resolve_keycode("NOT_A_KEY"), None);
    }

    #[test]
    fn test_keycode_name() {
        assert_eq!(keycode_name(3), Some("HOME"));
        assert_eq!(keycode_name(66), Some("ENTER"));
        assert_eq!(keycode_name(9999), None);
    }

    #[test]
    fn test_key_names_sorted() {
        let names = key_names();
        assert!(names.contains(&"HOME"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
