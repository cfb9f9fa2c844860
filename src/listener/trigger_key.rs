use rdev::Key;
use std::fmt;
use std::str::FromStr;

/// The global key whose press drives pasting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerKey(Key);

impl TriggerKey {
    pub fn key(&self) -> Key {
        self.0
    }
}

impl Default for TriggerKey {
    fn default() -> Self {
        Self(Key::F9)
    }
}

const NAMED_KEYS: &[(&str, Key)] = &[
    ("F1", Key::F1),
    ("F2", Key::F2),
    ("F3", Key::F3),
    ("F4", Key::F4),
    ("F5", Key::F5),
    ("F6", Key::F6),
    ("F7", Key::F7),
    ("F8", Key::F8),
    ("F9", Key::F9),
    ("F10", Key::F10),
    ("F11", Key::F11),
    ("F12", Key::F12),
    ("Pause", Key::Pause),
    ("ScrollLock", Key::ScrollLock),
    ("Insert", Key::Insert),
    ("Home", Key::Home),
    ("End", Key::End),
    ("PageUp", Key::PageUp),
    ("PageDown", Key::PageDown),
    ("PrintScreen", Key::PrintScreen),
];

fn aliases(name: &str) -> &str {
    match name {
        "ins" => "insert",
        "pgup" => "pageup",
        "pgdn" => "pagedown",
        "prtsc" | "print" => "printscreen",
        "scrlk" => "scrolllock",
        "break" => "pause",
        other => other,
    }
}

/// Accepts "F9", "f9", "<F9>", "PageUp", "pgup", ...
impl FromStr for TriggerKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(s);
        let lower = inner.to_lowercase();
        let wanted = aliases(&lower);

        NAMED_KEYS
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, key)| TriggerKey(*key))
            .ok_or_else(|| format!("Unknown trigger key: {}", s))
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NAMED_KEYS.iter().find(|(_, key)| *key == self.0) {
            Some((name, _)) => write!(f, "{}", name),
            None => write!(f, "{:?}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_f9() {
        assert_eq!(TriggerKey::default().key(), Key::F9);
        assert_eq!(TriggerKey::default().to_string(), "F9");
    }

    #[test]
    fn test_parse_function_keys() {
        let key: TriggerKey = "f8".parse().unwrap();
        assert_eq!(key.key(), Key::F8);
        let key: TriggerKey = "<F12>".parse().unwrap();
        assert_eq!(key.key(), Key::F12);
    }

    #[test]
    fn test_parse_named_keys_and_aliases() {
        let key: TriggerKey = "PageDown".parse().unwrap();
        assert_eq!(key.key(), Key::PageDown);
        let key: TriggerKey = "pgup".parse().unwrap();
        assert_eq!(key.key(), Key::PageUp);
        let key: TriggerKey = " scrolllock ".parse().unwrap();
        assert_eq!(key.key(), Key::ScrollLock);
    }

    #[test]
    fn test_reject_unknown_keys() {
        assert!("F13".parse::<TriggerKey>().is_err());
        assert!("x".parse::<TriggerKey>().is_err());
        assert!("".parse::<TriggerKey>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for (name, _) in NAMED_KEYS {
            let key: TriggerKey = name.parse().unwrap();
            assert_eq!(key.to_string(), *name);
        }
    }
}
