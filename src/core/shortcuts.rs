//! Global keyboard shortcuts.
//!
//! | Keys | Shortcut |
//! |------|----------|
//! | `Escape` | close drawer (mobile) / toggle floating nav (desktop) |
//! | `Alt+H` | go home |
//! | `Alt+B` | go back |
//! | `Alt+1`..`Alt+9` | open the n-th floating nav item |

/// Key event fields relevant to shortcut matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key`
    pub key: String,
    /// `KeyboardEvent.code` (layout independent, survives Option-key remapping)
    pub code: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl KeyInput {
    fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Escape,
    Home,
    Back,
    /// Zero-based index into the floating nav items
    Item(usize),
}

impl Shortcut {
    /// Match a key event. Unbound combinations yield `None`.
    pub fn parse(input: &KeyInput) -> Option<Self> {
        if input.ctrl || input.meta {
            return None;
        }

        if !input.alt {
            return (input.key == "Escape").then_some(Self::Escape);
        }

        match (input.code.as_str(), input.key.as_str()) {
            ("KeyH", _) | (_, "h" | "H") => Some(Self::Home),
            ("KeyB", _) | (_, "b" | "B") => Some(Self::Back),
            (code, key) => digit(code, key)
                .filter(|d| *d >= 1)
                .map(|d| Self::Item(d - 1)),
        }
    }
}

fn digit(code: &str, key: &str) -> Option<usize> {
    let from_code = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad"))
        .and_then(|d| d.parse::<usize>().ok())
        .filter(|d| *d <= 9);
    from_code.or_else(|| {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            Shortcut::parse(&KeyInput::new("Escape", "Escape")),
            Some(Shortcut::Escape)
        );
        assert_eq!(Shortcut::parse(&KeyInput::new("a", "KeyA")), None);
        assert_eq!(Shortcut::parse(&KeyInput::new("1", "Digit1")), None);
    }

    #[test]
    fn test_alt_letters() {
        assert_eq!(
            Shortcut::parse(&KeyInput::new("h", "KeyH").with_alt()),
            Some(Shortcut::Home)
        );
        // macOS Option+H reports a different key but the same code
        assert_eq!(
            Shortcut::parse(&KeyInput::new("˙", "KeyH").with_alt()),
            Some(Shortcut::Home)
        );
        assert_eq!(
            Shortcut::parse(&KeyInput::new("B", "KeyB").with_alt()),
            Some(Shortcut::Back)
        );
    }

    #[test]
    fn test_alt_digits() {
        assert_eq!(
            Shortcut::parse(&KeyInput::new("1", "Digit1").with_alt()),
            Some(Shortcut::Item(0))
        );
        assert_eq!(
            Shortcut::parse(&KeyInput::new("¡", "Digit1").with_alt()),
            Some(Shortcut::Item(0))
        );
        assert_eq!(
            Shortcut::parse(&KeyInput::new("9", "").with_alt()),
            Some(Shortcut::Item(8))
        );
        assert_eq!(Shortcut::parse(&KeyInput::new("0", "Digit0").with_alt()), None);
        assert_eq!(Shortcut::parse(&KeyInput::new("x", "KeyX").with_alt()), None);
    }

    #[test]
    fn test_other_modifiers_ignored() {
        let mut input = KeyInput::new("h", "KeyH").with_alt();
        input.ctrl = true;
        assert_eq!(Shortcut::parse(&input), None);

        let mut escape = KeyInput::new("Escape", "Escape");
        escape.meta = true;
        assert_eq!(Shortcut::parse(&escape), None);
    }
}
