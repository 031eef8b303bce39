#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Right,
    Left,
    Space,
}

impl Control {
    /// Maps a key code such as `ArrowRight` or `Space` to a control.
    pub fn from_key_code(code: &str) -> Option<Control> {
        match code.trim().to_lowercase().as_str() {
            "right" | "arrowright" => Some(Control::Right),
            "left" | "arrowleft" => Some(Control::Left),
            "space" => Some(Control::Space),
            _ => None,
        }
    }

    pub fn is_directional(self) -> bool {
        self != Control::Space
    }
}

/// Whether a key press was consumed by the navigator. Callers should only
/// suppress their own handling of the key when it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}
