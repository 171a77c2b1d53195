/// Open/closed state of the fullscreen overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open,
}

/// Keys the overlay listens for while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
    Ignored,
}

impl From<&str> for LightboxKey {
    fn from(value: &str) -> Self {
        match value {
            "Escape" | "Esc" => Self::Close,
            "ArrowLeft" | "Left" => Self::Previous,
            "ArrowRight" | "Right" => Self::Next,
            _ => Self::Ignored,
        }
    }
}

/// What the caller should do with the cursor after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Closed,
    Retreat,
    Advance,
    None,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns whether the overlay is open afterwards. Opening without a
    /// current image is refused.
    pub fn open(&mut self, has_current: bool) -> bool {
        if has_current {
            *self = Self::Open;
        }
        self.is_open()
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn handle_key(&mut self, key: LightboxKey) -> LightboxAction {
        if !self.is_open() {
            return LightboxAction::None;
        }
        match key {
            LightboxKey::Close => {
                self.close();
                LightboxAction::Closed
            }
            LightboxKey::Previous => LightboxAction::Retreat,
            LightboxKey::Next => LightboxAction::Advance,
            LightboxKey::Ignored => LightboxAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_requires_current_image() {
        let mut lb = Lightbox::default();
        assert!(!lb.open(false));
        assert_eq!(lb, Lightbox::Closed);
        assert!(lb.open(true));
        assert_eq!(lb, Lightbox::Open);
    }

    #[test]
    fn test_keys_while_open() {
        let mut lb = Lightbox::Open;
        assert_eq!(lb.handle_key("ArrowLeft".into()), LightboxAction::Retreat);
        assert_eq!(lb.handle_key("ArrowRight".into()), LightboxAction::Advance);
        assert_eq!(lb.handle_key("a".into()), LightboxAction::None);
        assert!(lb.is_open());
        assert_eq!(lb.handle_key("Escape".into()), LightboxAction::Closed);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lb = Lightbox::Closed;
        assert_eq!(lb.handle_key(LightboxKey::Next), LightboxAction::None);
        assert_eq!(lb.handle_key(LightboxKey::Close), LightboxAction::None);
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_reopen_cycles() {
        let mut lb = Lightbox::default();
        for _ in 0..3 {
            assert!(lb.open(true));
            lb.close();
            assert!(!lb.is_open());
        }
        lb.close();
        assert_eq!(lb, Lightbox::Closed);
    }
}
