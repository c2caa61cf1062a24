//! Header bar state: the language popup.
//!
//! The popup opens and closes on the selector, closes after a language is
//! chosen, and closes on any click outside the selector or any route change.

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub language_popup_open: bool,
}

impl HeaderState {
    pub fn toggle_language_popup(&mut self) {
        self.language_popup_open = !self.language_popup_open;
    }

    /// Closes the popup. Returns `true` if it was open.
    pub fn close_language_popup(&mut self) -> bool {
        std::mem::replace(&mut self.language_popup_open, false)
    }

    /// Closes the popup after `locale` is chosen and passes it on.
    pub fn choose_language(&mut self, locale: Locale) -> Locale {
        self.language_popup_open = false;
        locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_outside_close() {
        let mut header = HeaderState::default();
        header.toggle_language_popup();
        assert!(header.language_popup_open);
        assert!(header.close_language_popup());
        assert!(!header.close_language_popup());
    }

    #[test]
    fn test_choose_closes_popup() {
        let mut header = HeaderState::default();
        header.toggle_language_popup();
        assert_eq!(header.choose_language(Locale::Tr), Locale::Tr);
        assert!(!header.language_popup_open);
    }
}
