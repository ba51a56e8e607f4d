use crate::core::Country;

/// One flag being guessed, from selection to resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Country,
    letters_revealed: usize,
    hint_used: bool,
}

impl Round {
    /// A fresh round with no hint progress
    #[must_use]
    pub fn new(target: Country) -> Self {
        Self {
            target,
            letters_revealed: 0,
            hint_used: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Country {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn letters_revealed(&self) -> usize {
        self.letters_revealed
    }

    #[inline]
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Whether hints have disclosed the whole name
    #[must_use]
    pub fn fully_revealed(&self) -> bool {
        self.letters_revealed >= self.target.name_len()
    }

    pub(super) fn reveal_one(&mut self) {
        self.hint_used = true;
        self.letters_revealed = (self.letters_revealed + 1).min(self.target.name_len());
    }
}
