//! Marker colors.
//!
//! The engine treats colors as opaque indices into the session palette.
//! Names live in [`GameConfig`](super::GameConfig) and only matter to hosts.

use serde::{Deserialize, Serialize};

/// Marker color: an index into the session palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a color from its palette index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color() {
        let c = Color::new(3);
        assert_eq!(c.index(), 3);
        assert_eq!(format!("{}", c), "Color(3)");
        assert!(Color::new(1) < Color::new(2));
    }
}
