//! Game configuration.
//!
//! A `GameConfig` fixes the board size, the color palette and how many
//! markers each spawn batch places. It is chosen once when a session is
//! created and never changes afterwards.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::EngineError;

/// Side length of the reference board.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 1 << 12;

/// Largest palette a `Color` index can address.
pub const MAX_COLOR_COUNT: usize = u8::MAX as usize + 1;

/// Markers placed per spawn batch in the reference game.
pub const DEFAULT_BALL_COUNT: usize = 3;

/// Reference palette, in color-index order.
pub const DEFAULT_PALETTE: [&str; 7] = ["red", "green", "blue", "yellow", "purple", "cyan", "orange"];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (the board is `board_size` x `board_size`).
    pub board_size: usize,

    /// Display names of the colors. `Color(i)` is `palette[i]`.
    pub palette: Vec<String>,

    /// Markers placed per spawn batch; also the lookahead queue length.
    pub ball_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            ball_count: DEFAULT_BALL_COUNT,
        }
    }
}

impl GameConfig {
    /// Create the reference configuration (9x9, 7 colors, 3 per batch).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.palette = names.into_iter().map(Into::into).collect();
        self
    }

    /// Use the first `count` reference colors, naming any extras `color<i>`.
    ///
    /// Counts past [`MAX_COLOR_COUNT`] keep one name too many, which
    /// `validate` then rejects.
    #[must_use]
    pub fn with_color_count(mut self, count: usize) -> Self {
        self.palette = (0..count.min(MAX_COLOR_COUNT + 1))
            .map(|i| match DEFAULT_PALETTE.get(i) {
                Some(name) => name.to_string(),
                None => format!("color{}", i),
            })
            .collect();
        self
    }

    /// Set the number of markers per spawn batch.
    #[must_use]
    pub fn with_ball_count(mut self, count: usize) -> Self {
        self.ball_count = count;
        self
    }

    /// Number of cells on the board, saturating at `usize::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size.saturating_mul(self.board_size)
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.palette.len()
    }

    /// Display name of a color, if it belongs to the palette.
    #[must_use]
    pub fn color_name(&self, color: Color) -> Option<&str> {
        self.palette.get(color.index()).map(String::as_str)
    }

    /// Check the configuration can drive a session.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.board_size == 0 {
            return Err(EngineError::InvalidConfig("board size must be at least 1".into()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "board size {} exceeds the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        if self.palette.is_empty() {
            return Err(EngineError::InvalidConfig("palette must contain at least one color".into()));
        }
        if self.palette.len() > MAX_COLOR_COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "palette has {} colors, at most {} supported",
                self.palette.len(),
                MAX_COLOR_COUNT
            )));
        }
        if self.ball_count == 0 {
            return Err(EngineError::InvalidConfig("ball count must be at least 1".into()));
        }
        if self.ball_count >= self.cell_count() {
            return Err(EngineError::InvalidConfig(format!(
                "ball count {} must be below the cell count {}",
                self.ball_count,
                self.cell_count()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::new();
        assert_eq!(config.board_size, 9);
        assert_eq!(config.cell_count(), 81);
        assert_eq!(config.color_count(), 7);
        assert_eq!(config.ball_count, 3);
        assert_eq!(config.color_name(Color::new(0)), Some("red"));
        assert_eq!(config.color_name(Color::new(7)), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_board_size(5)
            .with_palette(["a", "b"])
            .with_ball_count(2);

        assert_eq!(config.board_size, 5);
        assert_eq!(config.palette, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(config.ball_count, 2);
    }

    #[test]
    fn test_color_count_names() {
        let config = GameConfig::new().with_color_count(9);
        assert_eq!(config.color_name(Color::new(6)), Some("orange"));
        assert_eq!(config.color_name(Color::new(8)), Some("color8"));

        let config = GameConfig::new().with_color_count(2);
        assert_eq!(config.palette, vec!["red".to_string(), "green".to_string()]);
    }

    #[test]
    fn test_validate_ball_count() {
        let config = GameConfig::new().with_board_size(2).with_ball_count(4);
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let config = GameConfig::new().with_board_size(2).with_ball_count(3);
        assert!(config.validate().is_ok());

        let config = GameConfig::new().with_ball_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_board_and_palette() {
        assert!(GameConfig::new().with_board_size(0).validate().is_err());
        assert!(GameConfig::new().with_color_count(0).validate().is_err());
        assert!(GameConfig::new().with_color_count(257).validate().is_err());
        assert!(GameConfig::new().with_color_count(256).validate().is_ok());
        assert!(GameConfig::new().with_color_count(usize::MAX).validate().is_err());

        assert!(GameConfig::new().with_board_size(MAX_BOARD_SIZE).validate().is_ok());
        assert!(GameConfig::new().with_board_size(MAX_BOARD_SIZE + 1).validate().is_err());
        for size in [1usize << 33, usize::MAX] {
            let config = GameConfig::new().with_board_size(size);
            assert_eq!(config.cell_count(), size.saturating_mul(size));
            assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
        }
    }
}
