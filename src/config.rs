use std::time::Duration;

use ratatui::style::Color;

/// Tick interval at speed multiplier 1x.
pub const BASE_TICK_INTERVAL: Duration = Duration::from_millis(160);

/// Slowest selectable speed multiplier.
pub const MIN_SPEED: u8 = 1;

/// Fastest selectable speed multiplier.
pub const MAX_SPEED: u8 = 5;

/// Speed multiplier used when none is given on the command line.
pub const DEFAULT_SPEED: u8 = MIN_SPEED;

/// Grid side length used when none is given on the command line.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid the input bridge will request.
pub const MIN_GRID_SIZE: u16 = 5;

/// Largest grid the input bridge will request.
pub const MAX_GRID_SIZE: u16 = 40;

/// Smallest grid the core can represent at all.
pub const MIN_CORE_GRID_SIZE: u16 = 2;

/// Minimum drag distance, in columns, before a mouse drag counts as a swipe.
pub const SWIPE_THRESHOLD: i32 = 4;

/// Delay between input polls in the terminal frame host (~60 Hz).
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "torus-snake";

/// Colors for all board and HUD elements.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub board_bg: Color,
    pub grid_dot: Color,
    pub food: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub overlay_title: Color,
    pub overlay_message: Color,
}

/// The dark board palette.
pub const PALETTE: Palette = Palette {
    board_bg: Color::Rgb(0x0a, 0x0f, 0x15),
    grid_dot: Color::Rgb(0x15, 0x22, 0x32),
    food: Color::Rgb(0xff, 0x6b, 0x6b),
    snake_head: Color::Rgb(0x58, 0xd6, 0x8d),
    snake_body: Color::Rgb(0x2e, 0xcc, 0x71),
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    overlay_title: Color::Green,
    overlay_message: Color::Gray,
};

/// Glyph drawn in empty cells.
pub const GLYPH_GRID_DOT: &str = "·";

/// Glyph drawn for food.
pub const GLYPH_FOOD: &str = "●";

/// Solid block used to fill snake cells.
pub const GLYPH_SOLID: &str = "█";
