pub mod field;
pub mod stack;

pub const STANDARD_BOARD_WIDTH: usize = 11;
pub const STANDARD_BOARD_HEIGHT: usize = 5;
