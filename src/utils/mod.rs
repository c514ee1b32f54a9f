pub mod display_terminal;
pub mod string_utils;
