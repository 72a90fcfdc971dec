pub mod checker;
pub mod color_parse;
pub mod hex;
pub mod hsl;
pub mod rgb;
pub mod wcag;
