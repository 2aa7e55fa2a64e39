pub mod glyph;

pub use glyph::Glyph;
