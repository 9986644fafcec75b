pub mod decode;
pub mod glyphs;
