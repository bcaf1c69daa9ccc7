pub mod display;
pub mod field_reader;

pub use display::{to_paragraphs, DisplayWriter, HtmlDisplay, MemoryDisplay};
pub use field_reader::{FieldReader, MapFieldReader};
