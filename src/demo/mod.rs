pub mod content;
pub mod parser;

pub use content::DemoContent;
pub use parser::DemoContentParser;
