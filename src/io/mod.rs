mod input;
mod output;

pub use input::{read_input, InputSource};
pub use output::{write_text, OutputConfig, OutputDest};
