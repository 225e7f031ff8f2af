// Text module: sentence segmentation and word tokenization.

pub mod segmenter;
pub mod tokenizer;

pub use segmenter::segment;
pub use tokenizer::tokenize;
