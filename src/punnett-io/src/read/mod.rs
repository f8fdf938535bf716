mod trait_reader;
pub use trait_reader::{TraitReader, TraitReaderError, TRAIT_EXT};
