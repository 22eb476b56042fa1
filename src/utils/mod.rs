//! Generic utility primitives with zero domain knowledge.
//!
//! - `blank` - Blank/present classification
//! - `io` - File I/O with consistent error handling
//! - `keys` - Option-key validation and symbolization
//! - `merge` - Reverse merge of option mappings
//! - `round` - Precision-aware float rounding

pub mod blank;
pub mod io;
pub mod keys;
pub mod merge;
pub mod round;
