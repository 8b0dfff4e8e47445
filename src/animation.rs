pub mod ease;
pub mod reveal;
pub mod scrub;
