pub mod decode;
pub mod path;
pub mod source;
pub mod store;
