pub mod mapper;
pub mod pager;
pub mod smooth;
pub mod ticker;
pub mod trigger;
