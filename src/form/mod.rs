pub mod select;
pub mod session;
