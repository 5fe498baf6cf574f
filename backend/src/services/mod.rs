pub mod catalog;
pub mod submissions;
