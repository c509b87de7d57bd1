pub mod table;
pub mod time;
pub mod validate;
