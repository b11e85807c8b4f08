pub mod list;
pub mod test;
