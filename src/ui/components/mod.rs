pub mod chat;
pub mod help;
pub mod results;
