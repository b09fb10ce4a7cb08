pub mod context;
pub mod helpers;
pub mod registers;
