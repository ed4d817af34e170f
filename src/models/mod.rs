mod catalog;
mod expense;
mod month;

pub use catalog::Catalog;
pub use expense::ExpenseRecord;
pub use month::Month;
