pub mod category;
pub mod entry;
pub mod summary;

pub use category::Category;
pub use entry::{Entry, NewEntry};
pub use summary::{MonthlyRow, Summary, Totals};
