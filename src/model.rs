mod batch;
mod history;
mod line;


pub use batch::Batch;
pub use history::EditHistory;
pub use line::{Line, Point};
