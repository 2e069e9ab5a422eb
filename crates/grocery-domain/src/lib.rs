pub mod filter;
pub mod search;
pub mod sort;
pub mod store;
pub mod task;
pub mod view;

pub use filter::{StatusFilter, TaskFilter};
pub use search::TextSearcher;
pub use sort::SortBy;
pub use store::TaskStore;
pub use task::{Quantity, Task, TaskId};
pub use view::ViewQuery;
