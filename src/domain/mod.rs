pub mod item;
pub mod page;

pub use item::Item;
pub use page::Page;
