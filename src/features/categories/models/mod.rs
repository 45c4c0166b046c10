mod category;

pub use category::CategoryWithCount;
