pub mod categories;
pub mod dashboard;
pub mod exports;
pub mod opportunities;
pub mod registrations;
