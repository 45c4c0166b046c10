mod opportunity;

pub use opportunity::OpportunityWithCategory;
