mod registration;

pub use registration::RegistrationWithOpportunity;
