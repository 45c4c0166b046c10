mod opportunity_dto;

pub use opportunity_dto::{
    CategoryRefDto, ListOpportunitiesQuery, OpportunityResponseDto, SaveOpportunityDto,
};
