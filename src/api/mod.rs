pub mod analysis;
pub mod client;

pub use analysis::{apply_suggestions, merge_suggestions, AnalysisSuggestions, AnalyzeOptions, AnalyzeRequest};
pub use client::{
    ApiError, CascadeResult, DateUpdate, HttpPlannerClient, PlanMonthRequest, PlanMonthResult,
    PlannerApi,
};

#[cfg(test)]
pub use client::MockPlannerApi;
