pub mod alerts;
pub mod scorecard;
