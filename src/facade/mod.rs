pub mod assessment;
pub mod backend;
pub mod report;

pub use assessment::RiskAssessmentFacade;
pub use backend::{
    GravityTractorOutcome, GravityTractorRequest, ImpactBackend, MonteCarloOutcome, MonteCarloRequest,
};
pub use report::{ProbabilitySource, RiskReport};
