pub mod churn;
pub mod complexity;
pub mod expertise;
pub mod fragility;
pub mod trend;
