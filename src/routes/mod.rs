pub mod dossiers;
pub mod legislation;
pub mod regimes;
pub mod reports;
pub mod workflow;
