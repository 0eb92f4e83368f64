pub mod aggregation;
pub mod custody;
pub mod fees;
pub mod slashing;
pub mod settlement;
