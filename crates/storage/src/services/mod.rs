pub mod aggregation;
pub mod classification;
