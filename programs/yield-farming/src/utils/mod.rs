pub mod allowance;
pub mod interest;
pub mod records;
pub mod time;
