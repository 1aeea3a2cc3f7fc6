pub mod calculator;
pub mod factors;
pub mod tier;
