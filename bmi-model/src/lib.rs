pub mod advice;
pub mod input;
pub mod measurement;
pub mod result;
pub mod unit;
