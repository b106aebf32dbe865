pub mod attempt;
pub mod response;
