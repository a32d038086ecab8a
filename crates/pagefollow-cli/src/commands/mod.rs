pub mod check;
pub mod chrome;
pub mod completion;
pub mod run;
