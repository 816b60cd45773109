pub mod run;
pub mod search;
pub mod show;
