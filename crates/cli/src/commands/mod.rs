pub mod generate;
pub mod preview;
pub mod rebuild;
pub mod run;
