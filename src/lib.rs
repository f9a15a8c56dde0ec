pub mod analyzers;
pub mod club;
pub mod error;
pub mod limits;
pub mod output;
pub mod parser;
pub mod shot;
