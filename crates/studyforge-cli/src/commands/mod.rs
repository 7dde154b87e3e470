pub mod generate;
pub mod list;
pub mod results;
pub mod take;
pub mod upload;
