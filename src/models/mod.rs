pub mod hotel;
pub mod search;
