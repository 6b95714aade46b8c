pub mod candidate;
pub mod skill;
