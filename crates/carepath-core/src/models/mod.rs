pub mod answer;
pub mod domain;
pub mod item;
pub mod result;
