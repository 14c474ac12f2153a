pub mod entity;
pub mod grid;
pub mod pursuit;
pub mod rules;
pub mod tile;
