pub mod decoder;
pub mod other;
pub mod polynomial;
