pub mod fat;

pub use fat::fat_score;
