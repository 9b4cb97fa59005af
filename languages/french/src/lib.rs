pub mod article;
pub mod resolver;

pub use resolver::{FrenchEnglishResolver, FrenchFrenchResolver};
