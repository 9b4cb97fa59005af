pub mod resolver;

pub use resolver::EnglishResolver;
