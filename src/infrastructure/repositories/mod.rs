// src/infrastructure/repositories/mod.rs
mod in_memory_article;

pub use in_memory_article::InMemoryArticleRepository;
