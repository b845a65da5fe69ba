//! Memory Layer - In-Memory Implementations
//!
//! 内存版 UserRepository，作为应用层测试替身

mod user_repo;

pub use user_repo::InMemoryUserRepository;
