#![allow(dead_code)]

pub mod fake_board;

pub use fake_board::FakeBoard;
pub use harness::TestEngine;
pub use memory_store::MemoryStore;
