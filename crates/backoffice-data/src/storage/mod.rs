//! 데이터베이스 접근.

pub mod database;
