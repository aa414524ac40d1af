//! `TermTodo`: terminal to-do list library.

pub mod app;
pub mod config;
pub mod storage;
pub mod tasks;
pub mod ui;
pub mod view;
