//! ZenMind Brain Boost Games: four small terminal mini-games behind one menu.

pub mod app;
pub mod config;
pub mod error;
pub mod games;
pub mod logging;
pub mod shell;
pub mod shuffle;
pub mod storage;
pub mod term;
pub mod timer;
pub mod words;
