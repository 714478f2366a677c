//! Full-screen terminal interface

mod app;
mod rendering;

pub use app::{App, FetchStage, Failure, Message, MessageStyle, Screen, run_tui};
