//! Interactive CLI chat with the offline coach.
//!
//! Implements the full chat loop: welcome banner, history replay, slash
//! commands, a "thinking" spinner, and markdown rendering of replies.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
