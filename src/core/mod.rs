//! 核心框架模块
//!
//! - Event: 统一输入事件定义
//! - Command: 语义命令

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, MousePosition};
