//! sponsor - 终端赞助页
//!
//! 模块结构：
//! - core: 输入事件与语义命令
//! - kernel: 无界面的核心（目录、选中状态机、服务）
//! - app: 赞助页的输入映射与渲染
//! - tui: 终端模式管理与 View 抽象

pub mod app;
pub mod core;
pub mod kernel;
pub mod tui;
