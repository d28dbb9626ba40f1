//! # A1 Tools - 共享配置结构
//!
//! **依赖原则**: 只依赖 `a1-protocol`，不依赖驱动层和传输层
//!
//! ## 包含模块
//!
//! - `profile` - 执行器配置文件（TOML）

pub mod profile;

// 重新导出常用类型
pub use profile::{ActuatorProfile, GainProfile, LimitProfile, ProfileSet};
