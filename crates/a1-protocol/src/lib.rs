//! # A1 Protocol
//!
//! A1 关节电机的指令/状态数据模型（无硬件依赖）
//!
//! ## 模块
//!
//! - `ids`: 总线 ID 与电机索引
//! - `constants`: 硬件物理常量（限位包络、增益范围等）
//! - `command`: 控制指令（`MotorCommand`）
//! - `status`: 电机反馈（`MotorStatus`）
//!
//! ## 单位约定
//!
//! 本 crate 中的 `position`/`velocity` 均为**电机侧**（motor-space）数值，
//! 关节侧与电机侧之间的换算由上层按减速比完成。

pub mod command;
pub mod constants;
pub mod ids;
pub mod status;

// 重新导出常用类型
pub use command::*;
pub use constants::*;
pub use ids::*;
pub use status::*;

use thiserror::Error;

/// 协议层错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("Invalid value for field {field}: {value}")]
    InvalidValue { field: &'static str, value: u8 },

    #[error("Motor id mismatch: expected {expected}, got {actual}")]
    MotorIdMismatch { expected: u8, actual: u8 },

    #[error("Response checksum invalid")]
    ChecksumMismatch,
}
