//! 单执行器驱动层
//!
//! 本模块是 A1 关节电机的指令/校验/状态层，负责：
//! - 位置、速度、力矩的软限位校验（限位不得超出硬件绝对包络）
//! - 关节侧与电机侧之间按减速比换算
//! - 位置偏移（重新标零）管理
//! - 控制模式（STOP / FOC）切换
//!
//! # 错误分类
//!
//! - 配置错误（[`ConfigError`]）和传输错误（[`a1_serial::TransportError`]）是硬错误，
//!   通过 [`ActuatorError`] 返回
//! - 限位越界是控制环中的常规情况，以 [`ControlOutcome::LimitRejected`] 值返回，
//!   此时不会发生任何交换，也不会修改指令/状态
//!
//! # 并发
//!
//! 控制器持有唯一的指令/状态副本，所有操作都需要 `&mut self`，
//! 每个执行器由一个控制环独占；不同总线上的执行器可以在各自线程中并行驱动。

mod builder;
mod controller;
mod error;
pub mod gains;
pub mod limits;
mod outcome;

pub use builder::ActuatorBuilder;
pub use controller::ActuatorController;
pub use error::{ActuatorError, BoundSide, ConfigError};
pub use gains::Gains;
pub use limits::{ActuatorConfig, Bounds, Limits};
pub use outcome::{ControlOutcome, LimitViolation};

pub use a1_protocol::LimitKind;
