//! A1 SDK - 关节执行器 Rust SDK
//!
//! 将高层运动请求（绝对位置、增量位置、力矩、阻尼/刹车）转换为经过限位校验的
//! 底层指令，并跟踪电机在两次指令之间上报的状态。
//!
//! # 架构设计
//!
//! - **协议层** (`protocol`): 指令/状态数据模型与硬件常量
//! - **传输层** (`serial`): 请求/应答通道与设备绑定抽象
//! - **驱动层** (`driver`): 单执行器的校验、换算与状态机
//! - **工具层** (`tools`): TOML 配置文件
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use a1_sdk::prelude::*;
//!
//! # fn demo<B: DeviceBinder>(binder: &B) -> Result<(), ActuatorError> {
//! a1_sdk::init_logger();
//!
//! let mut motor = ActuatorBuilder::new(0, 0).build(binder)?;
//! motor.set_gains(0.2, 1.0);
//! match motor.absolute_position_control(1.0, 0.5, false)? {
//!     ControlOutcome::Applied => {}
//!     ControlOutcome::LimitRejected(violation) => eprintln!("rejected: {}", violation),
//! }
//! motor.damping_control()?;
//! # Ok(())
//! # }
//! ```

pub use a1_driver as driver;
pub use a1_protocol as protocol;
pub use a1_serial as serial;
pub use a1_tools as tools;

pub mod prelude;

// 常用类型
pub use a1_driver::{
    ActuatorBuilder, ActuatorConfig, ActuatorController, ActuatorError, Bounds, ConfigError,
    ControlOutcome, Gains, LimitKind, LimitViolation, Limits,
};
pub use a1_protocol::{ActuatorIdentity, ControlMode, MotorCommand, MotorFault, MotorStatus};
pub use a1_serial::{DeviceBinder, DeviceError, Transport, TransportError};
pub use a1_tools::{ActuatorProfile, ProfileSet};

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static LOGGER_INIT: Once = Once::new();

/// 初始化日志
///
/// 安装 `tracing_subscriber::fmt` 订阅器，过滤规则取自 `RUST_LOG`（默认 `info`），
/// 并将 `log` crate 的记录桥接到 tracing。重复调用无副作用。
pub fn init_logger() {
    LOGGER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish();

        // 调用方可能已安装自己的订阅器/logger，此时保留调用方的设置
        let _ = tracing::subscriber::set_global_default(subscriber);
        let _ = tracing_log::LogTracer::init();

        log::debug!("a1-sdk logger initialized");
    });
}
