//! 驱动层错误类型定义

use a1_protocol::{ActuatorIdentity, LimitKind};
use a1_serial::{DeviceError, TransportError};
use std::fmt;
use thiserror::Error;

/// 限位的哪一侧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Min,
    Max,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Min => f.write_str("min"),
            BoundSide::Max => f.write_str("max"),
        }
    }
}

/// 配置错误（构造参数或限位参数非法，不可重试）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid bus id {0}: expected one of 0, 1, 2, 3, 5")]
    InvalidBusId(u8),

    #[error("Invalid motor id {0}: expected 0, 1 or 2")]
    InvalidMotorIndex(u8),

    #[error("Invalid mode {0}: expected 0 (STOP) or 10 (FOC)")]
    InvalidMode(u8),

    #[error("Invalid reduction ratio {0}: must be positive and finite")]
    InvalidReductionRatio(f64),

    #[error("{side} {kind} bound {value} is outside hardware envelope ±{envelope:.3}")]
    OutOfEnvelope {
        kind: LimitKind,
        side: BoundSide,
        value: f64,
        envelope: f64,
    },

    #[error("{kind} bounds crossed: min {min} > max {max}")]
    CrossedBounds { kind: LimitKind, min: f64, max: f64 },

    #[error("Invalid gains kp={kp}, kd={kd}: expected kp in [0, 16], kd in [0, 32]")]
    InvalidGains { kp: f64, kd: f64 },

    #[error("Position offset must be finite, got {0}")]
    NonFiniteOffset(f64),
}

/// 执行器错误
#[derive(Error, Debug)]
pub enum ActuatorError {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 无法为该身份绑定传输通道
    #[error("Device not found for {identity}: {source}")]
    DeviceNotFound {
        identity: ActuatorIdentity,
        #[source]
        source: DeviceError,
    },

    /// 交换过程中通信失败
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl ActuatorError {
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// 致命错误：必须由调用方修正输入或硬件连接，重试无意义
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Config(_) | Self::DeviceNotFound { .. } => true,
            Self::Transport(e) => e.is_disconnect(),
        }
    }
}
