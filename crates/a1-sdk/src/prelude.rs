//! Prelude 模块
//!
//! `use a1_sdk::prelude::*;` 引入日常控制所需的类型。

pub use a1_driver::{
    ActuatorBuilder, ActuatorController, ActuatorError, ConfigError, ControlOutcome, Gains,
    LimitKind, LimitViolation,
};
pub use a1_protocol::{ActuatorIdentity, ControlMode, MotorStatus};
pub use a1_serial::{DeviceBinder, Transport, TransportError};
pub use a1_tools::{ActuatorProfile, ProfileSet};
