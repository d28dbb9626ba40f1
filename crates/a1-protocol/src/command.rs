//! 控制指令
//!
//! `MotorCommand` 是每次交换时下发给电机的完整指令，位置/速度均为电机侧数值。

use crate::ProtocolError;
use crate::ids::ActuatorIdentity;

/// 电机控制模式
///
/// - `Stop` (0)：刹车模式，其余控制参数无效，电机停止转动
/// - `Foc` (10)：闭环 FOC 控制模式
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[num_enum(error_type(name = ProtocolError, constructor = ControlMode::invalid))]
#[repr(u8)]
pub enum ControlMode {
    #[default]
    Stop = 0,
    Foc = 10,
}

impl ControlMode {
    fn invalid(value: u8) -> ProtocolError {
        ProtocolError::InvalidValue {
            field: "mode",
            value,
        }
    }
}

/// 电机型号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotorType {
    #[default]
    A1,
}

/// 电机控制指令
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorCommand {
    pub motor_type: MotorType,
    /// 总线内电机索引
    pub motor_id: u8,
    pub mode: ControlMode,
    /// 目标位置（电机侧）
    pub position: f64,
    /// 目标速度（电机侧）
    pub velocity: f64,
    pub kp: f64,
    pub kd: f64,
    /// 前馈力矩（N·m）
    pub torque: f64,
}

impl MotorCommand {
    /// 创建目标清零的初始指令
    pub fn new(identity: ActuatorIdentity, mode: ControlMode) -> Self {
        Self {
            motor_type: MotorType::A1,
            motor_id: identity.index.value(),
            mode,
            ..Default::default()
        }
    }
}
