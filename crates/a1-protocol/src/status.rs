//! 电机反馈状态
//!
//! 每次成功交换后由传输层返回，位置/速度均为电机侧数值。

use crate::ProtocolError;
use crate::command::{ControlMode, MotorType};

/// 电机故障码
#[derive(Debug, Clone, Copy, PartialEq, Eq, num_enum::FromPrimitive)]
#[repr(u8)]
pub enum MotorFault {
    /// 正常
    None = 0,
    /// 过热
    Overheat = 1,
    /// 过流
    Overcurrent = 2,
    /// 过压
    Overvoltage = 3,
    /// 编码器故障
    EncoderFault = 4,
    /// 未定义的故障码
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl MotorFault {
    pub fn is_fault(self) -> bool {
        self != Self::None
    }
}

/// 电机反馈
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorStatus {
    pub motor_type: MotorType,
    pub motor_id: u8,
    pub mode: ControlMode,
    /// 当前位置（电机侧）
    pub position: f64,
    /// 当前速度（电机侧）
    pub velocity: f64,
    /// 当前力矩（N·m）
    pub torque: f64,
    /// 当前加速度（电机侧）
    pub acceleration: f64,
    /// 电机温度（°C）
    pub temperature: i32,
    /// 原始故障码，见 [`MotorFault`]
    pub fault_code: u8,
    /// 应答校验是否通过
    pub correct: bool,
}

impl MotorStatus {
    /// 解码故障码
    pub fn fault(&self) -> MotorFault {
        MotorFault::from(self.fault_code)
    }

    /// 关节侧位置
    #[inline]
    pub fn joint_position(&self, reduction_ratio: f64) -> f64 {
        self.position / reduction_ratio
    }

    /// 关节侧速度
    #[inline]
    pub fn joint_velocity(&self, reduction_ratio: f64) -> f64 {
        self.velocity / reduction_ratio
    }

    /// 校验应答是否属于指定电机且校验通过
    pub fn validate(&self, expected_motor_id: u8) -> Result<(), ProtocolError> {
        if !self.correct {
            return Err(ProtocolError::ChecksumMismatch);
        }
        if self.motor_id != expected_motor_id {
            return Err(ProtocolError::MotorIdMismatch {
                expected: expected_motor_id,
                actual: self.motor_id,
            });
        }
        Ok(())
    }
}
