//! 执行器身份标识
//!
//! 一条串口总线（RS-485）最多挂载 3 个电机，电机以总线内索引区分。

use crate::ProtocolError;
use crate::constants::{ALLOWED_BUS_IDS, MAX_MOTORS_PER_BUS};
use std::fmt;

/// 串口总线 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusId(u8);

impl BusId {
    /// 创建总线 ID（范围检查）
    pub fn new(id: u8) -> Result<Self, ProtocolError> {
        if ALLOWED_BUS_IDS.contains(&id) {
            Ok(BusId(id))
        } else {
            Err(ProtocolError::InvalidValue {
                field: "bus_id",
                value: id,
            })
        }
    }

    /// 获取原始值
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// 总线内电机索引（0, 1, 2）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorIndex(u8);

impl MotorIndex {
    /// 创建电机索引（范围检查）
    pub fn new(index: u8) -> Result<Self, ProtocolError> {
        if index < MAX_MOTORS_PER_BUS {
            Ok(MotorIndex(index))
        } else {
            Err(ProtocolError::InvalidValue {
                field: "motor_id",
                value: index,
            })
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// 执行器身份（构造后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActuatorIdentity {
    pub bus: BusId,
    pub index: MotorIndex,
}

impl ActuatorIdentity {
    pub fn new(bus: BusId, index: MotorIndex) -> Self {
        Self { bus, index }
    }

    /// 从原始数值创建（两个字段均做范围检查）
    pub fn from_raw(bus_id: u8, motor_id: u8) -> Result<Self, ProtocolError> {
        Ok(Self {
            bus: BusId::new(bus_id)?,
            index: MotorIndex::new(motor_id)?,
        })
    }
}

impl fmt::Display for ActuatorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus{}/motor{}", self.bus.0, self.index.0)
    }
}
