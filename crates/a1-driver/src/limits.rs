//! 软限位与执行器配置
//!
//! 所有限位均为关节侧数值，且必须落在硬件绝对包络之内：
//!
//! | 物理量 | 包络 |
//! |---|---|
//! | 位置 | `±823549 / reduction_ratio` |
//! | 速度 | `±256 / reduction_ratio` |
//! | 力矩 | `±128` |
//!
//! 重新设置限位时总是对照硬件包络校验，而不是对照当前（可能更窄的）限位。

use crate::error::{BoundSide, ConfigError};
use a1_protocol::LimitKind;

/// 闭区间 `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// 对称区间 `[-envelope, envelope]`
    pub fn symmetric(envelope: f64) -> Self {
        Self {
            min: -envelope,
            max: envelope,
        }
    }

    /// 是否包含该值（NaN 不被包含）
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// 按硬件包络校验并构造区间，未给出的一侧取包络边界
    pub fn checked(
        kind: LimitKind,
        envelope: f64,
        max: Option<f64>,
        min: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let check = |side, value: f64| {
            // `!(<=)` 同时拒绝 NaN
            if !(value.abs() <= envelope) {
                Err(ConfigError::OutOfEnvelope {
                    kind,
                    side,
                    value,
                    envelope,
                })
            } else {
                Ok(value)
            }
        };

        let max = match max {
            Some(value) => check(BoundSide::Max, value)?,
            None => envelope,
        };
        let min = match min {
            Some(value) => check(BoundSide::Min, value)?,
            None => -envelope,
        };

        if min > max {
            return Err(ConfigError::CrossedBounds { kind, min, max });
        }
        Ok(Self { min, max })
    }
}

/// 三类软限位
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub position: Bounds,
    pub speed: Bounds,
    pub torque: Bounds,
}

impl Limits {
    /// 取硬件绝对包络作为限位
    pub fn envelope(reduction_ratio: f64) -> Self {
        Self {
            position: Bounds::symmetric(LimitKind::Position.envelope(reduction_ratio)),
            speed: Bounds::symmetric(LimitKind::Speed.envelope(reduction_ratio)),
            torque: Bounds::symmetric(LimitKind::Torque.envelope(reduction_ratio)),
        }
    }

    pub fn get(&self, kind: LimitKind) -> Bounds {
        match kind {
            LimitKind::Position => self.position,
            LimitKind::Speed => self.speed,
            LimitKind::Torque => self.torque,
        }
    }

    fn slot(&mut self, kind: LimitKind) -> &mut Bounds {
        match kind {
            LimitKind::Position => &mut self.position,
            LimitKind::Speed => &mut self.speed,
            LimitKind::Torque => &mut self.torque,
        }
    }
}

/// 执行器配置：减速比 + 软限位
///
/// 减速比在构造后固定；限位只能通过 [`ActuatorConfig::set_limit`] 整对替换。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorConfig {
    reduction_ratio: f64,
    limits: Limits,
}

impl ActuatorConfig {
    /// 创建配置，限位取硬件绝对包络
    pub fn new(reduction_ratio: f64) -> Result<Self, ConfigError> {
        if !(reduction_ratio.is_finite() && reduction_ratio > 0.0) {
            return Err(ConfigError::InvalidReductionRatio(reduction_ratio));
        }
        Ok(Self {
            reduction_ratio,
            limits: Limits::envelope(reduction_ratio),
        })
    }

    /// 构造时覆盖某一类限位（任一侧可省略）
    pub fn with_limit(
        mut self,
        kind: LimitKind,
        max: Option<f64>,
        min: Option<f64>,
    ) -> Result<Self, ConfigError> {
        *self.limits.slot(kind) = Bounds::checked(kind, self.envelope(kind), max, min)?;
        Ok(self)
    }

    /// 原子地替换某一类限位；校验失败时原限位保持不变
    pub fn set_limit(&mut self, kind: LimitKind, max: f64, min: f64) -> Result<(), ConfigError> {
        let bounds = Bounds::checked(kind, self.envelope(kind), Some(max), Some(min))?;
        *self.limits.slot(kind) = bounds;
        Ok(())
    }

    #[inline]
    pub fn reduction_ratio(&self) -> f64 {
        self.reduction_ratio
    }

    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// 该物理量的硬件绝对包络（关节侧）
    pub fn envelope(&self, kind: LimitKind) -> f64 {
        kind.envelope(self.reduction_ratio)
    }

    /// 关节侧 → 电机侧
    #[inline]
    pub fn to_motor(&self, joint: f64) -> f64 {
        joint * self.reduction_ratio
    }
}
