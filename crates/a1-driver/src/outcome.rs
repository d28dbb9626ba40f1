//! 控制操作结果

use crate::limits::Bounds;
use a1_protocol::LimitKind;
use std::fmt;

/// 一次被拒绝的请求：哪个物理量越界、请求值与允许区间
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitViolation {
    pub kind: LimitKind,
    pub requested: f64,
    pub bounds: Bounds,
}

impl LimitViolation {
    /// 校验值是否在区间内，越界时返回违规描述
    pub(crate) fn check(kind: LimitKind, requested: f64, bounds: Bounds) -> Result<(), Self> {
        if bounds.contains(requested) {
            Ok(())
        } else {
            Err(Self {
                kind,
                requested,
                bounds,
            })
        }
    }
}

impl fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.4} outside [{:.4}, {:.4}]",
            self.kind, self.requested, self.bounds.min, self.bounds.max
        )
    }
}

/// 控制操作结果
///
/// 传输失败不在此枚举中，而是作为 `Err(ActuatorError::Transport)` 返回。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlOutcome {
    /// 指令已下发并收到应答
    Applied,
    /// 请求越界，未发生交换，指令与状态保持不变
    LimitRejected(LimitViolation),
}

impl ControlOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::LimitRejected(_))
    }

    pub fn violation(&self) -> Option<&LimitViolation> {
        match self {
            Self::Applied => None,
            Self::LimitRejected(violation) => Some(violation),
        }
    }
}

impl From<LimitViolation> for ControlOutcome {
    fn from(violation: LimitViolation) -> Self {
        Self::LimitRejected(violation)
    }
}
