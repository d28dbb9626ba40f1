//! PD 增益

use a1_protocol::{DAMPING_KD, KD_MAX, KP_MAX};

/// 已校验的 PD 增益（`kp ∈ [0, 16]`，`kd ∈ [0, 32]`）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gains {
    kp: f64,
    kd: f64,
}

impl Gains {
    /// 全零增益
    pub const ZERO: Self = Gains { kp: 0.0, kd: 0.0 };

    /// 阻尼模式增益（`kp = 0`，`kd = DAMPING_KD`）
    pub const DAMPING: Self = Gains {
        kp: 0.0,
        kd: DAMPING_KD,
    };

    /// 创建增益，越界（含 NaN）返回 `None`
    pub fn new(kp: f64, kd: f64) -> Option<Self> {
        let kp_ok = (0.0..=KP_MAX).contains(&kp);
        let kd_ok = (0.0..=KD_MAX).contains(&kd);
        (kp_ok && kd_ok).then_some(Self { kp, kd })
    }

    #[inline]
    pub fn kp(&self) -> f64 {
        self.kp
    }

    #[inline]
    pub fn kd(&self) -> f64 {
        self.kd
    }
}
