//! 硬件物理常量
//!
//! A1 电机的绝对限位包络是电机侧的物理常量，换算到关节侧需要除以减速比。

/// 默认减速比（A1 电机固定为 9.1）
pub const DEFAULT_REDUCTION_RATIO: f64 = 9.1;

/// 位置绝对包络（电机侧，rad）
pub const POSITION_ENVELOPE: f64 = 823_549.0;

/// 速度绝对包络（电机侧，rad/s）
pub const SPEED_ENVELOPE: f64 = 256.0;

/// 力矩绝对包络（N·m），与减速比无关
pub const TORQUE_ENVELOPE: f64 = 128.0;

/// Kp 上限
pub const KP_MAX: f64 = 16.0;

/// Kd 上限
pub const KD_MAX: f64 = 32.0;

/// 阻尼模式使用的 Kd
pub const DAMPING_KD: f64 = 1.0;

/// 增量位置控制时下发的速度前馈（电机侧）
pub const INCREMENTAL_CRAWL_VELOCITY: f64 = 0.01;

/// 同一条总线上最多挂载的电机数
pub const MAX_MOTORS_PER_BUS: u8 = 3;

/// 受支持的总线 ID（5 保留给测试台架）
pub const ALLOWED_BUS_IDS: [u8; 5] = [0, 1, 2, 3, 5];

/// 限位物理量类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LimitKind {
    /// 关节位置
    Position,
    /// 关节速度
    Speed,
    /// 输出力矩
    Torque,
}

impl LimitKind {
    /// 该物理量的关节侧绝对包络（对称，`±envelope`）
    ///
    /// 位置和速度按减速比缩放，力矩不缩放。
    pub fn envelope(self, reduction_ratio: f64) -> f64 {
        match self {
            LimitKind::Position => POSITION_ENVELOPE / reduction_ratio,
            LimitKind::Speed => SPEED_ENVELOPE / reduction_ratio,
            LimitKind::Torque => TORQUE_ENVELOPE,
        }
    }

    /// 名称
    pub const fn name(self) -> &'static str {
        match self {
            LimitKind::Position => "position",
            LimitKind::Speed => "speed",
            LimitKind::Torque => "torque",
        }
    }
}

impl std::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
