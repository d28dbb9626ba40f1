//! # 执行器配置文件
//!
//! 以 TOML 描述一组执行器的身份、减速比、限位和增益：
//!
//! ```toml
//! [[actuator]]
//! name = "left_knee"
//! bus_id = 0
//! motor_id = 1
//! reduction_ratio = 9.1
//!
//! [actuator.limits]
//! max_angle = 1.5
//! min_angle = -1.5
//!
//! [actuator.gains]
//! kp = 0.2
//! kd = 1.0
//! ```
//!
//! 本模块只负责解析，数值合法性由驱动层在构造执行器时校验。

use a1_protocol::{ActuatorIdentity, DEFAULT_REDUCTION_RATIO};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_reduction_ratio() -> f64 {
    DEFAULT_REDUCTION_RATIO
}

/// 单个执行器的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorProfile {
    /// 可读名称（仅用于日志）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub bus_id: u8,

    pub motor_id: u8,

    /// 初始模式（0: STOP, 10: FOC）
    #[serde(default)]
    pub mode: u8,

    #[serde(default = "default_reduction_ratio")]
    pub reduction_ratio: f64,

    #[serde(default)]
    pub limits: LimitProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gains: Option<GainProfile>,

    /// 初始对齐偏移（只记录，不自动生效）
    #[serde(default)]
    pub pos_init_offset: f64,
}

impl ActuatorProfile {
    /// 使用默认值创建
    pub fn new(bus_id: u8, motor_id: u8) -> Self {
        Self {
            name: None,
            bus_id,
            motor_id,
            mode: 0,
            reduction_ratio: DEFAULT_REDUCTION_RATIO,
            limits: LimitProfile::default(),
            gains: None,
            pos_init_offset: 0.0,
        }
    }

    /// 日志用标签：优先使用名称，否则为 `bus{n}/motor{m}`
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => match ActuatorIdentity::from_raw(self.bus_id, self.motor_id) {
                Ok(identity) => identity.to_string(),
                Err(_) => format!("bus{}/motor{}", self.bus_id, self.motor_id),
            },
        }
    }
}

/// 限位覆盖项（未设置的项使用硬件绝对包络）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tau: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tau: Option<f64>,
}

/// PD 增益
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainProfile {
    pub kp: f64,
    pub kd: f64,
}

/// 配置文件根节点
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileSet {
    #[serde(default)]
    pub actuator: Vec<ActuatorProfile>,
}

impl ProfileSet {
    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse actuator profile TOML")
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("failed to serialize profiles")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write profile file {}", path.display()))
    }

    /// 按名称查找
    pub fn find(&self, name: &str) -> Option<&ActuatorProfile> {
        self.actuator
            .iter()
            .find(|profile| profile.name.as_deref() == Some(name))
    }
}
