//! Builder 模式实现
//!
//! 提供链式构造 [`ActuatorController`] 的便捷方式。所有参数在 `build` 时统一校验，
//! 校验通过后才会绑定传输通道。

use crate::controller::ActuatorController;
use crate::error::{ActuatorError, ConfigError};
use crate::gains::Gains;
use crate::limits::ActuatorConfig;
use a1_protocol::{
    ActuatorIdentity, BusId, ControlMode, DEFAULT_REDUCTION_RATIO, LimitKind, MotorIndex,
};
use a1_serial::{DeviceBinder, Transport};
use a1_tools::ActuatorProfile;
use tracing::debug;

type Validated = (ActuatorIdentity, ControlMode, ActuatorConfig, Gains);

/// 执行器 Builder（链式构造）
///
/// # Example
///
/// ```no_run
/// use a1_driver::ActuatorBuilder;
/// use a1_protocol::ControlMode;
/// # fn demo<B: a1_serial::DeviceBinder>(binder: &B) -> Result<(), a1_driver::ActuatorError> {
/// let mut motor = ActuatorBuilder::new(0, 1)
///     .mode(ControlMode::Stop)
///     .reduction_ratio(9.1)
///     .max_angle(1.5)
///     .min_angle(-1.5)
///     .build(binder)?;
///
/// motor.damping_control()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ActuatorBuilder {
    bus_id: u8,
    motor_id: u8,
    /// 原始模式值，`build` 时校验
    mode: u8,
    reduction_ratio: f64,
    max_angle: Option<f64>,
    min_angle: Option<f64>,
    max_speed: Option<f64>,
    min_speed: Option<f64>,
    max_tau: Option<f64>,
    min_tau: Option<f64>,
    gains: Option<(f64, f64)>,
    pos_init_offset: f64,
}

impl ActuatorBuilder {
    /// 创建新的 Builder（默认 STOP 模式、减速比 9.1、限位取硬件包络）
    pub fn new(bus_id: u8, motor_id: u8) -> Self {
        Self {
            bus_id,
            motor_id,
            mode: ControlMode::Stop.into(),
            reduction_ratio: DEFAULT_REDUCTION_RATIO,
            max_angle: None,
            min_angle: None,
            max_speed: None,
            min_speed: None,
            max_tau: None,
            min_tau: None,
            gains: None,
            pos_init_offset: 0.0,
        }
    }

    /// 从配置文件条目创建
    pub fn from_profile(profile: &ActuatorProfile) -> Self {
        debug!("builder from profile {}", profile.label());
        let limits = &profile.limits;
        Self {
            bus_id: profile.bus_id,
            motor_id: profile.motor_id,
            mode: profile.mode,
            reduction_ratio: profile.reduction_ratio,
            max_angle: limits.max_angle,
            min_angle: limits.min_angle,
            max_speed: limits.max_speed,
            min_speed: limits.min_speed,
            max_tau: limits.max_tau,
            min_tau: limits.min_tau,
            gains: profile.gains.map(|g| (g.kp, g.kd)),
            pos_init_offset: profile.pos_init_offset,
        }
    }

    pub fn mode(mut self, mode: ControlMode) -> Self {
        self.mode = mode.into();
        self
    }

    /// 以原始数值设置模式（0: STOP, 10: FOC）
    pub fn mode_raw(mut self, mode: u8) -> Self {
        self.mode = mode;
        self
    }

    pub fn reduction_ratio(mut self, reduction_ratio: f64) -> Self {
        self.reduction_ratio = reduction_ratio;
        self
    }

    pub fn max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = Some(max_angle);
        self
    }

    pub fn min_angle(mut self, min_angle: f64) -> Self {
        self.min_angle = Some(min_angle);
        self
    }

    pub fn max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    pub fn min_speed(mut self, min_speed: f64) -> Self {
        self.min_speed = Some(min_speed);
        self
    }

    pub fn max_tau(mut self, max_tau: f64) -> Self {
        self.max_tau = Some(max_tau);
        self
    }

    pub fn min_tau(mut self, min_tau: f64) -> Self {
        self.min_tau = Some(min_tau);
        self
    }

    /// 初始 PD 增益（可选，默认全零）
    pub fn gains(mut self, kp: f64, kd: f64) -> Self {
        self.gains = Some((kp, kd));
        self
    }

    /// 初始对齐偏移：只记录，不参与位置控制
    pub fn pos_init_offset(mut self, pos_init_offset: f64) -> Self {
        self.pos_init_offset = pos_init_offset;
        self
    }

    /// 校验全部参数
    fn validate(&self) -> Result<Validated, ConfigError> {
        let bus = BusId::new(self.bus_id).map_err(|_| ConfigError::InvalidBusId(self.bus_id))?;
        let index = MotorIndex::new(self.motor_id)
            .map_err(|_| ConfigError::InvalidMotorIndex(self.motor_id))?;
        let mode =
            ControlMode::try_from(self.mode).map_err(|_| ConfigError::InvalidMode(self.mode))?;

        let config = ActuatorConfig::new(self.reduction_ratio)?
            .with_limit(LimitKind::Position, self.max_angle, self.min_angle)?
            .with_limit(LimitKind::Speed, self.max_speed, self.min_speed)?
            .with_limit(LimitKind::Torque, self.max_tau, self.min_tau)?;

        let gains = match self.gains {
            Some((kp, kd)) => Gains::new(kp, kd).ok_or(ConfigError::InvalidGains { kp, kd })?,
            None => Gains::ZERO,
        };

        if !self.pos_init_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.pos_init_offset));
        }

        Ok((ActuatorIdentity::new(bus, index), mode, config, gains))
    }

    /// 校验参数并通过 `binder` 绑定传输通道
    ///
    /// # Errors
    /// - `ActuatorError::Config`: 参数非法（此时不会尝试绑定）
    /// - `ActuatorError::DeviceNotFound`: 无法为该身份绑定传输通道
    pub fn build<B: DeviceBinder>(
        self,
        binder: &B,
    ) -> Result<ActuatorController<B::Transport>, ActuatorError> {
        let (identity, mode, config, gains) = self.validate()?;
        let transport = binder
            .bind(&identity)
            .map_err(|source| ActuatorError::DeviceNotFound { identity, source })?;
        debug!("{}: transport bound", identity);
        Ok(self.assemble(identity, mode, config, gains, transport))
    }

    /// 校验参数并使用已打开的传输通道
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> Result<ActuatorController<T>, ActuatorError> {
        let (identity, mode, config, gains) = self.validate()?;
        Ok(self.assemble(identity, mode, config, gains, transport))
    }

    fn assemble<T: Transport>(
        &self,
        identity: ActuatorIdentity,
        mode: ControlMode,
        config: ActuatorConfig,
        gains: Gains,
        transport: T,
    ) -> ActuatorController<T> {
        debug!(
            "{}: created, mode={:?} ratio={} limits={:?}",
            identity,
            mode,
            config.reduction_ratio(),
            config.limits()
        );
        ActuatorController::new(identity, mode, config, gains, self.pos_init_offset, transport)
    }
}
