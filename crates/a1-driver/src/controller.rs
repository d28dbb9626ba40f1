//! 单执行器控制器
//!
//! [`ActuatorController`] 持有配置、最近一次组装的指令和最近一次收到的状态，
//! 对外提供经过限位校验的控制操作。
//!
//! # 控制流
//!
//! 校验请求 → 关节侧换算到电机侧 → 组装指令 → 一次交换 → 保存应答。
//! 校验失败时不交换、不修改任何指令/状态。

use crate::error::{ActuatorError, ConfigError};
use crate::gains::Gains;
use crate::limits::{ActuatorConfig, Limits};
use crate::outcome::{ControlOutcome, LimitViolation};
use a1_protocol::{
    ActuatorIdentity, ControlMode, INCREMENTAL_CRAWL_VELOCITY, LimitKind, MotorCommand,
    MotorStatus,
};
use a1_serial::Transport;
use tracing::{info, trace, warn};

/// 单个 A1 执行器的控制器
///
/// 通过 [`ActuatorBuilder`](crate::ActuatorBuilder) 构造。
#[derive(Debug)]
pub struct ActuatorController<T> {
    identity: ActuatorIdentity,
    config: ActuatorConfig,
    /// 用户配置的增益，位置控制下发时使用
    gains: Gains,
    /// 绝对位置控制时叠加的偏移（关节侧），只能通过重新标零修改
    pos_offset: f64,
    /// 构造时记录的初始对齐偏移（关节侧），只记录不生效
    pos_init_offset: f64,
    command: MotorCommand,
    status: MotorStatus,
    transport: T,
}

impl<T: Transport> ActuatorController<T> {
    pub(crate) fn new(
        identity: ActuatorIdentity,
        mode: ControlMode,
        config: ActuatorConfig,
        gains: Gains,
        pos_init_offset: f64,
        transport: T,
    ) -> Self {
        let mut command = MotorCommand::new(identity, mode);
        command.kp = gains.kp();
        command.kd = gains.kd();
        Self {
            identity,
            config,
            gains,
            pos_offset: 0.0,
            pos_init_offset,
            command,
            status: MotorStatus::default(),
            transport,
        }
    }

    // ==================== 只读访问 ====================

    pub fn identity(&self) -> ActuatorIdentity {
        self.identity
    }

    pub fn config(&self) -> &ActuatorConfig {
        &self.config
    }

    pub fn limits(&self) -> &Limits {
        self.config.limits()
    }

    pub fn reduction_ratio(&self) -> f64 {
        self.config.reduction_ratio()
    }

    pub fn gains(&self) -> Gains {
        self.gains
    }

    /// 最近一次组装的指令
    pub fn command(&self) -> &MotorCommand {
        &self.command
    }

    /// 最近一次收到的状态（尚未交换时为默认值）
    pub fn status(&self) -> &MotorStatus {
        &self.status
    }

    /// 当前指令模式
    pub fn mode(&self) -> ControlMode {
        self.command.mode
    }

    pub fn pos_offset(&self) -> f64 {
        self.pos_offset
    }

    pub fn pos_init_offset(&self) -> f64 {
        self.pos_init_offset
    }

    /// 最近一次上报的关节侧位置
    pub fn joint_position(&self) -> f64 {
        self.status.joint_position(self.reduction_ratio())
    }

    /// 最近一次上报的关节侧速度
    pub fn joint_velocity(&self) -> f64 {
        self.status.joint_velocity(self.reduction_ratio())
    }

    // ==================== 配置 ====================

    /// 设置 PD 增益（`kp ∈ [0, 16]`，`kd ∈ [0, 32]`）
    ///
    /// 越界时返回 `false` 且不修改已存增益；成功时同时写入当前指令，
    /// 但本身不触发交换。
    pub fn set_gains(&mut self, kp: f64, kd: f64) -> bool {
        match Gains::new(kp, kd) {
            Some(gains) => {
                self.gains = gains;
                self.command.kp = kp;
                self.command.kd = kd;
                true
            }
            None => {
                warn!("{}: gains kp={} kd={} rejected", self.identity, kp, kd);
                false
            }
        }
    }

    /// 替换某一类限位（对照硬件包络校验）
    pub fn set_limit(&mut self, kind: LimitKind, max: f64, min: f64) -> Result<(), ConfigError> {
        self.config.set_limit(kind, max, min)?;
        trace!("{}: {} limits set to [{}, {}]", self.identity, kind, min, max);
        Ok(())
    }

    pub fn set_limit_position(
        &mut self,
        max_angle: f64,
        min_angle: f64,
    ) -> Result<(), ConfigError> {
        self.set_limit(LimitKind::Position, max_angle, min_angle)
    }

    pub fn set_limit_speed(&mut self, max_speed: f64, min_speed: f64) -> Result<(), ConfigError> {
        self.set_limit(LimitKind::Speed, max_speed, min_speed)
    }

    pub fn set_limit_torque(&mut self, max_tau: f64, min_tau: f64) -> Result<(), ConfigError> {
        self.set_limit(LimitKind::Torque, max_tau, min_tau)
    }

    /// 显式设置位置偏移（关节侧）
    pub fn set_position_offset(&mut self, offset: f64) -> Result<(), ConfigError> {
        if !offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(offset));
        }
        self.pos_offset = offset;
        info!("{}: position offset set to {:.6}", self.identity, offset);
        Ok(())
    }

    /// 以最近一次上报的位置为新零点，返回新的偏移
    ///
    /// 之后 `absolute_position_control(_, 0.0, true)` 即指向该位置。不触发交换。
    pub fn rezero_at_current(&mut self) -> f64 {
        self.pos_offset = self.joint_position();
        info!(
            "{}: re-zeroed at joint position {:.6}",
            self.identity, self.pos_offset
        );
        self.pos_offset
    }

    // ==================== 交换 ====================

    /// 以当前指令做一次交换并刷新状态
    ///
    /// 不会合成空操作指令：重复发送的是最近一次组装的指令。
    pub fn read_status(&mut self) -> Result<&MotorStatus, ActuatorError> {
        self.exchange()?;
        Ok(&self.status)
    }

    /// 绝对位置控制
    ///
    /// `apply_offset` 为真时目标叠加 `pos_offset`。越界时不交换、不修改指令。
    pub fn absolute_position_control(
        &mut self,
        torque: f64,
        target_position: f64,
        apply_offset: bool,
    ) -> Result<ControlOutcome, ActuatorError> {
        let effective = if apply_offset {
            target_position + self.pos_offset
        } else {
            target_position
        };
        if let Err(violation) = self.check_position_and_torque(effective, torque) {
            return Ok(self.reject(violation));
        }

        self.assemble_foc(self.config.to_motor(effective), 0.0, self.gains, torque);
        self.exchange()?;
        Ok(ControlOutcome::Applied)
    }

    pub fn absolute_position_control_with_offset(
        &mut self,
        torque: f64,
        target_position: f64,
    ) -> Result<ControlOutcome, ActuatorError> {
        self.absolute_position_control(torque, target_position, true)
    }

    pub fn absolute_position_control_without_offset(
        &mut self,
        torque: f64,
        target_position: f64,
    ) -> Result<ControlOutcome, ActuatorError> {
        self.absolute_position_control(torque, target_position, false)
    }

    /// 增量位置控制
    ///
    /// 基准点是最近一次**上报**的位置（`status.position / reduction_ratio`），
    /// 而不是上一次请求的目标，因此连续调用跟随的是真实位置。
    pub fn incremental_position_control(
        &mut self,
        torque: f64,
        delta_position: f64,
    ) -> Result<ControlOutcome, ActuatorError> {
        let aim = self.joint_position() + delta_position;
        if let Err(violation) = self.check_position_and_torque(aim, torque) {
            return Ok(self.reject(violation));
        }

        self.assemble_foc(
            self.config.to_motor(aim),
            INCREMENTAL_CRAWL_VELOCITY,
            self.gains,
            torque,
        );
        self.exchange()?;
        Ok(ControlOutcome::Applied)
    }

    /// 纯力矩控制
    ///
    /// 本次指令的增益清零，已配置的增益保持不变。
    pub fn torque_control(&mut self, torque: f64) -> Result<ControlOutcome, ActuatorError> {
        if let Err(violation) = self.check(LimitKind::Torque, torque) {
            return Ok(self.reject(violation));
        }

        self.assemble_foc(0.0, 0.0, Gains::ZERO, torque);
        self.exchange()?;
        Ok(ControlOutcome::Applied)
    }

    /// 阻尼控制（安全/被动状态），不做校验
    pub fn damping_control(&mut self) -> Result<(), ActuatorError> {
        self.assemble_foc(0.0, 0.0, Gains::DAMPING, 0.0);
        self.exchange()
    }

    /// 停止（刹车），只切换模式，其余指令字段保持不变
    pub fn stop(&mut self) -> Result<(), ActuatorError> {
        self.command.mode = ControlMode::Stop;
        info!("{}: stop", self.identity);
        self.exchange()
    }

    // ==================== 内部 ====================

    fn check(&self, kind: LimitKind, value: f64) -> Result<(), LimitViolation> {
        LimitViolation::check(kind, value, self.limits().get(kind))
    }

    fn check_position_and_torque(&self, position: f64, torque: f64) -> Result<(), LimitViolation> {
        self.check(LimitKind::Position, position)?;
        self.check(LimitKind::Torque, torque)
    }

    fn reject(&self, violation: LimitViolation) -> ControlOutcome {
        warn!("{}: request rejected, {}", self.identity, violation);
        violation.into()
    }

    fn assemble_foc(&mut self, position: f64, velocity: f64, gains: Gains, torque: f64) {
        let cmd = &mut self.command;
        cmd.mode = ControlMode::Foc;
        cmd.position = position;
        cmd.velocity = velocity;
        cmd.kp = gains.kp();
        cmd.kd = gains.kd();
        cmd.torque = torque;
    }

    /// 一次交换；失败时指令保留为已组装的值，状态不变
    ///
    /// 校验失败或电机号不符的应答同样视为传输失败，不会覆盖已保存的状态。
    fn exchange(&mut self) -> Result<(), ActuatorError> {
        let cmd = &self.command;
        trace!(
            "{}: exchange mode={:?} q={:.4} dq={:.4} kp={} kd={} tau={:.3}",
            self.identity, cmd.mode, cmd.position, cmd.velocity, cmd.kp, cmd.kd, cmd.torque
        );

        let motor_id = self.command.motor_id;
        let status = self
            .transport
            .exchange(&self.command)
            .and_then(|status| {
                status.validate(motor_id)?;
                Ok(status)
            })
            .map_err(|e| {
                warn!("{}: exchange failed: {}", self.identity, e);
                ActuatorError::Transport(e)
            })?;

        let fault = status.fault();
        if fault.is_fault() {
            warn!("{}: motor reports fault {:?}", self.identity, fault);
        }
        self.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActuatorBuilder;
    use a1_protocol::ProtocolError;
    use a1_serial::{MockActuator, MockFailure, MockTransport, TransportError};
    use std::collections::VecDeque;

    const RATIO: f64 = 9.1;

    fn setup() -> (MockActuator, ActuatorController<MockTransport>) {
        let actuator = MockActuator::new(ActuatorIdentity::from_raw(0, 1).unwrap());
        let motor = ActuatorBuilder::new(0, 1)
            .build_with_transport(actuator.transport())
            .unwrap();
        (actuator, motor)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    /// 按顺序返回预置应答，用完后报断线
    struct ScriptedTransport {
        responses: VecDeque<MotorStatus>,
    }

    impl Transport for ScriptedTransport {
        fn exchange(&mut self, _command: &MotorCommand) -> Result<MotorStatus, TransportError> {
            self.responses.pop_front().ok_or(TransportError::Disconnected)
        }
    }

    fn reading(motor_id: u8, joint_position: f64, correct: bool) -> MotorStatus {
        MotorStatus {
            motor_id,
            position: joint_position * RATIO,
            correct,
            ..Default::default()
        }
    }

    #[test]
    fn test_corrupt_response_not_stored() {
        let transport = ScriptedTransport {
            responses: VecDeque::from(vec![
                reading(0, 1.0, true),
                reading(2, 50.0, true),
                reading(0, 50.0, false),
            ]),
        };
        let mut motor = ActuatorBuilder::new(0, 0)
            .build_with_transport(transport)
            .unwrap();

        motor.read_status().unwrap();
        assert_close(motor.joint_position(), 1.0);

        let err = motor.read_status().unwrap_err();
        assert!(matches!(
            err,
            ActuatorError::Transport(TransportError::Protocol(ProtocolError::MotorIdMismatch {
                expected: 0,
                actual: 2
            }))
        ));
        assert_close(motor.joint_position(), 1.0);

        let err = motor.read_status().unwrap_err();
        assert!(matches!(
            err,
            ActuatorError::Transport(TransportError::Protocol(ProtocolError::ChecksumMismatch))
        ));
        assert_close(motor.joint_position(), 1.0);
        assert_eq!(motor.status().motor_id, 0);

        // 增量基准仍是最后一次有效应答
        let err = motor.incremental_position_control(0.0, 0.5).unwrap_err();
        assert!(err.is_transport_error());
        assert_close(motor.command().position, 1.5 * RATIO);
    }

    #[test]
    fn test_set_gains() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(0.2, 1.0));
        assert_eq!(motor.command().kp, 0.2);
        assert_eq!(motor.command().kd, 1.0);

        assert!(!motor.set_gains(20.0, 5.0));
        assert_eq!(motor.gains(), Gains::new(0.2, 1.0).unwrap());
        assert_eq!(motor.command().kp, 0.2);

        // 不触发交换
        assert_eq!(actuator.exchange_count(), 0);
    }

    #[test]
    fn test_absolute_position_applied() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(0.5, 2.0));

        let outcome = motor.absolute_position_control(10.0, 1.5, false).unwrap();
        assert!(outcome.is_applied());

        let cmd = actuator.last_command().unwrap();
        assert_eq!(cmd.mode, ControlMode::Foc);
        assert_close(cmd.position, 1.5 * RATIO);
        assert_eq!(cmd.velocity, 0.0);
        assert_eq!(cmd.kp, 0.5);
        assert_eq!(cmd.kd, 2.0);
        assert_eq!(cmd.torque, 10.0);
        assert_eq!(actuator.exchange_count(), 1);
        assert_close(motor.joint_position(), 1.5);
    }

    #[test]
    fn test_absolute_position_envelope_example() {
        let (actuator, mut motor) = setup();

        // 823549 / 9.1 = 90499.89
        let outcome = motor.absolute_position_control(10.0, 90_500.0, false).unwrap();
        let violation = outcome.violation().unwrap();
        assert_eq!(violation.kind, LimitKind::Position);
        assert_eq!(violation.requested, 90_500.0);
        assert!((violation.bounds.max - 90_499.890).abs() < 1e-3);
        assert_eq!(actuator.exchange_count(), 0);

        let outcome = motor.absolute_position_control(10.0, 90_499.0, false).unwrap();
        assert!(outcome.is_applied());
        assert!((motor.command().position - 90_499.0 * RATIO).abs() < 1e-6);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(1.0, 1.0));
        motor.absolute_position_control(5.0, 0.3, false).unwrap();
        motor.set_limit_position(1.0, -1.0).unwrap();

        let command_before = *motor.command();
        let status_before = *motor.status();

        let outcome = motor.absolute_position_control(5.0, 1.0 + 1e-9, false).unwrap();
        assert!(outcome.is_rejected());
        let outcome = motor.absolute_position_control(200.0, 0.0, false).unwrap();
        assert_eq!(outcome.violation().unwrap().kind, LimitKind::Torque);
        let outcome = motor.incremental_position_control(0.0, 5.0).unwrap();
        assert!(outcome.is_rejected());

        assert_eq!(*motor.command(), command_before);
        assert_eq!(*motor.status(), status_before);
        assert_eq!(actuator.exchange_count(), 1);
    }

    #[test]
    fn test_nan_request_rejected() {
        let (actuator, mut motor) = setup();
        let outcome = motor.absolute_position_control(0.0, f64::NAN, false).unwrap();
        assert!(outcome.is_rejected());
        assert!(motor.torque_control(f64::NAN).unwrap().is_rejected());
        assert_eq!(actuator.exchange_count(), 0);
    }

    #[test]
    fn test_offset_applied_only_when_requested() {
        let (actuator, mut motor) = setup();
        motor.set_position_offset(0.5).unwrap();

        motor.absolute_position_control(0.0, 1.0, true).unwrap();
        assert_close(actuator.last_command().unwrap().position, 1.5 * RATIO);

        motor.absolute_position_control_without_offset(0.0, 1.0).unwrap();
        assert_close(actuator.last_command().unwrap().position, 1.0 * RATIO);

        motor.absolute_position_control_with_offset(0.0, -0.5).unwrap();
        assert_close(actuator.last_command().unwrap().position, 0.0);
    }

    #[test]
    fn test_offset_counts_toward_limits() {
        let (actuator, mut motor) = setup();
        motor.set_limit_position(1.0, -1.0).unwrap();
        motor.set_position_offset(0.5).unwrap();

        let outcome = motor.absolute_position_control(0.0, 0.8, true).unwrap();
        assert_close(outcome.violation().unwrap().requested, 1.3);
        assert!(motor.absolute_position_control(0.0, 0.8, false).unwrap().is_applied());
        assert_eq!(actuator.exchange_count(), 1);
    }

    #[test]
    fn test_pos_init_offset_not_applied() {
        let actuator = MockActuator::new(ActuatorIdentity::from_raw(0, 0).unwrap());
        let mut motor = ActuatorBuilder::new(0, 0)
            .pos_init_offset(2.0)
            .build_with_transport(actuator.transport())
            .unwrap();

        motor.absolute_position_control(0.0, 1.0, true).unwrap();
        assert_close(actuator.last_command().unwrap().position, 1.0 * RATIO);
    }

    #[test]
    fn test_incremental_uses_reported_position() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(1.0, 1.0));
        actuator.set_tracking(false);

        // 请求 2.0，但电机只到达 1.0
        motor.absolute_position_control(0.0, 2.0, false).unwrap();
        actuator.set_position(1.0 * RATIO);
        motor.read_status().unwrap();

        let outcome = motor.incremental_position_control(0.0, 0.0).unwrap();
        assert!(outcome.is_applied());
        let cmd = actuator.last_command().unwrap();
        assert_close(cmd.position, 1.0 * RATIO);
        assert_eq!(cmd.velocity, INCREMENTAL_CRAWL_VELOCITY);
        assert_eq!(cmd.mode, ControlMode::Foc);
    }

    #[test]
    fn test_incremental_accumulates_from_status() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(1.0, 1.0));

        motor.incremental_position_control(1.0, 0.2).unwrap();
        motor.incremental_position_control(1.0, -0.1).unwrap();
        assert_close(actuator.last_command().unwrap().position, 0.1 * RATIO);
        assert_close(motor.joint_position(), 0.1);
    }

    #[test]
    fn test_torque_control() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(3.0, 4.0));

        let outcome = motor.torque_control(200.0).unwrap();
        assert!(outcome.is_rejected());
        assert_eq!(actuator.exchange_count(), 0);

        assert!(motor.torque_control(-12.5).unwrap().is_applied());
        let cmd = actuator.last_command().unwrap();
        assert_eq!(cmd.mode, ControlMode::Foc);
        assert_eq!(cmd.position, 0.0);
        assert_eq!(cmd.velocity, 0.0);
        assert_eq!(cmd.kp, 0.0);
        assert_eq!(cmd.kd, 0.0);
        assert_eq!(cmd.torque, -12.5);

        // 已配置的增益不受影响
        assert_eq!(motor.gains(), Gains::new(3.0, 4.0).unwrap());
        motor.absolute_position_control(0.0, 0.1, false).unwrap();
        let cmd = actuator.last_command().unwrap();
        assert_eq!(cmd.kp, 3.0);
        assert_eq!(cmd.kd, 4.0);
    }

    #[test]
    fn test_damping_control() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(5.0, 5.0));
        motor.torque_control(7.0).unwrap();

        motor.damping_control().unwrap();
        let cmd = actuator.last_command().unwrap();
        assert_eq!(cmd.mode, ControlMode::Foc);
        assert_eq!(cmd.position, 0.0);
        assert_eq!(cmd.velocity, 0.0);
        assert_eq!(cmd.kp, 0.0);
        assert_eq!(cmd.kd, 1.0);
        assert_eq!(cmd.torque, 0.0);
        assert_eq!(motor.gains(), Gains::new(5.0, 5.0).unwrap());
    }

    #[test]
    fn test_stop_only_changes_mode() {
        let (actuator, mut motor) = setup();
        assert!(motor.set_gains(1.0, 1.0));
        motor.absolute_position_control(2.0, 0.5, false).unwrap();
        let before = *motor.command();

        motor.stop().unwrap();
        assert_eq!(motor.mode(), ControlMode::Stop);
        let cmd = actuator.last_command().unwrap();
        assert_eq!(cmd.mode, ControlMode::Stop);
        assert_eq!(cmd.position, before.position);
        assert_eq!(cmd.torque, before.torque);
        assert_eq!(motor.status().mode, ControlMode::Stop);

        // STOP 持续到下一次控制操作
        motor.read_status().unwrap();
        assert_eq!(actuator.last_command().unwrap().mode, ControlMode::Stop);
        motor.damping_control().unwrap();
        assert_eq!(motor.mode(), ControlMode::Foc);
    }

    #[test]
    fn test_read_status_resends_last_command() {
        let (actuator, mut motor) = setup();
        motor.damping_control().unwrap();
        let status = *motor.read_status().unwrap();

        let commands = actuator.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], commands[1]);
        assert_eq!(status.mode, ControlMode::Foc);
    }

    #[test]
    fn test_transport_failure_propagates() {
        let (actuator, mut motor) = setup();
        motor.damping_control().unwrap();
        let status_before = *motor.status();

        actuator.fail_next(MockFailure::Timeout);
        let err = motor.torque_control(1.0).unwrap_err();
        assert!(matches!(
            err,
            ActuatorError::Transport(a1_serial::TransportError::Timeout)
        ));
        assert_eq!(*motor.status(), status_before);
        // 指令保留为已组装的值
        assert_eq!(motor.command().torque, 1.0);

        actuator.fail_next(MockFailure::Disconnected);
        let err = motor.read_status().unwrap_err();
        assert!(err.is_fatal());

        actuator.fail_next(MockFailure::Malformed);
        assert!(motor.stop().is_err());
        assert!(motor.damping_control().is_ok());
    }

    #[test]
    fn test_rezero_at_current() {
        let (actuator, mut motor) = setup();
        actuator.set_position(0.4 * RATIO);
        motor.read_status().unwrap();

        let offset = motor.rezero_at_current();
        assert_close(offset, 0.4);
        assert_close(motor.pos_offset(), 0.4);

        motor.absolute_position_control(0.0, 0.0, true).unwrap();
        assert_close(actuator.last_command().unwrap().position, 0.4 * RATIO);
    }

    #[test]
    fn test_set_position_offset_rejects_non_finite() {
        let (_actuator, mut motor) = setup();
        motor.set_position_offset(0.25).unwrap();
        assert!(matches!(
            motor.set_position_offset(f64::INFINITY),
            Err(ConfigError::NonFiniteOffset(_))
        ));
        assert_eq!(motor.pos_offset(), 0.25);
    }

    #[test]
    fn test_set_limits() {
        let (_actuator, mut motor) = setup();
        motor.set_limit_torque(10.0, -10.0).unwrap();
        motor.set_limit_speed(1.0, -1.0).unwrap();
        assert!(motor.torque_control(10.5).unwrap().is_rejected());
        assert_eq!(motor.limits().speed.max, 1.0);

        // 放宽回硬件包络
        motor.set_limit_torque(128.0, -128.0).unwrap();
        assert!(motor.torque_control(100.0).unwrap().is_applied());

        assert!(motor.set_limit_torque(128.1, 0.0).is_err());
        assert!(motor.set_limit_position(1.0, 2.0).is_err());
        assert_eq!(motor.limits().torque.max, 128.0);
    }

    #[test]
    fn test_fault_code_reported_in_status() {
        let (actuator, mut motor) = setup();
        actuator.set_fault_code(1);
        actuator.set_temperature(80);
        let status = motor.read_status().unwrap();
        assert_eq!(status.fault(), a1_protocol::MotorFault::Overheat);
        assert_eq!(status.temperature, 80);
    }
}
