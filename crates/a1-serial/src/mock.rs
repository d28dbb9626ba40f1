//! Mock 传输层
//!
//! 内存中的模拟执行器总线，用于无硬件测试与演示。
//!
//! - [`MockBus`]：实现 [`DeviceBinder`]，只有注册过的身份才能绑定成功
//! - [`MockActuator`]：测试侧句柄，可读写模拟电机状态、注入故障
//! - [`MockTransport`]：控制器侧句柄，实现 [`Transport`]
//!
//! 模拟规则：FOC 模式且 `kp > 0` 时，位置理想跟踪指令位置（可通过
//! [`MockActuator::set_tracking`] 关闭）；反馈力矩等于指令力矩；STOP 模式下速度归零。

use crate::{DeviceBinder, DeviceError, Transport, TransportError};
use a1_protocol::{ActuatorIdentity, ControlMode, MotorCommand, MotorStatus, MotorType};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::trace;

/// 每个模拟电机保留的最近指令条数
pub const MOCK_HISTORY_CAPACITY: usize = 64;

/// 注入的传输故障
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Timeout,
    Disconnected,
    Malformed,
}

impl MockFailure {
    fn into_error(self) -> TransportError {
        match self {
            MockFailure::Timeout => TransportError::Timeout,
            MockFailure::Disconnected => TransportError::Disconnected,
            MockFailure::Malformed => {
                TransportError::MalformedResponse("truncated response".to_string())
            }
        }
    }
}

#[derive(Debug)]
struct MockActuatorState {
    identity: ActuatorIdentity,
    status: MotorStatus,
    tracking: bool,
    pending_failure: Option<MockFailure>,
    exchange_count: usize,
    history: VecDeque<MotorCommand>,
}

impl MockActuatorState {
    fn new(identity: ActuatorIdentity) -> Self {
        Self {
            identity,
            status: MotorStatus {
                motor_type: MotorType::A1,
                motor_id: identity.index.value(),
                temperature: 25,
                correct: true,
                ..Default::default()
            },
            tracking: true,
            pending_failure: None,
            exchange_count: 0,
            history: VecDeque::with_capacity(MOCK_HISTORY_CAPACITY),
        }
    }

    fn record(&mut self, command: &MotorCommand) {
        self.exchange_count += 1;
        if self.history.len() == MOCK_HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(*command);
    }

    fn apply(&mut self, command: &MotorCommand) -> MotorStatus {
        let status = &mut self.status;
        status.mode = command.mode;
        match command.mode {
            ControlMode::Foc => {
                if self.tracking && command.kp > 0.0 {
                    status.position = command.position;
                }
                status.velocity = command.velocity;
                status.torque = command.torque;
            }
            ControlMode::Stop => {
                status.velocity = 0.0;
                status.torque = 0.0;
            }
        }
        *status
    }
}

/// 模拟电机（测试侧句柄）
#[derive(Debug, Clone)]
pub struct MockActuator {
    state: Arc<Mutex<MockActuatorState>>,
}

impl MockActuator {
    /// 创建独立的模拟电机（不挂在任何 [`MockBus`] 上）
    pub fn new(identity: ActuatorIdentity) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockActuatorState::new(identity))),
        }
    }

    /// 获取控制器侧传输句柄
    pub fn transport(&self) -> MockTransport {
        MockTransport {
            state: Arc::clone(&self.state),
        }
    }

    pub fn identity(&self) -> ActuatorIdentity {
        self.state.lock().identity
    }

    /// 设置电机侧当前位置（下一次应答生效）
    pub fn set_position(&self, motor_position: f64) {
        self.state.lock().status.position = motor_position;
    }

    /// 开关理想位置跟踪
    pub fn set_tracking(&self, tracking: bool) {
        self.state.lock().tracking = tracking;
    }

    pub fn set_temperature(&self, temperature: i32) {
        self.state.lock().status.temperature = temperature;
    }

    pub fn set_fault_code(&self, fault_code: u8) {
        self.state.lock().status.fault_code = fault_code;
    }

    /// 下一次交换返回指定故障（一次性）
    pub fn fail_next(&self, failure: MockFailure) {
        self.state.lock().pending_failure = Some(failure);
    }

    /// 当前模拟状态（不经过交换）
    pub fn status(&self) -> MotorStatus {
        self.state.lock().status
    }

    /// 成功或失败的交换总次数
    pub fn exchange_count(&self) -> usize {
        self.state.lock().exchange_count
    }

    /// 最近一次收到的指令
    pub fn last_command(&self) -> Option<MotorCommand> {
        self.state.lock().history.back().copied()
    }

    /// 最近收到的指令（最多 [`MOCK_HISTORY_CAPACITY`] 条，按时间先后）
    pub fn commands(&self) -> Vec<MotorCommand> {
        self.state.lock().history.iter().copied().collect()
    }
}

/// 模拟传输通道（控制器侧句柄）
#[derive(Debug)]
pub struct MockTransport {
    state: Arc<Mutex<MockActuatorState>>,
}

impl Transport for MockTransport {
    fn exchange(&mut self, command: &MotorCommand) -> Result<MotorStatus, TransportError> {
        let mut state = self.state.lock();
        state.record(command);
        if let Some(failure) = state.pending_failure.take() {
            trace!("Mock {}: injected failure {:?}", state.identity, failure);
            return Err(failure.into_error());
        }
        let status = state.apply(command);
        trace!(
            "Mock {}: mode={:?} q={:.4} dq={:.4} tau={:.3}",
            state.identity, status.mode, status.position, status.velocity, status.torque
        );
        Ok(status)
    }
}

/// 模拟总线集合（设备绑定）
#[derive(Debug, Default)]
pub struct MockBus {
    actuators: Mutex<HashMap<ActuatorIdentity, MockActuator>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在总线上挂载一个模拟电机并返回其测试侧句柄
    ///
    /// 同一身份重复挂载时返回已有句柄。
    pub fn attach(&self, identity: ActuatorIdentity) -> MockActuator {
        self.actuators
            .lock()
            .entry(identity)
            .or_insert_with(|| MockActuator::new(identity))
            .clone()
    }

    /// 移除模拟电机（模拟拔线）
    pub fn detach(&self, identity: &ActuatorIdentity) -> Option<MockActuator> {
        self.actuators.lock().remove(identity)
    }

    pub fn len(&self) -> usize {
        self.actuators.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actuators.lock().is_empty()
    }
}

impl DeviceBinder for MockBus {
    type Transport = MockTransport;

    fn bind(&self, identity: &ActuatorIdentity) -> Result<MockTransport, DeviceError> {
        self.actuators
            .lock()
            .get(identity)
            .map(MockActuator::transport)
            .ok_or_else(|| DeviceError::not_found(identity))
    }
}
