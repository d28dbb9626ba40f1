//! 测试辅助函数

#![allow(dead_code)]

use a1_sdk::prelude::*;
use a1_sdk::serial::{MockActuator, MockBus, MockTransport};

pub const RATIO: f64 = 9.1;

/// 创建只挂载一个电机的总线
pub fn single_actuator_bus(bus_id: u8, motor_id: u8) -> (MockBus, MockActuator) {
    let bus = MockBus::new();
    let actuator = bus.attach(identity(bus_id, motor_id));
    (bus, actuator)
}

pub fn identity(bus_id: u8, motor_id: u8) -> ActuatorIdentity {
    ActuatorIdentity::from_raw(bus_id, motor_id).expect("valid identity")
}

/// 默认配置的控制器
pub fn default_controller() -> (MockActuator, ActuatorController<MockTransport>) {
    let (bus, actuator) = single_actuator_bus(0, 0);
    let motor = ActuatorBuilder::new(0, 0)
        .build(&bus)
        .expect("controller should build");
    (actuator, motor)
}

/// 浮点数近似相等断言
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Float assertion failed: {} != {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
