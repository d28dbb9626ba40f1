//! 阻尼演示
//!
//! 在 Mock 总线上挂载一组执行器，全部切换到阻尼模式后做一次小幅增量运动。
//!
//! ```bash
//! RUST_LOG=debug cargo run -p a1-sdk --example damping_demo --features mock
//! ```

use a1_sdk::prelude::*;
use a1_sdk::serial::MockBus;
use std::thread;
use std::time::Duration;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    a1_sdk::init_logger();

    // (总线 ID, 电机索引)
    let layout = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)];

    let bus = MockBus::new();
    for &(bus_id, motor_id) in &layout {
        bus.attach(ActuatorIdentity::from_raw(bus_id, motor_id)?);
    }

    let mut motors = layout
        .iter()
        .map(|&(bus_id, motor_id)| {
            ActuatorBuilder::new(bus_id, motor_id)
                .mode(ControlMode::Stop)
                .reduction_ratio(9.2)
                .build(&bus)
        })
        .collect::<Result<Vec<_>, _>>()?;

    thread::sleep(Duration::from_millis(500));

    for motor in &mut motors {
        motor.damping_control()?;
    }

    let first = &mut motors[0];
    first.set_gains(0.2, 1.0);
    first.read_status()?;
    info!("position: {:.4}", first.joint_position());

    for delta in [0.0, 0.2, -0.1] {
        match first.incremental_position_control(0.0, delta)? {
            ControlOutcome::Applied => info!("position: {:.4}", first.joint_position()),
            ControlOutcome::LimitRejected(violation) => info!("rejected: {}", violation),
        }
        thread::sleep(Duration::from_millis(100));
    }

    for motor in &mut motors {
        motor.stop()?;
    }
    Ok(())
}
