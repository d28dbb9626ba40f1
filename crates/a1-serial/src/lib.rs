//! # A1 Serial Transport Layer
//!
//! 串口传输抽象层。一次"交换"（exchange）即一次阻塞的请求/应答往返：
//! 下发一条 [`MotorCommand`]，返回电机最新的 [`MotorStatus`]。
//!
//! 帧格式与设备枚举不在本层定义，由具体的 [`Transport`] / [`DeviceBinder`] 实现负责。

use a1_protocol::{ActuatorIdentity, MotorCommand, MotorStatus, ProtocolError};
use thiserror::Error;

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "mock")]
pub use mock::{MOCK_HISTORY_CAPACITY, MockActuator, MockBus, MockFailure, MockTransport};

/// 传输层统一错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Read timeout")]
    Timeout,
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Device disconnected")]
    Disconnected,
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl TransportError {
    /// 是否为设备断开类错误（重试无意义）
    pub fn is_disconnect(&self) -> bool {
        match self {
            TransportError::Disconnected => true,
            TransportError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::NotFound
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::NotConnected
            ),
            _ => false,
        }
    }
}

/// 设备绑定错误的结构化分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceErrorKind {
    Unknown,
    NotFound,
}

/// 结构化设备错误
#[derive(Error, Debug, Clone)]
#[error("{kind:?}: {message}")]
pub struct DeviceError {
    pub kind: DeviceErrorKind,
    pub message: String,
}

impl DeviceError {
    pub fn new(kind: DeviceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(identity: &ActuatorIdentity) -> Self {
        Self::new(
            DeviceErrorKind::NotFound,
            format!("no serial device for {}", identity),
        )
    }
}

impl From<String> for DeviceError {
    fn from(message: String) -> Self {
        Self::new(DeviceErrorKind::Unknown, message)
    }
}

impl From<&str> for DeviceError {
    fn from(message: &str) -> Self {
        Self::new(DeviceErrorKind::Unknown, message)
    }
}

/// 请求/应答传输通道
///
/// 实现者负责编码、超时以及应答校验；调用方保证同一实例不会被并发调用。
pub trait Transport {
    fn exchange(&mut self, command: &MotorCommand) -> Result<MotorStatus, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn exchange(&mut self, command: &MotorCommand) -> Result<MotorStatus, TransportError> {
        (**self).exchange(command)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn exchange(&mut self, command: &MotorCommand) -> Result<MotorStatus, TransportError> {
        (**self).exchange(command)
    }
}

/// 设备绑定：为给定身份解析并打开传输通道
pub trait DeviceBinder {
    type Transport: Transport;

    fn bind(&self, identity: &ActuatorIdentity) -> Result<Self::Transport, DeviceError>;
}
