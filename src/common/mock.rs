// src/common/mock.rs
//
// Scripted transport and accounting timer shared by the unit tests.

use super::crc::calculate_crc16;
use super::hal_traits::{OpcTimer, OpcTransport};
use super::opcode::{OPC_BUSY, OPC_READY};
use super::record::Value;
use super::register::{FieldType, RegisterModel};
use std::collections::VecDeque;
use std::vec::Vec;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

/// Replays scripted responses, then answers every further exchange with `idle`.
#[derive(Debug, Default)]
pub struct MockBus {
    script: VecDeque<Result<u8, MockBusError>>,
    idle: u8,
    pub sent: Vec<u8>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle(mut self, idle: u8) -> Self {
        self.idle = idle;
        self
    }

    pub fn push(&mut self, byte: u8) -> &mut Self {
        self.script.push_back(Ok(byte));
        self
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend(bytes.iter().map(|b| Ok(*b)));
        self
    }

    pub fn push_error(&mut self) -> &mut Self {
        self.script.push_back(Err(MockBusError));
        self
    }

    pub fn busy(&mut self, polls: usize) -> &mut Self {
        for _ in 0..polls {
            self.push(OPC_BUSY);
        }
        self
    }

    /// Handshake that completes on the first poll, followed by `payload`.
    pub fn ready_then(&mut self, payload: &[u8]) -> &mut Self {
        self.push(OPC_READY).push_bytes(payload)
    }

    pub fn exchanges(&self) -> usize {
        self.sent.len()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl OpcTransport for MockBus {
    type Error = MockBusError;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        self.sent.push(byte);
        self.script.pop_front().unwrap_or(Ok(self.idle))
    }
}

/// Accumulates requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct MockTimer {
    pub elapsed_us: u64,
    /// Waits of one second or more (settle and buffer reset delays).
    pub long_waits: usize,
}

impl MockTimer {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_us / 1_000
    }
}

impl OpcTimer for MockTimer {
    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += u64::from(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_us += u64::from(ms) * 1_000;
        if ms >= 1_000 {
            self.long_waits += 1;
        }
    }
}

/// Encodes a frame for `model`, taking each field value from `value_of`.
pub fn encode_frame(model: &RegisterModel, mut value_of: impl FnMut(&str) -> Value) -> Vec<u8> {
    let mut frame = Vec::with_capacity(model.size());
    for field in model.fields() {
        let value = value_of(field.name);
        match field.ty {
            FieldType::U8 => frame.push(value.as_f64() as u8),
            FieldType::U16 => frame.extend_from_slice(&(value.as_f64() as u16).to_le_bytes()),
            FieldType::U32 => frame.extend_from_slice(&(value.as_f64() as u32).to_le_bytes()),
            FieldType::F32 => frame.extend_from_slice(&(value.as_f64() as f32).to_le_bytes()),
        }
    }
    frame
}

/// Overwrites the trailing two bytes with the CRC of everything before them.
pub fn seal_crc(frame: &mut [u8]) {
    let body = frame.len() - 2;
    let crc = calculate_crc16(&frame[..body]);
    frame[body..].copy_from_slice(&crc.to_le_bytes());
}
