// Copyright 2021 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use mockall::Sequence;
use mockall::predicate::eq;

use embedded_hal::delay::DelayNs;

use crate::interface::{CommandTransport, ResetLine};

/// The error every mock fails with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fault;

#[mockall::automock]
pub trait PlainIO {
    fn write_parameters(&mut self, command: u8, params: &[u8])
            -> Result<(), Fault>;
    fn write_pixels(&mut self, command: u8, pixels: &[u8]) -> Result<(), Fault>;
}

/// Helper class that delegates [CommandTransport] to `MockPlainIO`, the
/// `mockall` mocked version of [PlainIO].
#[derive(Default)]
pub struct MockDevice {
    mock: MockPlainIO,
}

impl MockDevice {
    pub fn new() -> Self { Default::default() }
    pub fn mock(&mut self) -> &mut MockPlainIO { &mut self.mock }

    pub fn expect_standard_write_command(&mut self, command: u8, data: &[u8]) {
        let data = data.to_vec();
        self.mock().expect_write_parameters()
            .withf(move |c, p| *c == command && p == &data[..])
            .times(1)
            .returning(|_, _| Ok(()));
    }

    /// Same as `expect_standard_write_command()`, but ordered in `seq`.
    pub fn expect_write_in(&mut self, seq: &mut Sequence, command: u8,
                           data: &[u8]) {
        let data = data.to_vec();
        self.mock().expect_write_parameters()
            .withf(move |c, p| *c == command && p == &data[..])
            .times(1)
            .in_sequence(seq)
            .returning(|_, _| Ok(()));
    }

    pub fn expect_failed_write_command(&mut self, command: u8) {
        self.mock().expect_write_parameters()
            .withf(move |c, _| *c == command)
            .times(1)
            .returning(|_, _| Err(Fault));
    }

    pub fn expect_pixels(&mut self, command: u8, data: &[u8]) {
        let data = data.to_vec();
        self.mock().expect_write_pixels()
            .withf(move |c, p| *c == command && p == &data[..])
            .times(1)
            .returning(|_, _| Ok(()));
    }
}

impl CommandTransport for MockDevice {
    type Error = Fault;

    fn send_parameters(&mut self, command: u8, params: &[u8])
            -> Result<(), Fault> {
        self.mock.write_parameters(command, params)
    }

    fn send_pixels(&mut self, command: u8, pixels: &[u8])
            -> Result<(), Fault> {
        self.mock.write_pixels(command, pixels)
    }
}

#[mockall::automock]
pub trait PinIO {
    fn configure_output(&mut self) -> Result<(), Fault>;
    fn set_level(&mut self, high: bool) -> Result<(), Fault>;
    fn release(&mut self) -> Result<(), Fault>;
}

/// [ResetLine] backed by `MockPinIO`.
#[derive(Default)]
pub struct MockResetLine {
    mock: MockPinIO,
}

impl MockResetLine {
    pub fn new() -> Self { Default::default() }
    pub fn mock(&mut self) -> &mut MockPinIO { &mut self.mock }

    /// A line that is configured once and never driven or released.
    pub fn configured() -> Self {
        let mut line = Self::new();
        line.mock().expect_configure_output().times(1).returning(|| Ok(()));
        line
    }

    pub fn expect_level_in(&mut self, seq: &mut Sequence, high: bool) {
        self.mock().expect_set_level()
            .with(eq(high))
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(()));
    }
}

impl ResetLine for MockResetLine {
    type Error = Fault;

    fn configure_output(&mut self) -> Result<(), Fault> {
        self.mock.configure_output()
    }
    fn set_level(&mut self, high: bool) -> Result<(), Fault> {
        self.mock.set_level(high)
    }
    fn release(&mut self) -> Result<(), Fault> { self.mock.release() }
}

#[mockall::automock]
pub trait Clock {
    fn delay_ms(&mut self, ms: u32);
    fn delay_ns(&mut self, ns: u32);
}

/// [DelayNs] backed by `MockClock`. Only whole milliseconds are expected
/// from the driver, so `delay_ms()` is forwarded as is.
#[derive(Default)]
pub struct MockDelay {
    mock: MockClock,
}

impl MockDelay {
    pub fn new() -> Self { Default::default() }
    pub fn mock(&mut self) -> &mut MockClock { &mut self.mock }

    pub fn expect_delay_in(&mut self, seq: &mut Sequence, ms: u32) {
        self.mock().expect_delay_ms()
            .with(eq(ms))
            .times(1)
            .in_sequence(seq)
            .return_const(());
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) { self.mock.delay_ns(ns); }
    fn delay_ms(&mut self, ms: u32) { self.mock.delay_ms(ms); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_parameters() {
        let mut d = MockDevice::new();
        d.expect_standard_write_command(0x36, &[0x48]);
        d.send_parameters(0x36, &[0x48]).unwrap();
    }

    #[test]
    fn write_pixels() {
        let mut d = MockDevice::new();
        d.expect_pixels(0x2C, &[1, 2, 3, 4]);
        d.send_pixels(0x2C, &[1, 2, 3, 4]).unwrap();
    }

    #[test]
    fn failed_write() {
        let mut d = MockDevice::new();
        d.expect_failed_write_command(0x01);
        assert_eq!(d.send_parameters(0x01, &[]), Err(Fault));
    }

    #[test]
    fn sequence_spans_mocks() {
        let mut seq = Sequence::new();
        let mut d = MockDevice::new();
        let mut line = MockResetLine::new();
        let mut delay = MockDelay::new();
        line.expect_level_in(&mut seq, false);
        delay.expect_delay_in(&mut seq, 10);
        d.expect_write_in(&mut seq, 0x11, &[]);

        line.set_level(false).unwrap();
        delay.delay_ms(10);
        d.send_parameters(0x11, &[]).unwrap();
    }
}  // mod tests
