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

use core::fmt;

/// Errors of [Gc9b71](crate::Gc9b71), generic over the transport's error `T`
/// and the reset line's error `P`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error<T, P> {
    /// An argument can't be turned into a valid transmission.
    InvalidArgument(&'static str),
    /// The color space or the pixel depth isn't supported by the controller.
    UnsupportedConfiguration(&'static str),
    /// The reset line couldn't be configured as an output.
    ResourceAcquisitionFailed(P),
    /// The reset line failed to change level, or to be released.
    ResetLine(P),
    /// Error of the command transport, as is.
    Transport(T),
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Display for Error<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            Self::UnsupportedConfiguration(what) =>
                write!(f, "not supported: {}", what),
            Self::ResourceAcquisitionFailed(e) =>
                write!(f, "configuring the reset line failed: {:?}", e),
            Self::ResetLine(e) => write!(f, "reset line error: {:?}", e),
            Self::Transport(e) => write!(f, "transport error: {:?}", e),
        }
    }
}
