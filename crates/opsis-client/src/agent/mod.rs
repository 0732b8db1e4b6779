// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Observation transport to an external agent.
//!
//! Once per step the client hands the recorder the finished frame plus
//! reward, info, terminal flag, and the executed action; the recorder
//! ships the five-field tuple as one length-delimited protobuf record
//! over a push socket. No response is read back.

pub mod proto;
pub mod recorder;

pub use proto::{Action, Image, Observation};
pub use recorder::{MessageSink, Recorder, RecorderError, TcpMessageSink};
