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

//! The observation recorder and its push transport.

use std::io::{self, Write};
use std::net::TcpStream;

use prost::Message;

use super::proto::{Action, Image, Observation};

/// Errors raised by the observation recorder.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// The push socket could not be connected.
    #[error("failed to connect observation socket to {addr}")]
    Connect {
        /// Address that refused the connection.
        addr: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing a record to the socket failed.
    #[error("failed to transmit observation record")]
    Transmit(#[source] io::Error),
}

/// Push-only byte-frame transport for observation records.
///
/// Transmission is fire-and-forget: implementations never read a
/// response.
pub trait MessageSink: Send {
    /// Pushes one complete record.
    fn push(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// [`MessageSink`] over a TCP stream to the external consumer.
pub struct TcpMessageSink {
    stream: TcpStream,
}

impl TcpMessageSink {
    /// Connects to the consumer at `addr` (e.g. `127.0.0.1:5555`).
    pub fn connect(addr: &str) -> Result<Self, RecorderError> {
        let stream = TcpStream::connect(addr).map_err(|source| RecorderError::Connect {
            addr: addr.to_string(),
            source,
        })?;
        log::info!("Recorder connected to observation consumer at {addr}");
        Ok(Self { stream })
    }
}

impl MessageSink for TcpMessageSink {
    fn push(&mut self, frame: &[u8]) -> io::Result<()> {
        self.stream.write_all(frame)?;
        self.stream.flush()
    }
}

/// Accumulates the per-step tuple and ships it on request.
///
/// The setters stage reward, info, terminal flag, image, and action;
/// [`Recorder::send_observation`] serializes the staged tuple into one
/// length-delimited record and pushes it. Exactly one message leaves
/// per call and all five fields are always present.
pub struct Recorder {
    sink: Box<dyn MessageSink>,
    reward: f32,
    info: String,
    terminal: bool,
    image: Image,
    action: Action,
}

impl Recorder {
    /// Creates a recorder over an arbitrary sink.
    pub fn new(sink: Box<dyn MessageSink>) -> Self {
        Self {
            sink,
            reward: 0.0,
            info: String::new(),
            terminal: false,
            image: Image::default(),
            action: Action::default(),
        }
    }

    /// Creates a recorder pushing to a TCP consumer at `addr`.
    pub fn connect(addr: &str) -> Result<Self, RecorderError> {
        Ok(Self::new(Box::new(TcpMessageSink::connect(addr)?)))
    }

    /// Stages the reward for the next record.
    pub fn set_reward(&mut self, reward: f32) {
        self.reward = reward;
    }

    /// Stages the diagnostic info string for the next record.
    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    /// Stages the terminal flag for the next record.
    pub fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// Stages the captured frame for the next record.
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
    }

    /// Stages the executed action for the next record.
    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Serializes the staged tuple into a single length-delimited
    /// record and pushes it to the consumer. Fire-and-forget: no
    /// acknowledgment is awaited.
    pub fn send_observation(&mut self) -> Result<(), RecorderError> {
        let observation = Observation {
            reward: self.reward,
            info: self.info.clone(),
            terminal: self.terminal,
            image: Some(self.image.clone()),
            action: Some(self.action.clone()),
        };
        let frame = observation.encode_length_delimited_to_vec();
        log::trace!("Recorder: pushing observation record ({} bytes)", frame.len());
        self.sink.push(&frame).map_err(RecorderError::Transmit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct VecSink {
        frames: Arc<Mutex<Vec<Vec<u8>>>>,
    }
    impl MessageSink for VecSink {
        fn push(&mut self, frame: &[u8]) -> io::Result<()> {
            self.frames.lock().unwrap().push(frame.to_vec());
            Ok(())
        }
    }

    struct FailingSink;
    impl MessageSink for FailingSink {
        fn push(&mut self, _frame: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "consumer gone"))
        }
    }

    fn staged_recorder(sink: Box<dyn MessageSink>) -> Recorder {
        let mut recorder = Recorder::new(sink);
        recorder.set_reward(2.25);
        recorder.set_info("dug:stone");
        recorder.set_terminal(false);
        recorder.set_image(Image {
            width: 2,
            height: 2,
            data: vec![0; 12],
        });
        recorder.set_action(Action {
            keys: [("JUMP".to_string(), true)].into(),
            mouse_dx: 3,
            mouse_dy: 0,
        });
        recorder
    }

    #[test]
    fn test_one_length_delimited_record_per_send() {
        let sink = VecSink::default();
        let frames = Arc::clone(&sink.frames);
        let mut recorder = staged_recorder(Box::new(sink));

        recorder.send_observation().unwrap();
        recorder.send_observation().unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        for frame in frames.iter() {
            let decoded = Observation::decode_length_delimited(frame.as_slice()).unwrap();
            assert_eq!(decoded.reward, 2.25);
        }
    }

    #[test]
    fn test_all_five_fields_are_present() {
        let sink = VecSink::default();
        let frames = Arc::clone(&sink.frames);
        let mut recorder = staged_recorder(Box::new(sink));
        recorder.send_observation().unwrap();

        let frames = frames.lock().unwrap();
        let decoded = Observation::decode_length_delimited(frames[0].as_slice()).unwrap();
        assert_eq!(decoded.reward, 2.25);
        assert_eq!(decoded.info, "dug:stone");
        assert!(!decoded.terminal);
        let image = decoded.image.expect("image always present");
        assert_eq!((image.width, image.height), (2, 2));
        let action = decoded.action.expect("action always present");
        assert_eq!(action.keys.get("JUMP"), Some(&true));
        assert_eq!(action.mouse_dx, 3);
    }

    #[test]
    fn test_staged_values_persist_across_sends() {
        let sink = VecSink::default();
        let frames = Arc::clone(&sink.frames);
        let mut recorder = staged_recorder(Box::new(sink));
        recorder.send_observation().unwrap();
        recorder.set_terminal(true);
        recorder.send_observation().unwrap();

        let frames = frames.lock().unwrap();
        let first = Observation::decode_length_delimited(frames[0].as_slice()).unwrap();
        let second = Observation::decode_length_delimited(frames[1].as_slice()).unwrap();
        assert!(!first.terminal);
        assert!(second.terminal);
        assert_eq!(first.info, second.info);
    }

    #[test]
    fn test_transmit_failure_surfaces() {
        let mut recorder = staged_recorder(Box::new(FailingSink));
        assert!(matches!(
            recorder.send_observation(),
            Err(RecorderError::Transmit(_))
        ));
    }
}
