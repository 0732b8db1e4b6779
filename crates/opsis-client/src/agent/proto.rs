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

//! Wire messages of the observation record.
//!
//! Hand-derived prost messages; the schema is stable, so no build-time
//! codegen is involved.

use std::collections::HashMap;

use image::RgbImage;

/// A captured frame as it travels on the wire: dimensions plus
/// tightly-packed 8-bit RGB pixels.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Image {
    /// Width in pixels.
    #[prost(uint32, tag = "1")]
    pub width: u32,
    /// Height in pixels.
    #[prost(uint32, tag = "2")]
    pub height: u32,
    /// Row-major RGB bytes, three per pixel.
    #[prost(bytes = "vec", tag = "3")]
    pub data: Vec<u8>,
}

impl From<&RgbImage> for Image {
    fn from(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw().clone(),
        }
    }
}

/// The action the client executed during the step being reported.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Action {
    /// Pressed state per key name.
    #[prost(map = "string, bool", tag = "1")]
    pub keys: HashMap<String, bool>,
    /// Horizontal mouse movement in pixels.
    #[prost(sint32, tag = "2")]
    pub mouse_dx: i32,
    /// Vertical mouse movement in pixels.
    #[prost(sint32, tag = "3")]
    pub mouse_dy: i32,
}

/// One complete observation record.
///
/// Exactly these five fields make up a record, and a well-formed sender
/// always populates all of them.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Observation {
    /// Reward accumulated during the step.
    #[prost(float, tag = "1")]
    pub reward: f32,
    /// Free-form diagnostic info.
    #[prost(string, tag = "2")]
    pub info: String,
    /// Whether the episode ended with this step.
    #[prost(bool, tag = "3")]
    pub terminal: bool,
    /// The captured frame.
    #[prost(message, optional, tag = "4")]
    pub image: Option<Image>,
    /// The executed action.
    #[prost(message, optional, tag = "5")]
    pub action: Option<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_image_from_rgb() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.get_pixel_mut(1, 0).0 = [9, 8, 7];
        let image = Image::from(&rgb);
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.data, vec![0, 0, 0, 9, 8, 7]);
    }

    #[test]
    fn test_observation_encode_decode() {
        let observation = Observation {
            reward: 1.5,
            info: "spawned".to_string(),
            terminal: true,
            image: Some(Image {
                width: 1,
                height: 1,
                data: vec![1, 2, 3],
            }),
            action: Some(Action {
                keys: HashMap::from([("FORWARD".to_string(), true)]),
                mouse_dx: -4,
                mouse_dy: 11,
            }),
        };

        let bytes = observation.encode_to_vec();
        let decoded = Observation::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, observation);
    }
}
