//! Wire types between the simulation host and its collaborators
//!
//! Uses postcard for compact binary serialization

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Host events (input source to loop)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Pointer pressed anywhere on the drawing surface
    PointerDown { x: f32, y: f32 },

    /// Key pressed; `code` uses physical key names such as "Space"
    KeyDown { code: String },
}

// ============================================================================
// Frames (loop to render sink)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub score: u32,
    /// Anchor for the score label
    pub score_x: f32,
    pub score_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
    /// Number of dashes from the top edge down
    pub dashes: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

/// Everything a renderer needs to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub ball: BallView,
    pub paddles: [PaddleView; 2], // user, opponent
    pub net: NetView,
    pub status: Option<StatusText>,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HostEvent {
    /// Serialize event to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
