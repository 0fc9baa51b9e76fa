//! Render sinks available to the headless host

use crate::frame::build_frame;
use anyhow::{ensure, Context, Result};
use game_core::{side_name, MatchState, RenderSink, Side};
use proto::Frame;
use std::io::Write;

/// Logs points and the final result instead of painting
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: usize,
}

impl RenderSink for LogSink {
    fn render(&mut self, state: &MatchState) {
        self.frames += 1;

        if let Some(side) = state.events().scorer() {
            log::info!(
                "Point to {}: User {} - {} AI (tick {})",
                side_name(side),
                state.score(Side::User),
                state.score(Side::Opponent),
                state.tick()
            );
        }

        if state.events().paddle_hit {
            log::debug!("Paddle hit, ball speed {:.1}", state.ball().speed);
        }

        log::trace!("tick={} ball={:?}", state.tick(), state.ball().pos);
    }
}

/// Writes every frame as a little-endian u32 length followed by the postcard bytes
pub struct FrameRecorder<W: Write> {
    writer: W,
    written: usize,
    failed: bool,
}

impl<W: Write> FrameRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            failed: false,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        let bytes = frame.to_bytes().context("failed to encode frame")?;
        let len = u32::try_from(bytes.len()).context("frame too large")?;
        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(&bytes)?;
        self.written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("failed to flush recording")?;
        Ok(self.writer)
    }
}

impl<W: Write> RenderSink for FrameRecorder<W> {
    fn render(&mut self, state: &MatchState) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_frame(&build_frame(state)) {
            // Keep the match running without the recording
            log::warn!("Frame recording stopped: {e:#}");
            self.failed = true;
        }
    }
}

/// Decode a recording written by [`FrameRecorder`]
pub fn read_recording(mut bytes: &[u8]) -> Result<Vec<Frame>> {
    let mut frames = Vec::new();
    while !bytes.is_empty() {
        ensure!(bytes.len() >= 4, "truncated frame length");
        let (len, rest) = bytes.split_at(4);
        let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
        ensure!(rest.len() >= len, "truncated frame body");
        let (body, rest) = rest.split_at(len);
        frames.push(Frame::from_bytes(body).context("corrupt frame")?);
        bytes = rest;
    }
    Ok(frames)
}

/// Log sink plus an optional recorder
pub struct HostSink<W: Write> {
    pub log: LogSink,
    pub recorder: Option<FrameRecorder<W>>,
}

impl<W: Write> HostSink<W> {
    pub fn new(recorder: Option<FrameRecorder<W>>) -> Self {
        Self {
            log: LogSink::default(),
            recorder,
        }
    }
}

impl<W: Write> RenderSink for HostSink<W> {
    fn render(&mut self, state: &MatchState) {
        self.log.render(state);
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.render(state);
        }
    }
}
