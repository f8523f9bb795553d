//! AudioSession: plays cues for the lifetime of one game loop.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cue::Cue;

const BELL: &[u8] = b"\x07";

/// Owns the audio output for one run of the game loop.
///
/// Cues are played as terminal bells. Write failures are logged and dropped so
/// play continues.
pub struct AudioSession<W: Write> {
    out: W,
    muted: bool,
    bells: u64,
}

impl<W: Write> AudioSession<W> {
    pub fn new(out: W, muted: bool) -> Self {
        tracing::debug!(muted, "audio session started");
        Self {
            out,
            muted,
            bells: 0,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Number of bells rung so far.
    pub fn bells(&self) -> u64 {
        self.bells
    }

    pub fn play(&mut self, cue: Cue) {
        if !rings(cue) {
            tracing::trace!(cue = cue.as_str(), "quiet cue");
            return;
        }
        if self.muted {
            tracing::trace!(cue = cue.as_str(), "muted");
            return;
        }

        match self.ring() {
            Ok(()) => {
                self.bells += 1;
                tracing::debug!(cue = cue.as_str(), bells = self.bells, "bell");
            }
            Err(err) => tracing::warn!(cue = cue.as_str(), error = %err, "bell failed"),
        }
    }

    pub fn play_all(&mut self, cues: impl IntoIterator<Item = Cue>) {
        for cue in cues {
            self.play(cue);
        }
    }

    /// Flush and release the output.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("flushing audio output")?;
        tracing::debug!(bells = self.bells, "audio session finished");
        Ok(self.out)
    }

    fn ring(&mut self) -> std::io::Result<()> {
        self.out.write_all(BELL)?;
        self.out.flush()
    }
}

/// Only milestones ring.
fn rings(cue: Cue) -> bool {
    matches!(cue, Cue::LineClear(_) | Cue::LevelUp | Cue::GameOver)
}
