//! Per-stage state capture for the debug trace mode.

use core::fmt;

use crate::block::State;

/// Transform stages reported by the traced block operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Round-key XOR.
    AddRoundKey,
    /// Forward S-box substitution.
    SubBytes,
    /// Forward row rotation.
    ShiftRows,
    /// Forward column mixing.
    MixColumns,
    /// Inverse S-box substitution.
    InvSubBytes,
    /// Inverse row rotation.
    InvShiftRows,
    /// Inverse column mixing.
    InvMixColumns,
}

impl Stage {
    fn name(self) -> &'static str {
        match self {
            Stage::AddRoundKey => "AddRoundKey",
            Stage::SubBytes => "SubBytes",
            Stage::ShiftRows => "ShiftRows",
            Stage::MixColumns => "MixColumns",
            Stage::InvSubBytes => "InvSubBytes",
            Stage::InvShiftRows => "InvShiftRows",
            Stage::InvMixColumns => "InvMixColumns",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The state as observed immediately after one transform stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    /// Round the stage belongs to (0 for the initial key addition).
    pub round: usize,
    /// The transform that just ran.
    pub stage: Stage,
    /// The state after the transform.
    pub state: State,
}

/// Collector threaded through the round pipeline; a disabled collector makes
/// the untraced entry points free of bookkeeping.
pub(crate) struct Tracer(Option<Vec<TraceEvent>>);

impl Tracer {
    pub(crate) fn disabled() -> Self {
        Tracer(None)
    }

    pub(crate) fn recording() -> Self {
        Tracer(Some(Vec::new()))
    }

    pub(crate) fn record(&mut self, round: usize, stage: Stage, state: &State) {
        if let Some(events) = self.0.as_mut() {
            events.push(TraceEvent {
                round,
                stage,
                state: *state,
            });
        }
    }

    pub(crate) fn into_events(self) -> Vec<TraceEvent> {
        self.0.unwrap_or_default()
    }
}
