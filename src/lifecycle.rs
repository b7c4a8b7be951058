//
// lifecycle.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use crate::model::CloseReason;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ToastState {
    // laid out, not on screen yet
    Built,
    FadingIn,
    Visible,
    FadingOut,
    Closed,
}

impl Default for ToastState {
    fn default() -> Self {
        ToastState::Built
    }
}

/// Tracks where a toast is in its life and decides which transitions are allowed.
///
/// Both close triggers (timeout and dismissal) funnel through [`Lifecycle::begin_close`],
/// only the first one wins.
#[derive(Debug, Default, Clone)]
pub struct Lifecycle {
    state: ToastState,
    reason: Option<CloseReason>,
}

impl Lifecycle {
    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.reason
    }

    pub fn show(&mut self) -> bool {
        self.transition(ToastState::Built, ToastState::FadingIn)
    }

    pub fn shown(&mut self) -> bool {
        self.transition(ToastState::FadingIn, ToastState::Visible)
    }

    pub fn begin_close(&mut self, reason: CloseReason) -> bool {
        match self.state {
            ToastState::FadingIn | ToastState::Visible => {
                log::debug!("{:?} -> FadingOut ({:?})", self.state, reason);
                self.state = ToastState::FadingOut;
                self.reason = Some(reason);
                true
            }
            _ => false,
        }
    }

    pub fn finish_close(&mut self) -> bool {
        self.transition(ToastState::FadingOut, ToastState::Closed)
    }

    fn transition(&mut self, from: ToastState, to: ToastState) -> bool {
        if self.state != from {
            return false;
        }
        log::debug!("{:?} -> {:?}", from, to);
        self.state = to;
        true
    }
}
