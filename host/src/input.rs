//! Host input translation

use game_core::StartSignal;
use proto::HostEvent;

/// Map a host event to a start signal. Only pointer presses and the space bar start a match.
pub fn start_signal(event: &HostEvent) -> Option<StartSignal> {
    match event {
        HostEvent::PointerDown { .. } => Some(StartSignal::PointerDown),
        HostEvent::KeyDown { code } if code == "Space" => Some(StartSignal::SpaceKey),
        HostEvent::KeyDown { .. } => None,
    }
}
