//! Ping liveness session
//!
//! Periodically sends a ping carrying a wrapping sequence number to the
//! radio MCU. There is no explicit timeout timer: a request still
//! unanswered when the next one is due is reported as timed out by that
//! next [`PingSession::send`].

use raven_protocol::ConsoleMessage;

use super::interval::Interval;
use crate::traits::{FrameSink, LcdDriver, LcdExt};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PingState {
    /// Not pinging; ticks are ignored
    Inactive,
    /// Started, nothing sent yet
    AwaitingFirstSend,
    /// A request is outstanding
    Outstanding,
    /// Active, last request answered
    Idle,
}

/// Outcome of [`PingSession::send`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PingSent {
    /// Sequence number carried by the request just sent
    pub sequence: u8,
    /// Sequence of the previous request if it was never answered
    pub timed_out: Option<u8>,
}

/// Outcome of [`PingSession::on_response`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PingReply {
    /// Sequence number echoed by the radio MCU
    pub sequence: u8,
    /// Whether it matches the last request sent
    pub matched: bool,
    /// Time since the last request, if one was outstanding
    pub round_trip_ms: Option<u32>,
}

/// Ping sequence state
#[derive(Debug, Clone)]
pub struct PingSession {
    state: PingState,
    sequence: u8,
    sent_at_ms: u32,
    interval: Interval,
    timeouts: u16,
    mismatches: u16,
}

impl PingSession {
    /// Create an inactive session pinging every `interval_ticks`
    pub fn new(interval_ticks: u16) -> Self {
        Self {
            state: PingState::Inactive,
            sequence: 0,
            sent_at_ms: 0,
            interval: Interval::new(interval_ticks),
            timeouts: 0,
            mismatches: 0,
        }
    }

    /// Activate the session
    ///
    /// Resets the sequence, clears any outstanding request, shows dashes
    /// in the numeric area and restarts the inter-ping interval, so the
    /// next base tick is never taken as a full period. The first request
    /// goes out with the next [`send`](Self::send).
    pub fn start<L: LcdDriver>(&mut self, lcd: &mut L) {
        self.state = PingState::AwaitingFirstSend;
        self.sequence = 0;
        lcd.show_pending();
        self.interval.rearm();
        info!("ping: session started");
    }

    /// Send the next request
    ///
    /// Returns `None` while the session is inactive.
    pub fn send<S: FrameSink>(&mut self, link: &mut S, now_ms: u32) -> Option<PingSent> {
        let timed_out = match self.state {
            PingState::Inactive => return None,
            PingState::Outstanding => {
                self.timeouts = self.timeouts.saturating_add(1);
                warn!("ping: seq {} timed out", self.sequence);
                Some(self.sequence)
            }
            PingState::AwaitingFirstSend | PingState::Idle => None,
        };

        self.sequence = self.sequence.wrapping_add(1);
        self.state = PingState::Outstanding;
        self.sent_at_ms = now_ms;
        link.send_message(&ConsoleMessage::Ping {
            sequence: self.sequence,
        });
        debug!("ping: sent seq {}", self.sequence);

        Some(PingSent {
            sequence: self.sequence,
            timed_out,
        })
    }

    /// Deactivate the session
    pub fn stop(&mut self) {
        if self.state != PingState::Inactive {
            info!("ping: session stopped at seq {}", self.sequence);
        }
        self.state = PingState::Inactive;
    }

    /// Consume a reply from the radio MCU
    ///
    /// Any sequence is accepted; a mismatch is only counted. Returns `None`
    /// while the session is inactive.
    pub fn on_response(&mut self, received: u8, now_ms: u32) -> Option<PingReply> {
        let round_trip_ms = match self.state {
            PingState::Inactive => return None,
            PingState::Outstanding => Some(now_ms.wrapping_sub(self.sent_at_ms)),
            PingState::AwaitingFirstSend | PingState::Idle => None,
        };

        let matched = received == self.sequence && round_trip_ms.is_some();
        if !matched {
            self.mismatches = self.mismatches.saturating_add(1);
            warn!(
                "ping: reply seq {} does not match seq {}",
                received,
                self.sequence
            );
        }

        if self.state == PingState::Outstanding {
            self.state = PingState::Idle;
        }

        Some(PingReply {
            sequence: received,
            matched,
            round_trip_ms,
        })
    }

    /// Account for one base tick, returning true when a ping is due
    pub fn tick(&mut self) -> bool {
        match self.state {
            PingState::Inactive => false,
            _ => self.interval.tick(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PingState {
        self.state
    }

    /// Whether the session is active
    pub fn is_active(&self) -> bool {
        self.state != PingState::Inactive
    }

    /// Whether the last request is still unanswered
    pub fn awaiting_response(&self) -> bool {
        self.state == PingState::Outstanding
    }

    /// Sequence number of the last request sent
    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Requests that were never answered
    pub fn timeouts(&self) -> u16 {
        self.timeouts
    }

    /// Replies whose sequence did not match the last request
    pub fn mismatches(&self) -> u16 {
        self.mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Glyph, NumberPadding, Symbol};
    use proptest::prelude::*;
    use raven_protocol::messages::SEND_PING;

    #[derive(Default)]
    struct Link {
        frames: Vec<(u8, Vec<u8>)>,
    }

    impl FrameSink for Link {
        fn send_frame(&mut self, command: u8, payload: &[u8]) {
            self.frames.push((command, payload.to_vec()));
        }
    }

    #[derive(Default)]
    struct Lcd {
        digits: [Option<Glyph>; 4],
    }

    impl LcdDriver for Lcd {
        fn clear(&mut self) {}
        fn write_text(&mut self, _text: &[u8]) {}
        fn set_symbol(&mut self, _symbol: Symbol) {}
        fn clear_symbol(&mut self, _symbol: Symbol) {}
        fn write_number(&mut self, _value: i16, _padding: NumberPadding) {}
        fn write_digit(&mut self, position: u8, glyph: Glyph) {
            self.digits[position as usize] = Some(glyph);
        }
        fn clear_number(&mut self) {
            self.digits = [None; 4];
        }
        fn shutdown(&mut self) {}
        fn reinit(&mut self) {}
    }

    fn started() -> (PingSession, Link) {
        let mut session = PingSession::new(1);
        session.start(&mut Lcd::default());
        (session, Link::default())
    }

    #[test]
    fn test_created_inactive() {
        let mut session = PingSession::new(1);
        let mut link = Link::default();
        assert_eq!(session.state(), PingState::Inactive);
        assert!(!session.tick());
        assert_eq!(session.send(&mut link, 0), None);
        assert!(link.frames.is_empty());
    }

    #[test]
    fn test_start_shows_dashes() {
        let mut session = PingSession::new(1);
        let mut lcd = Lcd::default();
        session.start(&mut lcd);
        assert_eq!(lcd.digits, [Some(Glyph::Minus); 4]);
        assert_eq!(session.state(), PingState::AwaitingFirstSend);
        assert_eq!(session.sequence(), 0);
        assert!(!session.awaiting_response());
    }

    #[test]
    fn test_first_send_no_timeout() {
        let (mut session, mut link) = started();
        let sent = session.send(&mut link, 0).unwrap();
        assert_eq!(
            sent,
            PingSent {
                sequence: 1,
                timed_out: None
            }
        );
        assert_eq!(link.frames, vec![(SEND_PING, vec![1])]);
        assert!(session.awaiting_response());
    }

    #[test]
    fn test_second_send_reports_timeout() {
        let (mut session, mut link) = started();
        session.send(&mut link, 0);
        let sent = session.send(&mut link, 1000).unwrap();
        assert_eq!(sent.timed_out, Some(1));
        assert_eq!(sent.sequence, 2);
        assert_eq!(session.timeouts(), 1);
        assert_eq!(link.frames[1], (SEND_PING, vec![2]));
    }

    #[test]
    fn test_response_clears_outstanding() {
        let (mut session, mut link) = started();
        session.send(&mut link, 100);
        let reply = session.on_response(1, 140).unwrap();
        assert!(reply.matched);
        assert_eq!(reply.round_trip_ms, Some(40));
        assert!(!session.awaiting_response());
        assert_eq!(session.state(), PingState::Idle);

        let sent = session.send(&mut link, 1100).unwrap();
        assert_eq!(sent.timed_out, None);
    }

    #[test]
    fn test_mismatched_response_still_accepted() {
        let (mut session, mut link) = started();
        session.send(&mut link, 0);
        let reply = session.on_response(9, 10).unwrap();
        assert!(!reply.matched);
        assert!(!session.awaiting_response());
        assert_eq!(session.mismatches(), 1);
    }

    #[test]
    fn test_response_ignored_when_inactive() {
        let (mut session, mut link) = started();
        session.send(&mut link, 0);
        session.stop();
        assert_eq!(session.on_response(1, 10), None);
        assert_eq!(session.mismatches(), 0);
    }

    #[test]
    fn test_stop_silences_ticks() {
        let (mut session, _) = started();
        assert!(!session.tick());
        assert!(session.tick());
        session.stop();
        assert!(!session.tick());
        assert!(!session.is_active());
    }

    #[test]
    fn test_start_waits_full_interval() {
        let (mut session, mut link) = started();
        session.send(&mut link, 990);
        // The tick after start only closes the partial one
        assert!(!session.tick());
        assert!(session.awaiting_response());
        assert!(session.tick());
        assert_eq!(session.send(&mut link, 2000).unwrap().timed_out, Some(1));
    }

    #[test]
    fn test_restart_resets_sequence() {
        let (mut session, mut link) = started();
        session.send(&mut link, 0);
        session.send(&mut link, 0);
        session.stop();
        session.start(&mut Lcd::default());
        assert_eq!(session.send(&mut link, 0).unwrap().sequence, 1);
    }

    #[test]
    fn test_sequence_wraps() {
        let (mut session, mut link) = started();
        for _ in 0..256 {
            session.send(&mut link, 0);
        }
        assert_eq!(session.sequence(), 0);
        assert_eq!(link.frames.last(), Some(&(SEND_PING, vec![0])));
    }

    proptest! {
        #[test]
        fn prop_unanswered_sends(n in 1usize..600) {
            let (mut session, mut link) = started();
            let mut last = None;
            for i in 0..n {
                let sent = session.send(&mut link, 0).unwrap();
                if i == 0 {
                    prop_assert_eq!(sent.timed_out, None);
                } else {
                    prop_assert_eq!(sent.timed_out, last);
                }
                last = Some(sent.sequence);
            }
            prop_assert_eq!(session.sequence() as usize, n % 256);
            prop_assert!(session.awaiting_response());
            prop_assert_eq!(session.timeouts() as usize, n - 1);
        }

        #[test]
        fn prop_any_reply_clears(received in any::<u8>()) {
            let (mut session, mut link) = started();
            session.send(&mut link, 0);
            prop_assert!(session.on_response(received, 5).is_some());
            prop_assert!(!session.awaiting_response());
        }
    }
}
