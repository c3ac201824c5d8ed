//! Menu controller
//!
//! Owns the board peripherals, both sessions, the debug mode controller
//! and the remembered display text. Everything runs on one execution
//! context: the board's event loop hands each [`Event`] to
//! [`MenuController::handle`] in turn.

use heapless::String;
use raven_hal::OutputPin;
use raven_protocol::{format_unsigned, ControllerReport, Frame};

use super::commands::{Action, CommandTable};
use super::display_text::DisplayText;
use super::events::Event;
use crate::config::{ConsoleConfig, MAX_BANNER_LEN};
use crate::debug_mode::DebugModeController;
use crate::session::{PingReply, PingSession, TemperatureSession};
use crate::traits::{
    Board, Keypad, LcdDriver, LcdExt, NumberPadding, Peripherals, PowerSequencer, Symbol,
};

/// Largest round-trip time the numeric area can show
const MAX_SHOWN_RTT_MS: u32 = 9999;

/// Console state machine for one board
pub struct MenuController<B: Board> {
    hw: Peripherals<B>,
    commands: CommandTable,
    ping: PingSession,
    temperature: TemperatureSession,
    debug: DebugModeController,
    text: DisplayText,
    wake_banner: String<MAX_BANNER_LEN>,
    /// Time of the last event
    now_ms: u32,
}

impl<B: Board> MenuController<B> {
    /// Create a controller with the default command table
    pub fn new(hw: Peripherals<B>, config: &ConsoleConfig) -> Self {
        Self {
            hw,
            commands: CommandTable::default(),
            ping: PingSession::new(config.ping_interval_ticks),
            temperature: TemperatureSession::new(
                config.report_interval_ticks,
                config.display_refresh_ticks,
            ),
            debug: DebugModeController::new(config.debug_eeprom_addr),
            text: DisplayText::new(),
            wake_banner: config.wake_banner.clone(),
            now_ms: 0,
        }
    }

    /// Replace the command table
    pub fn with_commands(mut self, commands: CommandTable) -> Self {
        self.commands = commands;
        self
    }

    /// Startup: re-apply the persisted debug mode
    pub fn init(&mut self) {
        let hw = &mut self.hw;
        self.debug
            .restore_from_storage(&mut hw.mcu, &mut hw.sensor, &mut hw.store);
        info!("menu: ready, jtag enabled = {}", self.debug.is_enabled());
    }

    /// Process one event
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Command { code, arg, now_ms } => self.on_command(code, arg, now_ms),
            Event::Tick { now_ms } => self.on_tick(now_ms),
            Event::Frame { frame, now_ms } => self.on_frame(&frame, now_ms),
        }
    }

    /// Resolve and perform a menu command
    ///
    /// Unknown codes are logged and ignored. A ping started here is
    /// timed from `now_ms`.
    pub fn on_command(&mut self, code: u8, arg: u8, now_ms: u32) {
        self.now_ms = now_ms;
        match self.commands.resolve(code, arg) {
            Some(action) => self.perform(action),
            None => warn!("menu: unknown command {}", code),
        }
    }

    /// Perform a resolved action
    pub fn perform(&mut self, action: Action) {
        debug!("menu: {}", action);
        let hw = &mut self.hw;

        match action {
            Action::StartPing => {
                // The numeric area shows either dashes or a temperature
                if self.temperature.is_displayed() {
                    self.temperature.clear(&mut hw.lcd);
                }
                self.ping.start(&mut hw.lcd);
                self.ping.send(&mut hw.link, self.now_ms);
            }
            Action::StopPing => self.ping.stop(),
            Action::ReadTemperature(unit) => {
                self.ping.stop();
                self.temperature
                    .display_once(unit, &mut hw.sensor, &mut hw.lcd, &hw.mcu);
            }
            Action::ClearTemperature => self.temperature.clear(&mut hw.lcd),
            Action::PrepareTemperature { send_once } => {
                self.temperature
                    .prepare_and_send(send_once, &mut hw.led, &mut hw.sensor, &mut hw.link);
            }
            Action::StopTemperature => self.temperature.stop_auto(),
            Action::SetDebugMode { jtag_enabled } => {
                self.debug
                    .set(jtag_enabled, &mut hw.mcu, &mut hw.sensor, &mut hw.store);
            }
            Action::Sleep => {
                let resume = self.text.clone();
                self.enter_sleep_then_wake(&resume);
            }
        }
    }

    /// Advance every session by one base tick
    pub fn on_tick(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
        let hw = &mut self.hw;

        if self.ping.tick() {
            if let Some(sent) = self.ping.send(&mut hw.link, now_ms) {
                if sent.timed_out.is_some() {
                    hw.lcd.show_pending();
                }
            }
        }

        let due = self.temperature.tick();
        if due.report {
            self.temperature
                .send_report(&mut hw.led, &mut hw.sensor, &mut hw.link);
        }
        if due.refresh {
            self.temperature
                .refresh(&mut hw.sensor, &mut hw.lcd, &hw.mcu);
        }
    }

    /// Interpret a frame from the radio MCU
    ///
    /// Malformed or unknown frames are logged and dropped.
    pub fn on_frame(&mut self, frame: &Frame, now_ms: u32) {
        self.now_ms = now_ms;

        let report = match ControllerReport::from_frame(frame) {
            Ok(report) => report,
            Err(e) => {
                warn!("menu: dropped frame {}: {}", frame.command, e);
                return;
            }
        };

        match report {
            ControllerReport::PingReply { sequence, beep } => {
                if let Some(reply) = self.ping.on_response(sequence, now_ms) {
                    self.show_ping_reply(reply);
                }
                if beep {
                    // No buzzer on the console side
                    debug!("menu: beep requested");
                }
            }
            ControllerReport::Text(text) => self.show_text(&text),
            ControllerReport::Wake => {
                self.hw.lcd.set_symbol(Symbol::Raven);
                self.hw.lcd.write_text(self.text.as_bytes());
                info!("menu: wake report");
            }
        }
    }

    fn show_ping_reply(&mut self, reply: PingReply) {
        let digits = format_unsigned(reply.sequence % 100);
        let text = [b'P', b'I', b'N', b'G', b' ', digits[0], digits[1]];
        self.show_text(&text);

        if let Some(rtt) = reply.round_trip_ms {
            // Bounded by MAX_SHOWN_RTT_MS, fits in i16
            let shown = rtt.min(MAX_SHOWN_RTT_MS) as i16;
            self.hw.lcd.write_number(shown, NumberPadding::Space);
        }
    }

    /// Show `text` in the text area and remember it for wake
    pub fn show_text(&mut self, text: &[u8]) {
        self.text.set(text);
        self.hw.lcd.write_text(self.text.as_bytes());
    }

    /// Sleep until an external wake stimulus, then restore `resume_text`
    ///
    /// Blocks. No peripheral is touched while powered down, and a press
    /// latched during wake is discarded.
    pub fn enter_sleep_then_wake(&mut self, resume_text: &DisplayText) {
        self.ping.stop();
        info!("menu: entering sleep");

        let hw = &mut self.hw;
        hw.led.set_low();
        hw.power.suspend_peripherals();
        hw.lcd.shutdown();
        hw.keypad.shutdown();

        hw.power.enter_low_power();

        hw.lcd.reinit();
        hw.lcd.write_text(self.wake_banner.as_bytes());
        hw.lcd.set_symbol(Symbol::Raven);
        hw.keypad.reinit();
        hw.power.resume_peripherals();
        hw.power.resume_radio();

        while hw.keypad.current_state().is_some() {}
        while hw.keypad.pending_event() {
            let _ = hw.keypad.take_event();
        }

        self.show_text(resume_text.as_bytes());
        info!("menu: awake");
    }

    pub fn ping(&self) -> &PingSession {
        &self.ping
    }

    pub fn temperature(&self) -> &TemperatureSession {
        &self.temperature
    }

    pub fn debug_mode(&self) -> &DebugModeController {
        &self.debug
    }

    /// Text currently shown in the text area
    pub fn display_text(&self) -> &DisplayText {
        &self.text
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Time of the last event
    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    pub fn peripherals(&self) -> &Peripherals<B> {
        &self.hw
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<B> {
        &mut self.hw
    }

    /// Give the peripherals back
    pub fn release(self) -> Peripherals<B> {
        self.hw
    }
}
