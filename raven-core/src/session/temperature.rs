//! Temperature session
//!
//! Shows the sensor reading on the numeric area with its unit symbol, and
//! reports it to the radio MCU as ASCII text, either once or on every
//! report interval until stopped.

use raven_hal::{ControlRegister, OutputPin};
use raven_protocol::{format_signed_with_unit, ConsoleMessage, SignedText, TemperatureUnit};

use super::interval::Interval;
use crate::traits::{FrameSink, LcdDriver, LcdExt, NumberPadding, Symbol, TemperatureSensor};

/// Work due on a base tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureDue {
    /// An auto-report should be sent
    pub report: bool,
    /// The on-screen reading should be refreshed
    pub refresh: bool,
}

/// Temperature unit, auto-report and display state
#[derive(Debug, Clone)]
pub struct TemperatureSession {
    unit: TemperatureUnit,
    auto_report: bool,
    displayed: bool,
    report_interval: Interval,
    refresh_interval: Interval,
    reports_sent: u32,
}

impl TemperatureSession {
    /// Create a session with nothing displayed and auto-report off
    pub fn new(report_interval_ticks: u16, refresh_interval_ticks: u16) -> Self {
        Self {
            unit: TemperatureUnit::Celsius,
            auto_report: false,
            displayed: false,
            report_interval: Interval::new(report_interval_ticks),
            refresh_interval: Interval::new(refresh_interval_ticks),
            reports_sent: 0,
        }
    }

    /// Select `unit` and show the current reading
    pub fn display_once<S, L, M>(
        &mut self,
        unit: TemperatureUnit,
        sensor: &mut S,
        lcd: &mut L,
        mcu: &M,
    ) where
        S: TemperatureSensor,
        L: LcdDriver,
        M: ControlRegister,
    {
        self.unit = unit;
        self.displayed = true;
        self.refresh_interval.rearm();
        self.render(sensor, lcd, mcu);
    }

    /// Re-read and re-render the reading in the current unit
    ///
    /// Does nothing unless a temperature is displayed.
    pub fn refresh<S, L, M>(&mut self, sensor: &mut S, lcd: &mut L, mcu: &M)
    where
        S: TemperatureSensor,
        L: LcdDriver,
        M: ControlRegister,
    {
        if self.displayed {
            self.render(sensor, lcd, mcu);
        }
    }

    fn render<S, L, M>(&self, sensor: &mut S, lcd: &mut L, mcu: &M)
    where
        S: TemperatureSensor,
        L: LcdDriver,
        M: ControlRegister,
    {
        let value = sensor.read(self.unit);

        lcd.show_unit(self.unit);
        // Caution while JTAG still owns the sensor pins
        lcd.set_symbol_state(Symbol::Caution, !mcu.jtag_disabled());
        lcd.write_number(value, NumberPadding::Space);
        trace!("temperature: displayed {}", value);
    }

    /// Choose one-shot or auto-report, then send one report right away
    pub fn prepare_and_send<O, S, F>(
        &mut self,
        send_once: bool,
        led: &mut O,
        sensor: &mut S,
        link: &mut F,
    ) -> SignedText
    where
        O: OutputPin,
        S: TemperatureSensor,
        F: FrameSink,
    {
        self.auto_report = !send_once;
        if self.auto_report {
            self.report_interval.rearm();
            info!("temperature: auto-report on");
        }
        self.send_report(led, sensor, link)
    }

    /// Read the sensor and send the reading as a temperature report
    ///
    /// The activity LED is lit for the duration of the call. The payload
    /// is exactly the encoded text.
    pub fn send_report<O, S, F>(&mut self, led: &mut O, sensor: &mut S, link: &mut F) -> SignedText
    where
        O: OutputPin,
        S: TemperatureSensor,
        F: FrameSink,
    {
        led.set_high();

        let value = sensor.read(self.unit);
        let text = format_signed_with_unit(value, self.unit);
        link.send_message(&ConsoleMessage::Temperature {
            text: text.as_bytes(),
        });
        self.reports_sent = self.reports_sent.wrapping_add(1);
        debug!("temperature: report {} ({} bytes)", text, text.len());

        led.set_low();
        text
    }

    /// Stop auto-reporting; the display is left as is
    pub fn stop_auto(&mut self) {
        if self.auto_report {
            info!("temperature: auto-report off");
        }
        self.auto_report = false;
    }

    /// Remove the temperature from the display
    pub fn clear<L: LcdDriver>(&mut self, lcd: &mut L) {
        self.displayed = false;
        lcd.clear_symbol(Symbol::Fahrenheit);
        lcd.clear_symbol(Symbol::Celsius);
        lcd.clear_symbol(Symbol::Caution);
        lcd.clear_number();
    }

    /// Account for one base tick
    pub fn tick(&mut self) -> TemperatureDue {
        TemperatureDue {
            report: self.auto_report && self.report_interval.tick(),
            refresh: self.displayed && self.refresh_interval.tick(),
        }
    }

    /// Unit used for display and reports
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Whether a report goes out on every report interval
    pub fn auto_report(&self) -> bool {
        self.auto_report
    }

    /// Whether the numeric area currently shows a temperature
    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// Reports sent since creation
    pub fn reports_sent(&self) -> u32 {
        self.reports_sent
    }
}
