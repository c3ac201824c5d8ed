//! Recording mock board for integration tests.
//!
//! Every collaborator appends to one shared call log, so tests can assert
//! on the relative order of calls across peripherals.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use raven_core::config::ConsoleConfig;
use raven_core::traits::{
    Board, FrameSink, Glyph, Key, Keypad, LcdDriver, NumberPadding, Peripherals, PowerSequencer,
    Symbol, TemperatureSensor,
};
use raven_core::{Event, MenuController};
use raven_hal::{ByteStore, ControlRegister, OutputPin, ERASED_BYTE};
use raven_protocol::{ControllerReport, TemperatureUnit};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    LcdClear,
    LcdText(Vec<u8>),
    LcdSetSymbol(Symbol),
    LcdClearSymbol(Symbol),
    LcdNumber(i16),
    LcdDigit(u8, Glyph),
    LcdClearNumber,
    LcdShutdown,
    LcdReinit,
    KeypadShutdown,
    KeypadReinit,
    KeypadTake,
    Send(u8, Vec<u8>),
    SuspendPeripherals,
    ResumePeripherals,
    EnterLowPower,
    ResumeRadio,
    SensorInit,
    SensorRead(TemperatureUnit),
    EepromWrite(u16, u8),
    IrqDisable,
    IrqRestore(bool),
    McuWrite(u8),
    Led(bool),
}

pub type Log = Rc<RefCell<Vec<HwCall>>>;

fn record(log: &Log, call: HwCall) {
    log.borrow_mut().push(call);
}

// ── Collaborators ─────────────────────────────────────────────

pub struct MockLcd(Log);

impl LcdDriver for MockLcd {
    fn clear(&mut self) {
        record(&self.0, HwCall::LcdClear);
    }
    fn write_text(&mut self, text: &[u8]) {
        record(&self.0, HwCall::LcdText(text.to_vec()));
    }
    fn set_symbol(&mut self, symbol: Symbol) {
        record(&self.0, HwCall::LcdSetSymbol(symbol));
    }
    fn clear_symbol(&mut self, symbol: Symbol) {
        record(&self.0, HwCall::LcdClearSymbol(symbol));
    }
    fn write_number(&mut self, value: i16, _padding: NumberPadding) {
        record(&self.0, HwCall::LcdNumber(value));
    }
    fn write_digit(&mut self, position: u8, glyph: Glyph) {
        record(&self.0, HwCall::LcdDigit(position, glyph));
    }
    fn clear_number(&mut self) {
        record(&self.0, HwCall::LcdClearNumber);
    }
    fn shutdown(&mut self) {
        record(&self.0, HwCall::LcdShutdown);
    }
    fn reinit(&mut self) {
        record(&self.0, HwCall::LcdReinit);
    }
}

/// Keypad that reports a key held for `held_polls` polls after wake
pub struct MockKeypad {
    log: Log,
    pub held_polls: Rc<Cell<u32>>,
    pub latched: Rc<Cell<bool>>,
}

impl Keypad for MockKeypad {
    fn shutdown(&mut self) {
        record(&self.log, HwCall::KeypadShutdown);
    }
    fn reinit(&mut self) {
        record(&self.log, HwCall::KeypadReinit);
    }
    fn current_state(&mut self) -> Option<Key> {
        let held = self.held_polls.get();
        if held == 0 {
            None
        } else {
            self.held_polls.set(held - 1);
            Some(Key::Enter)
        }
    }
    fn pending_event(&self) -> bool {
        self.latched.get()
    }
    fn take_event(&mut self) -> Option<Key> {
        record(&self.log, HwCall::KeypadTake);
        self.latched.replace(false).then_some(Key::Enter)
    }
}

pub struct MockLink(Log);

impl FrameSink for MockLink {
    fn send_frame(&mut self, command: u8, payload: &[u8]) {
        record(&self.0, HwCall::Send(command, payload.to_vec()));
    }
}

pub struct MockPower(Log);

impl PowerSequencer for MockPower {
    fn suspend_peripherals(&mut self) {
        record(&self.0, HwCall::SuspendPeripherals);
    }
    fn resume_peripherals(&mut self) {
        record(&self.0, HwCall::ResumePeripherals);
    }
    fn enter_low_power(&mut self) {
        record(&self.0, HwCall::EnterLowPower);
    }
    fn resume_radio(&mut self) {
        record(&self.0, HwCall::ResumeRadio);
    }
}

pub struct MockSensor {
    log: Log,
    pub value: Rc<Cell<i16>>,
}

impl TemperatureSensor for MockSensor {
    fn init(&mut self) {
        record(&self.log, HwCall::SensorInit);
    }
    fn read(&mut self, unit: TemperatureUnit) -> i16 {
        record(&self.log, HwCall::SensorRead(unit));
        self.value.get()
    }
}

pub struct MockEeprom {
    log: Log,
    pub cells: Rc<RefCell<[u8; 16]>>,
}

impl ByteStore for MockEeprom {
    fn read_byte(&mut self, address: u16) -> u8 {
        self.cells.borrow()[address as usize]
    }
    fn write_byte(&mut self, address: u16, value: u8) {
        record(&self.log, HwCall::EepromWrite(address, value));
        self.cells.borrow_mut()[address as usize] = value;
    }
}

// Interrupt masking goes through the `critical-section` crate, so the
// mock interrupt flag is global to the test thread and records into the
// log of the most recently built peripherals.
thread_local! {
    static IRQ_LOG: RefCell<Option<Log>> = const { RefCell::new(None) };
    static IRQ_ENABLED: Cell<bool> = const { Cell::new(true) };
}

fn attach_irq_log(log: &Log) {
    IRQ_LOG.with(|slot| *slot.borrow_mut() = Some(log.clone()));
    IRQ_ENABLED.with(|e| e.set(true));
}

fn record_irq(call: HwCall) {
    IRQ_LOG.with(|slot| {
        if let Some(log) = slot.borrow().as_ref() {
            record(log, call);
        }
    });
}

/// Whether the mock interrupt flag is currently set
pub fn irq_enabled() -> bool {
    IRQ_ENABLED.with(|e| e.get())
}

struct RecordingCs;
critical_section::set_impl!(RecordingCs);

#[allow(unsafe_code)]
unsafe impl critical_section::Impl for RecordingCs {
    unsafe fn acquire() -> bool {
        record_irq(HwCall::IrqDisable);
        IRQ_ENABLED.with(|e| e.replace(false))
    }

    unsafe fn release(was_enabled: bool) {
        record_irq(HwCall::IrqRestore(was_enabled));
        IRQ_ENABLED.with(|e| e.set(was_enabled));
    }
}

pub struct MockMcu {
    log: Log,
    pub value: Rc<Cell<u8>>,
}

impl ControlRegister for MockMcu {
    fn read(&self) -> u8 {
        self.value.get()
    }
    fn write(&mut self, value: u8) {
        record(&self.log, HwCall::McuWrite(value));
        self.value.set(value);
    }
}

pub struct MockLed {
    log: Log,
    on: bool,
}

impl OutputPin for MockLed {
    fn set_high(&mut self) {
        record(&self.log, HwCall::Led(true));
        self.on = true;
    }
    fn set_low(&mut self) {
        record(&self.log, HwCall::Led(false));
        self.on = false;
    }
    fn is_set_high(&self) -> bool {
        self.on
    }
}

// ── Board ─────────────────────────────────────────────────────

pub struct MockBoard;

impl Board for MockBoard {
    type Lcd = MockLcd;
    type Keypad = MockKeypad;
    type Link = MockLink;
    type Power = MockPower;
    type Sensor = MockSensor;
    type Store = MockEeprom;
    type Mcu = MockMcu;
    type Led = MockLed;
}

/// Test-side handles into the mock board state
#[derive(Clone)]
pub struct Handles {
    pub log: Log,
    pub eeprom: Rc<RefCell<[u8; 16]>>,
    pub temperature: Rc<Cell<i16>>,
    pub mcu: Rc<Cell<u8>>,
    pub held_polls: Rc<Cell<u32>>,
    pub latched: Rc<Cell<bool>>,
}

impl Handles {
    /// Fresh handles with an erased EEPROM
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            eeprom: Rc::new(RefCell::new([ERASED_BYTE; 16])),
            temperature: Rc::new(Cell::new(0)),
            mcu: Rc::new(Cell::new(0)),
            held_polls: Rc::new(Cell::new(0)),
            latched: Rc::new(Cell::new(false)),
        }
    }

    /// Handles for a power cycle: same EEPROM, everything else reset
    pub fn restarted(&self) -> Self {
        Self {
            eeprom: self.eeprom.clone(),
            ..Self::new()
        }
    }

    pub fn peripherals(&self) -> Peripherals<MockBoard> {
        attach_irq_log(&self.log);
        Peripherals {
            lcd: MockLcd(self.log.clone()),
            keypad: MockKeypad {
                log: self.log.clone(),
                held_polls: self.held_polls.clone(),
                latched: self.latched.clone(),
            },
            link: MockLink(self.log.clone()),
            power: MockPower(self.log.clone()),
            sensor: MockSensor {
                log: self.log.clone(),
                value: self.temperature.clone(),
            },
            store: MockEeprom {
                log: self.log.clone(),
                cells: self.eeprom.clone(),
            },
            mcu: MockMcu {
                log: self.log.clone(),
                value: self.mcu.clone(),
            },
            led: MockLed {
                log: self.log.clone(),
                on: false,
            },
        }
    }

    /// Take and clear the call log
    pub fn take_calls(&self) -> Vec<HwCall> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Frames sent so far, without clearing the log
    pub fn sent(&self) -> Vec<(u8, Vec<u8>)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HwCall::Send(command, payload) => Some((*command, payload.clone())),
                _ => None,
            })
            .collect()
    }
}

/// Controller over a fresh mock board, initialized, with the log cleared
pub fn console(config: &ConsoleConfig) -> (MenuController<MockBoard>, Handles) {
    let handles = Handles::new();
    let mut menu = MenuController::new(handles.peripherals(), config);
    menu.init();
    handles.take_calls();
    (menu, handles)
}

pub fn command(code: u8, arg: u8) -> Event {
    command_at(code, arg, 0)
}

pub fn command_at(code: u8, arg: u8, now_ms: u32) -> Event {
    Event::Command { code, arg, now_ms }
}

pub fn tick(now_ms: u32) -> Event {
    Event::Tick { now_ms }
}

pub fn report(report: ControllerReport, now_ms: u32) -> Event {
    let frame = report.to_frame().expect("report fits in a frame");
    Event::Frame { frame, now_ms }
}
