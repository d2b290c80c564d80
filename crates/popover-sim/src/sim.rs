//! Replay a [`Scenario`] against a popover and collect what it did.

use std::{
    cell::{Cell, RefCell},
    fmt::{Display, Formatter, Result as FmtResult},
    rc::Rc,
    time::{Duration, Instant},
};

use popover::{
    AnchorId, CloseReason, PassOutcome, Popover, Rect, Size, SkipReason, Surface, TargetStyle,
    Viewport, ViewportSource,
};
use tracing::{debug, info};

use crate::scenario::{Event, Scenario};

/// The single anchor every scenario positions against.
pub const ANCHOR: AnchorId = AnchorId::new(1);

/// Something observable the popover did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// A placement was written to the target.
    Placed(TargetStyle),
    /// An explicit pass wrote nothing.
    Skipped(SkipReason),
    /// A rate-limited handler postponed its pass.
    Deferred(&'static str),
    /// The layer was mounted (`true`) or removed (`false`).
    Layer(bool),
    /// The popover asked its owner to close it.
    CloseRequested(CloseReason),
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Placed(style) => write!(
                f,
                "placed top={} left={} max-height={}",
                style.top, style.left, style.max_height
            ),
            Self::Skipped(reason) => {
                let why = match reason {
                    SkipReason::NotOpen => "not open",
                    SkipReason::TargetNotMounted => "target not mounted",
                    SkipReason::NoAnchor => "no anchor",
                };
                write!(f, "skipped: {why}")
            }
            Self::Deferred(label) => write!(f, "{label} deferred"),
            Self::Layer(true) => f.write_str("layer mounted"),
            Self::Layer(false) => f.write_str("layer removed"),
            Self::CloseRequested(reason) => write!(f, "close requested: {reason}"),
        }
    }
}

/// A [`Record`] stamped with scenario time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Milliseconds since the scenario started.
    pub at_ms: u64,
    /// What happened.
    pub record: Record,
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:>6}ms  {}", self.at_ms, self.record)
    }
}

/// Records not yet stamped with a time.
pub type Log = Rc<RefCell<Vec<Record>>>;

/// Viewport the scenario can resize between passes.
#[derive(Debug, Clone)]
pub struct SimViewport(Rc<Cell<Viewport>>);

impl SimViewport {
    /// Start at `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self(Rc::new(Cell::new(viewport)))
    }

    /// Resize.
    pub fn set(&self, viewport: Viewport) {
        self.0.set(viewport);
    }
}

impl ViewportSource for SimViewport {
    fn viewport(&self) -> Viewport {
        self.0.get()
    }
}

/// Surface with scripted geometry that logs everything written to it.
#[derive(Debug)]
pub struct SimSurface {
    /// Where [`ANCHOR`] currently is, if attached.
    pub anchor: Option<Rect>,
    /// The popover's mounting node.
    pub container: Option<Rect>,
    /// Target size once mounted.
    pub target: Option<Size>,
    /// Shared record sink.
    pub log: Log,
}

impl Surface for SimSurface {
    fn anchor_rect(&self, anchor: AnchorId) -> Option<Rect> {
        (anchor == ANCHOR).then_some(self.anchor).flatten()
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn target_size(&self) -> Option<Size> {
        self.target
    }

    fn write_style(&mut self, style: &TargetStyle) {
        self.log.borrow_mut().push(Record::Placed(*style));
    }

    fn layer_open_changed(&mut self, open: bool, _capture_click_away: bool) {
        self.log.borrow_mut().push(Record::Layer(open));
    }
}

/// A popover being driven through a scenario.
pub struct Simulation {
    /// The popover under test.
    popover: Popover<SimViewport, SimSurface>,
    /// Handle for scripted resizes.
    viewport: SimViewport,
    /// Unstamped records.
    log: Log,
    /// Scenario time zero.
    start: Instant,
    /// Close the popover when it asks.
    honor_close: bool,
    /// Stamped records so far.
    entries: Vec<Entry>,
}

impl Simulation {
    /// Build the popover described by `scenario`, closed and not yet mounted.
    pub fn new(scenario: &Scenario) -> Self {
        let log: Log = Rc::default();
        let viewport = SimViewport::new(scenario.viewport);
        let surface = SimSurface {
            anchor: scenario.anchor,
            container: scenario.container,
            target: scenario.target,
            log: Rc::clone(&log),
        };
        let sink = Rc::clone(&log);
        let popover = Popover::new(scenario.config.clone(), viewport.clone(), surface)
            .with_close_handler(move |reason| {
                sink.borrow_mut().push(Record::CloseRequested(reason));
            });
        Self {
            popover,
            viewport,
            log,
            start: Instant::now(),
            honor_close: scenario.honor_close,
            entries: Vec::new(),
        }
    }

    /// Replay every step in time order, then let pending timers run out.
    pub fn run(scenario: &Scenario) -> Vec<Entry> {
        let mut sim = Self::new(scenario);
        let mut steps = scenario.steps.clone();
        steps.sort_by_key(|step| step.at_ms);
        info!(steps = steps.len(), "sim: replaying scenario");

        let outcome = sim.popover.mount(sim.start);
        sim.note(outcome);
        sim.settle(0);
        for step in &steps {
            sim.advance_to(step.at_ms);
            debug!(at_ms = step.at_ms, event = ?step.event, "sim: step");
            sim.apply(&step.event, step.at_ms);
        }
        sim.drain_timers();
        sim.entries
    }

    /// Scenario milliseconds as an instant.
    fn instant(&self, at_ms: u64) -> Instant {
        self.start + Duration::from_millis(at_ms)
    }

    /// Instant as scenario milliseconds.
    fn elapsed_ms(&self, at: Instant) -> u64 {
        u64::try_from(at.saturating_duration_since(self.start).as_millis()).unwrap_or(u64::MAX)
    }

    /// Fire every timer due at or before `at_ms`.
    fn advance_to(&mut self, at_ms: u64) {
        let limit = self.instant(at_ms);
        while let Some(due) = self.popover.next_deadline().filter(|due| *due <= limit) {
            self.popover.poll(due);
            self.settle(self.elapsed_ms(due));
        }
    }

    /// Fire timers until none remain.
    fn drain_timers(&mut self) {
        while let Some(due) = self.popover.next_deadline() {
            self.popover.poll(due);
            self.settle(self.elapsed_ms(due));
        }
    }

    /// Apply one scripted event.
    fn apply(&mut self, event: &Event, at_ms: u64) {
        let now = self.instant(at_ms);
        match event {
            Event::Open => {
                let outcome = self.popover.set_open(true, Some(ANCHOR), now);
                self.note(outcome);
            }
            Event::Close => {
                let outcome = self.popover.set_open(false, None, now);
                self.note(outcome);
            }
            Event::Update => {
                let outcome = self.popover.update(now);
                self.note(outcome);
            }
            Event::ClickAway => self.popover.on_click_away(),
            Event::Resize(viewport) => {
                self.viewport.set(*viewport);
                match self.popover.on_resize(now) {
                    Some(outcome) => self.note(outcome),
                    None => self.push(Record::Deferred("resize")),
                }
            }
            Event::Scroll(rect) => {
                self.popover.surface_mut().anchor = Some(*rect);
                match self.popover.on_scroll(now) {
                    Some(outcome) => self.note(outcome),
                    None => self.push(Record::Deferred("scroll")),
                }
            }
            Event::MoveAnchor(rect) => self.popover.surface_mut().anchor = Some(*rect),
            Event::DetachAnchor => self.popover.surface_mut().anchor = None,
            Event::ResizeTarget(size) => self.popover.surface_mut().target = Some(*size),
            Event::Configure(config) => {
                let outcome = self.popover.set_config(config.clone(), now);
                self.note(outcome);
            }
        }
        self.settle(at_ms);
    }

    /// Keep skipped passes worth reporting; placements arrive via the surface.
    fn note(&self, outcome: PassOutcome) {
        if let PassOutcome::Skipped(reason) = outcome
            && reason != SkipReason::NotOpen
        {
            self.push(Record::Skipped(reason));
        }
    }

    /// Queue a record for stamping.
    fn push(&self, record: Record) {
        self.log.borrow_mut().push(record);
    }

    /// Stamp queued records with `at_ms`, honouring close requests.
    fn settle(&mut self, at_ms: u64) {
        let records: Vec<Record> = self.log.borrow_mut().drain(..).collect();
        let close = records
            .iter()
            .any(|r| matches!(r, Record::CloseRequested(_)));
        self.entries
            .extend(records.into_iter().map(|record| Entry { at_ms, record }));
        if close && self.honor_close {
            let outcome = self.popover.set_open(false, None, self.instant(at_ms));
            self.note(outcome);
            let records: Vec<Record> = self.log.borrow_mut().drain(..).collect();
            self.entries
                .extend(records.into_iter().map(|record| Entry { at_ms, record }));
        }
    }
}
