//! Popover lifecycle and placement passes.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    time::Instant,
};

use popover_geom::{Rect, anchor_points, target_points};
use popover_place::{anchor_offscreen, auto_position, raw_offset};
use tracing::{debug, trace, warn};

use crate::{
    Error,
    config::PopoverConfig,
    lifecycle::{PassOutcome, Phase, SkipReason},
    style::{Style, TargetStyle, root_style, transform_origin},
    surface::{AnchorId, CloseReason, Surface, ViewportSource},
    throttle::RateLimiter,
};

/// Callback invoked when the popover asks its owner to close it.
pub type CloseHandler = Box<dyn FnMut(CloseReason)>;

/// What triggered a placement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PassSource {
    /// Initial mount.
    Mount,
    /// Any update while open, including opening.
    Update,
    /// Rate-limited window resize.
    Resize,
    /// Rate-limited window scroll; the only source that checks off-screen.
    Scroll,
}

/// Anchored popover driven by host events.
///
/// Every event carries the current time. Timers never fire on their own: the
/// host asks [`Popover::next_deadline`] when to wake up and calls
/// [`Popover::poll`] then. Consuming the popover with [`Popover::unmount`]
/// cancels everything pending.
pub struct Popover<V, S> {
    /// Caller options.
    config: PopoverConfig,
    /// Viewport size provider.
    viewport: V,
    /// Layer the target is mounted into.
    surface: S,
    /// Lifecycle phase; `Closing` owns the close timer.
    phase: Phase,
    /// Anchor captured on open.
    anchor: Option<AnchorId>,
    /// Rate limiter for resize passes.
    resize: RateLimiter,
    /// Rate limiter for scroll passes.
    scroll: RateLimiter,
    /// Owner callback for close requests.
    on_close: Option<CloseHandler>,
    /// A missing anchor has already been reported for this open cycle.
    anchor_warned: bool,
    /// Last placement written.
    last: Option<TargetStyle>,
}

impl<V, S> Debug for Popover<V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Popover")
            .field("phase", &self.phase)
            .field("anchor", &self.anchor)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl<V: ViewportSource, S: Surface> Popover<V, S> {
    /// Create a closed popover.
    pub fn new(config: PopoverConfig, viewport: V, surface: S) -> Self {
        let timings = config.timings;
        Self {
            config,
            viewport,
            surface,
            phase: Phase::Closed,
            anchor: None,
            resize: RateLimiter::new("resize", timings.resize_period()),
            scroll: RateLimiter::new("scroll", timings.scroll_period()),
            on_close: None,
            anchor_warned: false,
            last: None,
        }
    }

    /// Builder: register the close-request callback.
    #[must_use]
    pub fn with_close_handler(mut self, handler: impl FnMut(CloseReason) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the layer should be mounted (open or closing).
    pub fn layer_open(&self) -> bool {
        self.phase.layer_open()
    }

    /// Whether the transition should show the target fully.
    pub fn transition_open(&self) -> bool {
        self.phase.transition_open()
    }

    /// Anchor captured by the last open request.
    pub fn anchor(&self) -> Option<AnchorId> {
        self.anchor
    }

    /// Last placement written to the target.
    pub fn last_style(&self) -> Option<TargetStyle> {
        self.last
    }

    /// Root style for the target: fixed position, caller style, placement.
    pub fn root_style(&self) -> Style {
        root_style(&self.config.style, self.last.as_ref())
    }

    /// Transform origin the transition scales the target from.
    pub fn transform_origin(&self) -> String {
        transform_origin(self.config.target_origin)
    }

    /// Shared access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The popover has been mounted into its host.
    pub fn mount(&mut self, _now: Instant) -> PassOutcome {
        self.pass(PassSource::Mount)
    }

    /// The host re-rendered; re-place while open.
    pub fn update(&mut self, _now: Instant) -> PassOutcome {
        self.pass(PassSource::Update)
    }

    /// Replace the configuration and re-place.
    pub fn set_config(&mut self, config: PopoverConfig, now: Instant) -> PassOutcome {
        self.resize.set_period(config.timings.resize_period());
        self.scroll.set_period(config.timings.scroll_period());
        self.config = config;
        self.update(now)
    }

    /// Set the open intent.
    ///
    /// Opening captures `anchor` (keeping the previous one when `None`) and
    /// cancels a pending close. Closing enters [`Phase::Closing`] when
    /// animated and [`Phase::Closed`] otherwise; close requests while a close
    /// timer is pending are ignored.
    pub fn set_open(&mut self, open: bool, anchor: Option<AnchorId>, now: Instant) -> PassOutcome {
        if anchor.is_some() {
            self.anchor = anchor;
        }
        match (open, self.phase) {
            (true, Phase::Closed) => {
                self.phase = Phase::Open;
                self.anchor_warned = false;
                debug!(anchor = ?self.anchor, "popover: open");
                self.surface
                    .layer_open_changed(true, self.config.use_layer_for_click_away);
            }
            (true, Phase::Closing { .. }) => {
                self.phase = Phase::Open;
                self.anchor_warned = false;
                debug!(anchor = ?self.anchor, "popover: reopened; close timer cancelled");
            }
            (false, Phase::Open) if self.config.animated => {
                let deadline = now + self.config.timings.close_delay();
                self.phase = Phase::Closing { deadline };
                debug!(
                    delay_ms = self.config.timings.close_delay_ms,
                    "popover: closing"
                );
            }
            (false, Phase::Open) => {
                self.phase = Phase::Closed;
                debug!("popover: closed");
                self.surface
                    .layer_open_changed(false, self.config.use_layer_for_click_away);
            }
            (false, Phase::Closing { .. }) => {
                trace!("popover: close already pending");
            }
            (true, Phase::Open) | (false, Phase::Closed) => {}
        }
        self.update(now)
    }

    /// A click landed outside the target.
    pub fn on_click_away(&mut self) {
        if self.layer_open() {
            self.request_close(CloseReason::ClickAway);
        }
    }

    /// The window was resized. Returns the outcome when a pass ran now.
    pub fn on_resize(&mut self, now: Instant) -> Option<PassOutcome> {
        self.resize
            .hit(now)
            .then(|| self.pass(PassSource::Resize))
    }

    /// The window scrolled. Returns the outcome when a pass ran now.
    pub fn on_scroll(&mut self, now: Instant) -> Option<PassOutcome> {
        self.scroll
            .hit(now)
            .then(|| self.pass(PassSource::Scroll))
    }

    /// Fire the close timer and trailing rate-limited passes due at `now`.
    pub fn poll(&mut self, now: Instant) {
        if let Phase::Closing { deadline } = self.phase
            && now >= deadline
        {
            self.phase = Phase::Closed;
            debug!("popover: close timer elapsed");
            self.surface
                .layer_open_changed(false, self.config.use_layer_for_click_away);
        }
        if self.resize.poll(now) {
            self.pass(PassSource::Resize);
        }
        if self.scroll.poll(now) {
            self.pass(PassSource::Scroll);
        }
    }

    /// Earliest time [`Popover::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let close = match self.phase {
            Phase::Closing { deadline } => Some(deadline),
            Phase::Closed | Phase::Open => None,
        };
        [close, self.resize.deadline(), self.scroll.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Tear down: cancel the close timer and both rate limiters, and hand the
    /// surface back.
    pub fn unmount(mut self) -> S {
        self.resize.cancel();
        self.scroll.cancel();
        if let Phase::Closing { .. } = self.phase {
            debug!("popover: unmount cancelled close timer");
        }
        debug!(phase = %self.phase, "popover: unmount");
        self.surface
    }

    /// Forward a close request to the owner.
    fn request_close(&mut self, reason: CloseReason) {
        debug!(%reason, "popover: request close");
        if let Some(handler) = self.on_close.as_mut() {
            handler(reason);
        }
    }

    /// Measure the anchor, falling back to the mounting container.
    fn anchor_rect(&self) -> Option<Rect> {
        self.anchor
            .and_then(|id| self.surface.anchor_rect(id))
            .or_else(|| self.surface.container_rect())
    }

    /// Run one placement pass.
    fn pass(&mut self, source: PassSource) -> PassOutcome {
        if self.phase != Phase::Open {
            return PassOutcome::Skipped(SkipReason::NotOpen);
        }
        let Some(size) = self.surface.target_size() else {
            trace!(?source, "popover: target not mounted; pass skipped");
            return PassOutcome::Skipped(SkipReason::TargetNotMounted);
        };
        let Some(rect) = self.anchor_rect() else {
            if !self.anchor_warned {
                self.anchor_warned = true;
                warn!(error = %Error::NoAnchor, "popover: placement skipped");
            }
            return PassOutcome::Skipped(SkipReason::NoAnchor);
        };

        let viewport = self.viewport.viewport();
        let anchor_origin = self.config.anchor_origin;
        let target_origin = self.config.target_origin;
        let anchor = anchor_points(&rect);
        let mut target = target_points(size);
        let naive = raw_offset(&anchor, &target, anchor_origin, target_origin);

        if source == PassSource::Scroll
            && self.config.auto_close_when_off_screen
            && anchor_offscreen(&anchor, viewport)
        {
            self.request_close(CloseReason::OffScreen);
        }

        let offset = if self.config.can_auto_position {
            // Layout may have changed the target's height since the first read.
            if let Some(size) = self.surface.target_size() {
                target = target_points(size);
            }
            auto_position(&anchor, &target, anchor_origin, target_origin, naive, viewport)
        } else {
            naive
        };

        let style = TargetStyle::from_offset(offset, viewport);
        trace!(
            ?source,
            naive_top = naive.top,
            naive_left = naive.left,
            top = style.top,
            left = style.left,
            max_height = style.max_height,
            "popover: placed"
        );
        self.surface.write_style(&style);
        self.last = Some(style);
        PassOutcome::Placed(style)
    }
}
