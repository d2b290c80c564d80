#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::{
        PassOutcome, Phase, PopoverConfig, Rect, SkipReason,
        surface::CloseReason,
        test_support::{BUTTON, FakeSurface, button_rect, ms, popover},
    };

    fn small_menu() -> FakeSurface {
        FakeSurface::with_target(50.0, 20.0).anchor(BUTTON, button_rect())
    }

    fn unanimated() -> PopoverConfig {
        PopoverConfig {
            animated: false,
            ..PopoverConfig::default()
        }
    }

    #[test]
    fn starts_closed_and_skips_passes() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        assert_eq!(p.phase(), Phase::Closed);
        assert!(!p.layer_open());
        assert_eq!(p.mount(t0), PassOutcome::Skipped(SkipReason::NotOpen));
        assert!(p.surface().writes.is_empty());
    }

    #[test]
    fn opening_mounts_layer_and_places() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        let outcome = p.set_open(true, Some(BUTTON), t0);
        assert_eq!(p.phase(), Phase::Open);
        assert!(p.layer_open());
        assert!(p.transition_open());
        assert_eq!(p.anchor(), Some(BUTTON));
        assert_eq!(p.surface().layer_events, vec![true]);
        let style = outcome.placed().expect("placed on open");
        assert_eq!((style.top, style.left), (530, 20));
    }

    #[test]
    fn animated_close_waits_for_timer() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);

        p.set_open(false, None, t0 + ms(10));
        assert_eq!(
            p.phase(),
            Phase::Closing {
                deadline: t0 + ms(510)
            }
        );
        assert!(p.layer_open());
        assert!(!p.transition_open());
        assert_eq!(p.next_deadline(), Some(t0 + ms(510)));

        p.poll(t0 + ms(509));
        assert!(p.layer_open());

        p.poll(t0 + ms(510));
        assert_eq!(p.phase(), Phase::Closed);
        assert_eq!(p.surface().layer_events, vec![true, false]);
        assert_eq!(p.next_deadline(), None);
    }

    #[test]
    fn repeated_close_keeps_first_timer() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.set_open(false, None, t0);
        p.set_open(false, None, t0 + ms(300));
        assert_eq!(p.next_deadline(), Some(t0 + ms(500)));
        p.poll(t0 + ms(500));
        assert_eq!(p.phase(), Phase::Closed);
    }

    #[test]
    fn reopening_cancels_pending_close() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.set_open(false, None, t0);
        let outcome = p.set_open(true, None, t0 + ms(100));
        assert_eq!(p.phase(), Phase::Open);
        assert!(outcome.placed().is_some());
        assert_eq!(p.next_deadline(), None);

        p.poll(t0 + ms(1000));
        assert_eq!(p.phase(), Phase::Open);
        // The layer never went away.
        assert_eq!(p.surface().layer_events, vec![true]);
    }

    #[test]
    fn unanimated_close_is_immediate() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(unanimated(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.set_open(false, None, t0);
        assert_eq!(p.phase(), Phase::Closed);
        assert_eq!(p.next_deadline(), None);
        assert_eq!(p.surface().layer_events, vec![true, false]);
    }

    #[test]
    fn no_placement_while_closing() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.set_open(false, None, t0);
        let writes = p.surface().writes.len();
        assert_eq!(p.update(t0 + ms(1)), PassOutcome::Skipped(SkipReason::NotOpen));
        assert_eq!(p.surface().writes.len(), writes);
    }

    #[test]
    fn resize_is_rate_limited_with_trailing_pass() {
        let t0 = Instant::now();
        let (mut p, vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        let base = p.surface().writes.len();

        assert!(p.on_resize(t0).is_some());
        assert!(p.on_resize(t0 + ms(20)).is_none());
        vp.set(1024.0, 700.0);
        assert!(p.on_resize(t0 + ms(60)).is_none());
        assert_eq!(p.surface().writes.len(), base + 1);
        assert_eq!(p.next_deadline(), Some(t0 + ms(100)));

        p.poll(t0 + ms(100));
        assert_eq!(p.surface().writes.len(), base + 2);
        assert_eq!(p.last_style().map(|s| s.max_height), Some(700));
    }

    #[test]
    fn scroll_is_rate_limited_independently() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        assert!(p.on_resize(t0).is_some());
        assert!(p.on_scroll(t0 + ms(1)).is_some());
        assert!(p.on_scroll(t0 + ms(2)).is_none());
        assert_eq!(p.next_deadline(), Some(t0 + ms(51)));
    }

    #[test]
    fn scroll_off_screen_requests_close() {
        let t0 = Instant::now();
        let (mut p, _vp, closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.surface_mut()
            .move_anchor(BUTTON, Rect::new(-5.0, 10.0, 100.0, 30.0));

        // Only scroll passes check the anchor.
        p.update(t0);
        p.on_resize(t0);
        assert!(closes.borrow().is_empty());

        let outcome = p.on_scroll(t0);
        assert_eq!(*closes.borrow(), vec![CloseReason::OffScreen]);
        // The pass still writes a placement.
        assert!(outcome.and_then(PassOutcome::placed).is_some());
    }

    #[test]
    fn off_screen_close_can_be_disabled() {
        let t0 = Instant::now();
        let config = PopoverConfig {
            auto_close_when_off_screen: false,
            ..PopoverConfig::default()
        };
        let (mut p, _vp, closes) = popover(config, small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.surface_mut()
            .move_anchor(BUTTON, Rect::new(10.0, 900.0, 100.0, 30.0));
        p.on_scroll(t0);
        assert!(closes.borrow().is_empty());
    }

    #[test]
    fn click_away_requests_close_only_when_layer_open() {
        let t0 = Instant::now();
        let (mut p, _vp, closes) = popover(PopoverConfig::default(), small_menu());
        p.on_click_away();
        assert!(closes.borrow().is_empty());

        p.set_open(true, Some(BUTTON), t0);
        p.on_click_away();
        assert_eq!(*closes.borrow(), vec![CloseReason::ClickAway]);
        assert_eq!(CloseReason::ClickAway.to_string(), "clickAway");
        assert_eq!(CloseReason::OffScreen.to_string(), "offScreen");
    }

    #[test]
    fn unmount_cancels_everything_pending() {
        let t0 = Instant::now();
        let (mut p, _vp, closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        p.on_resize(t0);
        p.on_resize(t0 + ms(10));
        p.on_scroll(t0);
        p.on_scroll(t0 + ms(10));
        p.set_open(false, None, t0 + ms(20));
        assert!(p.next_deadline().is_some());
        let writes = p.surface().writes.len();

        let surface = p.unmount();
        assert_eq!(surface.writes.len(), writes);
        assert_eq!(surface.layer_events, vec![true]);
        assert!(closes.borrow().is_empty());
    }

    #[test]
    fn layer_learns_click_away_capture_flag() {
        let t0 = Instant::now();
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), small_menu());
        p.set_open(true, Some(BUTTON), t0);
        assert_eq!(p.surface().click_away_layer, Some(true));

        let config = PopoverConfig {
            use_layer_for_click_away: false,
            ..unanimated()
        };
        let (mut p, _vp, _closes) = popover(config, small_menu());
        p.set_open(true, Some(BUTTON), t0);
        assert_eq!(p.surface().click_away_layer, Some(false));
        p.set_open(false, None, t0);
        assert_eq!(p.surface().layer_events, vec![true, false]);
        assert_eq!(p.surface().click_away_layer, Some(false));
    }
}
