#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::{
        AnchorId, HorizontalPoint, Origin, PassOutcome, PopoverConfig, Rect, Size, SkipReason,
        TargetStyle, VerticalPoint,
        test_support::{BUTTON, FakeSurface, button_rect, popover},
    };

    fn placed(top: u32, left: u32) -> PassOutcome {
        PassOutcome::Placed(TargetStyle {
            top,
            left,
            max_height: 600,
        })
    }

    #[test]
    fn tall_menu_flips_above_button() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(200.0, 400.0).anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        assert_eq!(p.set_open(true, Some(BUTTON), t0), placed(100, 20));
        let root = p.root_style();
        assert_eq!(root.get("top"), Some("100px"));
        assert_eq!(root.get("left"), Some("20px"));
        assert_eq!(root.get("max-height"), Some("600px"));
        assert_eq!(root.get("position"), Some("fixed"));
        assert_eq!(root.get("overflow-y"), Some("auto"));
    }

    #[test]
    fn small_menu_stays_below_button() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(50.0, 20.0).anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        assert_eq!(p.set_open(true, Some(BUTTON), t0), placed(530, 20));
    }

    #[test]
    fn without_auto_position_naive_is_clamped() {
        let t0 = Instant::now();
        let config = PopoverConfig {
            can_auto_position: false,
            anchor_origin: Origin::new(VerticalPoint::Top, HorizontalPoint::Left),
            target_origin: Origin::new(VerticalPoint::Bottom, HorizontalPoint::Right),
            ..PopoverConfig::default()
        };
        let surface = FakeSurface::with_target(200.0, 400.0).anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(config, surface);
        // top = 500 - 400, left = 20 - 200 clamps to 0.
        assert_eq!(p.set_open(true, Some(BUTTON), t0), placed(100, 0));
    }

    #[test]
    fn repeated_passes_are_identical() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(200.0, 400.0).anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        let first = p.set_open(true, Some(BUTTON), t0);
        let second = p.update(t0);
        assert_eq!(first, second);
        let writes = &p.surface().writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
    }

    #[test]
    fn viewport_is_read_on_every_pass() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(200.0, 400.0).anchor(BUTTON, button_rect());
        let (mut p, vp, _closes) = popover(PopoverConfig::default(), surface);
        assert_eq!(p.set_open(true, Some(BUTTON), t0), placed(100, 20));

        vp.set(800.0, 1000.0);
        let style = p.update(t0).placed().expect("placed");
        assert_eq!((style.top, style.max_height), (530, 1000));
    }

    #[test]
    fn target_is_measured_fresh() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(50.0, 20.0).anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        assert_eq!(p.set_open(true, Some(BUTTON), t0), placed(530, 20));

        p.surface_mut().target = Some(Size::new(50.0, 400.0));
        assert_eq!(p.update(t0), placed(100, 20));
    }

    #[test]
    fn unmounted_target_skips_the_pass() {
        let t0 = Instant::now();
        let surface = FakeSurface {
            target: None,
            ..FakeSurface::default()
        }
        .anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        assert_eq!(
            p.set_open(true, Some(BUTTON), t0),
            PassOutcome::Skipped(SkipReason::TargetNotMounted)
        );
        assert!(p.surface().writes.is_empty());
        assert!(p.last_style().is_none());
    }

    #[test]
    fn container_stands_in_for_missing_anchor() {
        let t0 = Instant::now();
        let surface = FakeSurface {
            container: Some(Rect::new(40.0, 60.0, 10.0, 10.0)),
            ..FakeSurface::with_target(50.0, 20.0)
        };
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        assert_eq!(p.set_open(true, None, t0), placed(50, 60));

        // A detached anchor also falls back to the container.
        let detached = AnchorId::new(99);
        assert_eq!(p.set_open(true, Some(detached), t0), placed(50, 60));
    }

    #[test]
    fn no_anchor_at_all_skips_every_pass() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(50.0, 20.0);
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        let skipped = PassOutcome::Skipped(SkipReason::NoAnchor);
        assert_eq!(p.set_open(true, None, t0), skipped);
        assert_eq!(p.update(t0), skipped);
        assert!(p.surface().writes.is_empty());
    }

    #[test]
    fn config_change_applies_on_next_pass() {
        let t0 = Instant::now();
        let surface = FakeSurface::with_target(50.0, 20.0).anchor(BUTTON, button_rect());
        let (mut p, _vp, _closes) = popover(PopoverConfig::default(), surface);
        p.set_open(true, Some(BUTTON), t0);

        let config = PopoverConfig {
            anchor_origin: Origin::new(VerticalPoint::Top, HorizontalPoint::Right),
            target_origin: Origin::new(VerticalPoint::Bottom, HorizontalPoint::Right),
            ..PopoverConfig::default()
        };
        // Above the button, right edges aligned: top = 500 - 20, left = 120 - 50.
        assert_eq!(p.set_config(config, t0), placed(480, 70));
        assert_eq!(p.transform_origin(), "right bottom");
    }
}
