//! One-shot placement: open a popover once and print its root style.

use std::{rc::Rc, time::Instant};

use popover::{Popover, PopoverConfig, Rect, Size, Viewport, load_from_path};
use tracing::info;

use crate::{
    cli::PlaceArgs,
    error::{Error, Result},
    sim::{ANCHOR, SimSurface},
};

/// Run the `place` subcommand.
pub fn run(args: &PlaceArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_from_path(path)?,
        None => PopoverConfig::default(),
    };
    let [top, left, width, height] = args.anchor;
    let [target_w, target_h] = args.target;
    let [view_w, view_h] = args.viewport;
    let lines = place(
        config,
        Rect::new(top, left, width, height),
        Size::new(target_w, target_h),
        Viewport::new(view_w, view_h),
    )?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Place once and render the resulting root style as CSS declarations.
fn place(
    config: PopoverConfig,
    anchor: Rect,
    target: Size,
    viewport: Viewport,
) -> Result<Vec<String>> {
    let surface = SimSurface {
        anchor: Some(anchor),
        container: None,
        target: Some(target),
        log: Rc::default(),
    };
    let mut popover = Popover::new(config, viewport, surface);
    let outcome = popover.set_open(true, Some(ANCHOR), Instant::now());
    let Some(style) = outcome.placed() else {
        return Err(Error::NotPlaced(format!("{outcome:?}")));
    };
    info!(top = style.top, left = style.left, "place: done");
    let mut lines: Vec<String> = popover
        .root_style()
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect();
    lines.push(format!("transform-origin: {};", popover.transform_origin()));
    Ok(lines)
}
