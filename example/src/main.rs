//! Plays a swipe and a tap against a simulated pager and logs every frame.
//!
//! Run with `RUST_LOG=debug` to see the tracker's decisions as well.
use std::sync::Arc;

use parking_lot::Mutex;
use slidetab_components::{
    StripCommand, StripError, TabStrip,
    geometry::Viewport,
    pager::{PageContainer, PageEvent, PagerScrollState, TabSelectCallbacks},
    style::{BoldMode, StyleConfig},
    testing::{RecordingPager, char_width_measure},
};
use slidetab_ui::{Color, Dp, set_scale_factor};
use tracing::info;

const PAGE_WIDTH: f32 = 360.0;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,slidetab_components=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn swipe(from: usize, to: usize, steps: u16) -> Vec<PageEvent> {
    let mut events = vec![PageEvent::ScrollStateChanged(PagerScrollState::Dragging)];
    let forward = to > from;
    let position = from.min(to);
    for step in 1..steps {
        let progress = f32::from(step) / f32::from(steps);
        let offset = if forward { progress } else { 1.0 - progress };
        events.push(PageEvent::Scrolled {
            position,
            offset,
            offset_pixels: (offset * PAGE_WIDTH) as i32,
        });
        if step == steps / 2 {
            events.push(PageEvent::Selected(to));
            events.push(PageEvent::ScrollStateChanged(PagerScrollState::Settling));
        }
    }
    events.push(PageEvent::Scrolled {
        position: to,
        offset: 0.0,
        offset_pixels: 0,
    });
    events.push(PageEvent::ScrollStateChanged(PagerScrollState::Idle));
    events
}

fn play<L>(strip: &mut TabStrip<RecordingPager, L>, events: Vec<PageEvent>)
where
    L: Fn(&str, f32) -> f32,
{
    for event in events {
        event.dispatch(strip);
        for command in strip.drain_commands() {
            match command {
                StripCommand::Redraw => log_frame(strip),
                StripCommand::ScrollTo(x) => info!(x, "scroll tab container"),
            }
        }
    }
}

fn log_frame<L>(strip: &TabStrip<RecordingPager, L>)
where
    L: Fn(&str, f32) -> f32,
{
    let frame = strip.frame();
    let styles: Vec<String> = frame
        .tabs
        .iter()
        .map(|tab| {
            format!(
                "{}:{:.1}px/#{:08X}{}",
                tab.title,
                tab.style.size,
                tab.style.color.to_hex(),
                if tab.style.bold { "/bold" } else { "" }
            )
        })
        .collect();
    let indicator = frame
        .indicator
        .map(|indicator| format!("{:?}", indicator.rect));
    info!(?styles, ?indicator, scroll_x = frame.scroll_x, "frame");
}

fn main() -> Result<(), StripError> {
    init_tracing();
    set_scale_factor(1.5);

    let pager = Arc::new(Mutex::new(RecordingPager::new([
        "Hot", "iOS", "Android", "Frontend", "Backend", "Design",
    ])));

    let style = StyleConfig::default()
        .bold_mode(BoldMode::SelectedOnly)
        .selected_text_color(Color::from_hex(0xFF22_66DD))
        .indicator_height(Dp(2.0))
        .indicator_corner_radius(Dp(1.0))
        .indicator_start_color(Color::from_hex(0xFF22_66DD))
        .indicator_end_color(Color::from_hex(0xFF66_CCFF));

    let mut strip = TabStrip::with_style(style, char_width_measure);
    strip.set_on_tab_select_listener(TabSelectCallbacks::new(
        |index| info!(index, "tab chosen"),
        |index| info!(index, "tab chosen again"),
    ));
    strip.attach(pager.clone())?;
    strip.set_viewport(Viewport::new(PAGE_WIDTH, 72.0));
    strip.arrange_tabs();
    log_frame(&strip);
    strip.drain_commands();

    info!("swiping from the first to the second page");
    play(&mut strip, swipe(0, 1, 6));
    pager.lock().set_current_item(1, true);

    info!("tapping the last tab");
    strip.on_tab_click(5)?;
    play(&mut strip, vec![PageEvent::Selected(5)]);
    play(
        &mut strip,
        vec![PageEvent::Scrolled {
            position: 5,
            offset: 0.0,
            offset_pixels: 0,
        }],
    );

    info!("tapping it again");
    strip.on_tab_click(5)?;

    info!("swiping back");
    play(&mut strip, swipe(5, 4, 4));

    strip.detach();
    Ok(())
}
