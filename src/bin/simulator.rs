//! Desktop preview of the watchface.
//!
//! Arrow Up / Arrow Down / Space stand in for the UP / DOWN / SELECT
//! buttons. `--colour` renders into an ARGB2222 framebuffer on a
//! 144x168 screen; the default is the 128x64 OLED.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use gradface::animation::AnimationCommand;
use gradface::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SIMULATOR_SCALE};
use gradface::profile::DisplayKind;
use gradface::surface::{FrameBuffer, PixelFormat};
use gradface::ui::{draw_label, Button, Event};
use gradface::{Effects, Profile};

const COLOUR_SIZE: Size = Size::new(144, 168);
const FB_BYTES: usize = 144 * 168;

fn key_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Space => Some(Button::Select),
        _ => None,
    }
}

fn main() {
    let colour = std::env::args().any(|a| a == "--colour" || a == "--color");
    let (kind, size, format) = if colour {
        (DisplayKind::Colour, COLOUR_SIZE, PixelFormat::Argb2222)
    } else {
        (
            DisplayKind::Monochrome,
            Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
            PixelFormat::Mono1Bit,
        )
    };

    let mut fb = match FrameBuffer::<FB_BYTES>::new(size, format) {
        Ok(fb) => fb,
        Err(e) => {
            eprintln!("framebuffer: {e}");
            return;
        }
    };
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(size);
    let output_settings = OutputSettingsBuilder::new().scale(SIMULATOR_SCALE).build();
    let mut sim = Window::new("gradface", &output_settings);

    let mut window = gradface::Window::new(Profile::for_display(kind));
    let mut interval: Option<Duration> = None;
    let mut dirty = match window.load(size) {
        Ok(effects) => apply(effects, &mut interval),
        Err(e) => {
            eprintln!("load: {e}");
            return;
        }
    };
    let mut last_tick = Instant::now();

    'running: loop {
        if dirty {
            dirty = false;
            if let Err(e) = window.handle(Event::Paint, &mut fb) {
                eprintln!("paint: {e}");
            }
            display.draw_iter(fb.rgb_pixels()).ok();
            if let Some(face) = window.face() {
                draw_label(
                    &mut display,
                    face.label(),
                    face.label_frame(),
                    Rgb888::BLACK,
                    Rgb888::WHITE,
                )
                .ok();
            }
        }
        sim.update(&display);

        let mut events = Vec::new();
        for event in sim.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode,
                    repeat: false,
                    ..
                } => events.extend(key_button(keycode).map(Event::ButtonDown)),
                SimulatorEvent::KeyUp { keycode, .. } => {
                    events.extend(key_button(keycode).map(Event::ButtonUp))
                }
                _ => {}
            }
        }
        if let Some(period) = interval {
            if last_tick.elapsed() >= period {
                last_tick = Instant::now();
                events.push(Event::Tick);
            }
        }

        let mut effects = Effects::NONE;
        for event in events {
            match window.handle(event, &mut fb) {
                Ok(next) => effects = effects.and(next),
                Err(e) => eprintln!("{event:?}: {e}"),
            }
        }
        dirty |= apply(effects, &mut interval);

        thread::sleep(Duration::from_millis(5));
    }

    if let Ok(effects) = window.unload() {
        apply(effects, &mut interval);
    }
}

/// Carry out the animation command; returns whether a redraw is due.
fn apply(effects: Effects, interval: &mut Option<Duration>) -> bool {
    match effects.animation {
        Some(AnimationCommand::Schedule { interval_ms }) => {
            *interval = Some(Duration::from_millis(u64::from(interval_ms)));
        }
        Some(AnimationCommand::Unschedule) => *interval = None,
        None => {}
    }
    effects.redraw
}
