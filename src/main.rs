//! gradface firmware - nRF52840 + SSD1306 128x64 OLED + three buttons.
//!
//! Tasks:
//!   - 3 × button task: debounced edges → `EVENTS` channel
//!   - main/UI task:    owns the `Window`, the framebuffer and the display;
//!                      waits on the channel and, while the animation is
//!                      scheduled, on a fixed-period ticker.

#![no_std]
#![no_main]

#[path = "ui/buttons.rs"]
mod buttons;
#[path = "ui/display.rs"]
mod display;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Ticker};
use embedded_graphics::prelude::Size;
use gradface::animation::AnimationCommand;
use gradface::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, EVENT_QUEUE_DEPTH};
use gradface::profile::DisplayKind;
use gradface::surface::{OledFrameBuffer, PixelFormat};
use gradface::ui::{Button, Event};
use gradface::{Effects, Profile, Window};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Button edges from the button tasks to the UI loop.
static EVENTS: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task(pool_size = 3)]
async fn button(pin: AnyPin, button: Button) -> ! {
    buttons::button_task(pin, button, EVENTS.sender()).await
}

/// Start or stop the tick source as the face asks.
fn apply_animation(command: Option<AnimationCommand>, ticker: &mut Option<Ticker>) {
    match command {
        Some(AnimationCommand::Schedule { interval_ms }) => {
            info!("Animation: every {} ms", interval_ms);
            *ticker = Some(Ticker::every(Duration::from_millis(u64::from(interval_ms))));
        }
        Some(AnimationCommand::Unschedule) => {
            info!("Animation: stopped");
            *ticker = None;
        }
        None => {}
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("gradface starting");

    // Buttons: UP P0.11, DOWN P0.12, SELECT P0.24.
    let pins = [
        (p.P0_11.degrade(), Button::Up),
        (p.P0_12.degrade(), Button::Down),
        (p.P0_24.degrade(), Button::Select),
    ];
    for (pin, id) in pins {
        if let Err(e) = spawner.spawn(button(pin, id)) {
            error!("Failed to spawn button task: {}", e);
        }
    }

    // OLED on TWIM0: SDA P0.26, SCL P0.27.
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            return;
        }
    };

    let size = Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let mut fb = match OledFrameBuffer::new(size, PixelFormat::Mono1Bit) {
        Ok(fb) => fb,
        Err(e) => {
            error!("Framebuffer setup failed: {}", e);
            return;
        }
    };

    let mut window = Window::new(Profile::for_display(DisplayKind::Monochrome));
    let mut ticker: Option<Ticker> = None;
    let mut dirty = false;

    match window.load(size) {
        Ok(effects) => {
            dirty = effects.redraw;
            apply_animation(effects.animation, &mut ticker);
        }
        Err(e) => error!("Window load failed: {}", e),
    }

    let rx = EVENTS.receiver();
    loop {
        if dirty {
            dirty = false;
            if let Err(e) = window.handle(Event::Paint, &mut fb) {
                warn!("Paint skipped: {}", e);
            }
            if let Some(face) = window.face() {
                if let Err(e) = display::present(&mut oled, &fb, face.label(), face.label_frame()) {
                    warn!("Display update failed: {}", e);
                }
            }
        }

        let event = match ticker.as_mut() {
            Some(t) => match select(rx.receive(), t.next()).await {
                Either::First(event) => event,
                Either::Second(()) => Event::Tick,
            },
            None => rx.receive().await,
        };

        let effects: Effects = match window.handle(event, &mut fb) {
            Ok(effects) => effects,
            Err(e) => {
                warn!("Event {} dropped: {}", event, e);
                continue;
            }
        };
        dirty |= effects.redraw;
        apply_animation(effects.animation, &mut ticker);
    }
}
