//! Integration tests for gradface host-testable logic.
//!
//! These drive a `Window` the way the firmware's UI loop does: deliver an
//! event, carry out the returned effects, paint when a redraw is due.

use embedded_graphics::prelude::Size;
use gradface::animation::AnimationCommand;
use gradface::surface::{FrameBuffer, OledFrameBuffer, PixelFormat};
use gradface::ui::{Button, Event};
use gradface::{Effects, Profile, Window};

const OLED: Size = Size::new(128, 64);

/// Minimal host loop: tracks whether ticks are running and paints on demand.
struct Host<const N: usize> {
    window: Window,
    fb: FrameBuffer<N>,
    ticking: bool,
    paints: usize,
}

impl<const N: usize> Host<N> {
    fn new(profile: Profile, size: Size, format: PixelFormat) -> Self {
        let mut host = Self {
            window: Window::new(profile),
            fb: FrameBuffer::new(size, format).unwrap(),
            ticking: false,
            paints: 0,
        };
        let effects = host.window.load(size).unwrap();
        host.apply(effects);
        host
    }

    fn apply(&mut self, effects: Effects) {
        match effects.animation {
            Some(AnimationCommand::Schedule { .. }) => self.ticking = true,
            Some(AnimationCommand::Unschedule) => self.ticking = false,
            None => {}
        }
        if effects.redraw {
            self.window.handle(Event::Paint, &mut self.fb).unwrap();
            self.paints += 1;
        }
    }

    fn send(&mut self, event: Event) {
        let effects = self.window.handle(event, &mut self.fb).unwrap();
        self.apply(effects);
    }

    /// Deliver `n` ticks, but only while the animation is scheduled.
    fn run_ticks(&mut self, n: usize) {
        for _ in 0..n {
            if self.ticking {
                self.send(Event::Tick);
            }
        }
    }

    fn boundary(&self) -> i32 {
        self.window.face().unwrap().boundary()
    }
}

#[test]
fn dithered_face_moves_while_up_is_held() {
    let mut host = Host::<1024>::new(Profile::DITHERED, OLED, PixelFormat::Mono1Bit);
    assert!(host.ticking);
    assert_eq!(host.paints, 1);

    host.send(Event::ButtonDown(Button::Up));
    host.run_ticks(5);
    assert_eq!(host.boundary(), 55);

    host.send(Event::ButtonUp(Button::Up));
    host.run_ticks(5);
    assert_eq!(host.boundary(), 55);
    assert!(host.ticking);

    // Rows 0..=55 are empty, the ramp starts right below.
    assert!(host.fb.row(55).iter().all(|&b| b == 0x00));
    assert!(host.fb.row(56).iter().all(|&b| b == 0x11));
    assert_eq!(host.window.face().unwrap().label().as_str(), "Up");
}

#[test]
fn classic_face_stops_ticking_when_released() {
    let mut host = Host::<1024>::new(Profile::CLASSIC, OLED, PixelFormat::Mono1Bit);
    assert!(!host.ticking);

    host.send(Event::ButtonDown(Button::Down));
    assert!(host.ticking);
    host.run_ticks(10);
    assert_eq!(host.boundary(), 40);

    host.send(Event::ButtonUp(Button::Down));
    assert!(!host.ticking);
    host.run_ticks(10);
    assert_eq!(host.boundary(), 40);

    // Hard threshold: lit down to the boundary, dark below.
    assert!(host.fb.row(40).iter().all(|&b| b == 0xFF));
    assert!(host.fb.row(41).iter().all(|&b| b == 0x00));
}

#[test]
fn colour_face_paints_hue_bands() {
    let size = Size::new(144, 168);
    let mut host = Host::<{ 144 * 168 }>::new(Profile::COLOUR, size, PixelFormat::Argb2222);

    let base = host.fb.row(0)[0];
    assert_eq!(host.fb.row(50)[0], base);
    assert_eq!(host.fb.row(54)[0], base);
    assert_ne!(host.fb.row(55)[0], base);
    assert_eq!(host.fb.row(55)[0] & 0xC0, base & 0xC0);
    assert_eq!(host.fb.row(59)[0], host.fb.row(55)[0]);
}

#[test]
fn unload_releases_the_animation() {
    let mut host = Host::<1024>::new(Profile::DITHERED, OLED, PixelFormat::Mono1Bit);
    let effects = host.window.unload().unwrap();
    assert_eq!(effects.animation, Some(AnimationCommand::Unschedule));
    assert!(host.window.face().is_none());
    assert!(host.window.handle(Event::Tick, &mut host.fb).is_err());
}

#[test]
fn failed_capture_is_reported_in_the_label() {
    let mut window = Window::new(Profile::CLASSIC);
    let mut fb = OledFrameBuffer::new(OLED, PixelFormat::Mono1Bit).unwrap();
    window.load(OLED).unwrap();

    // Holding the capture open makes the next paint's capture fail.
    {
        use gradface::surface::Surface;
        let _frame = fb.capture().unwrap();
    }
    window.handle(Event::Paint, &mut fb).unwrap();
    assert_eq!(window.face().unwrap().label().as_str(), "FAIL");
}
