//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP     - raise the fill boundary while held
//!   - DOWN   - lower the fill boundary while held
//!   - SELECT - shown in the label, no effect on the boundary
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends `Event::ButtonDown` / `Event::ButtonUp` to the
//! UI channel. The face needs both edges to know what is held.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};
use gradface::config::{BUTTON_DEBOUNCE_MS, EVENT_QUEUE_DEPTH};
use gradface::ui::{Button, Event};

pub type EventSender = Sender<'static, CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the down edge,
/// then waits for a stable release and sends the up edge.
pub async fn button_task(pin: AnyPin, button: Button, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        info!("Button: {} down", button);
        tx.send(Event::ButtonDown(button)).await;

        // Only a release that is still high after the debounce counts.
        loop {
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
            if btn.is_high() {
                break;
            }
        }

        info!("Button: {} up", button);
        tx.send(Event::ButtonUp(button)).await;
    }
}
