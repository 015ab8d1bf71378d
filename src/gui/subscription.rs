//! gui/subscription.rs
//! - TickPlayback: poll engine events while an engine exists
//! - ScrollTick: marquee timer, only while scrolling

use iced::{Subscription, time};

use super::state::{Message, Tunebox};

pub(crate) fn subscription(state: &Tunebox) -> Subscription<Message> {
    let mut subs = Vec::with_capacity(2);

    if state.playback_events.is_some() {
        subs.push(time::every(state.config.engine_tick).map(|_| Message::TickPlayback));
    }

    if state.now_playing.is_scrolling() {
        subs.push(time::every(state.config.scroll_interval).map(|_| Message::ScrollTick));
    }

    Subscription::batch(subs)
}
