//! Window subscriptions feeding the navigation controller.
//!
//! Each hook registers its listeners once and tears them down (along with
//! any pending frame or timer) when the owning component is disposed, so
//! remounting never stacks duplicate handlers.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::config::viewport::{RESIZE_SETTLE_MS, TOUCH_MEDIA_QUERY};
use crate::core::env::Environment;
use crate::core::scroll::FrameGate;
use crate::core::{KeyInput, Shortcut};
use crate::utils::BrowserEnvironment;

/// Sample the scroll offset at most once per animation frame.
pub fn use_scroll_tracking(ctx: AppContext) {
    let gate = StoredValue::new(FrameGate::default());
    let pending = StoredValue::new(None::<AnimationFrameRequestHandle>);

    // Restored or anchored offsets are a baseline, not a scroll down
    ctx.nav.update(|c| {
        c.seed_scroll(BrowserEnvironment.scroll_offset());
    });

    let handle = window_event_listener(ev::scroll, move |_| {
        if !gate.try_update_value(|g| g.request()).unwrap_or(false) {
            return;
        }
        let request = request_animation_frame_with_handle(move || {
            gate.update_value(|g| g.complete());
            pending.set_value(None);
            // Scroll signal first, floating nav visibility derived from it
            ctx.nav.update(|c| {
                c.on_scroll(BrowserEnvironment.scroll_offset());
            });
        });
        match request {
            Ok(frame) => pending.set_value(Some(frame)),
            Err(_) => gate.update_value(|g| g.complete()),
        }
    });

    on_cleanup(move || {
        handle.remove();
        if let Some(frame) = pending.try_get_value().flatten() {
            frame.cancel();
        }
    });
}

/// Re-classify the viewport once resizing settles.
///
/// Raw resize events immediately recover a hidden floating nav; the class
/// itself is only committed after [`RESIZE_SETTLE_MS`] of quiet, and again
/// whenever the touch-capability media query flips.
pub fn use_viewport_tracking(ctx: AppContext) {
    let coarse_pointer = use_media_query(TOUCH_MEDIA_QUERY);
    let settle = StoredValue::new(None::<TimeoutHandle>);

    let commit = move || {
        let env = BrowserEnvironment;
        let touch = coarse_pointer.get_untracked() || env.is_touch_capable();
        ctx.nav.update(|c| {
            c.commit_viewport(env.viewport_width(), touch);
        });
    };

    let schedule = move || {
        if let Some(timer) = settle.get_value() {
            timer.clear();
        }
        let timer = set_timeout_with_handle(
            move || {
                settle.set_value(None);
                commit();
            },
            Duration::from_millis(RESIZE_SETTLE_MS),
        );
        match timer {
            Ok(timer) => settle.set_value(Some(timer)),
            Err(_) => commit(),
        }
    };

    Effect::new(move |_| {
        coarse_pointer.track();
        commit();
    });

    let resize = window_event_listener(ev::resize, move |_| {
        ctx.nav.update(|c| c.on_resize());
        schedule();
    });
    let orientation = window_event_listener(
        ev::Custom::<web_sys::Event>::new("orientationchange"),
        move |_| schedule(),
    );

    on_cleanup(move || {
        resize.remove();
        orientation.remove();
        if let Some(timer) = settle.try_get_value().flatten() {
            timer.clear();
        }
    });
}

/// The one global keydown listener for navigation shortcuts.
pub fn use_keyboard_shortcuts(ctx: AppContext) {
    let handle = window_event_listener(ev::keydown, move |event| {
        let input = KeyInput {
            alt: event.alt_key(),
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            ..KeyInput::new(event.key(), event.code())
        };
        let Some(shortcut) = Shortcut::parse(&input) else {
            return;
        };
        // Only keys that navigate swallow the browser default
        if let Some(intent) = ctx.nav.try_update(|c| c.handle_shortcut(shortcut)).flatten() {
            event.prevent_default();
            ctx.dispatch(intent);
        }
    });

    on_cleanup(move || handle.remove());
}
