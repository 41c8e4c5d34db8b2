use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::env::ambient;
use crate::loading::{LoadingEvent, LoadingPhase, LoadingSequencer};

const OVERLAY: &str = "fixed inset-0 z-50 flex flex-col items-center justify-center bg-black transition-opacity duration-500";

#[component]
pub fn LoadingScreen(phase: RwSignal<LoadingPhase>) -> impl IntoView {
    let sequencer = StoredValue::new(Arc::new(Mutex::new(LoadingSequencer::default())));
    let timers = StoredValue::new(Arc::new(Mutex::new(Vec::<TimeoutHandle>::new())));

    let fire = move |event: LoadingEvent| {
        let next = sequencer.with_value(|s| {
            let mut s = s.lock().expect("should be able to lock loading sequencer");
            s.apply(event, &ambient()).map(|t| t.to)
        });
        if let Some(p) = next {
            phase.set(p);
        }
    };

    // effects only run in the browser, after mount
    Effect::new(move |_| {
        let (schedule, current) = sequencer.with_value(|s| {
            let mut s = s.lock().expect("should be able to lock loading sequencer");
            (s.start(&ambient()), s.phase())
        });
        phase.set(current);

        let mut armed = Vec::new();
        let timeouts = [
            (schedule.min_display, LoadingEvent::MinDisplayElapsed),
            (schedule.safety, LoadingEvent::SafetyTimeout),
        ];
        for (delay, event) in timeouts {
            let Some(delay) = delay else {
                continue;
            };
            match set_timeout_with_handle(move || fire(event), delay) {
                Ok(handle) => armed.push(handle),
                Err(e) => {
                    // without timers nothing would ever close the overlay
                    log::warn!("couldn't arm {event:?} timer: {e:?}");
                    fire(LoadingEvent::SafetyTimeout);
                }
            }
        }
        timers.with_value(|t| {
            *t.lock().expect("should be able to lock loading timers") = armed;
        });
    });

    on_cleanup(move || {
        timers.with_value(|t| {
            if let Ok(handles) = t.lock() {
                handles.iter().for_each(|h| h.clear());
            }
        });
    });

    view! {
        <Show when=move || phase.get() != LoadingPhase::Done>
            <div
                class=move || {
                    if phase.get() == LoadingPhase::Revealing {
                        format!("{OVERLAY} opacity-0 pointer-events-none")
                    } else {
                        format!("{OVERLAY} opacity-100")
                    }
                }
                on:transitionend=move |_| fire(LoadingEvent::ExitAnimationFinished)
            >
                <div class="w-32 h-32 mb-8 rounded-full border-4 border-blue-500 border-t-transparent animate-spin"></div>
                <div class="text-white text-xl font-mono animate-pulse">"KashVenture Inc."</div>
            </div>
        </Show>
    }
}
