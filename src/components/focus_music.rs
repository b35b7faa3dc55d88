//! Focus Music Screen
//!
//! Static ambient-track catalog playing through a hidden embedded player,
//! with an optional countdown timer that stops playback at zero.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::models::TRACKS;

const TIMER_CHOICES: [u32; 4] = [15, 30, 45, 60];

/// mm:ss display for the countdown chip
fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[component]
pub fn FocusMusic() -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let (playing, set_playing) = signal(false);
    let (remaining, set_remaining) = signal(None::<u32>);
    // Bumped on every timer (re)start so stale countdown loops stop
    let (timer_epoch, set_timer_epoch) = signal(0u64);

    let start_timer = move |minutes: u32| {
        let epoch = timer_epoch.get_untracked() + 1;
        set_timer_epoch.set(epoch);
        set_remaining.set(Some(minutes * 60));
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                if timer_epoch.get_untracked() != epoch {
                    break;
                }
                let mut finished = false;
                set_remaining.update(|slot| match slot {
                    Some(seconds) if *seconds > 1 => *seconds -= 1,
                    _ => {
                        *slot = None;
                        finished = true;
                    }
                });
                if finished {
                    set_playing.set(false);
                    break;
                }
            }
        });
    };

    let clear_timer = move || {
        set_timer_epoch.update(|epoch| *epoch += 1);
        set_remaining.set(None);
    };

    let select_track = move |index: usize| {
        set_current.set(index);
        set_playing.set(false);
    };

    view! {
        <div class="screen focus-music">
            <header class="screen-header">
                <h1 class="brand">"Kaarya"</h1>
                <p class="tagline">"Focus Music - Stay in the Zone"</p>
            </header>

            <div class="card player">
                // Hidden embed; an empty src stops the stream
                <iframe
                    class="player-frame"
                    width="0"
                    height="0"
                    src=move || if playing.get() { TRACKS[current.get()].url } else { "" }
                    allow="autoplay; encrypted-media"
                ></iframe>

                <h2>{move || format!("Now Playing: {}", TRACKS[current.get()].title)}</h2>

                <div class="player-controls">
                    <button
                        class="play-btn"
                        on:click=move |_| set_playing.update(|p| *p = !*p)
                    >
                        {move || if playing.get() { "Pause" } else { "Play" }}
                    </button>

                    <select
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            match select.value().parse::<u32>() {
                                Ok(minutes) => start_timer(minutes),
                                Err(_) => clear_timer(),
                            }
                        }
                    >
                        <option value="">"No timer"</option>
                        {TIMER_CHOICES
                            .iter()
                            .map(|minutes| {
                                view! {
                                    <option value=minutes.to_string()>
                                        {format!("{} minutes", minutes)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    {move || {
                        remaining.get().map(|seconds| {
                            view! { <span class="chip timer-chip">{format_clock(seconds)}</span> }
                        })
                    }}
                </div>
            </div>

            <h2>"Available Tracks"</h2>
            <div class="track-grid">
                {TRACKS
                    .iter()
                    .enumerate()
                    .map(|(index, track)| {
                        let is_current = move || current.get() == index;
                        view! {
                            <div
                                class=move || {
                                    if is_current() { "card track selected" } else { "card track" }
                                }
                                on:click=move |_| select_track(index)
                            >
                                <h3>{track.title}</h3>
                                <span class="chip">{track.category}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(45 * 60), "45:00");
        assert_eq!(format_clock(61 * 60 + 5), "61:05");
    }
}
