// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use toast_mirror::config::{self, Config};
use toast_mirror::domain::notification::{
    MessagePayload, Notification, NotificationKind, ProgressReport, ProgressState, SourceId,
};
use toast_mirror::error::Result;
use toast_mirror::infrastructure::{InMemoryFeed, RecordingSink, StandardContentBuilder};
use toast_mirror::logging;
use toast_mirror::mirror::{MirrorSettings, ToastMirror};

const FRAME: Duration = Duration::from_millis(16);

struct Flags {
    config: Option<PathBuf>,
    dwell_ms: Option<u64>,
    debug: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("toast_mirror: {err}");
        std::process::exit(1);
    }
}

fn parse_flags() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        config: args.opt_value_from_str("--config")?,
        dwell_ms: args.opt_value_from_str("--dwell-ms")?,
        debug: args.contains("--debug"),
    })
}

fn run() -> Result<()> {
    let flags = parse_flags()?;
    let mut config = match &flags.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if flags.dwell_ms.is_some() {
        config.dwell_ms = flags.dwell_ms;
    }

    logging::init(flags.debug || config.debug_logging());
    demo(&config);
    Ok(())
}

/// Plays a short scripted session against the in-memory feed.
fn demo(config: &Config) {
    let builder = StandardContentBuilder::new()
        .with_clipboard(|text| tracing::info!(text, "copied to clipboard"));
    let mut mirror = ToastMirror::new(
        InMemoryFeed::new(),
        RecordingSink::new(),
        builder,
        MirrorSettings::from(config),
    );

    let download = SourceId::new(4);
    let feed = mirror.feed_mut();
    feed.push(Notification::new(SourceId::new(1), "Beatmap imported"));
    feed.push(
        Notification::new(SourceId::new(2), "New message").with_kind(NotificationKind::Message(
            MessagePayload {
                sender: "peppy".to_string(),
                content: "see you in lobby".to_string(),
            },
        )),
    );
    feed.push(
        Notification::new(SourceId::new(3), "You were invited to a room")
            .with_kind(NotificationKind::Invitation {
                password: Some("hunter2".to_string()),
            })
            .on_activate(|| tracing::info!("joining room")),
    );
    feed.push(
        Notification::new(download, "Downloading beatmap").with_kind(NotificationKind::Progress),
    );
    feed.set_progress(download, ProgressReport::new(0.0, ProgressState::Queued));

    let started = Instant::now();
    let mut now = started;
    let dwell = mirror.settings().dwell;
    let mut progress = 0.0_f32;

    while now.duration_since(started) < dwell * 4 {
        mirror.on_tick(now);

        progress = (progress + 0.05).min(1.0);
        let state = if progress < 1.0 {
            ProgressState::Active
        } else {
            ProgressState::Completed
        };
        mirror
            .feed_mut()
            .set_progress(download, ProgressReport::new(progress, state));

        thread::sleep(FRAME);
        now = Instant::now();
    }

    if let Some(invitation) = mirror.toast_for_source(SourceId::new(3)) {
        let copy = invitation
            .content
            .as_ref()
            .and_then(|content| content.buttons.first())
            .and_then(|button| button.arguments.clone());
        if let Some(argument) = copy {
            mirror.handle().activated(argument);
            mirror.on_tick(Instant::now());
        }
    }

    tracing::info!(
        calls = mirror.sink().calls().len(),
        live = mirror.store().len(),
        "demo finished"
    );
    mirror.shutdown();
}
