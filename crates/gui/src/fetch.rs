//! Background feed fetches delivering results over the app channel.

use crossbeam_channel::Sender;

use quakemap_core::{Earthquake, PlateBoundaries};
use quakemap_feed::blocking::FeedClientBlocking;
use quakemap_feed::{FeedClientOptions, EARTHQUAKE_FEED_URL, PLATE_FEED_URL};

use crate::state::{AppMessage, LogEntry, OverlayId};

/// Start both feed fetches.
///
/// Each runs in its own thread and reports back exactly once; the map
/// stays interactive while they are in flight. Threads are not joined or
/// cancelled on shutdown.
pub fn spawn_feed_fetches(tx: Sender<AppMessage>) {
    spawn_plate_fetch(tx.clone());
    spawn_earthquake_fetch(tx);
}

fn spawn_earthquake_fetch(tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let _ = tx.send(AppMessage::Log(LogEntry::info(
            "Fetching earthquake summary...",
        )));

        match fetch_earthquakes() {
            Ok(quakes) => {
                let _ = tx.send(AppMessage::Log(LogEntry::success(format!(
                    "Loaded {} earthquakes",
                    quakes.len()
                ))));
                let _ = tx.send(AppMessage::EarthquakesLoaded(quakes));
            }
            Err(e) => {
                let _ = tx.send(AppMessage::FeedFailed {
                    overlay: OverlayId::Earthquakes,
                    message: e.to_string(),
                });
            }
        }
    });
}

fn spawn_plate_fetch(tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let _ = tx.send(AppMessage::Log(LogEntry::info(
            "Fetching plate boundaries...",
        )));

        match fetch_plate_boundaries() {
            Ok(boundaries) => {
                let _ = tx.send(AppMessage::Log(LogEntry::success(format!(
                    "Loaded {} boundary lines",
                    boundaries.len()
                ))));
                let _ = tx.send(AppMessage::PlatesLoaded(boundaries));
            }
            Err(e) => {
                let _ = tx.send(AppMessage::FeedFailed {
                    overlay: OverlayId::TectonicPlates,
                    message: e.to_string(),
                });
            }
        }
    });
}

fn fetch_earthquakes() -> quakemap_feed::Result<Vec<Earthquake>> {
    let client = FeedClientBlocking::new(FeedClientOptions::default())?;
    client.fetch_earthquakes(EARTHQUAKE_FEED_URL)
}

fn fetch_plate_boundaries() -> quakemap_feed::Result<PlateBoundaries> {
    let client = FeedClientBlocking::new(FeedClientOptions::default())?;
    client.fetch_plate_boundaries(PLATE_FEED_URL)
}
