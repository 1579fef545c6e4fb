//! Navigation loader thread.
//!
//! Queries the provider once, off the frame loop, and hands the result to
//! the loop as a single message. A failed load is logged by the dataset
//! and nothing is sent; the simulation keeps running without navigation.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::JoinHandle;

use tracing::debug;

use atcsim_geo::GeoBounds;
use atcsim_nav::{JsonFileProvider, NavDataProvider, NavigationDataset};

use crate::state::LoopMessage;

/// Load once from `provider` and forward the dataset if it loaded.
/// Returns whether anything was sent.
pub fn load_and_send(
    provider: &dyn NavDataProvider,
    bounds: &GeoBounds,
    tx: &mpsc::Sender<LoopMessage>,
) -> bool {
    let dataset = NavigationDataset::load(provider, bounds);
    if !dataset.is_loaded() {
        return false;
    }
    if tx.send(LoopMessage::NavigationLoaded(dataset)).is_err() {
        debug!("frame loop gone before navigation data arrived");
        return false;
    }
    true
}

/// Spawn the loader for a JSON navigation file.
pub fn spawn_nav_loader(
    path: PathBuf,
    bounds: GeoBounds,
    tx: mpsc::Sender<LoopMessage>,
) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("atcsim-nav-loader".into())
        .spawn(move || {
            let provider = JsonFileProvider::new(path);
            load_and_send(&provider, &bounds, &tx);
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atcsim_core::navdata::{NavRecords, Waypoint};

    fn bounds() -> GeoBounds {
        GeoBounds::new(37.0, 38.0, -123.0, -122.0).unwrap()
    }

    #[test]
    fn test_loaded_dataset_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        let records = NavRecords {
            waypoints: vec![Waypoint {
                name: "KITE".into(),
                type_code: "W".into(),
                lat: 37.5,
                lon: -122.8,
            }],
            ..NavRecords::default()
        };
        assert!(load_and_send(&records, &bounds(), &tx));
        match rx.try_recv().unwrap() {
            LoopMessage::NavigationLoaded(dataset) => assert!(dataset.is_loaded()),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn test_demo_nav_file_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/ksfo-nav.json");
        let (tx, rx) = mpsc::channel();
        spawn_nav_loader(path, bounds(), tx).unwrap().join().unwrap();
        match rx.try_recv().unwrap() {
            LoopMessage::NavigationLoaded(NavigationDataset::Loaded(records)) => {
                assert_eq!(records.runways.len(), 4);
                assert_eq!(records.ils.len(), 3);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn test_failed_load_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let handle =
            spawn_nav_loader(PathBuf::from("/nonexistent/navdata.json"), bounds(), tx).unwrap();
        handle.join().unwrap();
        assert!(rx.try_recv().is_err());
    }
}
