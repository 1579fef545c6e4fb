#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fs;

    use atcsim_core::constants::{DEFAULT_LOCALIZER_LENGTH_NM, KM_PER_FOOT, KM_PER_NM};
    use atcsim_core::enums::Stroke;
    use atcsim_core::navdata::{ApproachLeg, Ils, NavRecords, Runway, Vor, Waypoint};
    use atcsim_core::settings::ActiveRunways;
    use atcsim_core::state::DrawCommand;
    use atcsim_core::types::{CanvasSize, GeoPoint};
    use atcsim_geo::geodesy::haversine_km;
    use atcsim_geo::{GeoBounds, GeoProjection};

    use crate::localizer::{
        is_initial_fix, resolve_localizers, runway_suffix, select_approach_fix, true_bearing,
    };
    use crate::provider::{filter_to_bounds, JsonFileProvider, NavDataError, NavDataProvider};
    use crate::runway::{resolve_runways, RunwaySide};
    use crate::*;

    fn projection() -> GeoProjection {
        let bounds = GeoBounds::new(37.0, 38.0, -123.0, -122.0).unwrap();
        GeoProjection::new(bounds, CanvasSize::new(1000.0, 800.0).unwrap())
    }

    fn runway(airport: &str, id: &str, lat: f64, lon: f64, bearing: f64) -> Runway {
        Runway {
            id: id.to_string(),
            airport_id: airport.to_string(),
            lat,
            lon,
            length_ft: 10_000.0,
            true_bearing_deg: bearing,
        }
    }

    fn ils(airport: &str, runway: &str, magnetic: f64, declination: f64) -> Ils {
        Ils {
            airport_id: airport.to_string(),
            runway_id: runway.to_string(),
            magnetic_bearing_deg: magnetic,
            declination_deg: declination,
        }
    }

    fn iaf_leg(approach: &str, waypoint: &str, lat: f64, lon: f64) -> ApproachLeg {
        ApproachLeg {
            airport_id: "KSFO".to_string(),
            approach_id: approach.to_string(),
            waypoint_id: waypoint.to_string(),
            waypoint_type_code: "E  A".to_string(),
            lat,
            lon,
        }
    }

    fn active(pairs: &[(&str, &[&str])]) -> ActiveRunways {
        let mut map = BTreeMap::new();
        for (apt, rwys) in pairs {
            map.insert(apt.to_string(), rwys.iter().map(|r| r.to_string()).collect());
        }
        ActiveRunways(map)
    }

    // ---- Runway idents ----

    #[test]
    fn test_reciprocal_ident_math() {
        let r = |id: &str| RunwayIdent::parse(id).unwrap().reciprocal().to_string();
        assert_eq!(r("RW18"), "RW36");
        assert_eq!(r("RW36"), "RW18");
        assert_eq!(r("RW09L"), "RW27R");
        assert_eq!(r("RW28R"), "RW10L");
        assert_eq!(r("01C"), "RW19C");
        assert_eq!(r("RW19"), "RW01");
    }

    #[test]
    fn test_runway_ident_parse() {
        let ident = RunwayIdent::parse("rw9l").unwrap();
        assert_eq!(ident.number, 9);
        assert_eq!(ident.side, Some(RunwaySide::Left));
        assert_eq!(ident.suffix(), "09L");
        assert!(RunwayIdent::parse("RW37").is_none());
        assert!(RunwayIdent::parse("RW00").is_none());
        assert!(RunwayIdent::parse("RWXX").is_none());
        assert!(RunwayIdent::parse("RW09LL").is_none());
        assert!(RunwayIdent::parse("RW09X").is_none());
        assert!(RunwayIdent::parse("").is_none());
    }

    // ---- Runway pavements ----

    #[test]
    fn test_reciprocal_pair_drawn_once() {
        let proj = projection();
        let runways = vec![
            runway("KSFO", "RW09L", 37.60, -122.40, 90.0),
            runway("KSFO", "RW27R", 37.60, -122.35, 270.0),
        ];
        let rendered = resolve_runways(&runways, &proj, &ActiveRunways::default());
        assert_eq!(rendered.len(), 1);

        let rwy = &rendered[0];
        assert_eq!(rwy.ident, "RW09L");
        assert_eq!(rwy.reciprocal_ident.as_deref(), Some("RW27R"));
        assert_eq!(rwy.far_end, FarEndSource::Reciprocal);
        assert_eq!(rwy.threshold_a, proj.to_pixel(37.60, -122.40));
        assert_eq!(rwy.threshold_b, proj.to_pixel(37.60, -122.35));
    }

    #[test]
    fn test_missing_reciprocal_projects_far_end() {
        let proj = projection();
        let runways = vec![runway("KSFO", "RW09L", 37.60, -122.40, 90.0)];
        let rendered = resolve_runways(&runways, &proj, &ActiveRunways::default());
        assert_eq!(rendered.len(), 1);

        let rwy = &rendered[0];
        assert_eq!(rwy.far_end, FarEndSource::Projected);
        assert_eq!(rwy.reciprocal_ident, None);
        assert_ne!(rwy.threshold_a, rwy.threshold_b);

        let expected = proj.scale().offset(90.0, 10_000.0 * KM_PER_FOOT);
        let delta = rwy.threshold_b - rwy.threshold_a;
        assert!((delta - expected).length() < 1e-9);
        assert!(delta.x > 0.0, "far end east of threshold");
    }

    #[test]
    fn test_reciprocal_must_be_same_airport() {
        let proj = projection();
        let runways = vec![
            runway("KSFO", "RW09L", 37.60, -122.40, 90.0),
            runway("KOAK", "RW27R", 37.70, -122.20, 270.0),
        ];
        let rendered = resolve_runways(&runways, &proj, &ActiveRunways::default());
        assert_eq!(rendered.len(), 2);
        assert!(rendered.iter().all(|r| r.far_end == FarEndSource::Projected));
    }

    // ---- Localizers ----

    #[test]
    fn test_true_bearing_adds_declination() {
        assert_eq!(true_bearing(&ils("KSFO", "RW28L", 284.0, 13.0)), 297.0);
        assert_eq!(true_bearing(&ils("KSFO", "RW01", 355.0, 10.0)), 5.0);
        assert_eq!(true_bearing(&ils("KSFO", "RW01", 5.0, -10.0)), 355.0);
    }

    #[test]
    fn test_initial_fix_flags() {
        assert!(is_initial_fix("E  A"));
        assert!(is_initial_fix("EE C"));
        assert!(is_initial_fix("E  D"));
        assert!(!is_initial_fix("E  F"));
        assert!(!is_initial_fix("EA"));
        assert_eq!(runway_suffix("RW28L"), "28L");
        assert_eq!(runway_suffix("RW9"), "09");
    }

    #[test]
    fn test_named_fix_wins_tie() {
        let legs = vec![
            iaf_leg("I28L", "AB12", 37.5, -122.9),
            iaf_leg("I28L", "KITE", 37.5, -122.8),
            iaf_leg("R28L", "AB12", 37.5, -122.9),
            iaf_leg("R28L", "KITE", 37.5, -122.8),
        ];
        let fix = select_approach_fix(&legs, "KSFO", "28L").unwrap();
        assert_eq!(fix.waypoint_id, "KITE");
        assert_eq!(fix.occurrences, 2);
    }

    #[test]
    fn test_more_frequent_coded_fix_beats_named() {
        let legs = vec![
            iaf_leg("I28L", "KITE", 37.5, -122.8),
            iaf_leg("I28L", "AB12", 37.5, -122.9),
            iaf_leg("R28L", "AB12", 37.5, -122.9),
            iaf_leg("L28L", "AB12", 37.5, -122.9),
            iaf_leg("R28L", "KITE", 37.5, -122.8),
        ];
        let fix = select_approach_fix(&legs, "KSFO", "28L").unwrap();
        assert_eq!(fix.waypoint_id, "AB12");
        assert_eq!(fix.occurrences, 3);
    }

    #[test]
    fn test_fix_selection_ignores_other_runways_and_codes() {
        let mut legs = vec![
            iaf_leg("I28R", "KITE", 37.5, -122.8),
            iaf_leg("I28L", "CEDES", 37.5, -122.7),
        ];
        legs[1].waypoint_type_code = "E  F".to_string();
        assert!(select_approach_fix(&legs, "KSFO", "28L").is_none());
        assert!(select_approach_fix(&legs, "KOAK", "28R").is_none());
    }

    #[test]
    fn test_localizer_defaults_to_fifteen_nm() {
        let proj = projection();
        let runways = vec![runway("KSFO", "RW28L", 37.6, -122.35, 280.0)];
        let records = vec![ils("KSFO", "RW28L", 284.0, 0.0)];
        let locs = resolve_localizers(&records, &runways, &[], &proj, &ActiveRunways::default());
        assert_eq!(locs.len(), 1);
        assert_eq!(locs[0].length_source, LocalizerLengthSource::Default);
        assert!((locs[0].length_km - DEFAULT_LOCALIZER_LENGTH_NM * KM_PER_NM).abs() < 1e-12);
    }

    #[test]
    fn test_localizer_drawn_backward_from_threshold() {
        let proj = projection();
        let runways = vec![runway("KSFO", "RW09", 37.5, -122.5, 90.0)];
        let records = vec![ils("KSFO", "RW09", 90.0, 0.0)];
        let locs = resolve_localizers(&records, &runways, &[], &proj, &ActiveRunways::default());
        let loc = &locs[0];

        assert_eq!(loc.threshold, proj.to_pixel(37.5, -122.5));
        // Aircraft fly east down the localizer, so it extends west.
        assert!(loc.end.x < loc.threshold.x);
        assert!((loc.end.y - loc.threshold.y).abs() < 1e-9);

        let expected = loc.threshold - proj.scale().offset(90.0, loc.length_km);
        assert!((loc.end - expected).length() < 1e-9);
    }

    #[test]
    fn test_localizer_length_from_approach_fix() {
        let proj = projection();
        let runways = vec![runway("KSFO", "RW09", 37.5, -122.5, 90.0)];
        let records = vec![ils("KSFO", "RW09", 90.0, 0.0)];
        let legs = vec![iaf_leg("I09", "KITE", 37.5, -122.8)];
        let locs = resolve_localizers(&records, &runways, &legs, &proj, &ActiveRunways::default());
        let loc = &locs[0];

        assert_eq!(
            loc.length_source,
            LocalizerLengthSource::ApproachFix("KITE".to_string())
        );
        let expected = haversine_km(GeoPoint::new(37.5, -122.5), GeoPoint::new(37.5, -122.8));
        assert!((loc.length_km - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ils_without_runway_is_skipped() {
        let proj = projection();
        let records = vec![ils("KSFO", "RW28L", 284.0, 13.0)];
        let locs = resolve_localizers(&records, &[], &[], &proj, &ActiveRunways::default());
        assert!(locs.is_empty());
    }

    // ---- Resolver ----

    fn bay_records() -> NavRecords {
        NavRecords {
            waypoints: vec![Waypoint {
                name: "KITE".to_string(),
                type_code: "W".to_string(),
                lat: 37.5,
                lon: -122.8,
            }],
            vors: vec![Vor {
                id: "SFO".to_string(),
                name: "San Francisco".to_string(),
                frequency_mhz: 115.8,
                lat: 37.62,
                lon: -122.37,
            }],
            runways: vec![
                runway("KSFO", "RW28L", 37.61, -122.36, 298.0),
                runway("KSFO", "RW10R", 37.63, -122.39, 118.0),
                runway("KSFO", "RW28R", 37.62, -122.36, 298.0),
                runway("KSFO", "RW10L", 37.64, -122.39, 118.0),
                runway("KOAK", "RW30", 37.70, -122.21, 310.0),
            ],
            ils: vec![
                ils("KSFO", "RW28L", 284.0, 13.0),
                ils("KSFO", "RW28R", 284.0, 13.0),
                ils("KOAK", "RW30", 296.0, 13.0),
            ],
            ..NavRecords::default()
        }
    }

    #[test]
    fn test_not_loaded_resolves_to_nothing() {
        let resolver = NavGeometryResolver::default();
        let geometry = resolver.resolve(&NavigationDataset::NotLoaded, &projection());
        assert!(geometry.is_empty());
        assert!(geometry.draw_commands().is_empty());
    }

    #[test]
    fn test_empty_allowlist_draws_everything() {
        let resolver = NavGeometryResolver::default();
        let dataset = NavigationDataset::Loaded(bay_records());
        let geometry = resolver.resolve(&dataset, &projection());
        assert_eq!(geometry.runways.len(), 3);
        assert_eq!(geometry.localizers.len(), 3);
        assert_eq!(geometry.waypoints.len(), 1);
        assert_eq!(geometry.vors.len(), 1);
    }

    #[test]
    fn test_allowlist_filters_runways_and_localizers() {
        let resolver = NavGeometryResolver::new(active(&[("KSFO", &["RW28L"])]));
        let dataset = NavigationDataset::Loaded(bay_records());
        let geometry = resolver.resolve(&dataset, &projection());

        assert_eq!(geometry.runways.len(), 1);
        assert_eq!(geometry.runways[0].ident, "RW28L");
        assert_eq!(geometry.localizers.len(), 1);
        assert_eq!(geometry.localizers[0].runway_id, "RW28L");
        // Point symbols are never filtered.
        assert_eq!(geometry.waypoints.len(), 1);
        assert_eq!(geometry.vors.len(), 1);
    }

    #[test]
    fn test_allowlist_matches_either_runway_end() {
        let resolver = NavGeometryResolver::new(active(&[("KSFO", &["10R"])]));
        let dataset = NavigationDataset::Loaded(bay_records());
        let geometry = resolver.resolve(&dataset, &projection());
        assert_eq!(geometry.runways.len(), 1);
        assert_eq!(geometry.runways[0].reciprocal_ident.as_deref(), Some("RW10R"));
        // RW10R has no ILS; RW28L is not listed.
        assert!(geometry.localizers.is_empty());
    }

    #[test]
    fn test_draw_commands_order_and_strokes() {
        let records = NavRecords {
            waypoints: bay_records().waypoints,
            runways: vec![runway("KSFO", "RW28L", 37.61, -122.36, 298.0)],
            ils: vec![ils("KSFO", "RW28L", 284.0, 13.0)],
            ..NavRecords::default()
        };
        let geometry = NavGeometryResolver::default()
            .resolve(&NavigationDataset::Loaded(records), &projection());
        let draw = geometry.draw_commands();

        let strokes: Vec<Stroke> = draw.iter().map(|d| d.stroke()).collect();
        assert_eq!(
            strokes,
            vec![Stroke::Localizer, Stroke::Runway, Stroke::Waypoint, Stroke::NavLabel]
        );
        match &draw[2] {
            DrawCommand::Polygon { points, .. } => assert_eq!(points.len(), 3),
            other => panic!("expected waypoint triangle, got {other:?}"),
        }
        match &draw[3] {
            DrawCommand::Text { text, .. } => assert_eq!(text, "KITE"),
            other => panic!("expected label, got {other:?}"),
        }
    }

    // ---- Providers ----

    #[test]
    fn test_filter_to_bounds() {
        let bounds = GeoBounds::new(37.55, 37.68, -122.45, -122.30).unwrap();
        let mut records = bay_records();
        records.approach_legs = vec![iaf_leg("I28L", "KITE", 37.5, -122.8)];
        let filtered = filter_to_bounds(records, &bounds);

        // KITE and KOAK lie outside.
        assert!(filtered.waypoints.is_empty());
        assert_eq!(filtered.vors.len(), 1);
        assert_eq!(filtered.runways.len(), 4);
        assert!(filtered.runways.iter().all(|r| r.airport_id == "KSFO"));
        assert_eq!(filtered.ils.len(), 2);
        // Approach legs follow their airport even when the fix is outside.
        assert_eq!(filtered.approach_legs.len(), 1);
    }

    #[test]
    fn test_missing_file_leaves_dataset_unloaded() {
        let provider = JsonFileProvider::new("/nonexistent/atcsim/navdata.json");
        let bounds = *projection().bounds();
        assert!(matches!(
            provider.fetch(&bounds),
            Err(NavDataError::Io { .. })
        ));
        let dataset = NavigationDataset::load(&provider, &bounds);
        assert!(!dataset.is_loaded());
        assert!(dataset.records().is_none());
    }

    #[test]
    fn test_json_file_provider_reads_and_rejects() {
        let dir = std::env::temp_dir().join(format!("atcsim-nav-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let bounds = *projection().bounds();

        let good = dir.join("good.json");
        fs::write(&good, serde_json::to_string(&bay_records()).unwrap()).unwrap();
        let dataset = NavigationDataset::load(&JsonFileProvider::new(&good), &bounds);
        assert!(dataset.is_loaded());
        assert_eq!(dataset.records().unwrap().runways.len(), 5);

        let bad = dir.join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(
            JsonFileProvider::new(&bad).fetch(&bounds),
            Err(NavDataError::Parse(_))
        ));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_in_memory_records_as_provider() {
        let bounds = *projection().bounds();
        let dataset = NavigationDataset::load(&bay_records(), &bounds);
        assert_eq!(dataset, NavigationDataset::Loaded(bay_records()));
    }
}
