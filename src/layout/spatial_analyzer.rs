//! Grid spatial analyzer
//!
//! Scans a bed in row-major order and, for every occupied cell, runs four
//! neighborhood rules against its Moore neighbors:
//!
//! 1. Spacing - wide-spacing plant with too many occupied neighbors
//! 2. Companion - good/bad pairs from the plant's own companion record
//! 3. Water mismatch - too many neighbors with a different water class
//! 4. Sunlight shading - low full-sun plant next to several tall plants
//!
//! Rules 1, 3 and 4 need requirements data; a plant without it still takes
//! part in rule 2. Output order is the scan position of the triggering cell,
//! then rule order, with companion duplicates removed after the scan.

use super::alerts::{dedup_companion_alerts, AlertKind, LayoutAlert, Severity};
use super::compatibility::{CompanionStatus, CompatibilityResolver};
use super::grid::{CellPos, Neighbor, PlacedPlant, PlantingGrid};
use crate::catalog::{CompanionGraph, HeightClass, PlantRequirements, RequirementsCatalog, SunlightNeed};
use crate::config::LayoutRules;

/// Layout rule evaluator over borrowed catalogs
pub struct GridSpatialAnalyzer<'a> {
    requirements: &'a RequirementsCatalog,
    resolver: CompatibilityResolver<'a>,
    rules: &'a LayoutRules,
}

impl<'a> GridSpatialAnalyzer<'a> {
    pub fn new(
        requirements: &'a RequirementsCatalog,
        companions: &'a CompanionGraph,
        rules: &'a LayoutRules,
    ) -> Self {
        Self {
            requirements,
            resolver: CompatibilityResolver::new(companions),
            rules,
        }
    }

    /// All alerts for a grid, in scan order
    pub fn analyze(&self, grid: &PlantingGrid) -> Vec<LayoutAlert> {
        let mut alerts = Vec::new();

        for ((row, col), plant) in grid.occupied_cells() {
            let neighbors = grid.neighbors(row, col);
            let requirements = self.requirements.lookup(plant.lookup_key());

            if let Some(req) = requirements {
                alerts.extend(self.check_spacing((row, col), plant, req, &neighbors));
            }

            self.check_companions((row, col), plant, &neighbors, &mut alerts);

            if let Some(req) = requirements {
                alerts.extend(self.check_water((row, col), plant, req, &neighbors));
                alerts.extend(self.check_shading((row, col), plant, req, &neighbors));
            }
        }

        let scanned = alerts.len();
        let alerts = dedup_companion_alerts(alerts);

        tracing::debug!(
            "Layout analysis: {} occupied cells, {} alerts ({} duplicate companion alerts dropped)",
            grid.occupied_count(),
            alerts.len(),
            scanned - alerts.len()
        );

        alerts
    }

    /// Rule 1: a wide-spacing plant hemmed in on most sides
    fn check_spacing(
        &self,
        pos: CellPos,
        plant: &PlacedPlant,
        req: &PlantRequirements,
        neighbors: &[Neighbor<'_>],
    ) -> Option<LayoutAlert> {
        if req.spacing_inches < self.rules.wide_spacing_inches {
            return None;
        }
        if neighbors.len() < self.rules.crowded_neighbor_count {
            return None;
        }

        Some(LayoutAlert::new(
            AlertKind::Spacing,
            Severity::Warning,
            format!(
                "{} needs {}\" spacing but is crowded by {} neighbors",
                plant.name,
                req.spacing_inches,
                neighbors.len()
            ),
            vec![pos],
        ))
    }

    /// Rule 2: companion pairs, judged from this plant's own record
    fn check_companions(
        &self,
        pos: CellPos,
        plant: &PlacedPlant,
        neighbors: &[Neighbor<'_>],
        alerts: &mut Vec<LayoutAlert>,
    ) {
        for &(neighbor_pos, neighbor) in neighbors {
            match self.resolver.check_pair(plant.lookup_key(), neighbor.lookup_key()) {
                CompanionStatus::Bad => alerts.push(LayoutAlert::new(
                    AlertKind::CompanionConflict,
                    Severity::Error,
                    format!("{} and {} are poor companions", plant.name, neighbor.name),
                    vec![pos, neighbor_pos],
                )),
                CompanionStatus::Good => alerts.push(LayoutAlert::new(
                    AlertKind::CompanionSynergy,
                    Severity::Info,
                    format!("{} and {} grow well together", plant.name, neighbor.name),
                    vec![pos, neighbor_pos],
                )),
                CompanionStatus::Neutral => {}
            }
        }
    }

    /// Rule 3: neighbors wanting a different watering regime
    ///
    /// Neighbors without requirements data are not counted.
    fn check_water(
        &self,
        pos: CellPos,
        plant: &PlacedPlant,
        req: &PlantRequirements,
        neighbors: &[Neighbor<'_>],
    ) -> Option<LayoutAlert> {
        let mismatched = neighbors
            .iter()
            .filter_map(|(_, n)| self.requirements.lookup(n.lookup_key()))
            .filter(|n| n.water != req.water)
            .count();

        if mismatched < self.rules.water_mismatch_neighbor_count {
            return None;
        }

        Some(LayoutAlert::new(
            AlertKind::WaterMismatch,
            Severity::Warning,
            format!(
                "{} needs {} water but {} neighbors have different water needs",
                plant.name,
                req.water.as_str(),
                mismatched
            ),
            vec![pos],
        ))
    }

    /// Rule 4: a low, full-sun plant surrounded by tall ones
    fn check_shading(
        &self,
        pos: CellPos,
        plant: &PlacedPlant,
        req: &PlantRequirements,
        neighbors: &[Neighbor<'_>],
    ) -> Option<LayoutAlert> {
        if req.sunlight != SunlightNeed::Full || req.height != HeightClass::Low {
            return None;
        }

        let tall = neighbors
            .iter()
            .filter_map(|(_, n)| self.requirements.lookup(n.lookup_key()))
            .filter(|n| n.height == HeightClass::Tall)
            .count();

        if tall < self.rules.shading_tall_neighbor_count {
            return None;
        }

        Some(LayoutAlert::new(
            AlertKind::SunlightShading,
            Severity::Warning,
            format!("{} needs full sun but may be shaded by {} tall neighbors", plant.name, tall),
            vec![pos],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CompanionRecord, WaterNeed};

    fn req(sunlight: SunlightNeed, water: WaterNeed, spacing: u32, height: HeightClass) -> PlantRequirements {
        PlantRequirements { sunlight, water, spacing_inches: spacing, height }
    }

    fn record(good: &[&str], bad: &[&str], family: &str) -> CompanionRecord {
        CompanionRecord {
            good_companions: good.iter().map(|s| s.to_string()).collect(),
            bad_companions: bad.iter().map(|s| s.to_string()).collect(),
            family: family.to_string(),
            benefits: String::new(),
        }
    }

    fn requirements() -> RequirementsCatalog {
        use crate::catalog::{HeightClass as H, SunlightNeed as S, WaterNeed as W};
        RequirementsCatalog::from_entries([
            ("squash", req(S::Full, W::High, 24, H::Medium)),
            ("lettuce", req(S::Partial, W::Medium, 8, H::Low)),
            ("radish", req(S::Full, W::Medium, 2, H::Low)),
            ("corn", req(S::Full, W::High, 12, H::Tall)),
            ("sunflower", req(S::Full, W::Low, 24, H::Tall)),
            ("thyme", req(S::Full, W::Low, 8, H::Low)),
            ("kale", req(S::Full, W::Medium, 18, H::Medium)),
            ("okra", req(S::Full, W::Medium, 17, H::Medium)),
        ])
    }

    fn companions() -> CompanionGraph {
        CompanionGraph::from_records([
            ("tomato", record(&["basil"], &["fennel"], "Solanaceae")),
            ("basil", record(&["tomato"], &[], "Lamiaceae")),
            ("fennel", record(&[], &["tomato"], "Apiaceae")),
            ("corn", record(&["squash"], &[], "Poaceae")),
        ])
    }

    fn grid_of(rows: &[&[Option<&str>]]) -> PlantingGrid {
        PlantingGrid::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.map(PlacedPlant::new)).collect::<Vec<_>>())
                .collect(),
        )
    }

    fn analyze(grid: &PlantingGrid) -> Vec<LayoutAlert> {
        let reqs = requirements();
        let comps = companions();
        let rules = LayoutRules::default();
        GridSpatialAnalyzer::new(&reqs, &comps, &rules).analyze(grid)
    }

    #[test]
    fn test_empty_grid_has_no_alerts() {
        assert!(analyze(&PlantingGrid::new(4, 4)).is_empty());
    }

    #[test]
    fn test_mutual_good_pair_yields_one_synergy() {
        let grid = grid_of(&[&[Some("tomato"), Some("basil")]]);
        let alerts = analyze(&grid);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::CompanionSynergy);
        assert_eq!(alerts[0].severity, Severity::Info);
        assert_eq!(alerts[0].cells, vec![(0, 0), (0, 1)]);
        assert_eq!(alerts[0].message, "tomato and basil grow well together");
    }

    #[test]
    fn test_synergy_message_comes_from_first_scanned_side() {
        let grid = grid_of(&[&[Some("basil"), Some("tomato")]]);
        let alerts = analyze(&grid);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "basil and tomato grow well together");
    }

    #[test]
    fn test_conflict_is_error_on_both_cells() {
        let grid = grid_of(&[&[Some("fennel")], &[Some("tomato")]]);
        let alerts = analyze(&grid);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::CompanionConflict);
        assert_eq!(alerts[0].severity, Severity::Error);
        assert_eq!(alerts[0].cells, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_spacing_warning_for_crowded_centre() {
        let grid = grid_of(&[
            &[Some("radish"), Some("radish"), Some("radish")],
            &[Some("radish"), Some("squash"), Some("radish")],
            &[Some("radish"), Some("radish"), Some("radish")],
        ]);
        let alerts = analyze(&grid);

        let spacing: Vec<&LayoutAlert> = alerts.iter().filter(|a| a.kind == AlertKind::Spacing).collect();
        assert_eq!(spacing.len(), 1);
        assert_eq!(spacing[0].cells, vec![(1, 1)]);
        assert_eq!(spacing[0].severity, Severity::Warning);
        assert!(spacing[0].message.contains("24\""));
    }

    #[test]
    fn test_no_spacing_warning_with_two_neighbors() {
        let grid = grid_of(&[
            &[Some("radish"), None, None],
            &[None, Some("squash"), Some("radish")],
            &[None, None, None],
        ]);
        let alerts = analyze(&grid);
        assert!(alerts.iter().all(|a| a.kind != AlertKind::Spacing));
    }

    #[test]
    fn test_water_mismatch() {
        // thyme (low water) with three medium/high neighbors
        let grid = grid_of(&[
            &[Some("lettuce"), Some("radish"), Some("squash")],
            &[None, Some("thyme"), None],
        ]);
        let alerts = analyze(&grid);

        let water: Vec<&LayoutAlert> = alerts.iter().filter(|a| a.kind == AlertKind::WaterMismatch).collect();
        assert_eq!(water.len(), 1);
        assert_eq!(water[0].cells, vec![(1, 1)]);
        assert!(water[0].message.contains("low water"));
    }

    #[test]
    fn test_sunlight_shading() {
        // radish is low + full sun; corn and sunflower are tall
        let grid = grid_of(&[&[Some("corn"), Some("radish"), Some("sunflower")]]);
        let alerts = analyze(&grid);

        let shading: Vec<&LayoutAlert> = alerts.iter().filter(|a| a.kind == AlertKind::SunlightShading).collect();
        assert_eq!(shading.len(), 1);
        assert_eq!(shading[0].cells, vec![(0, 1)]);
    }

    #[test]
    fn test_partial_sun_plant_is_not_shaded() {
        let grid = grid_of(&[&[Some("corn"), Some("lettuce"), Some("sunflower")]]);
        assert!(analyze(&grid).iter().all(|a| a.kind != AlertKind::SunlightShading));
    }

    #[test]
    fn test_plant_without_requirements_still_gets_companion_checks() {
        // tomato/basil have companion data only
        let grid = grid_of(&[
            &[Some("tomato"), Some("basil"), Some("corn")],
            &[Some("corn"), Some("corn"), Some("corn")],
        ]);
        let alerts = analyze(&grid);
        assert!(alerts.iter().any(|a| a.kind == AlertKind::CompanionSynergy));
        assert!(alerts
            .iter()
            .filter(|a| !a.kind.is_companion())
            .all(|a| !a.cells.contains(&(0, 0)) && !a.cells.contains(&(0, 1))));
    }

    #[test]
    fn test_alerts_follow_scan_order() {
        let grid = grid_of(&[
            &[Some("corn"), Some("radish"), Some("sunflower")],
            &[Some("squash"), None, None],
        ]);
        let alerts = analyze(&grid);

        // (0,0) corn→squash synergy, then (0,1) radish water before shading
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::CompanionSynergy, AlertKind::WaterMismatch, AlertKind::SunlightShading]
        );
        assert_eq!(alerts[0].cells, vec![(0, 0), (1, 0)]);
        assert_eq!(alerts[1].cells, vec![(0, 1)]);
    }

    #[test]
    fn test_ragged_grid_does_not_panic() {
        let grid = grid_of(&[
            &[Some("corn"), Some("radish"), Some("sunflower")],
            &[Some("squash")],
        ]);
        let alerts = analyze(&grid);
        assert!(!alerts.is_empty());
    }

    fn kinds_at(grid: &PlantingGrid, kind: AlertKind) -> Vec<Vec<CellPos>> {
        analyze(grid)
            .into_iter()
            .filter(|a| a.kind == kind)
            .map(|a| a.cells)
            .collect()
    }

    /// `centre` at (1,1) of a 3x3 bed with `filled` of its 8 neighbors occupied
    /// by a plant that has no catalog data
    fn surrounded(centre: &str, filled: usize) -> PlantingGrid {
        let mut grid = PlantingGrid::new(3, 3);
        grid.place(1, 1, PlacedPlant::new(centre));
        let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        for &(r, c) in ring.iter().take(filled) {
            grid.place(r, c, PlacedPlant::new("weed"));
        }
        grid
    }

    #[test]
    fn test_spacing_threshold_is_inclusive() {
        assert_eq!(kinds_at(&surrounded("kale", 8), AlertKind::Spacing), vec![vec![(1, 1)]]);
        assert!(kinds_at(&surrounded("okra", 8), AlertKind::Spacing).is_empty());
    }

    #[test]
    fn test_crowding_threshold_is_inclusive() {
        assert_eq!(kinds_at(&surrounded("squash", 6), AlertKind::Spacing), vec![vec![(1, 1)]]);
        assert!(kinds_at(&surrounded("squash", 5), AlertKind::Spacing).is_empty());
    }

    #[test]
    fn test_water_mismatch_threshold_is_inclusive() {
        // thyme is low water; lettuce, radish and squash are not
        let three = grid_of(&[
            &[Some("lettuce"), Some("radish"), Some("squash")],
            &[None, Some("thyme"), None],
        ]);
        assert_eq!(kinds_at(&three, AlertKind::WaterMismatch), vec![vec![(1, 1)]]);

        let two = grid_of(&[
            &[Some("lettuce"), Some("radish"), None],
            &[None, Some("thyme"), None],
        ]);
        assert!(kinds_at(&two, AlertKind::WaterMismatch).is_empty());
    }

    #[test]
    fn test_shading_threshold_is_inclusive() {
        let two_tall = grid_of(&[&[Some("corn"), Some("radish"), Some("sunflower")]]);
        assert_eq!(kinds_at(&two_tall, AlertKind::SunlightShading), vec![vec![(0, 1)]]);

        let one_tall = grid_of(&[&[Some("corn"), Some("radish"), Some("lettuce")]]);
        assert!(kinds_at(&one_tall, AlertKind::SunlightShading).is_empty());
    }
}
