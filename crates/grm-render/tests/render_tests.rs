//! Integration tests across grid, field and heat-map rendering.

use grm_color::Rgb;
use grm_render::{CellGrid, HeatmapRenderer, ScoreField};
use grm_test_utils::{five_by_five_config, gapped_config, overlapping_config, three_by_three_config};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn grid_and_field_agree_on_cell_scores() {
    let config = five_by_five_config();
    let grid = CellGrid::build(&config);
    let field = ScoreField::new(&config);

    for cell in grid.iter() {
        let sampled = field.sample(f64::from(cell.likelihood), f64::from(cell.impact));
        assert!((sampled - cell.score).abs() < 1e-9);
    }
}

#[test]
fn gapped_config_produces_unknown_cells_but_still_renders() {
    let config = gapped_config();
    let grid = CellGrid::build(&config);

    // Score 8 at (2,4) falls into the gap
    let unknown = grid.cell(2, 4).unwrap();
    assert_eq!(unknown.score, 8.0);
    assert_eq!(unknown.level_name(), None);
    assert_eq!(unknown.color(), Rgb::NEUTRAL);

    // The heat map still produces a full buffer; no pixel is "absent"
    let heatmap = HeatmapRenderer::new(&config).render(30, 30).unwrap();
    assert_eq!(heatmap.pixels.len(), 900);
}

#[test]
fn overlapping_config_resolves_first_band() {
    let config = overlapping_config();
    let grid = CellGrid::build(&config);

    // Score 12 at (3,4) is claimed by both bands; first-in-order wins
    let cell = grid.cell(3, 4).unwrap();
    assert_eq!(cell.level_name(), Some("Low"));
}

#[test]
fn small_matrix_heatmap_spans_green_to_red() {
    let config = three_by_three_config();
    let heatmap = HeatmapRenderer::new(&config).render(20, 20).unwrap();

    let top_left = heatmap.pixel(0, 0).unwrap();
    let bottom_right = heatmap.pixel(19, 19).unwrap();
    assert_eq!(top_left, config.levels[0].color);
    assert_eq!(bottom_right, config.levels[2].color);
    assert_ne!(top_left, bottom_right);
}

proptest! {
    #[test]
    fn heatmap_buffer_length_matches_dimensions(
        width in 1usize..=64,
        height in 1usize..=64,
    ) {
        let renderer = HeatmapRenderer::new(&five_by_five_config());
        let heatmap = renderer.render(width, height).unwrap();
        prop_assert_eq!(heatmap.pixels.len(), width * height);
    }

    #[test]
    fn field_samples_stay_within_cell_score_bounds(
        likelihood in 1.0f64..=5.0,
        impact in 1.0f64..=5.0,
    ) {
        let config = five_by_five_config();
        let field = ScoreField::new(&config);
        let sampled = field.sample(likelihood, impact);
        prop_assert!(sampled >= 1.0);
        prop_assert!(sampled <= f64::from(config.max_score()));
    }
}
