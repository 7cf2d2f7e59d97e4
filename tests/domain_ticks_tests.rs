use approx::assert_abs_diff_eq;

use dashviz::core::{
    Coord, Item, Line, NumberRange, Orientation, TickKind, TickRequest, main_tick_values,
    pad_domain, secondary_domain, secondary_tick_values, x_domain, y_domain,
};

fn items_with_x(values: &[f64]) -> Vec<Item> {
    values.iter().map(|&x| Item::new(x, x * 10.0)).collect()
}

fn main_request<'a>(items: &'a [Item], domain: NumberRange, budget: usize) -> TickRequest<'a> {
    TickRequest {
        items,
        coord: Coord::X,
        domain,
        budget,
        guide: None,
        kind: TickKind::Label,
    }
}

#[test]
fn higher_zoom_narrows_the_padded_domain() {
    let items = items_with_x(&[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    let wide = x_domain(&items, Orientation::Horizontal, 1.0);
    let narrow = x_domain(&items, Orientation::Horizontal, 2.0);

    assert!(narrow.start >= wide.start);
    assert!(narrow.end < wide.end);
    assert_abs_diff_eq!(wide.end, 10.6, epsilon = 1e-9);
    assert_abs_diff_eq!(narrow.end, 10.3, epsilon = 1e-9);
}

#[test]
fn vertical_y_domain_puts_zero_on_top() {
    let items = items_with_x(&[0.0, 5.0, 10.0]);
    let domain = y_domain(&items, Orientation::Vertical, 1.0);

    assert!(domain.start > domain.end);
    assert_abs_diff_eq!(domain.min(), -4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domain.max(), 104.0, epsilon = 1e-9);
}

#[test]
fn pad_domain_preserves_reversed_order() {
    let padded = pad_domain(NumberRange::new(100.0, 0.0), 0.1, 0.1, 1.0);

    assert_abs_diff_eq!(padded.start, 110.0, epsilon = 1e-9);
    assert_abs_diff_eq!(padded.end, -10.0, epsilon = 1e-9);
}

#[test]
fn sentinel_domain_yields_no_ticks() {
    let items = items_with_x(&[0.0, 1.0, 2.0]);

    assert!(main_tick_values(main_request(&items, NumberRange::UNINIT, 4)).is_empty());
    assert!(
        secondary_tick_values(main_request(&items, NumberRange::UNINIT, 4)).is_empty()
    );
}

#[test]
fn zero_budget_disables_the_axis() {
    let items = items_with_x(&[0.0, 1.0, 2.0]);
    let domain = NumberRange::new(0.0, 2.0);

    assert!(main_tick_values(main_request(&items, domain, 0)).is_empty());
    assert!(secondary_tick_values(main_request(&items, domain, 0)).is_empty());
}

#[test]
fn main_ticks_stay_tied_to_data_values() {
    let items = items_with_x(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let domain = NumberRange::new(0.0, 9.0);

    assert_eq!(
        main_tick_values(main_request(&items, domain, 4)),
        vec![0.0, 3.0, 6.0, 9.0]
    );
    assert_eq!(
        main_tick_values(main_request(&items, domain, 3)),
        vec![0.0, 4.0, 8.0]
    );
}

#[test]
fn main_ticks_ignore_values_outside_the_domain() {
    let items = items_with_x(&[-5.0, 0.0, 1.0, 2.0, 3.0, 20.0]);
    let domain = NumberRange::new(0.0, 3.0);

    assert_eq!(
        main_tick_values(main_request(&items, domain, 4)),
        vec![0.0, 1.0, 2.0, 3.0]
    );
}

#[test]
fn sparse_budget_always_shows_extremes() {
    let items = items_with_x(&[0.0, 1.0, 3.0, 4.5, 7.0, 9.0]);
    let domain = NumberRange::new(0.0, 9.0);

    for budget in [1, 2] {
        assert_eq!(
            main_tick_values(main_request(&items, domain, budget)),
            vec![0.0, 9.0],
            "main budget {budget}"
        );
        assert_eq!(
            secondary_tick_values(main_request(&items, domain, budget)),
            vec![0.0, 9.0],
            "secondary budget {budget}"
        );
    }
}

#[test]
fn single_distinct_value_collapses_to_one_tick() {
    let items = items_with_x(&[4.0, 4.0, 4.0]);
    let domain = NumberRange::new(0.0, 9.0);

    assert_eq!(main_tick_values(main_request(&items, domain, 2)), vec![4.0]);
}

#[test]
fn guide_value_joins_grid_ticks_when_in_range() {
    let items = items_with_x(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let domain = NumberRange::new(1.0, 9.0);

    let grid = main_tick_values(TickRequest {
        guide: Some(2.0),
        kind: TickKind::Grid,
        ..main_request(&items, domain, 3)
    });
    assert_eq!(grid, vec![1.0, 4.0, 7.0, 2.0]);

    // Labels never include the guide.
    let labels = main_tick_values(TickRequest {
        guide: Some(2.0),
        kind: TickKind::Label,
        ..main_request(&items, domain, 3)
    });
    assert_eq!(labels, vec![1.0, 4.0, 7.0]);
}

#[test]
fn guide_below_domain_start_is_not_injected() {
    let items = items_with_x(&[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let domain = NumberRange::new(2.0, 8.0);

    let grid = main_tick_values(TickRequest {
        guide: Some(1.0),
        kind: TickKind::Grid,
        ..main_request(&items, domain, 3)
    });
    assert!(!grid.contains(&1.0));
}

#[test]
fn guide_duplicates_are_merged() {
    let items = items_with_x(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let domain = NumberRange::new(0.0, 9.0);

    let grid = main_tick_values(TickRequest {
        guide: Some(3.0),
        kind: TickKind::Grid,
        ..main_request(&items, domain, 4)
    });
    assert_eq!(grid, vec![0.0, 3.0, 6.0, 9.0]);
}

#[test]
fn secondary_ticks_are_evenly_spaced_round_values() {
    let items = items_with_x(&[0.3, 4.4, 9.7]);
    let domain = NumberRange::new(0.0, 10.0);

    assert_eq!(
        secondary_tick_values(main_request(&items, domain, 5)),
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
    );
}

#[test]
fn secondary_grid_ticks_include_the_guide() {
    let items = items_with_x(&[0.3, 4.4, 9.7]);
    let domain = NumberRange::new(0.0, 10.0);

    let grid = secondary_tick_values(TickRequest {
        guide: Some(0.3),
        kind: TickKind::Grid,
        ..main_request(&items, domain, 5)
    });
    assert_eq!(grid, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 0.3]);
}

#[test]
fn secondary_domain_tracks_points_inside_the_main_window() {
    let line = Line::new(
        "first",
        vec![
            Item::new(0.0, 0.0),
            Item::new(2.0, 20.0),
            Item::new(4.0, 10.0),
            Item::new(6.0, 40.0),
            Item::new(8.0, 30.0),
            Item::new(10.0, 50.0),
        ],
    );

    let derived = secondary_domain(
        2.5,
        7.5,
        std::slice::from_ref(&line),
        |item| item.x,
        |items| y_domain(items, Orientation::Horizontal, 1.0),
    );

    // Boundary search keeps x=2 and x=8 as edge neighbors, so the
    // sub-range extent is y in [10, 40] before padding.
    assert_abs_diff_eq!(derived.start, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(derived.end, 40.0 + 0.055 * 30.0, epsilon = 1e-9);
}

#[test]
fn secondary_domain_spans_all_lines() {
    let lines = vec![
        Line::new("low", vec![Item::new(0.0, -5.0), Item::new(10.0, 5.0)]),
        Line::new("high", vec![Item::new(0.0, 80.0), Item::new(10.0, 100.0)]),
    ];

    let derived = secondary_domain(
        0.0,
        10.0,
        &lines,
        |item| item.x,
        |items| y_domain(items, Orientation::Horizontal, 1.0),
    );

    assert!(derived.start <= -5.0);
    assert!(derived.end >= 100.0);
}

#[test]
fn secondary_domain_without_lines_stays_uninitialized() {
    let derived = secondary_domain(
        0.0,
        1.0,
        &[],
        |item| item.x,
        |items| y_domain(items, Orientation::Horizontal, 1.0),
    );

    assert_eq!(derived, NumberRange::UNINIT);
}
