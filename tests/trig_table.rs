use numbox::{AngleUnit, TrigRequest, error::TableError, generate_trig_table, trig};

fn range(start: f64, end: f64, step: f64) -> TrigRequest {
    TrigRequest::Range { start, end, step }
}

#[test]
fn degree_range_includes_both_endpoints() {
    let rows = generate_trig_table(&range(0.0, 90.0, 15.0), AngleUnit::Degrees).unwrap();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].angle_deg, 0.0);
    assert_eq!(rows[6].angle_deg, 90.0);

    // Consecutive rows are `step` apart.
    for pair in rows.windows(2) {
        assert!((pair[1].angle_deg - pair[0].angle_deg - 15.0).abs() < 1e-9);
    }
}

#[test]
fn rows_carry_consistent_values() {
    let rows = generate_trig_table(&range(0.0, 180.0, 30.0), AngleUnit::Degrees).unwrap();

    for row in &rows {
        assert!((row.angle_rad - row.angle_deg.to_radians()).abs() < 1e-12);
        assert!((row.sin - row.angle_rad.sin()).abs() < 1e-12);
        assert!((row.cos - row.angle_rad.cos()).abs() < 1e-12);
        if let Some(tan) = row.tan {
            assert!((tan - row.angle_rad.tan()).abs() < 1e-9);
        }
    }

    assert!((rows[1].sin - 0.5).abs() < 1e-12, "sin(30°) should be 0.5");
}

#[test]
fn tangent_is_suppressed_at_singularities() {
    let rows = generate_trig_table(&range(0.0, 360.0, 30.0), AngleUnit::Degrees).unwrap();

    assert_eq!(rows.len(), 13);
    for row in &rows {
        let singular = row.angle_deg == 90.0 || row.angle_deg == 270.0;
        assert_eq!(row.tan.is_none(),
                   singular,
                   "unexpected tangent state at {}°",
                   row.angle_deg);
    }
}

#[test]
fn radian_ranges_convert_to_degrees() {
    let rows = generate_trig_table(&range(0.0, std::f64::consts::PI, std::f64::consts::FRAC_PI_4),
                                   AngleUnit::Radians).unwrap();

    assert_eq!(rows.len(), 5);
    assert!((rows[1].angle_deg - 45.0).abs() < 1e-9);
    assert!((rows[4].angle_deg - 180.0).abs() < 1e-9);
}

#[test]
fn unit_conversion_round_trips() {
    let rows = generate_trig_table(&range(0.0, 90.0, 15.0), AngleUnit::Degrees).unwrap();
    for row in &rows {
        assert!((row.angle_rad.to_degrees() - row.angle_deg).abs() < 1e-9);
    }

    let rows = generate_trig_table(&range(0.0, 3.0, 0.5), AngleUnit::Radians).unwrap();
    for row in &rows {
        assert!((row.angle_deg.to_radians() - row.angle_rad).abs() < 1e-12);
    }
}

#[test]
fn point_requests_emit_exactly_one_row() {
    let rows = generate_trig_table(&TrigRequest::Point { theta: 45.0 }, AngleUnit::Degrees)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert!((rows[0].sin - rows[0].cos).abs() < 1e-12);
    assert!((rows[0].tan.unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn a_zero_width_range_emits_a_single_row() {
    let rows = generate_trig_table(&range(30.0, 30.0, 15.0), AngleUnit::Degrees).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn inverted_ranges_are_rejected() {
    let error = generate_trig_table(&range(90.0, 0.0, 15.0), AngleUnit::Degrees).unwrap_err();
    assert!(matches!(error, TableError::EndBeforeStart { .. }));
}

#[test]
fn tiny_steps_are_rejected() {
    assert!(matches!(generate_trig_table(&range(0.0, 90.0, 0.0), AngleUnit::Degrees),
                     Err(TableError::StepTooSmall { .. })));
    assert!(matches!(generate_trig_table(&range(0.0, 90.0, -1.0), AngleUnit::Degrees),
                     Err(TableError::StepTooSmall { .. })));
    assert!(matches!(generate_trig_table(&range(0.0, 90.0, 1e-9), AngleUnit::Degrees),
                     Err(TableError::StepTooSmall { .. })));
    assert!(matches!(generate_trig_table(&range(0.0, 90.0, f64::NAN), AngleUnit::Degrees),
                     Err(TableError::StepTooSmall { .. })));
}

#[test]
fn oversized_ranges_are_rejected_up_front() {
    let error =
        generate_trig_table(&range(0.0, 1000.0, trig::MIN_STEP), AngleUnit::Degrees).unwrap_err();
    assert!(matches!(error, TableError::TooManyRows { .. }));
}
