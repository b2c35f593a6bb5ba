//! # Marquee Verification Tests
//!
//! End-to-end checks of the marquee engine through its public API:
//!
//! 1. **Overflow**: distance, fit and edge style from measured widths
//! 2. **Timing**: start delay, scroll duration, reset floor, auto restart
//! 3. **Groups**: AND-join restart, stall recovery, release on drop
//! 4. **Widgets**: config file through to render commands
//!
//! Run with: cargo test --package glint_ui --test marquee_verification

use std::time::Duration;

use glint_core::Interaction;
use glint_ui::marquee::{
    ControllerConfig, Job, Marquee, MarqueeConfig, MarqueeController, MarqueeOn,
    MonospaceMeasure, OverflowStyle, TextDirection, TextExtent,
};
use glint_ui::{
    GlintConfig, MarqueeRow, MarqueeText, Rect, RenderCommand, UIRenderer, Widget, WidgetId,
};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// 10px cells in a 100px box.
fn measure() -> MonospaceMeasure {
    MonospaceMeasure::new(10.0, 100.0)
}

fn render_config() -> MarqueeConfig {
    MarqueeConfig::default().with_marquee_on(MarqueeOn::Render)
}

// ============================================================================
// OVERFLOW
// ============================================================================

#[test]
fn verify_fitting_content_never_animates() {
    let mut marquee = Marquee::new("short", render_config());
    marquee.update(ms(5_000), &measure());

    assert!(marquee.content_fits());
    assert_eq!(marquee.distance(), Some(0.0));
    assert_eq!(marquee.overflow(), OverflowStyle::Clip);
    assert!(!marquee.is_animating());
}

#[test]
fn verify_overflow_distance_and_style() {
    let measure = |_: &str| Some(TextExtent::new(250.0, 100.0));
    let mut marquee = Marquee::new("measured elsewhere", render_config());
    marquee.update(ms(1_000), &measure);

    assert_eq!(marquee.distance(), Some(150.0));
    assert!(!marquee.content_fits());
    assert_eq!(marquee.overflow(), OverflowStyle::Ellipsis);
    assert!(marquee.is_animating());
}

#[test]
fn verify_missing_layout_leaves_metrics_unknown() {
    let no_layout = |_: &str| -> Option<TextExtent> { None };
    let mut marquee = Marquee::new("x".repeat(40), render_config());
    marquee.update(ms(5_000), &no_layout);

    assert_eq!(marquee.distance(), None);
    assert!(!marquee.is_animating());
}

// ============================================================================
// TIMING
// ============================================================================

#[test]
fn verify_render_mode_cycle() {
    // 300px of content in a 100px box at 60px/s.
    let mut marquee = Marquee::new("x".repeat(30), render_config());
    let measure = measure();

    marquee.update(ms(999), &measure);
    assert!(!marquee.is_animating());
    assert_eq!(marquee.pending_job(), Some(Job::Start));

    assert!(marquee.update(ms(1), &measure).started);
    let duration = marquee.scroll().map(|s| s.duration()).unwrap();
    let expected = Duration::from_secs_f32(200.0 / 60.0);
    let drift = if duration > expected {
        duration - expected
    } else {
        expected - duration
    };
    assert!(drift < ms(1));

    let response = marquee.update(duration, &measure);
    assert!(response.completed);
    assert_eq!(marquee.pending_job(), Some(Job::Reset));

    assert!(marquee.update(ms(1_000), &measure).reset);
    assert!(!marquee.is_animating());
    assert_eq!(marquee.pending_job(), Some(Job::Start));

    assert!(marquee.update(ms(1_000), &measure).started);
    assert!(marquee.is_animating());
}

#[test]
fn verify_reset_delay_floor() {
    let config = render_config()
        .with_reset_delay(ms(5))
        .with_speed(200.0);
    let mut marquee = Marquee::new("x".repeat(30), config);
    let measure = measure();

    marquee.update(ms(1_000), &measure);
    assert!(marquee.update(ms(1_000), &measure).completed);
    assert_eq!(marquee.time_to_pending(), Some(ms(40)));

    assert!(!marquee.update(ms(39), &measure).reset);
    assert!(marquee.update(ms(1), &measure).reset);
}

#[test]
fn verify_blur_before_delay_cancels() {
    let mut marquee = Marquee::new("x".repeat(30), MarqueeConfig::default());
    let measure = measure();

    assert!(marquee.handle(Interaction::Focus));
    marquee.update(ms(500), &measure);
    assert!(marquee.handle(Interaction::Blur));

    assert!(!marquee.is_animating());
    assert_eq!(marquee.pending_job(), None);
    marquee.update(ms(5_000), &measure);
    assert!(!marquee.is_animating());
}

#[test]
fn verify_hover_ignores_focus() {
    let config = MarqueeConfig::default().with_marquee_on(MarqueeOn::Hover);
    let mut marquee = Marquee::new("x".repeat(30), config);

    assert!(!marquee.handle(Interaction::Focus));
    assert_eq!(marquee.pending_job(), None);
    assert!(marquee.handle(Interaction::PointerEnter));
    assert_eq!(marquee.pending_job(), Some(Job::Start));
}

#[test]
fn verify_rtl_scrolls_right() {
    let hebrew = "שלום עולם ".repeat(4);
    let mut marquee = Marquee::new(hebrew.clone(), render_config());
    assert_eq!(marquee.direction(), TextDirection::Rtl);

    marquee.update(ms(1_500), &measure());
    assert!(marquee.offset() > 0.0);

    let forced = render_config().with_force_direction(TextDirection::Ltr);
    let mut marquee = Marquee::new(hebrew, forced);
    assert_eq!(marquee.direction(), TextDirection::Ltr);
    marquee.update(ms(1_500), &measure());
    assert!(marquee.offset() < 0.0);
}

// ============================================================================
// GROUPS
// ============================================================================

/// Updates every member, then lets earlier members pick up commands raised
/// by later ones.
fn frame(controller: &MarqueeController, members: &mut [Marquee], dt: Duration) {
    let measure = measure();
    controller.update(dt);
    for member in members.iter_mut() {
        member.update(dt, &measure);
    }
    for member in members.iter_mut() {
        member.update(Duration::ZERO, &measure);
    }
}

fn run(controller: &MarqueeController, members: &mut [Marquee], total: u64) {
    for _ in 0..total / 100 {
        frame(controller, members, ms(100));
    }
}

#[test]
fn verify_group_and_join() {
    let controller = MarqueeController::default();
    // Overflow of 60, 120 and 240px: passes of 1, 2 and 4 seconds.
    let mut members: Vec<Marquee> = [16, 22, 34]
        .into_iter()
        .map(|n| Marquee::with_controller("x".repeat(n), render_config(), controller.clone()))
        .collect();

    run(&controller, &mut members, 1_000);
    assert!(members.iter().all(Marquee::is_animating));

    // A and B have reset and reported, C is still scrolling.
    run(&controller, &mut members, 4_500);
    assert_eq!(controller.is_complete(members[0].id()), Some(true));
    assert_eq!(controller.is_complete(members[1].id()), Some(true));
    assert_eq!(controller.is_complete(members[2].id()), Some(false));
    assert_eq!(controller.restarts(), 0);
    assert_eq!(members[0].pending_job(), None);

    // C resets at 6s: exactly one restart, delivered to all three.
    run(&controller, &mut members, 500);
    assert_eq!(controller.restarts(), 1);
    for member in &members {
        assert_eq!(member.pending_job(), Some(Job::Start));
        assert_eq!(controller.is_complete(member.id()), Some(false));
    }

    run(&controller, &mut members, 1_000);
    assert!(members.iter().all(Marquee::is_animating));
}

#[test]
fn verify_fitting_group_does_not_spin() {
    let controller = MarqueeController::default();
    let mut members: Vec<Marquee> = ["a", "b"]
        .into_iter()
        .map(|t| Marquee::with_controller(t, render_config(), controller.clone()))
        .collect();

    run(&controller, &mut members, 3_000);
    assert_eq!(controller.restarts(), 0);
    assert!(members.iter().all(|m| m.content_fits() && !m.is_animating()));
}

#[test]
fn verify_stalled_group_restarts() {
    let config = ControllerConfig {
        stall_timeout: Some(ms(500)),
        ..ControllerConfig::default()
    };
    let controller = MarqueeController::new(config);
    let layout = |text: &str| (text != "stuck").then(|| TextExtent::new(160.0, 100.0));

    let mut scrolling = Marquee::with_controller("moves", render_config(), controller.clone());
    let mut stuck = Marquee::with_controller("stuck", render_config(), controller.clone());

    let mut step = |dt: Duration| {
        controller.update(dt);
        scrolling.update(dt, &layout);
        stuck.update(dt, &layout);
    };

    // 60px at 60px/s: pass ends at 2s, reset reports at 3s.
    for _ in 0..30 {
        step(ms(100));
    }
    assert!(controller.is_stall_armed());
    assert_eq!(controller.restarts(), 0);

    for _ in 0..5 {
        step(ms(100));
    }
    assert_eq!(controller.restarts(), 1);
    assert!(!controller.is_stall_armed());

    for _ in 0..10 {
        step(ms(100));
    }
    assert!(scrolling.is_animating());
    assert!(!stuck.is_animating());
}

#[test]
fn verify_dropped_member_releases_group() {
    let controller = MarqueeController::default();
    let mut members: Vec<Marquee> = [16, 34]
        .into_iter()
        .map(|n| Marquee::with_controller("x".repeat(n), render_config(), controller.clone()))
        .collect();

    run(&controller, &mut members, 3_500);
    assert_eq!(controller.is_complete(members[0].id()), Some(true));
    assert_eq!(controller.len(), 2);

    drop(members.pop());
    assert_eq!(controller.len(), 1);
    assert_eq!(controller.restarts(), 1);

    frame(&controller, &mut members, Duration::ZERO);
    assert_eq!(members[0].pending_job(), Some(Job::Start));
}

// ============================================================================
// WIDGETS
// ============================================================================

#[test]
fn verify_config_file_to_render_commands() {
    let config = GlintConfig::from_toml_str(
        r#"
        [marquee]
        marquee_on = "hover"
        marquee_delay_ms = 200
        marquee_speed = 100.0
        "#,
    )
    .unwrap();

    let mut label = MarqueeText::new(WidgetId::new(1), "x".repeat(30), config.marquee)
        .with_cell_width(10.0);
    label.set_bounds(Rect::new(20.0, 10.0, 100.0, 16.0));

    label.handle(Interaction::PointerEnter);
    label.update(ms(200));
    label.update(ms(1_000));

    let mut commands = Vec::new();
    label.render(&mut commands);

    let mut renderer = UIRenderer::new();
    renderer.begin_frame();
    renderer.push_clip(Rect::new(0.0, 0.0, 60.0, 60.0));
    renderer.extend(commands);
    renderer.pop_clip();
    assert_eq!(renderer.command_count(), 5);

    let batches = renderer.end_frame();
    assert_eq!(batches.len(), 1);
    let text = batches[0].commands.iter().find_map(|c| match c {
        RenderCommand::Text { x, overflow, .. } => Some((*x, *overflow)),
        _ => None,
    });
    // One second at 100px/s from x = 20.
    let (x, overflow) = text.unwrap();
    assert!((x - -80.0).abs() < 0.01);
    assert_eq!(overflow, Some(OverflowStyle::Ellipsis));
    assert_eq!(
        batches[0].commands[1],
        RenderCommand::PushClip {
            bounds: Rect::new(20.0, 10.0, 40.0, 16.0)
        }
    );
}

#[test]
fn verify_row_with_loaded_controller() {
    let config = GlintConfig::from_toml_str(
        r#"
        [marquee]
        marquee_speed = 60.0

        [controller]
        start_on_focus = true
        "#,
    )
    .unwrap();

    let mut row = MarqueeRow::new(WidgetId::new(1), config.controller, config.marquee)
        .with_cell_width(10.0);
    row.push_column(WidgetId::new(2), "x".repeat(16), 100.0);
    row.push_column(WidgetId::new(3), "fits", 100.0);
    row.set_bounds(Rect::new(0.0, 0.0, 204.0, 16.0));

    row.handle(Interaction::Focus);
    for _ in 0..10 {
        row.update(ms(100));
    }
    let long = row.column(WidgetId::new(2)).unwrap();
    let short = row.column(WidgetId::new(3)).unwrap();
    assert!(long.marquee().is_animating());
    assert!(short.marquee().content_fits());
    assert_eq!(row.controller().is_complete(short.marquee().id()), Some(true));

    // Pass 1s, reset 1s, then the group restarts both columns.
    for _ in 0..20 {
        row.update(ms(100));
    }
    assert_eq!(row.controller().restarts(), 1);
    let long = row.column(WidgetId::new(2)).unwrap();
    assert_eq!(long.marquee().pending_job(), Some(Job::Start));
}
