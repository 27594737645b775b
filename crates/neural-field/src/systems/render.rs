use crate::api::config::FieldConfig;
use crate::api::types::FrameStats;
use crate::core::field::ParticleField;
use crate::core::pointer::PointerState;
use crate::renderer::traits::Surface;
use crate::systems::connections::{connection_opacity, pointer_link_opacity, LINE_WIDTH};

/// Advance the field one frame and draw it.
///
/// Order: clear, move + draw each particle, pair connections (every unordered
/// pair, post-move positions), then pointer links. Returns `None` without
/// touching the surface when the surface is not ready or the field has no area.
pub fn draw_frame<S: Surface + ?Sized>(
    field: &mut ParticleField,
    pointer: &PointerState,
    config: &FieldConfig,
    surface: &mut S,
) -> Option<FrameStats> {
    if !surface.is_ready() || field.has_zero_area() {
        return None;
    }

    let mut stats = FrameStats::default();
    surface.clear(field.width(), field.height());

    let pointer = pointer.position();
    field.step(pointer, config.mouse_influence);

    let particles = field.particles();
    for p in particles {
        let color = config.particle_color.with_alpha(p.opacity);
        surface.fill_circle(p.position, p.radius, color);
        stats.particles_drawn += 1;
    }

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            stats.pairs_checked += 1;
            let dist = a.position.distance(b.position);
            if let Some(alpha) = connection_opacity(dist, config.connection_distance) {
                let color = config.line_color.with_alpha(alpha);
                surface.stroke_line(a.position, b.position, LINE_WIDTH, color);
                stats.connections_drawn += 1;
            }
        }
    }

    if let Some(pointer) = pointer {
        for p in particles {
            let dist = p.position.distance(pointer);
            if let Some(alpha) = pointer_link_opacity(dist, config.connection_distance) {
                let color = config.pointer_line_color.with_alpha(alpha);
                surface.stroke_line(p.position, pointer, LINE_WIDTH, color);
                stats.pointer_links_drawn += 1;
            }
        }
    }

    log::trace!("frame: {:?}", stats);
    Some(stats)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::api::types::Rgb;
    use crate::core::particle::Particle;
    use crate::renderer::draw_list::{DrawCommand, DrawList};
    use crate::systems::connections::pair_count;

    fn still(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.5)
    }

    #[test]
    fn two_particles_one_connection() {
        let config = FieldConfig::new()
            .with_particle_count(2)
            .with_connection_distance(150.0);
        let mut field =
            ParticleField::from_particles(800.0, 600.0, vec![still(0.0, 0.0), still(100.0, 0.0)]);
        let mut list = DrawList::new();

        let stats = draw_frame(&mut field, &PointerState::Absent, &config, &mut list).unwrap();
        assert_eq!(stats.pairs_checked, 1);
        assert_eq!(stats.connections_drawn, 1);
        assert_eq!(stats.pointer_links_drawn, 0);

        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            DrawCommand::Line { from, to, width, color } => {
                assert_eq!(*from, Vec2::new(0.0, 0.0));
                assert_eq!(*to, Vec2::new(100.0, 0.0));
                assert_eq!(*width, 1.0);
                assert_eq!(color.rgb, Rgb::CYAN);
                assert!((color.alpha - 0.0999).abs() < 1e-3, "alpha = {}", color.alpha);
            }
            other => panic!("Expected Line, got {:?}", other),
        }
    }

    #[test]
    fn frame_starts_with_clear_then_circles() {
        let config = FieldConfig::new();
        let mut field = ParticleField::from_particles(
            50.0,
            40.0,
            vec![still(1.0, 1.0), still(2.0, 2.0), still(30.0, 30.0)],
        );
        let mut list = DrawList::new();
        draw_frame(&mut field, &PointerState::Absent, &config, &mut list);

        assert_eq!(list.commands()[0], DrawCommand::Clear { width: 50.0, height: 40.0 });
        assert!(list.commands()[1..4]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
        match &list.commands()[1] {
            DrawCommand::Circle { radius, color, .. } => {
                assert_eq!(*radius, 2.0);
                assert_eq!(color.alpha, 0.5);
            }
            other => panic!("Expected Circle, got {:?}", other),
        }
    }

    #[test]
    fn default_field_checks_every_pair_once() {
        let config = FieldConfig::new();
        let mut field = ParticleField::new(42);
        field.regenerate(1024.0, 768.0, config.particle_count);
        let mut list = DrawList::new();

        let stats = draw_frame(&mut field, &PointerState::Absent, &config, &mut list).unwrap();
        assert_eq!(stats.particles_drawn, 80);
        assert_eq!(stats.pairs_checked, 3160);
        assert_eq!(stats.pairs_checked, pair_count(80));
        assert_eq!(list.lines().count(), stats.connections_drawn);
    }

    #[test]
    fn pointer_links_use_distinct_color() {
        let config = FieldConfig::new();
        let mut field = ParticleField::from_particles(400.0, 400.0, vec![still(100.0, 100.0)]);
        let pointer = PointerState::At(Vec2::new(300.0, 100.0));
        let mut list = DrawList::new();

        let stats = draw_frame(&mut field, &pointer, &config, &mut list).unwrap();
        assert_eq!(stats.pointer_links_drawn, 1);
        let line = list.lines().next();
        match line {
            Some(DrawCommand::Line { to, color, .. }) => {
                assert_eq!(*to, Vec2::new(300.0, 100.0));
                assert_eq!(color.rgb, Rgb::MAGENTA);
                let expected = (1.0 - 200.0 / 225.0) * 0.5;
                assert!((color.alpha - expected).abs() < 1e-4);
            }
            other => panic!("Expected pointer Line, got {:?}", other),
        }
    }

    #[test]
    fn pointer_within_influence_moves_particle() {
        let config = FieldConfig::new();
        let mut field = ParticleField::from_particles(400.0, 400.0, vec![still(100.0, 100.0)]);
        let pointer = PointerState::At(Vec2::new(150.0, 100.0));
        let mut list = DrawList::new();
        draw_frame(&mut field, &pointer, &config, &mut list);
        assert!(field.particles()[0].position.x > 100.0);
        assert!(field.particles()[0].velocity.x > 0.0);
    }

    #[test]
    fn unready_surface_is_a_no_op() {
        let config = FieldConfig::new();
        let mut field = ParticleField::from_particles(400.0, 400.0, vec![still(1.0, 1.0)]);
        let mut list = DrawList::unavailable();
        assert_eq!(draw_frame(&mut field, &PointerState::Absent, &config, &mut list), None);
        assert!(list.is_empty());
    }

    #[test]
    fn zero_area_field_draws_nothing() {
        let config = FieldConfig::new();
        let mut field = ParticleField::new(1);
        let mut list = DrawList::new();
        assert_eq!(draw_frame(&mut field, &PointerState::Absent, &config, &mut list), None);
        assert!(list.is_empty());
    }
}
