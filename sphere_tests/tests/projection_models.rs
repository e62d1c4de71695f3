//! Both projection conventions driven through full sessions.

use rand::{rngs::StdRng, SeedableRng};
use sphere_core::config::WorldConfig;
use sphere_core::field::ParticleField;
use sphere_core::intent::{Intent, Turn};
use sphere_core::projection::ProjectionModel;

fn run_session(model: ProjectionModel) -> anyhow::Result<()> {
    let cfg = WorldConfig {
        particle_count: 30,
        projection: model,
        ..WorldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(404);
    let mut field = ParticleField::new(cfg, &mut rng)?;

    field.tick(Intent::IDLE);
    for tick in 0..300 {
        let intent = if tick % 2 == 0 {
            Intent::forward()
        } else {
            Intent::turning(Turn::Left)
        };
        field.tick(intent);
        assert!(field.order_is_valid());

        // The nearest slot must actually be nearest among the particles.
        let nearest = field.nearest_slot().unwrap();
        let nearest_z = field.particles()[nearest].pos.z;
        for p in field.particles() {
            match model {
                ProjectionModel::Telephoto => assert!(p.pos.z <= nearest_z + 1e-9),
                ProjectionModel::DollyOut => assert!(p.pos.z >= nearest_z - 1e-9),
            }
        }
    }
    Ok(())
}

#[test]
fn telephoto_session() -> anyhow::Result<()> {
    run_session(ProjectionModel::Telephoto)
}

#[test]
fn dolly_out_session() -> anyhow::Result<()> {
    run_session(ProjectionModel::DollyOut)
}

/// Under either model a snapshot culls the occluded hemisphere: every
/// drawn sprite must pass the model's own visibility rule.
#[test]
fn snapshot_respects_visibility() -> anyhow::Result<()> {
    for model in [ProjectionModel::Telephoto, ProjectionModel::DollyOut] {
        let cfg = WorldConfig {
            particle_count: 60,
            projection: model,
            ..WorldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::new(cfg, &mut rng)?;
        field.tick(Intent::IDLE);
        field.tick(Intent::forward());

        let visible = field
            .particles()
            .iter()
            .filter(|p| match model {
                ProjectionModel::Telephoto => p.pos.z >= 0.0,
                ProjectionModel::DollyOut => p.pos.z <= 0.0,
            })
            .count();
        assert_eq!(field.snapshot().sprites.len(), visible);
    }
    Ok(())
}
