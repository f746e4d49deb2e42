use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::picking::prelude::*;
use bevy::prelude::*;

use crate::core::config::{AppConfig, srgb};
use crate::core::coordinates::GeoPoint;

/// Plugin for the globe mesh
pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_globe);
    }
}

#[derive(Component)]
pub struct Globe;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<AppConfig>,
) {
    let globe = &config.globe;
    let mesh = Sphere::new(globe.radius as f32).mesh().uv(128, 64);
    let material = materials.add(StandardMaterial {
        base_color: srgb(globe.color),
        base_color_texture: globe.texture.as_ref().map(|path| asset_server.load(path.clone())),
        perceptual_roughness: 1.0,
        ..default()
    });

    let mut entity = commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::default(),
        Globe,
        Name::new("Globe"),
    ));
    if globe.wireframe {
        entity.insert((
            Wireframe,
            WireframeColor {
                color: srgb(globe.wireframe_color),
            },
        ));
    }
    entity.observe(|mut event: On<Pointer<Click>>| {
        if let Some(pos) = event.hit.position
            && let Some(point) = GeoPoint::from_cartesian(pos.as_dvec3())
        {
            info!(
                "Picked point: lon {:.4}, lat {:.4}",
                point.longitude(),
                point.latitude()
            );
        }
        event.propagate(false);
    });
}
