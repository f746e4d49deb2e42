use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{WgpuFeatures, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod airports;
mod core;
mod flight;
mod ui;
mod visualization;

use airports::{AirportCatalog, RouteRng, load_airports, select_route};
use crate::core::AppConfig;
use crate::core::config::srgb;
use flight::{FlightPlugin, FlightSession};
use ui::UiPlugin;
use visualization::VisualizationPlugin;

#[derive(Component)]
pub struct MainCamera;

// Camera framing both ends of the route, orbiting the globe centre
fn setup(mut commands: Commands, config: Res<AppConfig>, session: Res<FlightSession>) {
    let camera = &config.camera;
    let position = session
        .route()
        .camera_position(camera.distance_scale)
        .as_vec3();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fovy_deg.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Camera {
            clear_color: ClearColorConfig::Custom(srgb(config.renderer.clear_color)),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            ..default()
        },
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // The catalog is only needed when endpoints are drawn from it.
    let catalog = if config.flight.route.is_random() {
        load_airports(&config.flight.airports)?
    } else {
        Vec::new()
    };

    let mut rng = match config.flight.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let route = select_route(
        &config.flight.route,
        &catalog,
        &mut rng,
        config.route_radius(),
    )?;
    println!(
        "[INIT] route {} ({:.1}° of arc)",
        route.label(),
        route.path.angle().to_degrees()
    );
    let session = FlightSession::new(route, &config.flight);

    let mut app = App::new();

    let mut plugins = DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: config.renderer.window_title.clone(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    });
    // Line polygon mode backs the globe wireframe.
    if config.globe.wireframe {
        plugins = plugins.set(RenderPlugin {
            render_creation: WgpuSettings {
                features: WgpuFeatures::POLYGON_MODE_LINE,
                ..default()
            }
            .into(),
            ..default()
        });
    }
    app.add_plugins(plugins);

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.insert_resource(config)
        .insert_resource(AirportCatalog(catalog))
        .insert_resource(RouteRng(rng))
        .insert_resource(session);

    app.add_plugins(FlightPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
    Ok(())
}
