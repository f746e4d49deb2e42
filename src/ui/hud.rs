//! On-screen flight status

use bevy::prelude::*;

use crate::flight::FlightSession;
use crate::ui::UIState;

#[derive(Component)]
pub struct HudText;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 1.0, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));
}

pub fn update_hud_system(
    session: Res<FlightSession>,
    state: Res<UIState>,
    mut query: Query<(&mut Text, &mut Visibility), With<HudText>>,
) {
    let Ok((mut text, mut visibility)) = query.single_mut() else {
        return;
    };
    *visibility = if state.show_hud {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    if !state.show_hud {
        return;
    }
    text.0 = hud_text(&session);
}

fn hud_text(session: &FlightSession) -> String {
    let route = session.route();
    let state = session.state();
    let mut lines = vec![route.label()];
    if let (Some(dep), Some(arr)) = (&route.departure.name, &route.arrival.name) {
        lines.push(format!("{} → {}", dep, arr));
    }
    lines.push(format!(
        "{} {:5.1}%  flown {:.1}° of {:.1}°  arc {:.3}",
        session.mode().label(),
        state.ratio * 100.0,
        route.path.angle_to(state.position).to_degrees(),
        route.path.angle().to_degrees(),
        route.path.length()
    ));
    lines.push("[P] mode  [Space] step  [R] new route  [X] helpers  [H] hud".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::Airport;
    use crate::core::config::FlightConfig;
    use crate::core::coordinates::GeoPoint;
    use crate::flight::Route;
    use crate::flight::session::ManualClock;

    #[test]
    fn test_hud_text_lists_route_and_progress() {
        let route = Route::new(
            Airport::new(
                "RJAA",
                Some("Narita".to_string()),
                GeoPoint::from_degrees(140.39, 35.77).unwrap(),
            ),
            Airport::new(
                "KJFK",
                Some("JFK".to_string()),
                GeoPoint::from_degrees(-73.79, 40.65).unwrap(),
            ),
            3.2,
        )
        .unwrap();
        let mut session = FlightSession::new(route, &FlightConfig::default());
        session.tick(&ManualClock::at_secs(5.0));

        let text = hud_text(&session);
        assert!(text.starts_with("RJAA → KJFK\nNarita → JFK\n"));
        assert!(text.contains("timed  50.0%"));

        let half = session.route().path.angle().to_degrees() / 2.0;
        let flown = session
            .route()
            .path
            .angle_to(session.state().position)
            .to_degrees();
        assert!((flown - half).abs() < 1e-6);
        assert!(text.contains("flown "));
    }
}
