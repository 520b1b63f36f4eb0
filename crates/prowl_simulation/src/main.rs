//! Headless симуляция PROWL
//!
//! Запускает Bevy App без рендера: один агент с patrol маршрутом,
//! цель ходит по кругу, in-process nav bridge заменяет engine layer.

use bevy::prelude::*;
use prowl_simulation::*;

/// Fixed timestep симуляции (60Hz)
const TICK_DT: f32 = 1.0 / 60.0;

/// Скорость stub-агента (м/с)
const AGENT_SPEED: f32 = 2.0;

/// Stub navigation agent: кинематика по прямой вместо pathfinding.
/// В реальном host этим занимается NavigationAgent движка.
#[derive(Component, Default)]
struct NavAgentStub {
    destination: Option<Vec3>,
    stopped: bool,
}

/// Demo цель: ходит по кругу вокруг маршрута агента
#[derive(Component)]
struct DemoTarget {
    angle: f32,
}

fn main() {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);
    app.add_systems(FixedUpdate, (drive_demo_target, scripted_nav_bridge));

    // Цель
    let target = app
        .world_mut()
        .spawn((Transform::from_xyz(20.0, 0.0, 0.0), DemoTarget { angle: 0.0 }))
        .id();

    // Агент с квадратным маршрутом
    app.world_mut().spawn((
        Agent,
        Transform::from_xyz(0.0, 0.0, 0.0),
        PatrolRoute::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(8.0, 0.0, 0.0),
            Vec3::new(8.0, 0.0, 8.0),
            Vec3::new(0.0, 0.0, 8.0),
        ]),
        TrackedTarget(Some(target)),
        NavAgentStub::default(),
    ));

    println!("Starting PROWL headless simulation");

    // 1200 тиков = 20 секунд симуляции
    for tick in 0..1200 {
        app.world_mut().run_schedule(FixedUpdate);

        if tick % 120 == 0 {
            let mut query = app.world_mut().query::<(&AgentBehavior, &Transform)>();
            for (behavior, transform) in query.iter(app.world()) {
                println!(
                    "Tick {}: state={:?} pos=({:.1}, {:.1})",
                    tick, behavior.state, transform.translation.x, transform.translation.z
                );
            }
        }
    }

    println!("Simulation complete!");
}

/// Система: применяет NavigationCommand и интегрирует движение stub-агента
fn scripted_nav_bridge(
    mut nav_events: EventReader<NavigationCommand>,
    mut agents: Query<(&mut Transform, &mut NavAgentStub, &mut NavigationFeedback)>,
) {
    // Применяем команды FSM
    for event in nav_events.read() {
        match event {
            NavigationCommand::SetDestination { entity, position } => {
                if let Ok((_, mut stub, _)) = agents.get_mut(*entity) {
                    stub.destination = Some(*position);
                }
            }
            NavigationCommand::Stop { entity } => {
                if let Ok((_, mut stub, mut feedback)) = agents.get_mut(*entity) {
                    stub.stopped = true;
                    feedback.velocity = Vec3::ZERO; // Stop сбрасывает velocity
                }
            }
            NavigationCommand::Resume { entity } => {
                if let Ok((_, mut stub, _)) = agents.get_mut(*entity) {
                    stub.stopped = false;
                }
            }
        }
    }

    // Кинематика: шаг по прямой к destination
    for (mut transform, stub, mut feedback) in agents.iter_mut() {
        let Some(destination) = stub.destination else {
            feedback.velocity = Vec3::ZERO;
            continue;
        };

        let to_destination = destination - transform.translation;
        let distance = to_destination.length();
        feedback.remaining_distance = distance;

        if stub.stopped || distance < 1e-3 {
            feedback.velocity = Vec3::ZERO;
            continue;
        }

        let step = AGENT_SPEED * TICK_DT;
        if distance <= step {
            transform.translation = destination;
            feedback.remaining_distance = 0.0;
            feedback.velocity = Vec3::ZERO;
        } else {
            let velocity = to_destination / distance * AGENT_SPEED;
            transform.translation += velocity * TICK_DT;
            feedback.velocity = velocity;
        }
    }
}

/// Система: цель ходит по кругу радиусом 20м (заходит в chase радиус и выходит)
fn drive_demo_target(mut targets: Query<(&mut Transform, &mut DemoTarget)>) {
    for (mut transform, mut target) in targets.iter_mut() {
        target.angle += 0.15 * TICK_DT;
        transform.translation = Vec3::new(
            target.angle.cos() * 20.0,
            0.0,
            target.angle.sin() * 20.0,
        );
    }
}
