//! Тесты детерминизма behavior симуляции
//!
//! FSM — чистая функция от distance/feedback: одинаковый сценарий
//! обязан давать идентичные результаты на каждом прогоне.

use bevy::prelude::*;
use prowl_simulation::*;

/// Сценарий: цель сближается, отходит, агент пересекает DangerZone
fn run_scenario(ticks: usize) -> Vec<u8> {
    let mut app = App::new();
    app.add_plugins(AgentBehaviorPlugin);

    let target = app
        .world_mut()
        .spawn(Transform::from_xyz(30.0, 0.0, 0.0))
        .id();
    let agent = app
        .world_mut()
        .spawn((
            Agent,
            Transform::from_xyz(0.0, 0.0, 0.0),
            PatrolRoute::new(vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(8.0, 0.0, 0.0),
                Vec3::new(8.0, 0.0, 8.0),
            ]),
            TrackedTarget(Some(target)),
        ))
        .id();

    for tick in 0..ticks {
        // Детерминированный "скрипт" цели: пила 30м → 1м → 30м
        let phase = (tick % 60) as f32;
        let distance = (30.0 - phase).max(1.0);
        app.world_mut()
            .get_mut::<Transform>(target)
            .unwrap()
            .translation = Vec3::new(distance, 0.0, 0.0);

        // Зона по расписанию
        if tick == 100 {
            app.world_mut().send_event(ZoneTriggerEvent::Entered {
                agent,
                tag: DANGER_ZONE_TAG.to_string(),
            });
        }
        if tick == 130 {
            app.world_mut().send_event(ZoneTriggerEvent::Exited {
                agent,
                tag: DANGER_ZONE_TAG.to_string(),
            });
        }

        app.world_mut().run_schedule(FixedUpdate);
    }

    world_snapshot::<AgentBehavior>(app.world_mut())
}

#[test]
fn test_determinism_identical_runs() {
    const TICKS: usize = 300;

    let snapshot1 = run_scenario(TICKS);
    let snapshot2 = run_scenario(TICKS);
    let snapshot3 = run_scenario(TICKS);

    assert_eq!(
        snapshot1, snapshot2,
        "Behavior scenario дал разные результаты на прогонах 1 и 2"
    );
    assert_eq!(
        snapshot2, snapshot3,
        "Behavior scenario дал разные результаты на прогонах 2 и 3"
    );
}
