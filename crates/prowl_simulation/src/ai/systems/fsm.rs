//! FSM behavior systems (activation + per-tick transition table).

use bevy::prelude::*;

use crate::ai::{AgentBehavior, AgentState, BehaviorConfig, PatrolRoute};
use crate::animation::{AnimationCommand, ATTACK_PARAM, SPEED_PARAM};
use crate::components::{AnimationRig, NavigationFeedback, TrackedTarget};
use crate::movement::NavigationCommand;

/// Система: активация заспавненных агентов
///
/// Агент создаётся в Idle. Если patrol route непустой — сразу Patrol
/// + команда навигации на waypoint 0 (post-increment advancement).
/// Выполняется до FSM tick в той же chain.
pub fn activate_spawned_agents(
    mut agents: Query<(Entity, &mut AgentBehavior, &mut PatrolRoute), Added<AgentBehavior>>,
    mut nav_commands: EventWriter<NavigationCommand>,
) {
    for (entity, mut behavior, mut route) in agents.iter_mut() {
        if route.is_empty() {
            continue; // Остаёмся в Idle (fail-safe)
        }

        behavior.state = AgentState::Patrol;
        if let Some(waypoint) = route.advance() {
            nav_commands.write(NavigationCommand::SetDestination {
                entity,
                position: waypoint,
            });
        }
        crate::log(&format!(
            "AI: {:?} spawned with {} waypoints → Patrol",
            entity,
            route.len()
        ));
    }
}

/// Система: behavior FSM tick (distance policy)
///
/// Per-tick contract:
/// - Нет цели (TrackedTarget None или target despawned) → полный no-op:
///   state не меняется, команды не отправляются, паники нет.
/// - Иначе: distance до цели → handler активного state → команды
///   навигации/анимации → безусловный SetFloat("Speed", |velocity|).
///
/// Tie-break: сравнения ≤/> как в таблице переходов — граничные значения
/// в пользу более "срочного" state (ровно attack_distance == Attack).
pub fn agent_fsm_tick(
    mut agents: Query<(
        Entity,
        &mut AgentBehavior,
        &mut PatrolRoute,
        &BehaviorConfig,
        &TrackedTarget,
        &Transform,
        &NavigationFeedback,
        &AnimationRig,
    )>,
    targets: Query<&Transform>,
    mut nav_commands: EventWriter<NavigationCommand>,
    mut anim_commands: EventWriter<AnimationCommand>,
) {
    for (entity, mut behavior, mut route, config, tracked, transform, feedback, rig) in
        agents.iter_mut()
    {
        // MissingTarget: цель не подключена — no-op tick
        let Some(target_entity) = tracked.0 else {
            continue;
        };
        // Target despawned — тоже no-op (не ошибка)
        let Ok(target_transform) = targets.get(target_entity) else {
            continue;
        };

        let agent_position = transform.translation;
        let target_position = target_transform.translation;
        let distance_to_target = agent_position.distance(target_position);

        match behavior.state {
            // Idle: distance policy не действует, выход только через
            // zone triggers или активацию с маршрутом
            AgentState::Idle => {}

            AgentState::Patrol => {
                // Waypoint достигнут → следующий (оба шага могут сработать
                // в одном тике: advancement + переход в Chase)
                if feedback.remaining_distance < config.arrival_epsilon {
                    if let Some(waypoint) = route.advance() {
                        nav_commands.write(NavigationCommand::SetDestination {
                            entity,
                            position: waypoint,
                        });
                    }
                }

                if distance_to_target <= config.chase_distance {
                    crate::log(&format!("AI: {:?} Patrol → Chase", entity));
                    behavior.state = AgentState::Chase;
                }
            }

            AgentState::Chase => {
                if distance_to_target > config.chase_distance {
                    // Цель потеряна → обратно на маршрут
                    crate::log(&format!("AI: {:?} lost target, Chase → Patrol", entity));
                    behavior.state = AgentState::Patrol;
                    if let Some(waypoint) = route.advance() {
                        nav_commands.write(NavigationCommand::SetDestination {
                            entity,
                            position: waypoint,
                        });
                    }
                } else if distance_to_target <= config.attack_distance {
                    behavior.state = AgentState::Attack;
                } else {
                    // Преследуем: навигация активна, destination = цель
                    nav_commands.write(NavigationCommand::Resume { entity });
                    nav_commands.write(NavigationCommand::SetDestination {
                        entity,
                        position: target_position,
                    });
                    anim_commands.write(AnimationCommand::SetBool {
                        entity,
                        param: ATTACK_PARAM,
                        value: false,
                    });
                }
            }

            AgentState::Attack => {
                if distance_to_target > config.attack_distance {
                    crate::log(&format!("AI: {:?} target moved, Attack → Chase", entity));
                    behavior.state = AgentState::Chase;
                    behavior.attack_engaged = false;
                } else if !behavior.attack_engaged {
                    // Stop = навигация замирает, engine сбрасывает velocity
                    nav_commands.write(NavigationCommand::Stop { entity });

                    if rig.has_param(ATTACK_PARAM) {
                        anim_commands.write(AnimationCommand::SetBool {
                            entity,
                            param: ATTACK_PARAM,
                            value: true,
                        });
                        behavior.attack_engaged = true;
                        crate::log(&format!("AI: {:?} attacking", entity));
                    } else {
                        // MissingAnimationParameter: latch не ставим,
                        // retry на следующем тике (recoverable)
                        crate::log_error(&format!(
                            "AI: {:?} animation rig has no '{}' parameter, attack not engaged",
                            entity, ATTACK_PARAM
                        ));
                    }
                }
                // attack_engaged == true и цель в радиусе: команды не повторяем
            }

            AgentState::Flee => {
                if distance_to_target > config.flee_distance {
                    crate::log(&format!("AI: {:?} stopped fleeing, Flee → Patrol", entity));
                    behavior.state = AgentState::Patrol;
                    behavior.flee_engaged = false;
                    if let Some(waypoint) = route.advance() {
                        nav_commands.write(NavigationCommand::SetDestination {
                            entity,
                            position: waypoint,
                        });
                    }
                } else {
                    // Flee point = от цели, на flee_radius от текущей позиции.
                    // Совпадающие позиции → нулевое направление → flee point
                    // деградирует в текущую позицию (без NaN).
                    let away = (agent_position - target_position).normalize_or_zero();
                    let flee_point = agent_position + away * config.flee_radius;

                    nav_commands.write(NavigationCommand::Resume { entity });
                    nav_commands.write(NavigationCommand::SetDestination {
                        entity,
                        position: flee_point,
                    });
                    anim_commands.write(AnimationCommand::SetBool {
                        entity,
                        param: ATTACK_PARAM,
                        value: false,
                    });
                }
            }
        }

        // Speed обновляется безусловно каждый тик (locomotion blend в rig)
        anim_commands.write(AnimationCommand::SetFloat {
            entity,
            param: SPEED_PARAM,
            value: feedback.velocity.length(),
        });
    }
}
