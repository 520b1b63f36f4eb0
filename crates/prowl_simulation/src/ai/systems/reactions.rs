//! Behavior reaction systems (zone trigger preemption).

use bevy::prelude::*;

use crate::ai::{AgentBehavior, AgentState, PatrolRoute, ZoneTriggerEvent, DANGER_ZONE_TAG};
use crate::movement::NavigationCommand;

/// Система: обработка zone triggers (DangerZone enter/exit)
///
/// Preemption поверх distance policy:
/// - Entered("DangerZone") → Flee из ЛЮБОГО state (включая Attack),
///   flee_engaged = true
/// - Exited("DangerZone") → Patrol + re-issue waypoint команды,
///   независимо от distance до цели; flee_engaged = false
///
/// Выполняется до agent_fsm_tick в той же chain — события, отправленные
/// между тиками, применяются в начале следующего тика. Race с distance
/// policy при exit (цель всё ещё в flee_distance → тот же тик может снова
/// дать Chase) сохранён намеренно: zone authority vs distance authority
/// в исходной системе не определён.
///
/// Attack latch при preemption НЕ сбрасывается: его чистит только
/// переход Attack → Chase.
pub fn zone_trigger_reactions(
    mut agents: Query<(&mut AgentBehavior, &mut PatrolRoute)>,
    mut zone_events: EventReader<ZoneTriggerEvent>,
    mut nav_commands: EventWriter<NavigationCommand>,
) {
    for event in zone_events.read() {
        match event {
            ZoneTriggerEvent::Entered { agent, tag } => {
                if tag.as_str() != DANGER_ZONE_TAG {
                    continue;
                }
                let Ok((mut behavior, _)) = agents.get_mut(*agent) else {
                    continue; // Агент despawned — игнорируем
                };

                behavior.state = AgentState::Flee;
                behavior.flee_engaged = true;
                crate::log(&format!("AI: {:?} entered DangerZone → Flee", agent));
            }

            ZoneTriggerEvent::Exited { agent, tag } => {
                if tag.as_str() != DANGER_ZONE_TAG {
                    continue;
                }
                let Ok((mut behavior, mut route)) = agents.get_mut(*agent) else {
                    continue;
                };

                behavior.state = AgentState::Patrol;
                behavior.flee_engaged = false;
                if let Some(waypoint) = route.advance() {
                    nav_commands.write(NavigationCommand::SetDestination {
                        entity: *agent,
                        position: waypoint,
                    });
                }
                crate::log(&format!("AI: {:?} exited DangerZone → Patrol", agent));
            }
        }
    }
}
