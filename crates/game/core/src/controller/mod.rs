//! Top-level mode state machine.
//!
//! ```text
//!              enemy collision              victory / defeat / flee
//!  Exploring ───────────────────► InCombat ─────────────────────────► Exploring
//!      │ ▲
//!      │ │  interact with NPC / option without successor, cancel
//!      │ └──────────────────────────── InDialogue
//!      │ ▲
//!      │ │  toggle, cancel, successful use
//!      │ └──────────────────────────── InInventory
//!      │ ▲
//!      │ │  toggle, cancel
//!      └─┴──────────────────────────── InCrafting
//! ```
//!
//! Mode-specific data travels inside the state variant, so a combat session
//! or a dialogue partner exists exactly while its mode is active.

mod command;
mod context;

pub use command::{Command, HostRequest};
pub use context::GameContext;

use core::time::Duration;

use crate::combat::{CombatError, CombatOutcome, CombatSession};
use crate::crafting::craft;
use crate::dialogue::DialogueAction;
use crate::env::{GameEnv, OracleError};
use crate::error::GameError;
use crate::geometry::Rect;
use crate::inventory::InventoryError;
use crate::quest::{Quest, QuestError, QuestGoal};
use crate::world::{NpcHandle, World};

/// Observable mode, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    Exploring,
    InCombat,
    InDialogue,
    InInventory,
    InCrafting,
}

/// Active mode with its data.
#[derive(Clone, Debug, Default)]
pub enum ModeState {
    #[default]
    Exploring,
    InCombat(CombatSession),
    InDialogue {
        npc: NpcHandle,
        selection: usize,
    },
    InInventory {
        selection: usize,
    },
    InCrafting {
        selection: usize,
    },
}

impl ModeState {
    pub fn mode(&self) -> GameMode {
        match self {
            Self::Exploring => GameMode::Exploring,
            Self::InCombat(_) => GameMode::InCombat,
            Self::InDialogue { .. } => GameMode::InDialogue,
            Self::InInventory { .. } => GameMode::InInventory,
            Self::InCrafting { .. } => GameMode::InCrafting,
        }
    }
}

/// Routes commands to the subsystem of the active mode and drives the
/// transitions between modes.
#[derive(Clone, Debug, Default)]
pub struct GameModeController {
    state: ModeState,
}

impl GameModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn combat(&self) -> Option<&CombatSession> {
        match &self.state {
            ModeState::InCombat(session) => Some(session),
            _ => None,
        }
    }

    pub fn dialogue_npc(&self) -> Option<NpcHandle> {
        match self.state {
            ModeState::InDialogue { npc, .. } => Some(npc),
            _ => None,
        }
    }

    /// Highlighted row of the dialogue, inventory or crafting menu.
    pub fn selection(&self) -> Option<usize> {
        match self.state {
            ModeState::InDialogue { selection, .. }
            | ModeState::InInventory { selection }
            | ModeState::InCrafting { selection } => Some(selection),
            _ => None,
        }
    }

    /// Drops whatever mode was active. Used after the host replaced the state.
    pub fn reset(&mut self) {
        self.set_state(ModeState::Exploring);
    }

    /// Applies one command. Returns a request when the host has work to do.
    pub fn handle(
        &mut self,
        ctx: &mut GameContext,
        world: &mut dyn World,
        env: &GameEnv<'_>,
        command: Command,
    ) -> Option<HostRequest> {
        match self.state.mode() {
            GameMode::Exploring => return self.handle_exploring(ctx, world, env, command),
            GameMode::InCombat => self.handle_combat(ctx, world, command),
            GameMode::InDialogue => self.handle_dialogue(ctx, world, env, command),
            GameMode::InInventory => self.handle_inventory(ctx, command),
            GameMode::InCrafting => self.handle_crafting(ctx, env, command),
        }
        None
    }

    /// Per-frame update.
    ///
    /// Exploring regenerates mana and checks for enemy encounters; combat
    /// finishes once the session reached an outcome.
    pub fn update(
        &mut self,
        ctx: &mut GameContext,
        world: &mut dyn World,
        env: &GameEnv<'_>,
        delta: Duration,
    ) {
        match self.state.mode() {
            GameMode::Exploring => {
                ctx.player.update(delta, &ctx.config);
                if let Some(handle) = world.enemy_colliding(ctx.player.rect())
                    && let Some(enemy) = world.take_enemy(handle)
                {
                    tracing::info!("Encounter with '{}'", enemy.template_id());
                    let session = CombatSession::new(enemy, &ctx.config);
                    self.set_state(ModeState::InCombat(session));
                }
            }
            GameMode::InCombat if self.combat().is_some_and(CombatSession::is_over) => {
                self.finish_combat(ctx, world, env);
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Exploring
    // ------------------------------------------------------------------

    fn handle_exploring(
        &mut self,
        ctx: &mut GameContext,
        world: &mut dyn World,
        env: &GameEnv<'_>,
        command: Command,
    ) -> Option<HostRequest> {
        match command {
            Command::Move(direction) => {
                let destination = ctx.player.position().step(direction);
                if world.is_walkable(Rect::tile(destination)) {
                    ctx.player.teleport(destination);
                }
            }
            Command::Interact => self.interact(ctx, world, env),
            Command::ToggleInventory => self.set_state(ModeState::InInventory { selection: 0 }),
            Command::ToggleCrafting => self.set_state(ModeState::InCrafting { selection: 0 }),
            Command::Save => return Some(HostRequest::Save),
            Command::Load => return Some(HostRequest::Load),
            _ => {}
        }
        None
    }

    fn interact(&mut self, ctx: &mut GameContext, world: &mut dyn World, env: &GameEnv<'_>) {
        let area = ctx.player.rect();
        if let Some(handle) = world.npc_colliding(area)
            && let Some(npc) = world.npc_mut(handle)
        {
            npc.start_dialogue();
            self.set_state(ModeState::InDialogue {
                npc: handle,
                selection: 0,
            });
            return;
        }

        let items = match env.items() {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("Cannot harvest: {}", err);
                return;
            }
        };
        if let Some(item) = world.harvest_resource_at(area, items) {
            ctx.messages.push(format!("Gathered {}.", item.name()));
            let item_id = item.id().to_string();
            ctx.player.add_item(item);
            record_quest_event(ctx, env, QuestGoal::Gather, &item_id);
        }
    }

    // ------------------------------------------------------------------
    // Combat
    // ------------------------------------------------------------------

    fn handle_combat(&mut self, ctx: &mut GameContext, world: &mut dyn World, command: Command) {
        if command == Command::Flee {
            self.flee(ctx, world);
            return;
        }
        let ModeState::InCombat(session) = &mut self.state else {
            return;
        };
        let result: Result<(), CombatError> = match command {
            Command::Attack => session.basic_attack(&mut ctx.player),
            Command::UseSkill(index) => session.use_skill(&mut ctx.player, index),
            Command::UseItem(item_id) => session.use_consumable(&mut ctx.player, &item_id),
            _ => Ok(()),
        };
        if let Err(err) = result {
            tracing::debug!("Combat action rejected: {} ({})", err, err.error_code());
        }
    }

    /// Leaves combat without rewards or penalties.
    fn flee(&mut self, ctx: &mut GameContext, world: &mut dyn World) {
        // A finished session is resolved by the next update instead.
        if self.combat().is_none_or(CombatSession::is_over) {
            return;
        }
        let ModeState::InCombat(session) = self.take_state() else {
            return;
        };
        let enemy = session.conclude(&mut ctx.player);
        world.return_enemy(enemy);
        ctx.player.teleport(world.spawn_point());
        ctx.messages.push("You flee from battle.");
    }

    fn finish_combat(&mut self, ctx: &mut GameContext, world: &mut dyn World, env: &GameEnv<'_>) {
        let ModeState::InCombat(session) = self.take_state() else {
            return;
        };
        let outcome = session.outcome();
        let mut enemy = session.conclude(&mut ctx.player);

        match outcome {
            Some(CombatOutcome::Victory) => {
                ctx.messages.push(format!("Defeated {}!", enemy.name()));
                grant_experience(ctx, enemy.experience());

                match (env.rng(), env.items()) {
                    (Ok(rng), Ok(items)) => {
                        let seed = ctx.next_seed();
                        for item in enemy.roll_loot(rng, seed, items) {
                            ctx.messages.push(format!("Found {}.", item.name()));
                            ctx.player.add_item(item);
                        }
                    }
                    (Err(err), _) | (_, Err(err)) => tracing::warn!("Skipping loot: {}", err),
                }

                record_quest_event(ctx, env, QuestGoal::Slay, enemy.template_id());
            }
            Some(CombatOutcome::Defeat) => {
                ctx.messages.push("You were defeated. Returning to camp...");
                ctx.player.restore_full();
                ctx.player.teleport(world.spawn_point());
                enemy.restore_health();
                world.return_enemy(enemy);
            }
            None => world.return_enemy(enemy),
        }
    }

    // ------------------------------------------------------------------
    // Dialogue
    // ------------------------------------------------------------------

    fn handle_dialogue(
        &mut self,
        ctx: &mut GameContext,
        world: &mut dyn World,
        env: &GameEnv<'_>,
        command: Command,
    ) {
        let ModeState::InDialogue { npc, selection } = self.state else {
            return;
        };
        let Some(option_count) = world
            .npc(npc)
            .map(|npc| npc.dialogue().current().options.len())
        else {
            self.set_state(ModeState::Exploring);
            return;
        };

        match command {
            Command::SelectUp | Command::SelectDown => {
                let selection = step_selection(selection, option_count, command == Command::SelectUp);
                self.state = ModeState::InDialogue { npc, selection };
            }
            Command::Confirm => {
                let Some(choice) = world
                    .npc_mut(npc)
                    .map(|npc| npc.dialogue_mut().choose(selection))
                else {
                    return;
                };
                let choice = match choice {
                    Ok(choice) => choice,
                    Err(err) => {
                        ctx.messages.push(err.to_string());
                        return;
                    }
                };

                if let Some(DialogueAction::AcceptQuest(quest_id)) = &choice.action {
                    accept_quest(ctx, env, quest_id);
                    if let Some(npc) = world.npc_mut(npc) {
                        npc.mark_quest_given();
                    }
                }

                if choice.has_next {
                    self.state = ModeState::InDialogue { npc, selection: 0 };
                } else {
                    self.set_state(ModeState::Exploring);
                }
            }
            Command::Cancel => self.set_state(ModeState::Exploring),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Menus
    // ------------------------------------------------------------------

    fn handle_inventory(&mut self, ctx: &mut GameContext, command: Command) {
        let ModeState::InInventory { selection } = self.state else {
            return;
        };
        let len = ctx.player.inventory().len();

        match command {
            Command::ToggleInventory | Command::Cancel => self.set_state(ModeState::Exploring),
            Command::SelectUp | Command::SelectDown | Command::Confirm if len == 0 => {
                ctx.messages.push(InventoryError::Empty.to_string());
            }
            Command::SelectUp | Command::SelectDown => {
                let selection = step_selection(selection, len, command == Command::SelectUp);
                self.state = ModeState::InInventory { selection };
            }
            Command::Confirm => {
                let Some(item_id) = ctx
                    .player
                    .inventory()
                    .get(selection.min(len - 1))
                    .map(|item| item.id().to_string())
                else {
                    return;
                };
                match ctx.player.consume_item(&item_id) {
                    Ok(message) => {
                        ctx.messages.push(message);
                        self.set_state(ModeState::Exploring);
                    }
                    Err(err) => ctx.messages.push(err.to_string()),
                }
            }
            _ => {}
        }
    }

    fn handle_crafting(&mut self, ctx: &mut GameContext, env: &GameEnv<'_>, command: Command) {
        let ModeState::InCrafting { selection } = self.state else {
            return;
        };
        if matches!(command, Command::ToggleCrafting | Command::Cancel) {
            self.set_state(ModeState::Exploring);
            return;
        }

        let (recipes, items) = match (env.recipes(), env.items()) {
            (Ok(recipes), Ok(items)) => (recipes, items),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("Crafting unavailable: {}", err);
                return;
            }
        };
        let count = recipes.recipes().len();
        if count == 0 {
            if matches!(command, Command::SelectUp | Command::SelectDown | Command::Confirm) {
                ctx.messages.push("No recipes available.");
            }
            return;
        }

        match command {
            Command::SelectUp | Command::SelectDown => {
                let selection = step_selection(selection, count, command == Command::SelectUp);
                self.state = ModeState::InCrafting { selection };
            }
            Command::Confirm => {
                let recipe_id = recipes.recipes()[selection.min(count - 1)].id().to_string();
                match craft(&mut ctx.player, &recipe_id, recipes, items) {
                    Ok(message) => ctx.messages.push(message),
                    Err(err) => ctx.messages.push(err.to_string()),
                }
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // State plumbing
    // ------------------------------------------------------------------

    fn set_state(&mut self, state: ModeState) {
        let from = self.state.mode();
        let to = state.mode();
        if from != to {
            tracing::debug!("Mode {} -> {}", from, to);
        }
        self.state = state;
    }

    fn take_state(&mut self) -> ModeState {
        tracing::debug!("Mode {} -> {}", self.state.mode(), GameMode::Exploring);
        core::mem::take(&mut self.state)
    }
}

/// Moves a menu cursor one row, wrapping at both ends.
fn step_selection(selection: usize, len: usize, up: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let selection = selection.min(len - 1);
    if up {
        (selection + len - 1) % len
    } else {
        (selection + 1) % len
    }
}

fn grant_experience(ctx: &mut GameContext, amount: i32) {
    if ctx.player.gain_experience(amount) > 0 {
        ctx.messages.push(format!(
            "Level up! You are now level {}.",
            ctx.player.stats().level()
        ));
    }
}

/// Feeds an event to the ledger and pays out every quest it completed.
fn record_quest_event(ctx: &mut GameContext, env: &GameEnv<'_>, goal: QuestGoal, target: &str) {
    if ctx.quests.record_event(goal, target).is_empty() {
        return;
    }
    for quest in ctx.quests.remove_completed() {
        reward_quest(ctx, env, &quest);
    }
}

fn reward_quest(ctx: &mut GameContext, env: &GameEnv<'_>, quest: &Quest) {
    grant_experience(ctx, quest.reward_experience());
    if !quest.reward_items().is_empty() {
        match env.items() {
            Ok(items) => {
                for item_id in quest.reward_items() {
                    match items.create(item_id) {
                        Some(item) => ctx.player.add_item(item),
                        None => tracing::warn!("Quest reward '{}' is not a known item", item_id),
                    }
                }
            }
            Err(err) => tracing::warn!("Skipping quest item rewards: {}", err),
        }
    }
    ctx.messages.push(format!("Quest complete: {}!", quest.name()));
}

fn accept_quest(ctx: &mut GameContext, env: &GameEnv<'_>, quest_id: &str) {
    let quest = env.quests().and_then(|quests| {
        quests
            .quest(quest_id)
            .ok_or_else(|| OracleError::UnknownQuest(quest_id.to_string()))
    });
    let message = match quest {
        Ok(quest) => match ctx.quests.add(quest) {
            Ok(message) => message,
            Err(err @ QuestError::AlreadyActive { .. }) => err.to_string(),
            Err(err) => {
                tracing::warn!("Quest '{}' rejected: {}", quest_id, err);
                err.to_string()
            }
        },
        Err(err) => {
            tracing::warn!("Cannot offer quest: {}", err);
            QuestError::UnknownQuest {
                quest_id: quest_id.to_string(),
            }
            .to_string()
        }
    };
    ctx.messages.push(message);
}
