use crate::geometry::Direction;

/// Discrete input delivered by the presentation layer.
///
/// Commands that make no sense in the current mode are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    // ===== exploring =====
    Move(Direction),
    Interact,
    ToggleInventory,
    ToggleCrafting,
    Save,
    Load,

    // ===== menus and dialogue =====
    SelectUp,
    SelectDown,
    Confirm,
    Cancel,

    // ===== combat =====
    Attack,
    UseSkill(usize),
    UseItem(String),
    Flee,
}

/// Work the controller cannot do itself and hands to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostRequest {
    Save,
    Load,
}
