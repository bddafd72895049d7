use crate::color::Channel;

/// Direction of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Prev,
    Next,
}

/// The element currently receiving adjustment keystrokes.
///
/// Focus targets form one ordered list: the three sliders followed by the
/// palette slots. A `PaletteSlot` index is always below the palette capacity
/// of the state that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPosition {
    Slider(Channel),
    PaletteSlot(usize),
}

impl Default for FocusPosition {
    fn default() -> Self {
        FocusPosition::Slider(Channel::Red)
    }
}

impl FocusPosition {
    const SLIDER_COUNT: usize = Channel::ALL.len();

    /// Position in the linear focus order
    pub fn index(self) -> usize {
        match self {
            FocusPosition::Slider(Channel::Red) => 0,
            FocusPosition::Slider(Channel::Green) => 1,
            FocusPosition::Slider(Channel::Blue) => 2,
            FocusPosition::PaletteSlot(slot) => Self::SLIDER_COUNT + slot,
        }
    }

    /// Inverse of [`FocusPosition::index`]; `None` past the last slot
    pub fn from_index(index: usize, slots: usize) -> Option<Self> {
        if index < Self::SLIDER_COUNT {
            return Some(FocusPosition::Slider(Channel::ALL[index]));
        }
        let slot = index - Self::SLIDER_COUNT;
        (slot < slots).then_some(FocusPosition::PaletteSlot(slot))
    }

    /// Neighbouring position, clamped to the ends of the focus order
    pub fn step(self, direction: FocusDirection, slots: usize) -> Self {
        let last = Self::SLIDER_COUNT + slots - 1;
        let current = self.index().min(last);
        let next = match direction {
            FocusDirection::Prev => current.saturating_sub(1),
            FocusDirection::Next => (current + 1).min(last),
        };
        Self::from_index(next, slots).unwrap_or(self)
    }

    pub fn channel(self) -> Option<Channel> {
        match self {
            FocusPosition::Slider(channel) => Some(channel),
            FocusPosition::PaletteSlot(_) => None,
        }
    }

    pub fn slot(self) -> Option<usize> {
        match self {
            FocusPosition::Slider(_) => None,
            FocusPosition::PaletteSlot(slot) => Some(slot),
        }
    }
}

impl std::fmt::Display for FocusPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusPosition::Slider(channel) => write!(f, "{} slider", channel),
            FocusPosition::PaletteSlot(slot) => write!(f, "Slot {}", slot + 1),
        }
    }
}
