// Shortcut controls that jump between sections: the floating action button
// menu and the hero call-to-action buttons.

use super::constants::FAB_SCROLL_THRESHOLD;
use super::sections::Section;

/// A `data-action` value on a floating action button option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FabAction {
    Top,
    Contact,
    Projects,
}

impl FabAction {
    pub fn from_attr(action: &str) -> Option<FabAction> {
        match action {
            "top" => Some(FabAction::Top),
            "contact" => Some(FabAction::Contact),
            "projects" => Some(FabAction::Projects),
            _ => None,
        }
    }

    pub fn target(self) -> Section {
        match self {
            FabAction::Top => Section::Home,
            FabAction::Contact => Section::Contact,
            FabAction::Projects => Section::Projects,
        }
    }
}

/// How prominent the button is: raised once the page has scrolled past the
/// threshold, resting near the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FabEmphasis {
    #[default]
    Resting,
    Raised,
}

impl FabEmphasis {
    pub fn for_scroll(scroll_y: f64) -> FabEmphasis {
        if scroll_y > FAB_SCROLL_THRESHOLD {
            FabEmphasis::Raised
        } else {
            FabEmphasis::Resting
        }
    }
}

/// Open/closed menu plus the current emphasis. Every mutator reports whether
/// anything changed so callers only animate real transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct FabMenu {
    open: bool,
    emphasis: Option<FabEmphasis>,
}

impl FabMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns true when it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Outside clicks only close an open menu.
    pub fn click_outside(&mut self, inside: bool) -> bool {
        !inside && self.close()
    }

    /// New emphasis for `scroll_y`, or `None` when it is unchanged. The first
    /// call always reports so the initial state gets applied.
    pub fn scrolled(&mut self, scroll_y: f64) -> Option<FabEmphasis> {
        let next = FabEmphasis::for_scroll(scroll_y);
        if self.emphasis == Some(next) {
            return None;
        }
        self.emphasis = Some(next);
        Some(next)
    }
}

/// Section a call-to-action button leads to, judged by its label.
pub fn cta_target(label: &str) -> Option<Section> {
    if label.contains("View My Work") {
        Some(Section::Projects)
    } else if label.contains("Get In Touch") {
        Some(Section::Contact)
    } else {
        None
    }
}
