// Adaptive navigation state machine.
//
// The layout mode is a pure function of scroll offset and viewport width.
// `NavState` keeps the current mode and active section so the web layer can
// tell real transitions apart from repeated evaluations of the same state.

use super::constants::*;
use super::sections::{Section, SectionExtent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavMode {
    Mobile,
    #[default]
    Normal,
    Compact,
    Sidebar,
}

impl NavMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NavMode::Mobile => "mobile",
            NavMode::Normal => "normal",
            NavMode::Compact => "compact",
            NavMode::Sidebar => "sidebar",
        }
    }

    /// CSS class carried by the nav container in this mode, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            NavMode::Normal => None,
            other => Some(other.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavThresholds {
    pub mobile_max_width: f64,
    pub sidebar_min_width: f64,
    pub compact_scroll: f64,
    pub sidebar_scroll: f64,
}

impl Default for NavThresholds {
    fn default() -> Self {
        Self {
            mobile_max_width: MOBILE_BREAKPOINT,
            sidebar_min_width: SIDEBAR_MIN_WIDTH,
            compact_scroll: SCROLL_THRESHOLD,
            sidebar_scroll: SIDEBAR_THRESHOLD,
        }
    }
}

impl NavThresholds {
    #[inline]
    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.mobile_max_width
    }

    /// Classify a scroll offset and viewport width into a layout mode.
    pub fn mode_for(&self, scroll_y: f64, width: f64) -> NavMode {
        if self.is_mobile_width(width) {
            NavMode::Mobile
        } else if scroll_y > self.sidebar_scroll && width > self.sidebar_min_width {
            NavMode::Sidebar
        } else if scroll_y > self.compact_scroll {
            NavMode::Compact
        } else {
            NavMode::Normal
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    pub from: NavMode,
    pub to: NavMode,
}

impl ModeChange {
    /// Transitions into a desktop layout get the morph animation; mobile does not.
    pub fn animates(&self) -> bool {
        self.to != NavMode::Mobile
    }
}

/// Outcome of a section jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionJump {
    pub section: Section,
    /// The active section changed as a result of the jump.
    pub changed: bool,
    pub scroll_top: f64,
}

#[derive(Clone, Debug)]
pub struct NavState {
    thresholds: NavThresholds,
    mode: NavMode,
    current: Section,
}

impl NavState {
    pub fn new(thresholds: NavThresholds) -> Self {
        Self {
            thresholds,
            mode: NavMode::Normal,
            current: Section::default(),
        }
    }

    pub fn thresholds(&self) -> &NavThresholds {
        &self.thresholds
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    pub fn is_compact(&self) -> bool {
        self.mode == NavMode::Compact
    }

    pub fn is_sidebar(&self) -> bool {
        self.mode == NavMode::Sidebar
    }

    pub fn is_mobile(&self) -> bool {
        self.mode == NavMode::Mobile
    }

    /// Re-derive the mode. Returns the transition only when the mode changed.
    pub fn evaluate(&mut self, scroll_y: f64, width: f64) -> Option<ModeChange> {
        let target = self.thresholds.mode_for(scroll_y, width);
        self.enter(target)
    }

    /// Enter `target`; entering the active mode is a no-op.
    pub fn enter(&mut self, target: NavMode) -> Option<ModeChange> {
        if target == self.mode {
            return None;
        }
        let change = ModeChange {
            from: self.mode,
            to: target,
        };
        self.mode = target;
        Some(change)
    }

    /// Set the active section. Returns true when it changed.
    pub fn set_active(&mut self, section: Section) -> bool {
        if section == self.current {
            return false;
        }
        self.current = section;
        true
    }

    /// Activate `section` and return where to scroll. `None` when the section
    /// has no extent on the page; the state is left untouched then.
    pub fn go_to(
        &mut self,
        section: Section,
        extents: &[SectionExtent],
        width: f64,
    ) -> Option<SectionJump> {
        let extent = extents.iter().find(|e| e.section == section)?;
        let changed = self.set_active(section);
        Some(SectionJump {
            section,
            changed,
            scroll_top: self.scroll_target(extent.top, width),
        })
    }

    /// Height of the fixed navigation bar for the current layout.
    pub fn nav_bar_height(&self, width: f64) -> f64 {
        nav_bar_height(self.mode, self.thresholds.is_mobile_width(width))
    }

    /// Scroll offset that places a section top just below the nav bar.
    pub fn scroll_target(&self, section_top: f64, width: f64) -> f64 {
        section_top - self.nav_bar_height(width)
    }
}

#[inline]
pub fn nav_bar_height(mode: NavMode, mobile_width: bool) -> f64 {
    if mobile_width {
        NAV_HEIGHT_MOBILE
    } else if mode == NavMode::Sidebar {
        NAV_HEIGHT_SIDEBAR
    } else {
        NAV_HEIGHT_DEFAULT
    }
}

/// Document y used to decide which section is "in view".
#[inline]
pub fn section_marker(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height * SECTION_MARKER_FRACTION
}

/// Section whose extent contains `marker`; the last match in source order wins.
/// Falls back to the first section when nothing contains the marker.
pub fn active_section_at(extents: &[SectionExtent], marker: f64) -> Section {
    extents
        .iter()
        .filter(|e| e.contains(marker))
        .last()
        .map(|e| e.section)
        .unwrap_or_default()
}

/// Closed-ring focus traversal over `len` links.
pub fn next_focus_index(current: usize, len: usize, reverse: bool) -> Option<usize> {
    if len == 0 || current >= len {
        return None;
    }
    Some(if reverse {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 < len {
        current + 1
    } else {
        0
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
}

impl Swipe {
    /// Section a swipe leads to: up advances, down goes back.
    pub fn target(self, from: Section) -> Section {
        match self {
            Swipe::Up => from.next(),
            Swipe::Down => from.previous(),
        }
    }
}

/// Classify a vertical touch gesture by its start and end screen y.
pub fn classify_swipe(start_y: f64, end_y: f64) -> Option<Swipe> {
    let distance = start_y - end_y;
    if distance.abs() <= SWIPE_THRESHOLD_PX {
        None
    } else if distance > 0.0 {
        Some(Swipe::Up)
    } else {
        Some(Swipe::Down)
    }
}

/// Scroll progress as a percentage in `[0, 100]`; 0 when the page cannot scroll.
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    FocusNextLink,
    FocusPreviousLink,
    NextSection,
    PreviousSection,
    Jump(Section),
}

/// Map a keydown to a navigation command. Section jumps require Ctrl.
pub fn key_command(key: &str, ctrl: bool, shift: bool) -> Option<KeyCommand> {
    match key {
        "Tab" if shift => Some(KeyCommand::FocusPreviousLink),
        "Tab" => Some(KeyCommand::FocusNextLink),
        "ArrowDown" if ctrl => Some(KeyCommand::NextSection),
        "ArrowUp" if ctrl => Some(KeyCommand::PreviousSection),
        "Home" if ctrl => Some(KeyCommand::Jump(Section::Home)),
        "End" if ctrl => Some(KeyCommand::Jump(Section::Contact)),
        _ => None,
    }
}
