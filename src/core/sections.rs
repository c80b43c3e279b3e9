// The fixed, ordered set of content sections on the page.

/// A content section. Source order on the page matches declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Writing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Writing,
        Section::Contact,
    ];

    /// Element id of the section (also the `data-section` value on nav links).
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Writing => "writing",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Accent color written to the `--color-primary` theme variable.
    pub fn accent_color(self) -> &'static str {
        match self {
            Section::Home => "#3B82F6",
            Section::Projects => "#10B981",
            Section::Writing => "#F59E0B",
            Section::Contact => "#8B5CF6",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Next section in page order, wrapping from the last back to the first.
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section in page order, wrapping from the first to the last.
    pub fn previous(self) -> Section {
        let n = Section::ALL.len();
        Section::ALL[(self.index() + n - 1) % n]
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}
