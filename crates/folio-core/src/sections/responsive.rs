use super::Section;

/// Page layout chosen for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub items_per_page: usize,
    pub gap: u16,
}

/// One row of a breakpoint table: applies from `min_width` upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub layout: Layout,
}

const fn bp(min_width: u32, items_per_page: usize, gap: u16) -> Breakpoint {
    Breakpoint {
        min_width,
        layout: Layout {
            items_per_page,
            gap,
        },
    }
}

const PROJECTS: &[Breakpoint] = &[bp(1366, 2, 25), bp(1024, 2, 20), bp(768, 1, 15), bp(0, 1, 15)];
const RECOMMENDATIONS: &[Breakpoint] = PROJECTS;
const PUBLICATIONS: &[Breakpoint] = &[bp(601, 2, 20), bp(0, 1, 15)];
const CARDS: &[Breakpoint] = &[bp(1366, 4, 15), bp(1024, 3, 15), bp(768, 2, 15), bp(0, 1, 10)];
const VIDEOS: &[Breakpoint] = &[bp(1024, 2, 20), bp(0, 1, 15)];
const SHORTS: &[Breakpoint] = &[bp(1366, 3, 20), bp(1024, 2, 20), bp(0, 1, 15)];

/// Mobile-first breakpoint table, widest breakpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsivePolicy {
    table: &'static [Breakpoint],
}

impl ResponsivePolicy {
    pub fn for_section(section: Section) -> Self {
        let table = match section {
            Section::Projects => PROJECTS,
            Section::Recommendations => RECOMMENDATIONS,
            Section::Publications => PUBLICATIONS,
            Section::Expertise | Section::Research => CARDS,
            Section::Videos => VIDEOS,
            Section::TikTok => SHORTS,
        };
        Self { table }
    }

    pub fn breakpoints(&self) -> &'static [Breakpoint] {
        self.table
    }

    /// Layout of the widest breakpoint that `width` reaches.
    pub fn resolve(&self, width: u32) -> Layout {
        self.table
            .iter()
            .find(|bp| width >= bp.min_width)
            .or(self.table.last())
            .map_or(
                Layout {
                    items_per_page: 1,
                    gap: 0,
                },
                |bp| bp.layout,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(items_per_page: usize, gap: u16) -> Layout {
        Layout {
            items_per_page,
            gap,
        }
    }

    #[test]
    fn test_projects_breakpoints() {
        let policy = Section::Projects.policy();
        assert_eq!(policy.resolve(1920), layout(2, 25));
        assert_eq!(policy.resolve(1366), layout(2, 25));
        assert_eq!(policy.resolve(1365), layout(2, 20));
        assert_eq!(policy.resolve(1024), layout(2, 20));
        assert_eq!(policy.resolve(900), layout(1, 15));
        assert_eq!(policy.resolve(320), layout(1, 15));
    }

    #[test]
    fn test_publications_mobile_cutoff() {
        let policy = Section::Publications.policy();
        assert_eq!(policy.resolve(600), layout(1, 15));
        assert_eq!(policy.resolve(601), layout(2, 20));
    }

    #[test]
    fn test_tables_are_mobile_first() {
        for section in Section::ALL {
            let table = section.policy().breakpoints();
            assert_eq!(table.last().map(|bp| bp.min_width), Some(0), "{section}");
            assert!(
                table.windows(2).all(|w| w[0].min_width > w[1].min_width
                    && w[0].layout.items_per_page >= w[1].layout.items_per_page),
                "{section}"
            );
        }
    }
}
